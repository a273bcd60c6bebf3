//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `KeyValueStore` - String values under well-known keys (answers, step)

mod key_value_store;

pub use key_value_store::{validate_key, KeyValueStore, KeyValueStoreError};
