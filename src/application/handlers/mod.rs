//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod get_compass_summary;
pub mod session_store;

pub use get_compass_summary::{GetCompassSummaryHandler, GetCompassSummaryQuery};
pub use session_store::{
    PersistedResponse, ResumedSession, SessionStore, SessionStoreError, RESPONSE_KEY,
    SCHEMA_VERSION, STEP_KEY,
};
