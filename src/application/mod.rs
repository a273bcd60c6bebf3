//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Session persistence is the command side; the summary is the query side.

pub mod handlers;

pub use handlers::{
    // Session persistence
    PersistedResponse, ResumedSession, SessionStore, SessionStoreError,
    RESPONSE_KEY, SCHEMA_VERSION, STEP_KEY,
    // Summary
    GetCompassSummaryHandler, GetCompassSummaryQuery,
};
