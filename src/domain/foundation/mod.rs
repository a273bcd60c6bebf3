//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the Management Compass domain.

mod errors;
mod ids;
mod likert_score;
mod percentage;
mod timestamp;

pub use errors::ValidationError;
pub use ids::SessionId;
pub use likert_score::LikertScore;
pub use percentage::Percentage;
pub use timestamp::Timestamp;
