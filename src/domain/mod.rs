//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `questionnaire` - Answer schema for every questionnaire screen
//! - `analysis` - Pure scoring services (module selection, insights, summary)

pub mod analysis;
pub mod foundation;
pub mod questionnaire;
