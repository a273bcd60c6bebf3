//! Questionnaire module - the answer schema.
//!
//! Typed shape of every screen's answers, aggregated into one
//! [`QuestionnaireResponse`] per session. No scoring lives here.
//!
//! # Domain Invariants
//!
//! 1. A card never occupies both the "most" and "least" slot of a category
//! 2. Each dysfunction layer holds at most one answer
//! 3. Numeric answers stay on the 1-5 scale (out-of-range input is clamped)
//! 4. Unanswered categorical fields are `None`, never a sentinel value

mod card_game;
mod coaching;
mod priorities;
mod reflections;
mod response;
mod step;
mod team_health;

pub use card_game::{CardCategory, CardGameData, CardId, ForcedChoiceSelection};
pub use coaching::{CoachingData, CoachingLayer, CoachingStyle, InternalBlocker, TimeInvestment};
pub use priorities::{ModulePriorities, ModulePriority, PriorityModule};
pub use reflections::{
    DecisionsPrice, Engagement, FocusControl, InterfaceJourneyData, TimeEnergy, TimeQuadrants,
};
pub use response::QuestionnaireResponse;
pub use step::QuestionnaireStep;
pub use team_health::{DysfunctionLayer, LayerAnswer, TeamHealthData};
