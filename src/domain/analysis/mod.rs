//! Analysis Module - Pure domain services for compass scoring.
//!
//! This module contains stateless functions that read a questionnaire
//! response and derive recommendations from it.
//!
//! # Components
//!
//! - `card_scoring` - Forced-choice "least" picks to depth hints
//! - `team_health_scoring` - Dominant dysfunction detection (2 of 5 layers)
//! - `coaching_insight` - Priority-ordered coaching gap patterns
//! - `module_selector` - Full/light depth per module with 1..=2 full modules
//! - `module_results` - Names and reasons for the result screen
//! - `priority_scoring` - Weighted module ratings and top module
//! - `summary` - Completion narrative
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and total. Missing answers map
//! to neutral defaults and ties resolve by fixed orders, so no function
//! here returns an error.

mod card_scoring;
mod coaching_insight;
mod module_results;
mod module_selection;
mod module_selector;
mod priority_scoring;
mod summary;
mod team_health_scoring;

// Re-export all public types
pub use card_scoring::{
    score_card_selection, DepthHint, TriggerTable, COACHING_TRIGGERS, FOCUS_TRIGGERS,
    INTERFACES_TRIGGERS,
};
pub use coaching_insight::{
    coaching_insight, gap_warning, get_coaching_insight, CoachingInsight,
    HIGH_IDENTITY_THRESHOLD, HIGH_RECURRENCE_THRESHOLD, LOW_EFFECTIVENESS_THRESHOLD,
};
pub use module_results::{
    get_full_modules, get_light_modules, get_module_results, module_results_for, ModuleResult,
};
pub use module_selection::{ModuleDepth, ModuleKey, ModuleSelection, MODULE_PRIORITY_ORDER};
pub use module_selector::{
    apply_constraints, calculate_module_selection, initial_module_selection,
    top_selected_module, MAX_FULL_MODULES, MIN_FULL_MODULES,
};
pub use priority_scoring::{
    calculate_module_score, get_top_module, module_scores, top_priority_module,
    weakest_priority_module, FEASIBILITY_WEIGHT, READINESS_WEIGHT, VALUE_WEIGHT,
};
pub use summary::{
    build_summary, card_patterns, observation_prompt, CardPattern, CompassSummary, FlowVariant,
};
pub use team_health_scoring::{
    dysfunction_count, dysfunctional_layers, first_worst_layer, has_dominant_dysfunction,
    DOMINANT_DYSFUNCTION_THRESHOLD, DYSFUNCTION_INDICATORS, WORST_TIER,
};
