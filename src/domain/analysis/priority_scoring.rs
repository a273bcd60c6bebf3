//! Priority scoring over the explicit module ratings.
//!
//! Each module gets a weighted score of its value, feasibility and
//! readiness ratings. Weights sum to 1.0 so the score stays on the
//! 1-5 rating scale.

use crate::domain::questionnaire::{ModulePriorities, ModulePriority, PriorityModule, QuestionnaireResponse};

pub const VALUE_WEIGHT: f64 = 0.4;
pub const FEASIBILITY_WEIGHT: f64 = 0.35;
pub const READINESS_WEIGHT: f64 = 0.25;

/// Weights in twentieths. Ranking compares these exact sums so that
/// equal scores stay equal.
const VALUE_TWENTIETHS: u32 = 8;
const FEASIBILITY_TWENTIETHS: u32 = 7;
const READINESS_TWENTIETHS: u32 = 5;

/// Weighted score of one module's ratings.
pub fn calculate_module_score(priority: &ModulePriority) -> f64 {
    priority.value.as_f64() * VALUE_WEIGHT
        + priority.feasibility.as_f64() * FEASIBILITY_WEIGHT
        + priority.readiness.as_f64() * READINESS_WEIGHT
}

/// Weighted score in twentieths of a rating point.
fn ranking_key(priority: &ModulePriority) -> u32 {
    u32::from(priority.value.value()) * VALUE_TWENTIETHS
        + u32::from(priority.feasibility.value()) * FEASIBILITY_TWENTIETHS
        + u32::from(priority.readiness.value()) * READINESS_TWENTIETHS
}

/// Scores of all modules in the fixed evaluation order.
pub fn module_scores(priorities: &ModulePriorities) -> Vec<(PriorityModule, f64)> {
    priorities
        .iter()
        .map(|(module, priority)| (module, calculate_module_score(priority)))
        .collect()
}

/// Highest scoring module. Ties go to the module evaluated first.
pub fn top_priority_module(priorities: &ModulePriorities) -> PriorityModule {
    pick(priorities, |candidate, best| candidate > best)
}

/// Lowest scoring module. Ties go to the module evaluated first.
pub fn weakest_priority_module(priorities: &ModulePriorities) -> PriorityModule {
    pick(priorities, |candidate, best| candidate < best)
}

fn pick(priorities: &ModulePriorities, replaces: impl Fn(u32, u32) -> bool) -> PriorityModule {
    let mut scores = priorities
        .iter()
        .map(|(module, priority)| (module, ranking_key(priority)));
    let Some(mut best) = scores.next() else {
        return PriorityModule::ALL[0];
    };
    for candidate in scores {
        if replaces(candidate.1, best.1) {
            best = candidate;
        }
    }
    best.0
}

/// Display name of the top-rated module.
pub fn get_top_module(response: &QuestionnaireResponse) -> &'static str {
    top_priority_module(&response.module_priorities).display_name()
}
