//! Display-ready module results: name, depth and the reason behind it.

use serde::{Deserialize, Serialize};

use super::module_selector::calculate_module_selection;
use super::{ModuleDepth, ModuleKey, ModuleSelection};
use crate::domain::questionnaire::{CardGameData, TeamHealthData};

/// One module of the final result screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleResult {
    pub key: ModuleKey,
    pub name: String,
    pub depth: ModuleDepth,
    pub reason: String,
}

impl ModuleKey {
    /// Human-readable module name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Coaching => "Coaching & Delegation",
            Self::Interfaces => "Interfaces & Organizational Influence",
            Self::Focus => "Focus & Prioritization",
            Self::Team => "Team Development",
        }
    }

    /// Explanation shown next to the module for the given depth.
    pub fn reason(&self, depth: ModuleDepth) -> &'static str {
        match (self, depth) {
            (Self::Coaching, ModuleDepth::Full) => {
                "Your answers show a pattern of difficulty letting go and developing others to be more independent"
            }
            (Self::Coaching, ModuleDepth::Light) => {
                "You already have a good basis in developing people and letting go"
            }
            (Self::Interfaces, ModuleDepth::Full) => {
                "Your answers show a dependence on your personal presence and a narrow circle of influence"
            }
            (Self::Interfaces, ModuleDepth::Light) => {
                "Your influence already reaches beyond what you directly manage"
            }
            (Self::Focus, ModuleDepth::Full) => {
                "Your answers show a lack of focus and a day that is driven from the outside"
            }
            (Self::Focus, ModuleDepth::Light) => {
                "You already have clear direction and working priorities"
            }
            (Self::Team, ModuleDepth::Full) => {
                "A clear dysfunction was identified in the team's foundations"
            }
            (Self::Team, ModuleDepth::Light) => "The team functions reasonably well",
        }
    }
}

impl ModuleResult {
    pub fn new(key: ModuleKey, depth: ModuleDepth) -> Self {
        Self {
            key,
            name: key.display_name().to_string(),
            depth,
            reason: key.reason(depth).to_string(),
        }
    }
}

/// Results for an already computed selection, in [`ModuleKey::ALL`] order.
pub fn module_results_for(selection: &ModuleSelection) -> Vec<ModuleResult> {
    selection
        .entries()
        .map(|(key, depth)| ModuleResult::new(key, depth))
        .collect()
}

/// Runs the module selector and describes every module.
pub fn get_module_results(
    card_game: &CardGameData,
    team_health: Option<&TeamHealthData>,
) -> Vec<ModuleResult> {
    module_results_for(&calculate_module_selection(card_game, team_health))
}

pub fn get_full_modules(
    card_game: &CardGameData,
    team_health: Option<&TeamHealthData>,
) -> Vec<ModuleResult> {
    get_module_results(card_game, team_health)
        .into_iter()
        .filter(|result| result.depth.is_full())
        .collect()
}

pub fn get_light_modules(
    card_game: &CardGameData,
    team_health: Option<&TeamHealthData>,
) -> Vec<ModuleResult> {
    get_module_results(card_game, team_health)
        .into_iter()
        .filter(|result| !result.depth.is_full())
        .collect()
}
