//! Module Selector - assigns full/light depth to the four modules.
//!
//! # Algorithm
//!
//! Phase A assigns each module independently:
//! - coaching from the coaching/delegation "least" pick
//! - interfaces from the influence/leadership "least" pick
//! - focus from the focus and time "least" picks (either full wins)
//! - team from the team-health dominant dysfunction, when data exists
//!
//! Phase B repairs the result so that between [`MIN_FULL_MODULES`] and
//! [`MAX_FULL_MODULES`] modules are full, using [`MODULE_PRIORITY_ORDER`]
//! to decide who is demoted or promoted.

use super::card_scoring::{
    score_card_selection, COACHING_TRIGGERS, FOCUS_TRIGGERS, INTERFACES_TRIGGERS,
};
use super::team_health_scoring::has_dominant_dysfunction;
use super::{ModuleDepth, ModuleKey, ModuleSelection, MODULE_PRIORITY_ORDER};
use crate::domain::questionnaire::{CardGameData, TeamHealthData};

/// Minimum number of full modules in a final selection.
pub const MIN_FULL_MODULES: usize = 1;

/// Maximum number of full modules in a final selection.
pub const MAX_FULL_MODULES: usize = 2;

/// Phase A: independent per-module depth, before constraint repair.
pub fn initial_module_selection(
    card_game: &CardGameData,
    team_health: Option<&TeamHealthData>,
) -> ModuleSelection {
    let coaching = score_card_selection(&card_game.coaching_delegation, &COACHING_TRIGGERS);
    let interfaces = score_card_selection(&card_game.influence_leadership, &INTERFACES_TRIGGERS);
    let focus = score_card_selection(&card_game.focus_prioritization, &FOCUS_TRIGGERS)
        .strongest(score_card_selection(&card_game.time_routines, &FOCUS_TRIGGERS));

    let team = match team_health {
        Some(data) if has_dominant_dysfunction(data) => ModuleDepth::Full,
        Some(_) | None => ModuleDepth::Light,
    };

    ModuleSelection {
        coaching: coaching.depth(),
        interfaces: interfaces.depth(),
        focus: focus.depth(),
        team,
    }
}

/// Phase B: enforce the full-module bounds.
///
/// - Too many full modules: keep the highest-priority ones, demote the rest.
/// - No full module: promote the highest-priority light module.
/// - Otherwise the selection is returned unchanged.
pub fn apply_constraints(selection: ModuleSelection) -> ModuleSelection {
    let mut repaired = selection;
    let full = selection.full_modules();

    if full.len() > MAX_FULL_MODULES {
        for key in &full[MAX_FULL_MODULES..] {
            repaired.set(*key, ModuleDepth::Light);
        }
    } else if full.len() < MIN_FULL_MODULES {
        let promote: Vec<ModuleKey> = selection
            .light_modules()
            .into_iter()
            .take(MIN_FULL_MODULES - full.len())
            .collect();
        for key in promote {
            repaired.set(key, ModuleDepth::Full);
        }
    }

    repaired
}

/// Computes the final module selection.
///
/// Absent team health counts as "no dysfunction"; unknown or missing card
/// picks count as light. The result always has one or two full modules.
pub fn calculate_module_selection(
    card_game: &CardGameData,
    team_health: Option<&TeamHealthData>,
) -> ModuleSelection {
    apply_constraints(initial_module_selection(card_game, team_health))
}

/// Highest-priority full module of a selection.
pub fn top_selected_module(selection: &ModuleSelection) -> ModuleKey {
    selection
        .full_modules()
        .first()
        .copied()
        .unwrap_or(MODULE_PRIORITY_ORDER[0])
}
