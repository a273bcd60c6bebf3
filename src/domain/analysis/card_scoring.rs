//! Card-game scoring: turns a "least representative" pick into a depth hint.

use serde::{Deserialize, Serialize};

use super::ModuleDepth;
use crate::domain::questionnaire::ForcedChoiceSelection;

/// Card ids that push a module to full or light depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerTable {
    pub full: &'static [&'static str],
    pub light: &'static [&'static str],
}

impl TriggerTable {
    /// Classifies one card id against the table.
    pub fn classify(&self, card: &str) -> DepthHint {
        if self.full.contains(&card) {
            DepthHint::Full
        } else if self.light.contains(&card) {
            DepthHint::Light
        } else {
            DepthHint::Unmatched
        }
    }
}

/// Coaching/delegation triggers.
pub const COACHING_TRIGGERS: TriggerTable = TriggerTable {
    full: &["do_alone", "delegate_close"],
    light: &["people_grow"],
};

/// Influence/leadership triggers for the interfaces module.
pub const INTERFACES_TRIGGERS: TriggerTable = TriggerTable {
    full: &["need_presence", "close_circle"],
    light: &["things_move"],
};

/// Focus/time triggers, applied to both the focus and the time category.
pub const FOCUS_TRIGGERS: TriggerTable = TriggerTable {
    full: &["day_fills_itself", "holding_a_lot", "no_routine", "meetings_unclear"],
    light: &["clear_direction", "routines_advance"],
};

/// Signal a card pick gives about a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthHint {
    /// The pick is a full trigger.
    Full,
    /// The pick is a recognised light trigger.
    Light,
    /// No pick, or a pick the table does not know.
    Unmatched,
}

impl DepthHint {
    /// Unmatched picks resolve to the neutral light depth.
    pub fn depth(&self) -> ModuleDepth {
        match self {
            Self::Full => ModuleDepth::Full,
            Self::Light | Self::Unmatched => ModuleDepth::Light,
        }
    }

    /// Strongest of two hints: full beats light, light beats unmatched.
    pub fn strongest(self, other: DepthHint) -> DepthHint {
        match (self, other) {
            (Self::Full, _) | (_, Self::Full) => Self::Full,
            (Self::Light, _) | (_, Self::Light) => Self::Light,
            _ => Self::Unmatched,
        }
    }
}

/// Scores a category's "least" pick against a trigger table.
///
/// Unanswered selections and unknown ids yield [`DepthHint::Unmatched`].
pub fn score_card_selection(selection: &ForcedChoiceSelection, table: &TriggerTable) -> DepthHint {
    selection
        .least()
        .map(|card| table.classify(card.as_str()))
        .unwrap_or(DepthHint::Unmatched)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn least(card: &str) -> ForcedChoiceSelection {
        let mut selection = ForcedChoiceSelection::default();
        selection.set_least(card);
        selection
    }

    #[test]
    fn full_trigger_scores_full() {
        assert_eq!(
            score_card_selection(&least("do_alone"), &COACHING_TRIGGERS),
            DepthHint::Full
        );
        assert_eq!(
            score_card_selection(&least("close_circle"), &INTERFACES_TRIGGERS),
            DepthHint::Full
        );
    }

    #[test]
    fn light_trigger_scores_light() {
        assert_eq!(
            score_card_selection(&least("things_move"), &INTERFACES_TRIGGERS),
            DepthHint::Light
        );
        assert_eq!(
            score_card_selection(&least("routines_advance"), &FOCUS_TRIGGERS),
            DepthHint::Light
        );
    }

    #[test]
    fn unknown_card_is_unmatched_and_light() {
        let hint = score_card_selection(&least("selective_release"), &COACHING_TRIGGERS);
        assert_eq!(hint, DepthHint::Unmatched);
        assert_eq!(hint.depth(), ModuleDepth::Light);
    }

    #[test]
    fn unanswered_selection_is_unmatched() {
        let hint = score_card_selection(&ForcedChoiceSelection::default(), &FOCUS_TRIGGERS);
        assert_eq!(hint, DepthHint::Unmatched);
    }

    #[test]
    fn most_pick_is_ignored() {
        let mut selection = ForcedChoiceSelection::default();
        selection.set_most("do_alone");
        assert_eq!(
            score_card_selection(&selection, &COACHING_TRIGGERS),
            DepthHint::Unmatched
        );
    }

    #[test]
    fn strongest_prefers_full_then_light() {
        use DepthHint::*;
        assert_eq!(Unmatched.strongest(Full), Full);
        assert_eq!(Light.strongest(Unmatched), Light);
        assert_eq!(Light.strongest(Full), Full);
        assert_eq!(Unmatched.strongest(Unmatched), Unmatched);
    }

    #[test]
    fn trigger_tables_do_not_overlap() {
        for table in [COACHING_TRIGGERS, INTERFACES_TRIGGERS, FOCUS_TRIGGERS] {
            for card in table.full {
                assert!(!table.light.contains(card), "{card} is both full and light");
            }
        }
    }
}
