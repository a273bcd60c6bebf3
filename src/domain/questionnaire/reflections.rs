//! Answers of the reflection screens: focus, time, decisions, interfaces
//! and engagement. Pure data; none of it feeds module selection.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{LikertScore, Percentage};

/// Focus & control screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusControl {
    #[serde(default)]
    pub anchor_score: LikertScore,
    /// Option id of the biggest time drain.
    #[serde(default)]
    pub time_drain: Option<String>,
    /// Free text when the drain is "other".
    #[serde(default)]
    pub time_drain_other: String,
}

/// Share of working time per urgency/importance quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeQuadrants {
    pub urgent_important: Percentage,
    pub important_not_urgent: Percentage,
    pub urgent_not_important: Percentage,
    pub not_urgent_not_important: Percentage,
}

impl TimeQuadrants {
    pub fn total(&self) -> u16 {
        [
            self.urgent_important,
            self.important_not_urgent,
            self.urgent_not_important,
            self.not_urgent_not_important,
        ]
        .iter()
        .map(|pct| u16::from(pct.value()))
        .sum()
    }

    /// The four quadrants add up to exactly 100%.
    pub fn is_complete_allocation(&self) -> bool {
        self.total() == 100
    }

    /// Time spent on anything urgent, capped at 100%.
    pub fn reactive_share(&self) -> Percentage {
        Percentage::new(
            i64::from(self.urgent_important.value()) + i64::from(self.urgent_not_important.value()),
        )
    }
}

impl Default for TimeQuadrants {
    fn default() -> Self {
        let quarter = Percentage::new(25);
        Self {
            urgent_important: quarter,
            important_not_urgent: quarter,
            urgent_not_important: quarter,
            not_urgent_not_important: quarter,
        }
    }
}

/// Time & energy screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEnergy {
    #[serde(default)]
    pub quadrants: TimeQuadrants,
    #[serde(default)]
    pub breathing_space: LikertScore,
}

/// Decisions & price screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionsPrice {
    #[serde(default)]
    pub immediate_price: String,
    #[serde(default)]
    pub long_term_price: String,
    #[serde(default)]
    pub retrospective: String,
}

/// Interfaces journey: one concrete interface walked through nine steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceJourneyData {
    #[serde(default)]
    pub general_influence: LikertScore,
    #[serde(default)]
    pub interface_role: Option<String>,
    #[serde(default)]
    pub situation_influence: LikertScore,
    #[serde(default)]
    pub friction_reason: Option<String>,
    #[serde(default)]
    pub initiative_score: LikertScore,
    #[serde(default)]
    pub action_nature: Option<String>,
    #[serde(default)]
    pub change_score: LikertScore,
    #[serde(default)]
    pub influence_moment: Option<String>,
    #[serde(default)]
    pub influence_moment_text: String,
    #[serde(default)]
    pub future_leverage: Option<String>,
    #[serde(default)]
    pub price_score: LikertScore,
    #[serde(default)]
    pub price_types: Vec<String>,
}

impl InterfaceJourneyData {
    /// Toggles a price type: adds it when absent, removes it when present.
    pub fn toggle_price_type(&mut self, price_type: &str) {
        if let Some(index) = self.price_types.iter().position(|p| p == price_type) {
            self.price_types.remove(index);
        } else {
            self.price_types.push(price_type.to_string());
        }
    }

    /// Drop between the general sense of influence and the concrete case.
    pub fn influence_gap(&self) -> i16 {
        i16::from(self.general_influence.value()) - i16::from(self.situation_influence.value())
    }
}

/// Engagement & energy screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    #[serde(default)]
    pub energy_level: LikertScore,
    #[serde(default)]
    pub meaning_score: LikertScore,
    #[serde(default)]
    pub pressure_pattern: Option<String>,
}
