//! Compass summary - the completion screen's narrative.
//!
//! Combines the top module, the coaching insight, the team-health signal
//! and the user's own free text into one [`CompassSummary`]. Pure: the
//! same response and flow always produce the same summary.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::coaching_insight::coaching_insight;
use super::module_results::{module_results_for, ModuleResult};
use super::module_selector::{calculate_module_selection, top_selected_module};
use super::priority_scoring::top_priority_module;
use super::team_health_scoring::{first_worst_layer, has_dominant_dysfunction};
use super::CoachingInsight;
use crate::domain::questionnaire::{
    CardCategory, CardGameData, CardId, DysfunctionLayer, QuestionnaireResponse,
};

/// Which rule picks the top module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowVariant {
    /// Explicit value/feasibility/readiness ratings.
    PriorityRatings,
    /// Card game plus team health through the module selector.
    #[default]
    CardGame,
}

impl fmt::Display for FlowVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PriorityRatings => write!(f, "priority_ratings"),
            Self::CardGame => write!(f, "card_game"),
        }
    }
}

/// "Most" and "least" picks of one card category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPattern {
    pub category: CardCategory,
    pub name: String,
    pub most: Option<CardId>,
    pub most_label: Option<String>,
    pub least: Option<CardId>,
    pub least_label: Option<String>,
}

/// Per-category picks in presentation order.
pub fn card_patterns(card_game: &CardGameData) -> Vec<CardPattern> {
    CardCategory::ALL
        .into_iter()
        .map(|category| {
            let selection = card_game.selection(category);
            CardPattern {
                category,
                name: category.display_name().to_string(),
                most: selection.most().cloned(),
                most_label: selection.most().map(|card| card.label().to_string()),
                least: selection.least().cloned(),
                least_label: selection.least().map(|card| card.label().to_string()),
            }
        })
        .collect()
}

fn most_is(card_game: &CardGameData, category: CardCategory, cards: &[&str]) -> bool {
    card_game
        .selection(category)
        .most()
        .is_some_and(|card| cards.contains(&card.as_str()))
}

/// One thing to watch for during the coming weeks, driven by "most" picks.
pub fn observation_prompt(card_game: &CardGameData) -> &'static str {
    if most_is(card_game, CardCategory::CoachingDelegation, &["do_alone", "delegate_close"]) {
        "Notice when you step in to solve something that could have been a chance for someone else to handle it."
    } else if most_is(card_game, CardCategory::FocusPrioritization, &["day_fills_itself"]) {
        "Notice when you say \"yes\" to something that does not really serve your direction."
    } else if most_is(card_game, CardCategory::InfluenceLeadership, &["need_presence"]) {
        "Notice the moments when you feel you must be there, and ask whether that is really true."
    } else {
        "Notice the moments when a familiar pattern repeats itself, and try to catch it in real time."
    }
}

/// Everything shown on the completion screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompassSummary {
    pub flow: FlowVariant,
    pub top_module: String,
    pub coaching_insight: CoachingInsight,
    /// Present only when the team shows a dominant dysfunction.
    pub dominant_dysfunction: Option<DysfunctionLayer>,
    pub modules: Vec<ModuleResult>,
    pub patterns: Vec<CardPattern>,
    pub observation: String,
    pub one_small_thing: Option<String>,
    pub gold_action: Option<String>,
    pub narrative: String,
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn compose_narrative(
    top_module: &str,
    insight: CoachingInsight,
    dysfunction: Option<DysfunctionLayer>,
    one_small_thing: Option<&str>,
    gold_action: Option<&str>,
) -> String {
    let mut lines = vec![
        format!("Your main focus for the coming period: {top_module}."),
        insight.message().to_string(),
    ];
    if let Some(layer) = dysfunction {
        lines.push(format!(
            "In your team, the clearest signal is {}.",
            layer.dysfunction_name()
        ));
    }
    if let Some(text) = one_small_thing {
        lines.push(format!("The one small thing you chose to change: \"{text}\""));
    }
    if let Some(text) = gold_action {
        lines.push(format!("Your golden action for the team: \"{text}\""));
    }
    lines.join("\n")
}

/// Builds the completion summary for a response.
pub fn build_summary(response: &QuestionnaireResponse, flow: FlowVariant) -> CompassSummary {
    let team_health = response.team_health.as_ref();
    let selection = calculate_module_selection(&response.card_game, team_health);

    let top_module = match flow {
        FlowVariant::PriorityRatings => top_priority_module(&response.module_priorities).display_name(),
        FlowVariant::CardGame => top_selected_module(&selection).display_name(),
    };

    let insight = coaching_insight(&response.coaching);
    let dominant_dysfunction = team_health
        .filter(|data| has_dominant_dysfunction(data))
        .and_then(first_worst_layer);
    let one_small_thing = non_blank(&response.coaching.one_small_thing);
    let gold_action = team_health.and_then(|data| non_blank(&data.gold_action));

    let narrative = compose_narrative(
        top_module,
        insight,
        dominant_dysfunction,
        one_small_thing.as_deref(),
        gold_action.as_deref(),
    );

    CompassSummary {
        flow,
        top_module: top_module.to_string(),
        coaching_insight: insight,
        dominant_dysfunction,
        modules: module_results_for(&selection),
        patterns: card_patterns(&response.card_game),
        observation: observation_prompt(&response.card_game).to_string(),
        one_small_thing,
        gold_action,
        narrative,
    }
}
