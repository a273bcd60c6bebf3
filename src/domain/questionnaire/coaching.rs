//! Coaching self-assessment: seven ordered layers plus a gold question.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::LikertScore;

/// The seven coaching layers in the order the screen presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoachingLayer {
    /// Self-perception of the coaching part of the managerial identity.
    Identity,
    /// Actual time invested in coaching.
    TimeInvestment,
    /// Dominant coaching style.
    Style,
    /// Behavioral effectiveness of coaching.
    Effectiveness,
    /// How often the same issues come back.
    Recurrence,
    /// The internal blocker.
    Blocker,
    /// Personal price paid for the current pattern.
    PersonalPrice,
}

impl CoachingLayer {
    pub const ALL: [CoachingLayer; 7] = [
        CoachingLayer::Identity,
        CoachingLayer::TimeInvestment,
        CoachingLayer::Style,
        CoachingLayer::Effectiveness,
        CoachingLayer::Recurrence,
        CoachingLayer::Blocker,
        CoachingLayer::PersonalPrice,
    ];
}

/// Weekly time spent coaching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeInvestment {
    #[serde(rename = "less30")]
    LessThan30Minutes,
    #[serde(rename = "30to60")]
    From30To60Minutes,
    #[serde(rename = "1to2hours")]
    OneToTwoHours,
    #[serde(rename = "more2hours")]
    MoreThanTwoHours,
    #[serde(rename = "unknown")]
    Unknown,
}

impl TimeInvestment {
    /// Less than half an hour, or the manager cannot say.
    pub fn is_low(&self) -> bool {
        matches!(self, Self::LessThan30Minutes | Self::Unknown)
    }
}

/// Dominant coaching style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoachingStyle {
    /// Gives the answer.
    Directive,
    /// Suggests options.
    Advisory,
    /// Asks guiding questions.
    Questioning,
    /// Hands over ownership.
    Empowering,
}

/// Main internal blocker to coaching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InternalBlocker {
    Time,
    Patience,
    Control,
    Maturity,
    Method,
}

impl InternalBlocker {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Time => "Lack of time",
            Self::Patience => "Lack of patience",
            Self::Control => "Fear of losing control",
            Self::Maturity => "The employee is not ready",
            Self::Method => "No clear method",
        }
    }
}

/// Coaching answers. Numeric layers start neutral; categorical layers
/// start unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachingData {
    #[serde(default)]
    pub identity_score: LikertScore,
    #[serde(default)]
    pub time_investment: Option<TimeInvestment>,
    #[serde(default)]
    pub coaching_style: Option<CoachingStyle>,
    #[serde(default)]
    pub effectiveness_score: LikertScore,
    #[serde(default)]
    pub recurrence_score: LikertScore,
    #[serde(default)]
    pub internal_blocker: Option<InternalBlocker>,
    #[serde(default)]
    pub personal_price_score: LikertScore,
    #[serde(default)]
    pub personal_price_type: Option<String>,
    /// Gold question: one small thing the manager will change.
    #[serde(default)]
    pub one_small_thing: String,
}

impl CoachingData {
    /// Whether a layer has what it needs to let the user move on.
    pub fn is_layer_answered(&self, layer: CoachingLayer) -> bool {
        match layer {
            CoachingLayer::Identity
            | CoachingLayer::Effectiveness
            | CoachingLayer::Recurrence => true,
            CoachingLayer::TimeInvestment => self.time_investment.is_some(),
            CoachingLayer::Style => self.coaching_style.is_some(),
            CoachingLayer::Blocker => self.internal_blocker.is_some(),
            CoachingLayer::PersonalPrice => self
                .personal_price_type
                .as_deref()
                .is_some_and(|id| !id.trim().is_empty()),
        }
    }

    /// First layer still gating progression, if any.
    pub fn first_unanswered_layer(&self) -> Option<CoachingLayer> {
        CoachingLayer::ALL
            .into_iter()
            .find(|layer| !self.is_layer_answered(*layer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_neutral_and_unanswered() {
        let data = CoachingData::default();
        assert_eq!(data.identity_score, LikertScore::NEUTRAL);
        assert_eq!(data.effectiveness_score, LikertScore::NEUTRAL);
        assert_eq!(data.recurrence_score, LikertScore::NEUTRAL);
        assert_eq!(data.personal_price_score, LikertScore::NEUTRAL);
        assert!(data.time_investment.is_none());
        assert_eq!(data.first_unanswered_layer(), Some(CoachingLayer::TimeInvestment));
    }

    #[test]
    fn categorical_layers_gate_progression() {
        let mut data = CoachingData {
            time_investment: Some(TimeInvestment::OneToTwoHours),
            coaching_style: Some(CoachingStyle::Questioning),
            ..Default::default()
        };
        assert_eq!(data.first_unanswered_layer(), Some(CoachingLayer::Blocker));

        data.internal_blocker = Some(InternalBlocker::Control);
        data.personal_price_type = Some("   ".to_string());
        assert_eq!(data.first_unanswered_layer(), Some(CoachingLayer::PersonalPrice));

        data.personal_price_type = Some("energy".to_string());
        assert_eq!(data.first_unanswered_layer(), None);
    }

    #[test]
    fn low_time_investment_covers_less30_and_unknown() {
        assert!(TimeInvestment::LessThan30Minutes.is_low());
        assert!(TimeInvestment::Unknown.is_low());
        assert!(!TimeInvestment::From30To60Minutes.is_low());
        assert!(!TimeInvestment::MoreThanTwoHours.is_low());
    }

    #[test]
    fn time_investment_uses_option_ids_on_the_wire() {
        let json = serde_json::to_string(&TimeInvestment::LessThan30Minutes).unwrap();
        assert_eq!(json, "\"less30\"");
        let parsed: TimeInvestment = serde_json::from_str("\"30to60\"").unwrap();
        assert_eq!(parsed, TimeInvestment::From30To60Minutes);
    }

    #[test]
    fn layers_are_ordered() {
        assert!(CoachingLayer::Identity < CoachingLayer::TimeInvestment);
        assert!(CoachingLayer::Recurrence < CoachingLayer::PersonalPrice);
    }
}
