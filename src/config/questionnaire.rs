//! Questionnaire flow configuration

use serde::Deserialize;

use crate::domain::analysis::FlowVariant;

/// Questionnaire configuration
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct QuestionnaireConfig {
    /// Which rule picks the top module in the summary
    #[serde(default)]
    pub flow: FlowVariant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questionnaire_config_defaults_to_card_game() {
        assert_eq!(QuestionnaireConfig::default().flow, FlowVariant::CardGame);
    }

    #[test]
    fn test_questionnaire_config_deserialization() {
        let config: QuestionnaireConfig =
            serde_json::from_str(r#"{ "flow": "priority_ratings" }"#).unwrap();
        assert_eq!(config.flow, FlowVariant::PriorityRatings);
    }
}
