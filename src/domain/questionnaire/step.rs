//! Current-step marker persisted next to the response.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Screen the user was on. The presentation layer owns the routing; the
/// core only stores and restores the marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionnaireStep {
    #[default]
    Welcome,
    CardGame,
    FocusControl,
    TimeEnergy,
    DecisionsPrice,
    InterfacesMap,
    Coaching,
    TeamHealth,
    ModulePrioritization,
    Completion,
}

impl QuestionnaireStep {
    pub const ALL: [QuestionnaireStep; 10] = [
        QuestionnaireStep::Welcome,
        QuestionnaireStep::CardGame,
        QuestionnaireStep::FocusControl,
        QuestionnaireStep::TimeEnergy,
        QuestionnaireStep::DecisionsPrice,
        QuestionnaireStep::InterfacesMap,
        QuestionnaireStep::Coaching,
        QuestionnaireStep::TeamHealth,
        QuestionnaireStep::ModulePrioritization,
        QuestionnaireStep::Completion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::CardGame => "card_game",
            Self::FocusControl => "focus_control",
            Self::TimeEnergy => "time_energy",
            Self::DecisionsPrice => "decisions_price",
            Self::InterfacesMap => "interfaces_map",
            Self::Coaching => "coaching",
            Self::TeamHealth => "team_health",
            Self::ModulePrioritization => "module_prioritization",
            Self::Completion => "completion",
        }
    }

    pub fn is_completion(&self) -> bool {
        matches!(self, Self::Completion)
    }
}

impl fmt::Display for QuestionnaireStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuestionnaireStep {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_option("questionnaire_step", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_step_parses_its_own_marker() {
        for step in QuestionnaireStep::ALL {
            assert_eq!(step.to_string().parse::<QuestionnaireStep>().unwrap(), step);
        }
    }

    #[test]
    fn unknown_marker_is_rejected() {
        let err = "summary".parse::<QuestionnaireStep>().unwrap_err();
        assert_eq!(err, ValidationError::unknown_option("questionnaire_step", "summary"));
    }

    #[test]
    fn only_completion_is_terminal() {
        let terminal: Vec<_> = QuestionnaireStep::ALL
            .into_iter()
            .filter(QuestionnaireStep::is_completion)
            .collect();
        assert_eq!(terminal, vec![QuestionnaireStep::Completion]);
    }
}
