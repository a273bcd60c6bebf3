//! Coaching gap detection and the matching insight sentence.
//!
//! Patterns are checked in a fixed order and the first match wins:
//!
//! 1. High stated importance with low time investment
//! 2. Real time investment with a low behavioral payoff
//! 3. The same issues keep coming back
//! 4. Otherwise a generic positive note
//!
//! The progressive warning shown while the user fills the screen and the
//! final summary share the thresholds below.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::questionnaire::{CoachingData, CoachingLayer};

/// Identity score at or above which coaching is "stated as important".
pub const HIGH_IDENTITY_THRESHOLD: u8 = 4;

/// Effectiveness score at or below which coaching "does not pay off".
pub const LOW_EFFECTIVENESS_THRESHOLD: u8 = 2;

/// Recurrence score at or above which issues "keep coming back".
pub const HIGH_RECURRENCE_THRESHOLD: u8 = 4;

/// Named coaching patterns, in detection priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoachingInsight {
    IdentityTimeGap,
    EffortWithoutPayoff,
    RecurringIssues,
    SolidFoundation,
}

impl CoachingInsight {
    pub fn message(&self) -> &'static str {
        match self {
            Self::IdentityTimeGap => {
                "You see coaching as an important part of your role, but in practice little time is left for it."
            }
            Self::EffortWithoutPayoff => {
                "You invest real effort, but it does not yet translate into more independence in the people you develop."
            }
            Self::RecurringIssues => {
                "It seems you keep returning to the same issues with the same people - a sign the approach may need to change."
            }
            Self::SolidFoundation => {
                "You have a good foundation for coaching - now it is about deepening what already works."
            }
        }
    }

    /// Whether this is a gap worth warning about.
    pub fn is_gap(&self) -> bool {
        !matches!(self, Self::SolidFoundation)
    }
}

impl fmt::Display for CoachingInsight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

fn identity_time_gap(coaching: &CoachingData) -> bool {
    coaching.identity_score.value() >= HIGH_IDENTITY_THRESHOLD
        && coaching.time_investment.is_some_and(|time| time.is_low())
}

fn effort_without_payoff(coaching: &CoachingData) -> bool {
    coaching.time_investment.is_some_and(|time| !time.is_low())
        && coaching.effectiveness_score.value() <= LOW_EFFECTIVENESS_THRESHOLD
}

fn recurring_issues(coaching: &CoachingData) -> bool {
    coaching.recurrence_score.value() >= HIGH_RECURRENCE_THRESHOLD
}

/// Gap patterns with the last layer each one needs.
const GAP_PATTERNS: [(CoachingInsight, CoachingLayer, fn(&CoachingData) -> bool); 3] = [
    (
        CoachingInsight::IdentityTimeGap,
        CoachingLayer::TimeInvestment,
        identity_time_gap,
    ),
    (
        CoachingInsight::EffortWithoutPayoff,
        CoachingLayer::Effectiveness,
        effort_without_payoff,
    ),
    (
        CoachingInsight::RecurringIssues,
        CoachingLayer::Recurrence,
        recurring_issues,
    ),
];

/// Final coaching insight: first matching gap, else the generic note.
pub fn coaching_insight(coaching: &CoachingData) -> CoachingInsight {
    GAP_PATTERNS
        .iter()
        .find(|(_, _, matches)| matches(coaching))
        .map(|(insight, _, _)| *insight)
        .unwrap_or(CoachingInsight::SolidFoundation)
}

/// Insight sentence for the final summary.
pub fn get_coaching_insight(coaching: &CoachingData) -> &'static str {
    coaching_insight(coaching).message()
}

/// Warning to show mid-flow once the user has reached `reached` layer.
///
/// Only patterns whose inputs have been reached are considered, so an
/// untouched default never triggers a warning early. Returns `None`
/// rather than the generic note when nothing matches.
pub fn gap_warning(coaching: &CoachingData, reached: CoachingLayer) -> Option<CoachingInsight> {
    GAP_PATTERNS
        .iter()
        .filter(|(_, needs, _)| *needs <= reached)
        .find(|(_, _, matches)| matches(coaching))
        .map(|(insight, _, _)| *insight)
}
