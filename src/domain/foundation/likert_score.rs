//! Likert score value object (1-5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A rating on the 1-5 scale used by every numeric questionnaire answer.
///
/// Deserialization clamps, so a stored or UI-supplied value outside the
/// scale never reaches scoring as an undefined rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct LikertScore(u8);

impl LikertScore {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(5);

    /// The neutral midpoint every numeric answer starts at.
    pub const NEUTRAL: Self = Self(3);

    /// Creates a score, clamping to the 1-5 range.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(1, 5) as u8)
    }

    /// Creates a score, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if !(1..=5).contains(&value) {
            return Err(ValidationError::out_of_range("likert_score", 1, 5, value));
        }
        Ok(Self(value as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as f64 for weighted formulas.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for LikertScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl From<i64> for LikertScore {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<LikertScore> for u8 {
    fn from(score: LikertScore) -> Self {
        score.0
    }
}

impl fmt::Display for LikertScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}
