//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if !(0..=100).contains(&value) {
            return Err(ValidationError::out_of_range("percentage", 0, 100, value));
        }
        Ok(Self(value as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Percentage {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(pct: Percentage) -> Self {
        pct.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_clamps_to_range() {
        assert_eq!(Percentage::new(50).value(), 50);
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(-5).value(), 0);
    }

    #[test]
    fn percentage_try_new_rejects_over_100() {
        match Percentage::try_new(101) {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "percentage");
                assert_eq!(actual, 101);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn percentage_displays_correctly() {
        assert_eq!(format!("{}", Percentage::new(25)), "25%");
        assert_eq!(format!("{}", Percentage::HUNDRED), "100%");
    }

    #[test]
    fn percentage_roundtrips_as_integer() {
        let json = serde_json::to_string(&Percentage::new(42)).unwrap();
        assert_eq!(json, "42");
        let pct: Percentage = serde_json::from_str("250").unwrap();
        assert_eq!(pct, Percentage::HUNDRED);
    }
}
