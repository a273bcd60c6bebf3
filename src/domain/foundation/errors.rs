//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during strict value object construction.
///
/// Scoring code never produces these; they surface only where a caller
/// explicitly asks for validation instead of the clamping constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has no option '{value}'")]
    UnknownOption { field: String, value: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an unknown option validation error.
    pub fn unknown_option(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::UnknownOption {
            field: field.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("one_small_thing");
        assert_eq!(format!("{}", err), "Field 'one_small_thing' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("identity_score", 1, 5, 9);
        assert_eq!(
            format!("{}", err),
            "Field 'identity_score' must be between 1 and 5, got 9"
        );
    }

    #[test]
    fn validation_error_unknown_option_displays_correctly() {
        let err = ValidationError::unknown_option("time_investment", "forever");
        assert_eq!(
            format!("{}", err),
            "Field 'time_investment' has no option 'forever'"
        );
    }
}
