//! Error types for fitview-core operations.
//!
//! The state store never errors (malformed input degrades to warnings and
//! no-ops); these errors belong to the converter/formatter surface, where
//! callers need to distinguish "bad number" from a display string.

use thiserror::Error;

/// All errors that can occur in fitview-core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Value for {field} is not a finite number: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("Negative {field} cannot be formatted: {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("Pace is undefined for non-positive speed: {0} m/s")]
    PaceUndefined(f64),
}

/// Convenience type alias for Results using CoreError.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_display_names_the_field() {
        let err = CoreError::NonFinite {
            field: "duration",
            value: f64::NAN,
        };
        assert!(err.to_string().contains("duration"));
    }

    #[test]
    fn test_negative_display_includes_value() {
        let err = CoreError::Negative {
            field: "distance",
            value: -5.0,
        };
        assert!(err.to_string().contains("-5"));
    }
}
