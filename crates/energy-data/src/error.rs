//! Error types for the energy-data crate.
//!
//! Generation over in-memory random draws cannot fail; the only failure modes
//! are a caller handing over a date key that is not a calendar date, or a
//! stored label that names no known scenario, risk level, or room status.

use thiserror::Error;

/// Errors that can occur when preparing a generation request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// The date key is not a valid ISO `YYYY-MM-DD` calendar date.
    #[error("invalid date key '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        value: String,
    },

    /// The event probability lies outside `[0, 0.70]`.
    #[error("event probability {value} must lie within [0, 0.7]")]
    InvalidEventProbability {
        /// The rejected probability.
        value: f64,
    },
}

/// A wire label did not match any variant of the target enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} label '{value}'")]
pub struct ParseLabelError {
    kind: &'static str,
    value: String,
}

impl ParseLabelError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }

    /// Name of the enum that rejected the label.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// The rejected label.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_label_error_names_kind_and_value() {
        let err = ParseLabelError::new("scenario", "HEATWAVE");
        assert_eq!(err.to_string(), "unknown scenario label 'HEATWAVE'");
        assert_eq!(err.kind(), "scenario");
        assert_eq!(err.value(), "HEATWAVE");
    }

    #[test]
    fn invalid_date_formats_correctly() {
        let err = GenerationError::InvalidDate {
            value: "2026-13-01".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date key '2026-13-01': expected YYYY-MM-DD"
        );
    }

    #[test]
    fn invalid_event_probability_formats_correctly() {
        let err = GenerationError::InvalidEventProbability { value: 0.9 };
        assert_eq!(
            err.to_string(),
            "event probability 0.9 must lie within [0, 0.7]"
        );
    }
}
