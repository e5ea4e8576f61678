//! Intake error types.
//!
//! [`IntakeError`] is the central error type for the crate. The taxonomy is
//! deliberately two-tier: [`IntakeError::Parse`] identifies malformed input
//! JSON and is logged specifically by the binaries; every other variant is
//! logged generically as an unexpected failure.

/// Error type shared by every intake variant.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    /// Input text was not valid JSON. Carries the decode position/reason.
    #[error("failed to decode JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading the input channel failed.
    #[error("input error: {0}")]
    Input(#[from] std::io::Error),

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Database connection or statement failure.
    #[error("database error: {0}")]
    Database(String),
}

impl IntakeError {
    /// `true` when the error is a JSON decode failure, as opposed to any
    /// other (unexpected) failure of the read-parse-log flow.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_are_distinguished() {
        let Err(json_err) = serde_json::from_str::<serde_json::Value>("{not json") else {
            panic!("expected decode failure");
        };
        let err = IntakeError::from(json_err);
        assert!(err.is_parse());
        assert!(!IntakeError::Config("DB_HOST not set".to_string()).is_parse());
    }

    #[test]
    fn parse_error_carries_position() {
        let Err(json_err) = serde_json::from_str::<serde_json::Value>("{\"a\": }") else {
            panic!("expected decode failure");
        };
        let msg = IntakeError::from(json_err).to_string();
        assert!(msg.contains("column"));
    }
}
