//! Error types for audioactive core operations

use thiserror::Error;

/// Result type alias for audioactive operations
pub type Result<T> = std::result::Result<T, AudioactiveError>;

/// Errors that can occur while generating or analysing a sequence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AudioactiveError {
    /// Seed is empty or holds a character outside {1, 2, 3}
    #[error("Invalid seed {seed:?}: {reason}")]
    InvalidSeed { seed: String, reason: String },

    /// Input to a pure transform is malformed (e.g. empty)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested atom symbol is not part of the table
    #[error("Unknown atom: {0}")]
    UnknownAtom(String),
}

impl AudioactiveError {
    pub(crate) fn invalid_seed(seed: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSeed {
            seed: seed.to_string(),
            reason: reason.into(),
        }
    }

    /// Stable numeric code, used as the CLI exit status
    ///
    /// Starts at 3: 1 is a generic failure and 2 is a command-line usage
    /// error.
    pub fn code(&self) -> u8 {
        match self {
            Self::InvalidSeed { .. } => 3,
            Self::InvalidInput(_) => 4,
            Self::UnknownAtom(_) => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AudioactiveError::invalid_seed("120", "x").code(), 3);
        assert_eq!(AudioactiveError::InvalidInput("empty".into()).code(), 4);
        assert_eq!(AudioactiveError::UnknownAtom("Xx".into()).code(), 5);
    }

    #[test]
    fn test_error_codes_leave_room_for_usage_errors() {
        let errors = [
            AudioactiveError::invalid_seed("", "seed is empty"),
            AudioactiveError::InvalidInput("empty".into()),
            AudioactiveError::UnknownAtom("Xx".into()),
        ];
        for err in &errors {
            assert!(err.code() > 2, "{} collides with generic/usage exit codes", err);
        }
    }

    #[test]
    fn test_error_display() {
        let err = AudioactiveError::invalid_seed("120", "character '0' at position 2 is not in {1, 2, 3}");
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid seed"));
        assert!(msg.contains("\"120\""));
    }
}
