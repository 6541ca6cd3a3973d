//! Error types for configuration validation.

use thiserror::Error;

/// Common trait for errors surfaced to the user.
///
/// Every error type that reaches the command line implements this trait so the
/// front end can print a stable code next to the message:
///
/// ```ignore
/// use djenterator_spec::error::BackendError;
///
/// fn report<E: BackendError>(err: E) {
///     eprintln!("[{}] {}", err.code(), err.message());
/// }
/// ```
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "CONFIG_001". These codes are
    /// stable and can be matched on by scripts.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}

/// An invalid configuration value.
///
/// All variants are detected before any generation or file I/O happens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A probability outside [0, 1] (or not finite).
    #[error("{name} must be in [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },

    /// Phrase length is zero or not divisible into four measures.
    #[error("notes_per_phrase must be a positive multiple of 4, got {0}")]
    InvalidNotesPerPhrase(usize),

    /// Tuning family other than standard/drop.
    #[error("unknown tuning family '{0}' (expected standard or drop)")]
    UnknownTuningFamily(String),

    /// Pitch name not in the chromatic table.
    #[error("unknown pitch '{0}' (expected one of a, a#, b, c, c#, d, d#, e, f, f#, g, g#)")]
    UnknownPitch(String),

    /// Tuning with fewer strings than supported.
    #[error("a tuning needs at least {min} strings, got {count}")]
    TooFewStrings { count: usize, min: usize },

    /// Phrase count bounds that cannot be satisfied.
    #[error("invalid phrase bounds: {0}")]
    InvalidPhraseBounds(String),

    /// Config file that could not be decoded.
    #[error("invalid generator config: {0}")]
    Parse(String),
}

impl BackendError for ConfigError {
    fn code(&self) -> &'static str {
        match self {
            ConfigError::RateOutOfRange { .. } => "CONFIG_001",
            ConfigError::InvalidNotesPerPhrase(_) => "CONFIG_002",
            ConfigError::UnknownTuningFamily(_) => "CONFIG_003",
            ConfigError::UnknownPitch(_) => "CONFIG_004",
            ConfigError::TooFewStrings { .. } => "CONFIG_005",
            ConfigError::InvalidPhraseBounds(_) => "CONFIG_006",
            ConfigError::Parse(_) => "CONFIG_007",
        }
    }

    fn category(&self) -> &'static str {
        "config"
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            ConfigError::RateOutOfRange {
                name: "note_rate",
                value: 2.0,
            },
            ConfigError::InvalidNotesPerPhrase(3),
            ConfigError::UnknownTuningFamily("open".to_string()),
            ConfigError::UnknownPitch("h".to_string()),
            ConfigError::TooFewStrings { count: 2, min: 4 },
            ConfigError::InvalidPhraseBounds("max is zero".to_string()),
            ConfigError::Parse("eof".to_string()),
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert!(errors.iter().all(|e| e.category() == "config"));
    }

    #[test]
    fn test_message_matches_display() {
        let err = ConfigError::TooFewStrings { count: 3, min: 4 };
        assert_eq!(err.message(), "a tuning needs at least 4 strings, got 3");
    }
}
