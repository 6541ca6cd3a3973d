//! Reusable parameter checks.
//!
//! These are the building blocks of [`GeneratorConfig::validate`] and of the
//! tuning builder. Each returns the matching [`ConfigError`] variant.
//!
//! [`GeneratorConfig::validate`]: crate::GeneratorConfig::validate

use crate::error::ConfigError;
use crate::MIN_STRINGS;

/// Validate that a probability is in [0, 1] (the unit interval).
///
/// # Example
/// ```
/// use djenterator_spec::validation::validate_unit_interval;
///
/// assert!(validate_unit_interval("mute_rate", 0.5).is_ok());
/// assert!(validate_unit_interval("mute_rate", 1.5).is_err());
/// ```
pub fn validate_unit_interval(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::RateOutOfRange { name, value });
    }
    Ok(())
}

/// Validate that a phrase splits evenly into four non-empty measures.
pub fn validate_notes_per_phrase(notes_per_phrase: usize) -> Result<(), ConfigError> {
    if notes_per_phrase == 0 || notes_per_phrase % 4 != 0 {
        return Err(ConfigError::InvalidNotesPerPhrase(notes_per_phrase));
    }
    Ok(())
}

/// Validate a tuning's string count.
pub fn validate_string_count(count: usize) -> Result<(), ConfigError> {
    if count < MIN_STRINGS {
        return Err(ConfigError::TooFewStrings {
            count,
            min: MIN_STRINGS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_interval_bounds() {
        assert!(validate_unit_interval("x", 0.0).is_ok());
        assert!(validate_unit_interval("x", 1.0).is_ok());
        assert!(validate_unit_interval("x", -0.01).is_err());
        assert!(validate_unit_interval("x", 1.01).is_err());
        assert!(validate_unit_interval("x", f64::NAN).is_err());
        assert!(validate_unit_interval("x", f64::INFINITY).is_err());
    }

    #[test]
    fn test_unit_interval_error_names_field() {
        let err = validate_unit_interval("zero_rate", 3.0).unwrap_err();
        assert_eq!(err.to_string(), "zero_rate must be in [0, 1], got 3");
    }

    #[test]
    fn test_notes_per_phrase() {
        assert!(validate_notes_per_phrase(4).is_ok());
        assert!(validate_notes_per_phrase(64).is_ok());
        assert_eq!(
            validate_notes_per_phrase(0),
            Err(ConfigError::InvalidNotesPerPhrase(0))
        );
        assert_eq!(
            validate_notes_per_phrase(18),
            Err(ConfigError::InvalidNotesPerPhrase(18))
        );
    }

    #[test]
    fn test_string_count() {
        assert!(validate_string_count(4).is_ok());
        assert!(validate_string_count(9).is_ok());
        assert_eq!(
            validate_string_count(3),
            Err(ConfigError::TooFewStrings { count: 3, min: 4 })
        );
    }
}
