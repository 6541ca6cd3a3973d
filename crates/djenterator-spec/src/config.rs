//! Generator configuration and phrase bounds.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::validation::{validate_notes_per_phrase, validate_unit_interval};

/// Default phrase length (four measures of 16 slots).
pub const DEFAULT_NOTES_PER_PHRASE: usize = 64;

/// Immutable settings for the phrase generator and song assembler.
///
/// Every rate is a probability in [0, 1]; a draw "fires" when a uniform roll
/// in [0, 1) is below the rate. A config file may set any subset of the fields,
/// the rest keep their defaults:
///
/// ```
/// use djenterator_spec::GeneratorConfig;
///
/// let config = GeneratorConfig::from_json_str(r#"{"note_rate": 0.42, "notes_per_phrase": 32}"#).unwrap();
/// assert_eq!(config.note_rate, 0.42);
/// assert_eq!(config.notes_per_phrase, 32);
/// assert_eq!(config.zero_rate, 0.75);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Slots per phrase; must be a positive multiple of 4.
    pub notes_per_phrase: usize,
    /// Chance a slot starts a new note instead of staying silent.
    pub note_rate: f64,
    /// Chance a new note is an open string (`0`) rather than fretted (`1`).
    pub zero_rate: f64,
    /// Chance a struck note is palm-muted.
    pub mute_rate: f64,
    /// Chance a hammer-on/pull-off extends the previous note.
    pub hammerpull_rate: f64,
    /// Chance a tremolo run follows a note.
    pub tremolo_rate: f64,
    /// Chance the second half of a phrase copies the first half.
    pub measure_repeat_rate: f64,
    /// Chance a whole phrase is duplicated (drawn again after each copy).
    pub phrase_repeat_rate: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            notes_per_phrase: DEFAULT_NOTES_PER_PHRASE,
            note_rate: 0.5,
            zero_rate: 0.75,
            mute_rate: 0.5,
            hammerpull_rate: 0.2,
            tremolo_rate: 0.4,
            measure_repeat_rate: 0.55,
            phrase_repeat_rate: 0.5,
        }
    }
}

impl GeneratorConfig {
    /// Decode a (possibly partial) config from JSON.
    ///
    /// Unknown fields are rejected. The decoded config is validated before it
    /// is returned.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every rate and the phrase length.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_notes_per_phrase(self.notes_per_phrase)?;
        for (name, value) in self.rates() {
            validate_unit_interval(name, value)?;
        }
        Ok(())
    }

    /// Named rates, in declaration order.
    pub fn rates(&self) -> [(&'static str, f64); 7] {
        [
            ("note_rate", self.note_rate),
            ("zero_rate", self.zero_rate),
            ("mute_rate", self.mute_rate),
            ("hammerpull_rate", self.hammerpull_rate),
            ("tremolo_rate", self.tremolo_rate),
            ("measure_repeat_rate", self.measure_repeat_rate),
            ("phrase_repeat_rate", self.phrase_repeat_rate),
        ]
    }
}

/// Song length target in phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseBounds {
    /// Generate fresh phrases until at least this many exist.
    pub min_phrases: u32,
    /// Hard cap on the phrase count; `None` means unbounded.
    pub max_phrases: Option<u32>,
}

impl PhraseBounds {
    pub fn new(min_phrases: u32, max_phrases: Option<u32>) -> Self {
        Self {
            min_phrases,
            max_phrases,
        }
    }

    /// A cap of zero phrases can never hold a song.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_phrases == Some(0) {
            return Err(ConfigError::InvalidPhraseBounds(
                "max_phrases must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Check the bounds against the rates they will be used with.
    ///
    /// A certain phrase repeat with no cap would append copies forever, so that
    /// pair is rejected along with everything [`validate`](Self::validate)
    /// rejects.
    pub fn validate_with(&self, config: &GeneratorConfig) -> Result<(), ConfigError> {
        self.validate()?;
        if self.max_phrases.is_none() && config.phrase_repeat_rate >= 1.0 {
            return Err(ConfigError::InvalidPhraseBounds(
                "phrase_repeat_rate of 1 needs max_phrases".to_string(),
            ));
        }
        Ok(())
    }

    /// Lower bound after applying the cap.
    pub fn effective_min(&self) -> u32 {
        match self.max_phrases {
            Some(max) => self.min_phrases.min(max),
            None => self.min_phrases,
        }
    }

    /// True while another phrase may be appended to a song of `len` phrases.
    pub fn has_room(&self, len: usize) -> bool {
        match self.max_phrases {
            Some(max) => len < max as usize,
            None => true,
        }
    }
}
