//! Song assembly: phrases plus probabilistic repetition.

use djenterator_spec::{ConfigError, GeneratorConfig, PhraseBounds};

use crate::phrase::{build_phrase, Phrase};
use crate::roll::Roll;
use crate::tuning::Tuning;

/// An ordered run of phrases sharing one tuning and one phrase length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    tuning: Tuning,
    phrases: Vec<Phrase>,
}

impl Song {
    /// An empty song.
    pub fn new(tuning: Tuning) -> Self {
        Self {
            tuning,
            phrases: Vec::new(),
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Append a phrase.
    ///
    /// # Panics
    /// If `phrase` is a different length from the phrases already present.
    pub fn push(&mut self, phrase: Phrase) {
        if let Some(first) = self.phrases.first() {
            assert_eq!(
                first.len(),
                phrase.len(),
                "all phrases in a song must have the same length"
            );
        }
        self.phrases.push(phrase);
    }
}

/// Assemble a song.
///
/// Fresh phrases are generated until the song holds `bounds.effective_min()`
/// phrases. After each fresh phrase, a `phrase_repeat_rate` draw is taken
/// repeatedly; every success appends another copy of that phrase. The cap is
/// checked before every append, so the song never exceeds
/// `bounds.max_phrases`.
///
/// # Errors
/// Fails before any draw if `config` or `bounds` is invalid, including a
/// certain `phrase_repeat_rate` with no `max_phrases`.
pub fn generate_song<R: Roll + ?Sized>(
    bounds: &PhraseBounds,
    tuning: &Tuning,
    config: &GeneratorConfig,
    rolls: &mut R,
) -> Result<Song, ConfigError> {
    config.validate()?;
    bounds.validate_with(config)?;

    let target = bounds.effective_min() as usize;
    let mut song = Song::new(tuning.clone());
    while song.len() < target {
        let phrase = build_phrase(config, rolls);
        song.push(phrase.clone());

        while bounds.has_room(song.len()) && rolls.chance(config.phrase_repeat_rate) {
            song.push(phrase.clone());
        }
    }

    tracing::debug!(
        phrases = song.len(),
        min = bounds.min_phrases,
        max = ?bounds.max_phrases,
        "assembled song"
    );
    Ok(song)
}
