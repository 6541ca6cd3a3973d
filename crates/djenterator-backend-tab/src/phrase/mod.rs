//! Phrase generation.
//!
//! A phrase is a fixed run of slots on the thickest string. The generator scans
//! it left to right: each slot may start a note, and every note may be
//! followed by effects (a tremolo run and/or a hammer-on/pull-off pair) before
//! the scan resumes. Finally the second half may be replaced by a copy of the
//! first.
//!
//! Draw order is fixed so that a scripted [`Roll`] reproduces a phrase exactly:
//!
//! 1. note (`note_rate`), then open-vs-fretted (`zero_rate`), then mute (`mute_rate`)
//! 2. per effects round: tremolo (`tremolo_rate`), then hammer/pull (`hammerpull_rate`)
//! 3. tremolo notes: `note_rate`, then as in 1
//! 4. hammer/pull: one mute draw for the resolving note
//! 5. after the scan: measure repeat (`measure_repeat_rate`)

use djenterator_spec::{ConfigError, GeneratorConfig};

use crate::roll::Roll;
use crate::symbol::{MuteSymbol, NoteSymbol};


/// Note and mute tracks of one phrase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phrase {
    notes: Vec<NoteSymbol>,
    mutes: Vec<MuteSymbol>,
}

impl Phrase {
    /// A phrase of `len` silent, unmuted slots.
    pub fn silent(len: usize) -> Self {
        Self {
            notes: vec![NoteSymbol::Silence; len],
            mutes: vec![MuteSymbol::Open; len],
        }
    }

    /// Build a phrase from tab characters, e.g. `("0h1-", "--m-")`.
    ///
    /// Returns `None` if the lines differ in length or hold unknown characters.
    pub fn from_lines(notes: &str, mutes: &str) -> Option<Self> {
        let notes: Vec<NoteSymbol> = notes
            .chars()
            .map(NoteSymbol::from_char)
            .collect::<Option<_>>()?;
        let mutes: Vec<MuteSymbol> = mutes
            .chars()
            .map(MuteSymbol::from_char)
            .collect::<Option<_>>()?;
        if notes.len() != mutes.len() {
            return None;
        }
        Some(Self { notes, mutes })
    }

    pub fn notes(&self) -> &[NoteSymbol] {
        &self.notes
    }

    pub fn mutes(&self) -> &[MuteSymbol] {
        &self.mutes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Note track as tab characters, without measure bars.
    pub fn note_line(&self) -> String {
        self.notes.iter().map(|n| n.as_char()).collect()
    }

    /// Mute track as tab characters, without measure bars.
    pub fn mute_line(&self) -> String {
        self.mutes.iter().map(|m| m.as_char()).collect()
    }

    /// Number of picked notes (`0`/`1`).
    pub fn struck_count(&self) -> usize {
        self.notes.iter().filter(|n| n.is_struck()).count()
    }
}

/// Generate one phrase.
///
/// # Errors
/// Fails with a [`ConfigError`] before any draw if `config` is invalid.
///
/// # Example
/// ```
/// use djenterator_backend_tab::phrase::generate_phrase;
/// use djenterator_backend_tab::roll::create_rng;
/// use djenterator_spec::GeneratorConfig;
///
/// let config = GeneratorConfig::default();
/// let phrase = generate_phrase(&config, &mut create_rng(7)).unwrap();
/// assert_eq!(phrase.len(), config.notes_per_phrase);
/// ```
pub fn generate_phrase<R: Roll + ?Sized>(
    config: &GeneratorConfig,
    rolls: &mut R,
) -> Result<Phrase, ConfigError> {
    config.validate()?;
    Ok(build_phrase(config, rolls))
}

/// Generate a phrase from an already validated config.
pub(crate) fn build_phrase<R: Roll + ?Sized>(config: &GeneratorConfig, rolls: &mut R) -> Phrase {
    let mut builder = PhraseBuilder {
        config,
        rolls,
        phrase: Phrase::silent(config.notes_per_phrase),
    };
    builder.scan();
    builder.roll_repeated_measures();

    let phrase = builder.phrase;
    tracing::trace!(
        notes = %phrase.note_line(),
        struck = phrase.struck_count(),
        "generated phrase"
    );
    phrase
}

struct PhraseBuilder<'a, R: Roll + ?Sized> {
    config: &'a GeneratorConfig,
    rolls: &'a mut R,
    phrase: Phrase,
}

impl<R: Roll + ?Sized> PhraseBuilder<'_, R> {
    fn end(&self) -> usize {
        self.phrase.notes.len()
    }

    fn scan(&mut self) {
        let end = self.end();
        let mut index = 0;
        while index < end {
            if self.rolls.chance(self.config.note_rate) {
                self.strike(index);
                index = self.roll_effects(index + 1);
            } else {
                index += 1;
            }
        }
    }

    /// Draw a `0`/`1` note and its mute into `index`.
    fn strike(&mut self, index: usize) {
        self.phrase.notes[index] = if self.rolls.chance(self.config.zero_rate) {
            NoteSymbol::Open
        } else {
            NoteSymbol::Fretted
        };
        self.phrase.mutes[index] = self.roll_mute();
    }

    fn roll_mute(&mut self) -> MuteSymbol {
        if self.rolls.chance(self.config.mute_rate) {
            MuteSymbol::Muted
        } else {
            MuteSymbol::Open
        }
    }

    /// Effects after the note that ended at `index - 1`.
    ///
    /// Rounds continue until one fires neither effect or the cursor is within
    /// one slot of the end. A tremolo that adds no note still counts as fired.
    fn roll_effects(&mut self, mut index: usize) -> usize {
        let end = self.end();
        while index + 1 < end {
            let tremolo = self.rolls.chance(self.config.tremolo_rate);
            let hammerpull = self.rolls.chance(self.config.hammerpull_rate);
            if !tremolo && !hammerpull {
                break;
            }

            if tremolo {
                index = self.roll_tremolo(index);
            }
            if hammerpull && index + 1 < end {
                index = self.add_hammerpull(index);
            }
        }
        index
    }

    /// Consecutive notes while `note_rate` keeps firing; leaves the last slot free.
    fn roll_tremolo(&mut self, mut index: usize) -> usize {
        let end = self.end();
        while index + 1 < end && self.rolls.chance(self.config.note_rate) {
            self.strike(index);
            index += 1;
        }
        index
    }

    /// Two slots: the marker, then the note it resolves to.
    ///
    /// `0` hammers on to `1`; `1` pulls off to `0`. The marker is never muted,
    /// the resolving note may be.
    fn add_hammerpull(&mut self, index: usize) -> usize {
        let (marker, target) = match self.phrase.notes[index - 1] {
            NoteSymbol::Open => (NoteSymbol::HammerOn, NoteSymbol::Fretted),
            _ => (NoteSymbol::PullOff, NoteSymbol::Open),
        };
        self.phrase.notes[index] = marker;
        self.phrase.mutes[index] = MuteSymbol::Open;
        self.phrase.notes[index + 1] = target;
        self.phrase.mutes[index + 1] = self.roll_mute();
        index + 2
    }

    /// Maybe overwrite the second half with the first.
    ///
    /// A marker in the last slot of the first half would end the phrase
    /// unresolved once copied, so it is replaced by a fresh note first.
    fn roll_repeated_measures(&mut self) {
        if !self.rolls.chance(self.config.measure_repeat_rate) {
            return;
        }
        let halfway = self.end() / 2;
        if self.phrase.notes[halfway - 1].is_articulation() {
            self.strike(halfway - 1);
        }
        self.phrase.notes.copy_within(..halfway, halfway);
        self.phrase.mutes.copy_within(..halfway, halfway);
    }
}
