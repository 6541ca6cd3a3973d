//! Guitar tunings derived from a base pitch.
//!
//! Strings are listed thickest first. Each string sits a fourth (5 semitones)
//! above the previous one, with two exceptions: the first step is a fifth in
//! drop tunings, and the step into the second-to-last string is a major third
//! (4 semitones), mirroring the G-to-B interval of a six-string guitar.

use djenterator_spec::validation::validate_string_count;
use djenterator_spec::{ConfigError, Pitch, TuningFamily};

/// Semitones between neighbouring strings.
const FOURTH: i32 = 5;
/// Semitones into the second-to-last string.
const MAJOR_THIRD: i32 = 4;

/// An immutable assignment of pitches to strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tuning {
    family: TuningFamily,
    pitches: Vec<Pitch>,
}

impl Tuning {
    /// Pitch of the thickest string.
    pub fn base_pitch(&self) -> Pitch {
        self.pitches[0]
    }

    pub fn family(&self) -> TuningFamily {
        self.family
    }

    pub fn string_count(&self) -> usize {
        self.pitches.len()
    }

    /// All pitches, thickest string first.
    pub fn pitches(&self) -> &[Pitch] {
        &self.pitches
    }

    /// Semitone step from string `string - 1` into `string`.
    ///
    /// `None` for the thickest string (nothing precedes it) and for indices
    /// past the last string.
    pub fn step_into(&self, string: usize) -> Option<i32> {
        if string == 0 || string >= self.pitches.len() {
            return None;
        }
        Some(step_into(self.family, self.pitches.len(), string))
    }
}

impl std::fmt::Display for Tuning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, pitch) in self.pitches.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", pitch)?;
        }
        Ok(())
    }
}

fn step_into(family: TuningFamily, string_count: usize, string: usize) -> i32 {
    if string == 1 {
        family.first_step()
    } else if string == string_count - 2 {
        MAJOR_THIRD
    } else {
        FOURTH
    }
}

/// Build a tuning for `string_count` strings starting at `base`.
///
/// # Errors
/// [`ConfigError::TooFewStrings`] when `string_count` is below
/// [`djenterator_spec::MIN_STRINGS`].
///
/// # Examples
/// ```
/// use djenterator_backend_tab::tuning::build_tuning;
/// use djenterator_spec::{Pitch, TuningFamily};
///
/// let standard = build_tuning(Pitch::E, TuningFamily::Standard, 6).unwrap();
/// assert_eq!(standard.to_string(), "e a d g b e");
///
/// let drop_a = build_tuning(Pitch::A, TuningFamily::Drop, 6).unwrap();
/// assert_eq!(drop_a.to_string(), "a e a d f# b");
/// ```
pub fn build_tuning(
    base: Pitch,
    family: TuningFamily,
    string_count: usize,
) -> Result<Tuning, ConfigError> {
    validate_string_count(string_count)?;

    let mut pitches = Vec::with_capacity(string_count);
    pitches.push(base);
    for string in 1..string_count {
        let prev = pitches[string - 1];
        pitches.push(prev.transpose(step_into(family, string_count, string)));
    }

    Ok(Tuning { family, pitches })
}
