//! Chromatic pitch table and tuning families.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Number of pitch classes in the chromatic scale.
pub const SEMITONES: u8 = 12;

/// One of the 12 chromatic pitch classes.
///
/// The table starts at `a` (index 0) and ends at `g#` (index 11); all
/// arithmetic wraps modulo 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pitch {
    A,
    ASharp,
    B,
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
}

impl Pitch {
    /// All pitches in table order.
    pub const ALL: [Pitch; 12] = [
        Pitch::A,
        Pitch::ASharp,
        Pitch::B,
        Pitch::C,
        Pitch::CSharp,
        Pitch::D,
        Pitch::DSharp,
        Pitch::E,
        Pitch::F,
        Pitch::FSharp,
        Pitch::G,
        Pitch::GSharp,
    ];

    /// Position in the chromatic table (a = 0 .. g# = 11).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Look up a pitch by table index, wrapping modulo 12.
    pub fn from_index(index: usize) -> Pitch {
        Self::ALL[index % SEMITONES as usize]
    }

    /// The pitch `semitones` above (or below, if negative) this one.
    ///
    /// ```
    /// use djenterator_spec::Pitch;
    ///
    /// assert_eq!(Pitch::A.transpose(7), Pitch::E);
    /// assert_eq!(Pitch::G.transpose(5), Pitch::C);
    /// assert_eq!(Pitch::A.transpose(-1), Pitch::GSharp);
    /// ```
    pub fn transpose(self, semitones: i32) -> Pitch {
        let index = (self.index() as i32 + semitones).rem_euclid(SEMITONES as i32);
        Self::from_index(index as usize)
    }

    /// Lowercase note name as printed in tabs.
    pub fn name(self) -> &'static str {
        match self {
            Pitch::A => "a",
            Pitch::ASharp => "a#",
            Pitch::B => "b",
            Pitch::C => "c",
            Pitch::CSharp => "c#",
            Pitch::D => "d",
            Pitch::DSharp => "d#",
            Pitch::E => "e",
            Pitch::F => "f",
            Pitch::FSharp => "f#",
            Pitch::G => "g",
            Pitch::GSharp => "g#",
        }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pitch {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name() == name)
            .ok_or_else(|| ConfigError::UnknownPitch(s.to_string()))
    }
}

/// Offset profile used to derive a tuning from its base pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TuningFamily {
    /// First step is a fourth (5 semitones).
    Standard,
    /// First step is a fifth (7 semitones).
    #[default]
    Drop,
}

impl TuningFamily {
    /// Semitones from the thickest string to the next one.
    pub fn first_step(self) -> i32 {
        match self {
            TuningFamily::Standard => 5,
            TuningFamily::Drop => 7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TuningFamily::Standard => "standard",
            TuningFamily::Drop => "drop",
        }
    }
}

impl fmt::Display for TuningFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TuningFamily {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(TuningFamily::Standard),
            "drop" => Ok(TuningFamily::Drop),
            _ => Err(ConfigError::UnknownTuningFamily(s.to_string())),
        }
    }
}
