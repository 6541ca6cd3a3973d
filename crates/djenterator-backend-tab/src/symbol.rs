//! Tab cell symbols.

use std::fmt;

/// What happens on the active string at one time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NoteSymbol {
    /// `-`: nothing played.
    #[default]
    Silence,
    /// `0`: open string.
    Open,
    /// `1`: first fret held.
    Fretted,
    /// `h`: hammer-on into the next slot.
    HammerOn,
    /// `p`: pull-off into the next slot.
    PullOff,
}

impl NoteSymbol {
    pub fn as_char(self) -> char {
        match self {
            NoteSymbol::Silence => '-',
            NoteSymbol::Open => '0',
            NoteSymbol::Fretted => '1',
            NoteSymbol::HammerOn => 'h',
            NoteSymbol::PullOff => 'p',
        }
    }

    /// Parse a tab character back into a symbol.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(NoteSymbol::Silence),
            '0' => Some(NoteSymbol::Open),
            '1' => Some(NoteSymbol::Fretted),
            'h' => Some(NoteSymbol::HammerOn),
            'p' => Some(NoteSymbol::PullOff),
            _ => None,
        }
    }

    /// A picked note (`0` or `1`); only these may carry a mute.
    pub fn is_struck(self) -> bool {
        matches!(self, NoteSymbol::Open | NoteSymbol::Fretted)
    }

    /// A hammer-on/pull-off marker, which must be resolved by a following note.
    pub fn is_articulation(self) -> bool {
        matches!(self, NoteSymbol::HammerOn | NoteSymbol::PullOff)
    }
}

impl fmt::Display for NoteSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Palm-mute marker aligned with a note slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MuteSymbol {
    /// `-`
    #[default]
    Open,
    /// `m`
    Muted,
}

impl MuteSymbol {
    pub fn as_char(self) -> char {
        match self {
            MuteSymbol::Open => '-',
            MuteSymbol::Muted => 'm',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(MuteSymbol::Open),
            'm' => Some(MuteSymbol::Muted),
            _ => None,
        }
    }
}

impl fmt::Display for MuteSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_chars() {
        let all = [
            NoteSymbol::Silence,
            NoteSymbol::Open,
            NoteSymbol::Fretted,
            NoteSymbol::HammerOn,
            NoteSymbol::PullOff,
        ];
        let chars: String = all.iter().map(|s| s.as_char()).collect();
        assert_eq!(chars, "-01hp");
        for s in all {
            assert_eq!(NoteSymbol::from_char(s.as_char()), Some(s));
        }
        assert_eq!(NoteSymbol::from_char('2'), None);
    }

    #[test]
    fn test_note_classes() {
        assert!(NoteSymbol::Open.is_struck());
        assert!(NoteSymbol::Fretted.is_struck());
        assert!(!NoteSymbol::HammerOn.is_struck());
        assert!(!NoteSymbol::Silence.is_struck());
        assert!(NoteSymbol::PullOff.is_articulation());
        assert!(!NoteSymbol::Open.is_articulation());
    }

    #[test]
    fn test_mute_chars() {
        assert_eq!(MuteSymbol::default().to_string(), "-");
        assert_eq!(MuteSymbol::Muted.to_string(), "m");
        assert_eq!(MuteSymbol::from_char('m'), Some(MuteSymbol::Muted));
        assert_eq!(MuteSymbol::from_char('x'), None);
    }
}
