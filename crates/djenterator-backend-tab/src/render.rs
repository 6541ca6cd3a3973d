//! Plain-text tab rendering.
//!
//! A phrase prints as one line per string, thinnest string on top, followed by
//! the mute line. Only the bottom (thickest) string is ever played; every other
//! line is silence:
//!
//! ```text
//!  e|----|----|----|----|
//!  b|----|----|----|----|
//!  g|----|----|----|----|
//!  d|----|----|----|----|
//!  a|----|----|----|----|
//!  e|0101|100-|0101|011-|
//!   {--mm|m---|----|-m--}
//! ```

use crate::phrase::Phrase;
use crate::song::Song;
use crate::tuning::Tuning;

/// Split `cells` into four measures joined by `|`.
fn measures(cells: &[char]) -> String {
    let width = (cells.len() / 4).max(1);
    cells
        .chunks(width)
        .map(|m| m.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("|")
}

fn string_line(name: &str, cells: &[char]) -> String {
    format!("{:>2}|{}|", name, measures(cells))
}

/// Render one phrase against a tuning.
pub fn render_phrase(phrase: &Phrase, tuning: &Tuning) -> String {
    let played: Vec<char> = phrase.notes().iter().map(|n| n.as_char()).collect();
    let silence = vec!['-'; phrase.len()];
    let mutes: Vec<char> = phrase.mutes().iter().map(|m| m.as_char()).collect();

    let pitches = tuning.pitches();
    let mut lines = Vec::with_capacity(pitches.len() + 1);
    for (string, pitch) in pitches.iter().enumerate().rev() {
        let cells = if string == 0 { &played } else { &silence };
        lines.push(string_line(pitch.name(), cells));
    }
    lines.push(format!("  {{{}}}", measures(&mutes)));
    lines.join("\n")
}

/// Render a whole song: phrases separated by a blank line.
pub fn render_song(song: &Song) -> String {
    song.phrases()
        .iter()
        .map(|p| render_phrase(p, song.tuning()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

impl std::fmt::Display for Song {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_song(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::build_tuning;
    use djenterator_spec::{Pitch, TuningFamily};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_standard_phrase() {
        let tuning = build_tuning(Pitch::E, TuningFamily::Standard, 6).unwrap();
        let phrase = Phrase::from_lines("0101100-0101011-", "--mmm--------m--").unwrap();
        let expected = [
            " e|----|----|----|----|",
            " b|----|----|----|----|",
            " g|----|----|----|----|",
            " d|----|----|----|----|",
            " a|----|----|----|----|",
            " e|0101|100-|0101|011-|",
            "  {--mm|m---|----|-m--}",
        ]
        .join("\n");
        assert_eq!(render_phrase(&phrase, &tuning), expected);
    }

    #[test]
    fn test_render_sharp_names_fill_two_columns() {
        let tuning = build_tuning(Pitch::CSharp, TuningFamily::Standard, 4).unwrap();
        // c# f# a# d#
        let phrase = Phrase::from_lines("0h1p0---", "--m-----").unwrap();
        let expected = "\
d#|--|--|--|--|
a#|--|--|--|--|
f#|--|--|--|--|
c#|0h|1p|0-|--|
  {--|m-|--|--}";
        assert_eq!(render_phrase(&phrase, &tuning), expected);
    }

    #[test]
    fn test_render_song_separates_phrases() {
        let tuning = build_tuning(Pitch::A, TuningFamily::Drop, 4).unwrap();
        let mut song = Song::new(tuning.clone());
        song.push(Phrase::from_lines("0---", "m---").unwrap());
        song.push(Phrase::from_lines("---1", "----").unwrap());

        let text = render_song(&song);
        let blocks: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], render_phrase(&song.phrases()[0], &tuning));
        assert_eq!(blocks[1], render_phrase(&song.phrases()[1], &tuning));
        assert!(!text.ends_with('\n'));
        assert_eq!(song.to_string(), text);
    }

    #[test]
    fn test_render_empty_song() {
        let tuning = build_tuning(Pitch::A, TuningFamily::Drop, 9).unwrap();
        assert_eq!(render_song(&Song::new(tuning)), "");
    }
}
