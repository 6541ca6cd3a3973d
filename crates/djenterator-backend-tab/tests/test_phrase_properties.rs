//! Property-based tests for phrase and song generation.
//!
//! Random configs and seeds must always produce well-formed tabs: fixed
//! lengths, mutes only over struck notes, and every hammer-on/pull-off resolved
//! by the right note.

use djenterator_backend_tab::{
    build_tuning, create_rng, generate_phrase, generate_song, MuteSymbol, NoteSymbol, Phrase,
};
use djenterator_spec::{GeneratorConfig, PhraseBounds, Pitch, TuningFamily};
use proptest::prelude::*;

fn arbitrary_config() -> impl Strategy<Value = GeneratorConfig> {
    (
        1usize..=16,
        0.0f64..=1.0,
        0.0f64..=1.0,
        0.0f64..=1.0,
        0.0f64..=1.0,
        0.0f64..=1.0,
        0.0f64..=1.0,
        0.0f64..=0.95,
    )
        .prop_map(
            |(measures, note, zero, mute, hammerpull, tremolo, measure_repeat, phrase_repeat)| {
                GeneratorConfig {
                    notes_per_phrase: measures * 4,
                    note_rate: note,
                    zero_rate: zero,
                    mute_rate: mute,
                    hammerpull_rate: hammerpull,
                    tremolo_rate: tremolo,
                    measure_repeat_rate: measure_repeat,
                    phrase_repeat_rate: phrase_repeat,
                }
            },
        )
}

/// Check the structural rules every generated phrase obeys.
fn assert_well_formed(phrase: &Phrase, len: usize) -> Result<(), TestCaseError> {
    let notes = phrase.notes();
    let mutes = phrase.mutes();
    prop_assert_eq!(notes.len(), len);
    prop_assert_eq!(mutes.len(), len);

    for (i, (note, mute)) in notes.iter().zip(mutes).enumerate() {
        if *mute == MuteSymbol::Muted {
            prop_assert!(note.is_struck(), "mute over {:?} at {}", note, i);
        }
        match note {
            NoteSymbol::HammerOn => {
                prop_assert!(i > 0 && i + 1 < len, "hammer-on at edge {}", i);
                prop_assert_eq!(notes[i - 1], NoteSymbol::Open);
                prop_assert_eq!(notes[i + 1], NoteSymbol::Fretted);
            }
            NoteSymbol::PullOff => {
                prop_assert!(i > 0 && i + 1 < len, "pull-off at edge {}", i);
                prop_assert_eq!(notes[i - 1], NoteSymbol::Fretted);
                prop_assert_eq!(notes[i + 1], NoteSymbol::Open);
            }
            _ => {}
        }
    }

    let last = notes[len - 1];
    prop_assert!(!last.is_articulation(), "phrase ends on {:?}", last);
    Ok(())
}

proptest! {
    #[test]
    fn phrases_are_well_formed(config in arbitrary_config(), seed in any::<u32>()) {
        let phrase = generate_phrase(&config, &mut create_rng(seed)).unwrap();
        assert_well_formed(&phrase, config.notes_per_phrase)?;
    }

    #[test]
    fn phrases_with_forced_repeat_end_cleanly(
        config in arbitrary_config(),
        seed in any::<u32>(),
    ) {
        let config = GeneratorConfig {
            measure_repeat_rate: 1.0,
            hammerpull_rate: 1.0,
            ..config
        };
        let phrase = generate_phrase(&config, &mut create_rng(seed)).unwrap();
        assert_well_formed(&phrase, config.notes_per_phrase)?;

        let half = config.notes_per_phrase / 2;
        prop_assert_eq!(&phrase.notes()[..half], &phrase.notes()[half..]);
        prop_assert_eq!(&phrase.mutes()[..half], &phrase.mutes()[half..]);
    }

    #[test]
    fn songs_respect_bounds(
        config in arbitrary_config(),
        seed in any::<u32>(),
        min in 0u32..40,
        cap in proptest::option::of(1u32..40),
    ) {
        let tuning = build_tuning(Pitch::A, TuningFamily::Drop, 9).unwrap();
        let bounds = PhraseBounds::new(min, cap);
        let song = generate_song(&bounds, &tuning, &config, &mut create_rng(seed)).unwrap();

        prop_assert!(song.len() >= bounds.effective_min() as usize);
        if let Some(cap) = cap {
            prop_assert!(song.len() <= cap as usize);
        }
        for phrase in song.phrases() {
            assert_well_formed(phrase, config.notes_per_phrase)?;
        }
    }

    #[test]
    fn out_of_range_rates_are_rejected(rate in prop_oneof![-10.0f64..-0.0001, 1.0001f64..10.0]) {
        let config = GeneratorConfig {
            zero_rate: rate,
            ..Default::default()
        };
        prop_assert!(generate_phrase(&config, &mut create_rng(0)).is_err());
    }
}
