//! Djenterator Tab Backend - Procedural Djent Tablature Generation
//!
//! This crate generates guitar tabs in the djent tradition: only the thickest
//! string is played, and only open (`0`) or first-fret (`1`) notes, decorated
//! with palm mutes, hammer-ons, pull-offs and tremolo runs.
//!
//! # Determinism
//!
//! Generation never reads a global random source. Every draw goes through a
//! [`roll::Roll`] supplied by the caller; [`generate_tab`] seeds a PCG32
//! generator, so the same request always yields byte-identical text.
//!
//! # Example
//!
//! ```
//! use djenterator_backend_tab::{generate_tab, TabRequest};
//! use djenterator_spec::{Pitch, TuningFamily};
//!
//! let request = TabRequest {
//!     seed: 7,
//!     base_pitch: Pitch::E,
//!     family: TuningFamily::Standard,
//!     string_count: 6,
//!     min_phrases: Some(4),
//!     ..Default::default()
//! };
//! let result = generate_tab(&request)?;
//! assert!(result.text.starts_with(" e|"));
//! # Ok::<(), djenterator_backend_tab::GenerateError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`tuning`]: Tuning model
//! - [`roll`]: Injectable random draws
//! - [`symbol`]: Note and mute symbols
//! - [`phrase`]: Phrase generator
//! - [`song`]: Song assembler
//! - [`render`]: Text rendering
//! - [`generate`]: Main generation entry point

pub mod generate;
pub mod phrase;
pub mod render;
pub mod roll;
pub mod song;
pub mod symbol;
pub mod tuning;

// Re-export main types
pub use generate::{generate_tab, GenerateError, TabRequest, TabResult};
pub use phrase::{generate_phrase, Phrase};
pub use render::{render_phrase, render_song};
pub use roll::{create_rng, Roll, ScriptedRolls};
pub use song::{generate_song, Song};
pub use symbol::{MuteSymbol, NoteSymbol};
pub use tuning::{build_tuning, Tuning};

/// Crate version for backend identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
