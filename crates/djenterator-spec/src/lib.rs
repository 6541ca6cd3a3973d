//! Djenterator Canonical Types
//!
//! This crate provides the types, validation, and seed derivation shared by the
//! Djenterator tab generator and its command-line front end.
//!
//! # Overview
//!
//! A generation request is described by three values:
//!
//! - **Tuning inputs**: a base [`Pitch`], a [`TuningFamily`] and a string count
//! - **Generator config**: the immutable [`GeneratorConfig`] holding every rate
//!   the phrase generator draws against, plus the phrase length
//! - **Phrase bounds**: [`PhraseBounds`], the song length target and cap
//!
//! # Example
//!
//! ```
//! use djenterator_spec::{GeneratorConfig, Pitch, TuningFamily};
//!
//! let config = GeneratorConfig {
//!     note_rate: 0.42,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//!
//! let base: Pitch = "C#".parse().unwrap();
//! assert_eq!(base, Pitch::CSharp);
//!
//! let family: TuningFamily = "drop".parse().unwrap();
//! assert_eq!(family, TuningFamily::Drop);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Configuration error type and the shared [`BackendError`] trait
//! - [`pitch`]: Chromatic pitch table and tuning families
//! - [`config`]: Generator configuration and phrase bounds
//! - [`validation`]: Reusable parameter checks
//! - [`hash`]: BLAKE3 seed derivation and content hashing

pub mod config;
pub mod error;
pub mod hash;
pub mod pitch;
pub mod validation;

// Re-export commonly used types at the crate root
pub use config::{GeneratorConfig, PhraseBounds, DEFAULT_NOTES_PER_PHRASE};
pub use error::{BackendError, ConfigError};
pub use hash::{blake3_hash, derive_file_seed};
pub use pitch::{Pitch, TuningFamily};

/// Minimum number of strings a tuning can have.
pub const MIN_STRINGS: usize = 4;

/// Default string count (a 9-string guitar).
pub const DEFAULT_STRINGS: usize = 9;
