//! Main entry point for tab generation.
//!
//! [`generate_tab`] turns a [`TabRequest`] into rendered text: it validates the
//! config, builds the tuning, seeds a PCG32 generator, resolves the song length
//! and assembles the song.

use std::ops::RangeInclusive;

use djenterator_spec::{
    blake3_hash, BackendError, ConfigError, GeneratorConfig, PhraseBounds, Pitch, TuningFamily,
    DEFAULT_STRINGS,
};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::render::render_song;
use crate::roll::create_rng;
use crate::song::generate_song;
use crate::tuning::build_tuning;

/// Range the minimum phrase count is drawn from when the request leaves it open.
pub const DEFAULT_MIN_PHRASES: RangeInclusive<u32> = 80..=120;

/// Error type for tab generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

impl BackendError for GenerateError {
    fn code(&self) -> &'static str {
        match self {
            GenerateError::InvalidConfig(err) => err.code(),
        }
    }

    fn category(&self) -> &'static str {
        "tab"
    }
}

/// Everything needed to generate one song.
#[derive(Debug, Clone, PartialEq)]
pub struct TabRequest {
    /// Seed for the PCG32 generator; equal seeds give identical songs.
    pub seed: u32,
    pub base_pitch: Pitch,
    pub family: TuningFamily,
    pub string_count: usize,
    /// Drawn from [`DEFAULT_MIN_PHRASES`] when `None`.
    pub min_phrases: Option<u32>,
    /// Unbounded when `None`.
    pub max_phrases: Option<u32>,
    pub config: GeneratorConfig,
}

impl Default for TabRequest {
    /// Drop A on a 9-string guitar with default rates.
    fn default() -> Self {
        Self {
            seed: 0,
            base_pitch: Pitch::A,
            family: TuningFamily::Drop,
            string_count: DEFAULT_STRINGS,
            min_phrases: None,
            max_phrases: None,
            config: GeneratorConfig::default(),
        }
    }
}

/// Result of generating one song.
#[derive(Debug, Clone, Serialize)]
pub struct TabResult {
    /// Rendered tab (no trailing newline).
    #[serde(skip)]
    pub text: String,
    pub seed: u32,
    /// Tuning, thickest string first, e.g. `"a e a d g c f a d"`.
    pub tuning: String,
    pub min_phrases: u32,
    pub phrase_count: usize,
    /// BLAKE3 hash of `text`.
    pub hash: String,
}

/// Generate a song.
///
/// # Example
/// ```
/// use djenterator_backend_tab::generate::{generate_tab, TabRequest};
///
/// let request = TabRequest {
///     seed: 42,
///     min_phrases: Some(2),
///     max_phrases: Some(4),
///     ..Default::default()
/// };
/// let result = generate_tab(&request).unwrap();
/// assert!((2..=4).contains(&result.phrase_count));
/// assert_eq!(result.hash, generate_tab(&request).unwrap().hash);
/// ```
pub fn generate_tab(request: &TabRequest) -> Result<TabResult, GenerateError> {
    request.config.validate()?;
    let tuning = build_tuning(request.base_pitch, request.family, request.string_count)?;

    let mut rng = create_rng(request.seed);
    let min_phrases = match request.min_phrases {
        Some(min) => min,
        None => rng.gen_range(DEFAULT_MIN_PHRASES),
    };
    let bounds = PhraseBounds::new(min_phrases, request.max_phrases);

    let song = generate_song(&bounds, &tuning, &request.config, &mut rng)?;
    let text = render_song(&song);
    let hash = blake3_hash(text.as_bytes());

    tracing::debug!(
        seed = request.seed,
        tuning = %tuning,
        phrases = song.len(),
        "generated tab"
    );

    Ok(TabResult {
        text,
        seed: request.seed,
        tuning: tuning.to_string(),
        min_phrases,
        phrase_count: song.len(),
        hash,
    })
}
