//! Generate command implementation
//!
//! Generates one or more songs and writes each to its own text file.

use anyhow::{anyhow, bail, Result};
use colored::Colorize;
use djenterator_backend_tab::{build_tuning, generate_tab, TabRequest, TabResult};
use djenterator_spec::{
    derive_file_seed, BackendError, PhraseBounds, Pitch, TuningFamily, DEFAULT_STRINGS,
};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use crate::input::load_config;
use crate::output::{
    ensure_dir, numbered_path, write_song, AlwaysOverwrite, ConfirmOverwrite, Prompt,
    WriteOutcome,
};

/// Default output file name.
pub const DEFAULT_FILENAME: &str = "song.txt";

/// Default output directory.
pub const DEFAULT_DIRNAME: &str = "songs";

/// Options for a generate run, as parsed from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    pub numfiles: u32,
    pub filename: String,
    pub dirname: PathBuf,
    pub min_phrases: Option<u32>,
    pub max_phrases: Option<u32>,
    pub force: bool,
    pub seed: Option<u32>,
    pub family: TuningFamily,
    pub base_pitch: Pitch,
    pub strings: usize,
    pub config: Option<PathBuf>,
    pub json: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            numfiles: 1,
            filename: DEFAULT_FILENAME.to_string(),
            dirname: PathBuf::from(DEFAULT_DIRNAME),
            min_phrases: None,
            max_phrases: None,
            force: false,
            seed: None,
            family: TuningFamily::Drop,
            base_pitch: Pitch::A,
            strings: DEFAULT_STRINGS,
            config: None,
            json: false,
        }
    }
}

#[derive(Debug, Serialize)]
struct FileReport {
    path: String,
    status: &'static str,
    #[serde(flatten)]
    result: TabResult,
}

#[derive(Debug, Serialize)]
struct GenerateReport {
    base_seed: u32,
    tuning: String,
    files: Vec<FileReport>,
}

/// Run the generate command
///
/// Existing files are replaced when `options.force` is set; otherwise the user
/// is asked on stdin.
///
/// # Returns
/// Exit code: 0 success. Configuration and filesystem errors are returned as
/// `Err` and abort the batch at the first failure.
pub fn run(options: &GenerateOptions) -> Result<ExitCode> {
    if options.force {
        run_with(options, &mut AlwaysOverwrite)
    } else {
        run_with(options, &mut Prompt::stdin())
    }
}

/// Run the generate command with an explicit overwrite policy.
pub fn run_with(options: &GenerateOptions, confirm: &mut dyn ConfirmOverwrite) -> Result<ExitCode> {
    let start = Instant::now();

    // Everything that can be rejected is checked before touching the filesystem.
    if options.numfiles == 0 {
        bail!("numfiles must be at least 1");
    }
    let config = load_config(options.config.as_deref())?;
    let tuning =
        build_tuning(options.base_pitch, options.family, options.strings).map_err(coded)?;
    PhraseBounds::new(options.min_phrases.unwrap_or(0), options.max_phrases)
        .validate_with(&config)
        .map_err(coded)?;

    let base_seed = options.seed.unwrap_or_else(rand::random);

    if !options.json {
        println!(
            "{} {} {} into {}",
            "Generating:".cyan().bold(),
            options.numfiles,
            if options.numfiles == 1 { "song" } else { "songs" },
            options.dirname.display()
        );
        println!(
            "{} {} {} ({} strings)",
            "Tuning:".dimmed(),
            tuning.family(),
            tuning,
            tuning.string_count()
        );
        println!("{} {}", "Seed:".dimmed(), base_seed);
    }
    tracing::debug!(?options, base_seed, "starting generate run");

    ensure_dir(&options.dirname)?;

    let mut files = Vec::with_capacity(options.numfiles as usize);
    for i in 0..options.numfiles {
        let path = numbered_path(&options.dirname, &options.filename, i + 1, options.numfiles);
        let request = TabRequest {
            seed: derive_file_seed(base_seed, i),
            base_pitch: options.base_pitch,
            family: options.family,
            string_count: options.strings,
            min_phrases: options.min_phrases,
            max_phrases: options.max_phrases,
            config: config.clone(),
        };
        let result = generate_tab(&request).map_err(coded)?;
        let outcome = write_song(&path, &result.text, confirm)?;

        if !options.json {
            print_file_line(&path, outcome, &result);
        }
        files.push(FileReport {
            path: path.display().to_string(),
            status: outcome.as_str(),
            result,
        });
    }

    if options.json {
        let report = GenerateReport {
            base_seed,
            tuning: tuning.to_string(),
            files,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let written = files
            .iter()
            .filter(|f| f.status != WriteOutcome::Skipped.as_str())
            .count();
        println!(
            "{} wrote {} of {} in {:?}",
            "SUCCESS".green().bold(),
            written,
            files.len(),
            start.elapsed()
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn coded<E: BackendError>(err: E) -> anyhow::Error {
    anyhow!("[{}] {}", err.code(), err.message())
}

fn print_file_line(path: &std::path::Path, outcome: WriteOutcome, result: &TabResult) {
    match outcome {
        WriteOutcome::Skipped => {
            println!("  {} {}", "Skipped".yellow(), path.display());
        }
        WriteOutcome::Written | WriteOutcome::Overwritten => {
            println!(
                "  {} {} ({} phrases, {})",
                if outcome == WriteOutcome::Written {
                    "Wrote".green()
                } else {
                    "Overwrote".green()
                },
                path.display(),
                result.phrase_count,
                &result.hash[..16]
            );
        }
    }
}
