//! Djenterator CLI - Command-line interface for generating djent guitar tabs
//!
//! Writes one or more procedurally generated songs as plain-text tablature.

use clap::Parser;
use djenterator_spec::{Pitch, TuningFamily, DEFAULT_STRINGS};
use std::path::PathBuf;
use std::process::ExitCode;

// Use modules from the library crate
use djenterator_cli::commands::generate::{
    self, GenerateOptions, DEFAULT_DIRNAME, DEFAULT_FILENAME,
};
use djenterator_cli::logging;

/// Djenterator - Procedural djent tab generator
#[derive(Parser, Debug)]
#[command(name = "djenterator")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of songs to generate
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    numfiles: u32,

    /// Output file name (numbered when generating several songs)
    #[arg(short, long, default_value = DEFAULT_FILENAME)]
    filename: String,

    /// Output directory
    #[arg(short, long, default_value = DEFAULT_DIRNAME)]
    dirname: PathBuf,

    /// Minimum number of phrases per song (default: random in 80..=120)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    minphrases: Option<u32>,

    /// Maximum number of phrases per song (default: unbounded)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    maxphrases: Option<u32>,

    /// Overwrite existing files without asking
    #[arg(short = 'F', long)]
    force: bool,

    /// Base seed; each file's seed is derived from it
    #[arg(long)]
    seed: Option<u32>,

    /// Tuning family (standard or drop)
    #[arg(long, default_value = "drop")]
    tuning: TuningFamily,

    /// Pitch of the thickest string (e.g. a, c#, f#)
    #[arg(long, default_value = "a")]
    base_note: Pitch,

    /// Number of strings (at least 4)
    #[arg(long, default_value_t = DEFAULT_STRINGS)]
    strings: usize,

    /// JSON file overriding generator rates and phrase length
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output a machine-readable JSON summary (no colored output)
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_options(self) -> GenerateOptions {
        GenerateOptions {
            numfiles: self.numfiles,
            filename: self.filename,
            dirname: self.dirname,
            min_phrases: self.minphrases,
            max_phrases: self.maxphrases,
            force: self.force,
            seed: self.seed,
            family: self.tuning,
            base_pitch: self.base_note,
            strings: self.strings,
            config: self.config,
            json: self.json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = generate::run(&cli.into_options());

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["djenterator"]).unwrap();
        assert!(!cli.verbose);
        assert_eq!(cli.into_options(), GenerateOptions::default());
    }

    #[test]
    fn test_cli_parses_short_flags() {
        let cli = Cli::try_parse_from([
            "djenterator",
            "-n",
            "5",
            "-f",
            "riff.tab",
            "-d",
            "out",
            "-F",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        let options = cli.into_options();
        assert_eq!(options.numfiles, 5);
        assert_eq!(options.filename, "riff.tab");
        assert_eq!(options.dirname, PathBuf::from("out"));
        assert!(options.force);
    }

    #[test]
    fn test_cli_parses_tuning_options() {
        let cli = Cli::try_parse_from([
            "djenterator",
            "--tuning",
            "standard",
            "--base-note",
            "C#",
            "--strings",
            "7",
            "--seed",
            "99",
        ])
        .unwrap();
        let options = cli.into_options();
        assert_eq!(options.family, TuningFamily::Standard);
        assert_eq!(options.base_pitch, Pitch::CSharp);
        assert_eq!(options.strings, 7);
        assert_eq!(options.seed, Some(99));
    }

    #[test]
    fn test_cli_parses_phrase_bounds() {
        let cli = Cli::try_parse_from([
            "djenterator",
            "--minphrases",
            "3",
            "--maxphrases",
            "8",
        ])
        .unwrap();
        let options = cli.into_options();
        assert_eq!(options.min_phrases, Some(3));
        assert_eq!(options.max_phrases, Some(8));
    }

    #[test]
    fn test_cli_rejects_zero_counts() {
        assert!(Cli::try_parse_from(["djenterator", "-n", "0"]).is_err());
        assert!(Cli::try_parse_from(["djenterator", "--minphrases", "0"]).is_err());
        assert!(Cli::try_parse_from(["djenterator", "--maxphrases", "0"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_pitch_and_family() {
        let err = Cli::try_parse_from(["djenterator", "--base-note", "h"]).unwrap_err();
        assert!(err.to_string().contains("unknown pitch"));

        let err = Cli::try_parse_from(["djenterator", "--tuning", "open"]).unwrap_err();
        assert!(err.to_string().contains("unknown tuning family"));
    }

    #[test]
    fn test_cli_rejects_malformed_number() {
        assert!(Cli::try_parse_from(["djenterator", "-n", "lots"]).is_err());
        assert!(Cli::try_parse_from(["djenterator", "--seed", "-1"]).is_err());
    }
}
