//! Output paths, overwrite confirmation and file writing.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;
use thiserror::Error;

/// Filesystem failures while writing songs.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("cannot create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read overwrite confirmation")]
    Prompt(#[source] io::Error),
}

/// Path of file `index` (1-based) out of `total`.
///
/// A single file keeps `filename` unchanged. In a batch, the index is inserted
/// before the extension, or appended when there is none:
///
/// ```
/// use djenterator_cli::output::numbered_path;
/// use std::path::Path;
///
/// let dir = Path::new("songs");
/// assert_eq!(numbered_path(dir, "song.txt", 1, 1), dir.join("song.txt"));
/// assert_eq!(numbered_path(dir, "song.txt", 3, 5), dir.join("song3.txt"));
/// assert_eq!(numbered_path(dir, "song", 2, 5), dir.join("song2"));
/// ```
pub fn numbered_path(dir: &Path, filename: &str, index: u32, total: u32) -> PathBuf {
    if total <= 1 {
        return dir.join(filename);
    }

    let name = Path::new(filename);
    let numbered = match (name.file_stem(), name.extension()) {
        (Some(stem), Some(ext)) => format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            index,
            ext.to_string_lossy()
        ),
        _ => format!("{}{}", filename, index),
    };
    dir.join(name.with_file_name(numbered))
}

/// Decides whether an existing file may be replaced.
pub trait ConfirmOverwrite {
    fn confirm(&mut self, path: &Path) -> Result<bool, OutputError>;
}

/// Replace existing files without asking (`--force`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOverwrite;

impl ConfirmOverwrite for AlwaysOverwrite {
    fn confirm(&mut self, _path: &Path) -> Result<bool, OutputError> {
        Ok(true)
    }
}

/// Ask on stderr, read the answer from a line reader (stdin by default).
pub struct Prompt<R> {
    reader: R,
}

impl Prompt<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self {
            reader: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> Prompt<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> ConfirmOverwrite for Prompt<R> {
    fn confirm(&mut self, path: &Path) -> Result<bool, OutputError> {
        let mut stderr = io::stderr();
        write!(
            stderr,
            "{} {}? [y/N] ",
            "Overwrite".yellow().bold(),
            path.display()
        )
        .and_then(|_| stderr.flush())
        .map_err(OutputError::Prompt)?;

        let mut answer = String::new();
        self.reader
            .read_line(&mut answer)
            .map_err(OutputError::Prompt)?;
        Ok(is_yes(&answer))
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// What happened to one output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Overwritten,
    Skipped,
}

impl WriteOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            WriteOutcome::Written => "written",
            WriteOutcome::Overwritten => "overwritten",
            WriteOutcome::Skipped => "skipped",
        }
    }
}

/// Create `dir` (and parents) if missing.
pub fn ensure_dir(dir: &Path) -> Result<(), OutputError> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write song text to `path`, asking `confirm` first if the file exists.
///
/// The file always ends with a single newline.
pub fn write_song(
    path: &Path,
    text: &str,
    confirm: &mut dyn ConfirmOverwrite,
) -> Result<WriteOutcome, OutputError> {
    let existed = path.exists();
    if existed && !confirm.confirm(path)? {
        tracing::debug!(path = %path.display(), "kept existing file");
        return Ok(WriteOutcome::Skipped);
    }

    let mut contents = String::with_capacity(text.len() + 1);
    contents.push_str(text);
    if !contents.ends_with('\n') {
        contents.push('\n');
    }
    fs::write(path, contents).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(if existed {
        WriteOutcome::Overwritten
    } else {
        WriteOutcome::Written
    })
}
