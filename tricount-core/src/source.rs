//! Input selection and opening.

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::debug;
use tricount_types::{CountError, Result, DEFAULT_INPUT_PATH};

use crate::counter::{count_trigrams, TrigramCounts};
use crate::stats::CountStats;

/// Where the counting pass reads from.
///
/// Standard input is never read: the invocation either names a file as
/// its second argument or falls back to [`DEFAULT_INPUT_PATH`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputSource {
    /// `input.txt` in the working directory (no arguments given).
    #[default]
    DefaultFile,
    /// File named by the second argument.
    Path(PathBuf),
    /// A first argument was given without the path that must follow it.
    Missing,
}

impl InputSource {
    /// Resolves the source from the positional arguments.
    ///
    /// `mode` is the first argument. Its value is ignored; only its
    /// presence switches to reading `path`.
    pub fn resolve(mode: Option<&str>, path: Option<PathBuf>) -> Self {
        match (mode, path) {
            (None, _) => InputSource::DefaultFile,
            (Some(_), Some(path)) => InputSource::Path(path),
            (Some(_), None) => InputSource::Missing,
        }
    }

    /// Resolves the source from raw arguments, program name excluded.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let mode = args.next();
        let path = args.next().map(PathBuf::from);
        Self::resolve(mode.as_deref(), path)
    }

    /// Returns the path that will be opened, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            InputSource::DefaultFile => Some(Path::new(DEFAULT_INPUT_PATH)),
            InputSource::Path(path) => Some(path.as_path()),
            InputSource::Missing => None,
        }
    }

    /// Opens the source for buffered line reading.
    ///
    /// # Errors
    ///
    /// Returns [`CountError::FileOpen`] if the file cannot be opened and
    /// [`CountError::MissingPath`] if no path was given.
    pub fn open(&self) -> Result<BufReader<File>> {
        let path = self.path().ok_or(CountError::MissingPath)?;
        debug!(path = %path.display(), "opening input");

        let file = File::open(path).map_err(|source| CountError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(BufReader::with_capacity(64 * 1024, file))
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path() {
            Some(path) => write!(f, "{}", path.display()),
            None => f.write_str("<missing path>"),
        }
    }
}

/// Opens `source` and runs a counting pass over it.
///
/// The file handle is closed before this returns, on success or failure.
pub fn count_source(source: &InputSource, counts: &mut TrigramCounts) -> Result<CountStats> {
    let reader = source.open()?;
    count_trigrams(reader, counts)
}
