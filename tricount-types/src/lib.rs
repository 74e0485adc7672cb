//! Core types and errors for the tricount trigram counter.
//!
//! This crate holds the types shared between the counting core and the
//! command-line front end. Keeping them separate ensures:
//!
//! - **Cross-crate compatibility**: Core and CLI share the same types
//! - **Clean boundaries**: No circular dependencies between crates
//! - **Stable messages**: Error prefixes are defined in exactly one place

#![warn(missing_docs)]

use core::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Number of words in one trigram.
pub const WORDS_PER_TRIGRAM: usize = 3;

/// Upper bound on the number of sequences reported.
pub const MAX_SEQUENCES: usize = 100;

/// Input read when no arguments are given.
pub const DEFAULT_INPUT_PATH: &str = "input.txt";

/// Log prefix for failures opening the input.
pub const ERR_FILE_OPENING: &str = "Error occurred while opening the file";

/// Log prefix for failures reading the input.
pub const ERR_FILE_SCANNING: &str = "Error occurred while scanning the file";

/// Log prefix for failures building the scrubbing pattern.
pub const ERR_PARSING_REGEXP: &str = "Error occurred while parsing the regular expression";

/// Occurrence count of a trigram.
pub type Count = u64;

/// A trigram together with the number of times it occurred.
///
/// Equality compares both fields. Ordering for reporting is by `count`
/// only and lives in the selector; entries with equal counts have no
/// defined relative order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SequenceCount {
    /// Three lowercase words joined by single spaces.
    pub sequence: String,
    /// Number of occurrences in the input.
    pub count: Count,
}

impl SequenceCount {
    /// Creates a new entry.
    #[inline]
    pub fn new(sequence: impl Into<String>, count: Count) -> Self {
        Self {
            sequence: sequence.into(),
            count,
        }
    }
}

impl From<(String, Count)> for SequenceCount {
    #[inline]
    fn from((sequence, count): (String, Count)) -> Self {
        Self { sequence, count }
    }
}

/// Formats as one report line: `<sequence> <count>`.
impl fmt::Display for SequenceCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.sequence, self.count)
    }
}

/// Failure category of a [`CountError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input could not be opened.
    FileOpen,
    /// Reading the input failed partway.
    Scan,
    /// The scrubbing pattern could not be built.
    PatternCompile,
}

impl ErrorCategory {
    /// Fixed message prefix for this category.
    #[inline]
    pub const fn prefix(self) -> &'static str {
        match self {
            ErrorCategory::FileOpen => ERR_FILE_OPENING,
            ErrorCategory::Scan => ERR_FILE_SCANNING,
            ErrorCategory::PatternCompile => ERR_PARSING_REGEXP,
        }
    }
}

/// Errors that abort a counting pass.
///
/// Every variant is terminal for the pass: no retries are attempted and
/// the caller decides what to do with the (empty) result.
#[derive(Debug, Error)]
pub enum CountError {
    /// The input path could not be opened.
    #[error("{}: {}: {}", ErrorCategory::FileOpen.prefix(), .path.display(), .source)]
    FileOpen {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// A mode argument was given without the input path that must follow it.
    #[error(
        "{}: no input path given after the mode argument",
        ErrorCategory::FileOpen.prefix()
    )]
    MissingPath,

    /// Reading failed mid-stream (I/O fault or invalid UTF-8).
    #[error("{}: {}", ErrorCategory::Scan.prefix(), .0)]
    Scan(#[from] io::Error),

    /// The scrubbing pattern failed to build.
    #[error("{}: {}", ErrorCategory::PatternCompile.prefix(), .0)]
    PatternCompile(String),
}

impl CountError {
    /// Returns the failure category.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            CountError::FileOpen { .. } | CountError::MissingPath => ErrorCategory::FileOpen,
            CountError::Scan(_) => ErrorCategory::Scan,
            CountError::PatternCompile(_) => ErrorCategory::PatternCompile,
        }
    }
}

/// Result alias for counting operations.
pub type Result<T> = core::result::Result<T, CountError>;

/// Report configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Maximum number of sequences emitted.
    /// Default: 100
    pub max_sequences: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_sequences: MAX_SEQUENCES,
        }
    }
}

impl ReportConfig {
    /// Creates a configuration emitting at most `max_sequences` entries.
    pub const fn with_limit(max_sequences: usize) -> Self {
        Self { max_sequences }
    }

    /// Creates a configuration that emits every entry.
    pub const fn unbounded() -> Self {
        Self {
            max_sequences: usize::MAX,
        }
    }
}
