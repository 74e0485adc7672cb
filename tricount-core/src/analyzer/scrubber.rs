use regex::Regex;
use tricount_types::{CountError, Result};

/// Pattern matching one run of non-word characters.
///
/// A run is any mix of two-character escape literals (`\n`, `\r`, `\t`
/// written as text) and characters outside `[a-z]`. Whitespace is outside
/// `[a-z]`, so separators fold into the same run and each run collapses to
/// a single space.
pub const SCRUB_PATTERN: &str = r"(?:\\[nrt]|[^a-z])+";

/// Line scrubber: lowercases a line and reduces it to words separated by
/// single spaces.
///
/// Performs the following operations:
/// - Converts all characters to lowercase (Unicode simple case mapping,
///   ASCII fast path)
/// - Replaces each run of escape literals, punctuation, digits, non-ASCII
///   letters and whitespace with one space
/// - Drops the leading and trailing separator
///
/// The output satisfies the [`Tokenizer`](super::Tokenizer) input contract:
/// ASCII lowercase letters, no leading/trailing space, no consecutive spaces.
///
/// # Examples
///
/// ```
/// use tricount_core::analyzer::LineScrubber;
///
/// let mut scrubber = LineScrubber::new().unwrap();
/// assert_eq!(scrubber.scrub("This is a TEST."), "this is a test");
/// ```
#[derive(Debug, Clone)]
pub struct LineScrubber {
    pattern: Regex,
    lowered: String,
}

impl LineScrubber {
    /// Builds a scrubber around [`SCRUB_PATTERN`].
    ///
    /// # Errors
    ///
    /// Returns [`CountError::PatternCompile`] if the pattern fails to build.
    pub fn new() -> Result<Self> {
        Self::with_pattern(SCRUB_PATTERN)
    }

    /// Builds a scrubber around a custom separator pattern.
    ///
    /// Every match of `pattern` in the lowercased line is replaced by a
    /// single space.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let pattern =
            Regex::new(pattern).map_err(|err| CountError::PatternCompile(err.to_string()))?;

        Ok(Self {
            pattern,
            lowered: String::with_capacity(256),
        })
    }

    /// Returns the source text of the separator pattern.
    #[inline]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Scrubs `line` into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    pub fn scrub_into(&mut self, line: &str, out: &mut String) {
        out.clear();
        lowercase_into(line, &mut self.lowered);

        let lowered = self.lowered.as_str();
        let mut last = 0usize;

        for m in self.pattern.find_iter(lowered) {
            out.push_str(&lowered[last..m.start()]);
            if !out.is_empty() && m.end() < lowered.len() {
                out.push(' ');
            }
            last = m.end();
        }

        out.push_str(&lowered[last..]);
    }

    /// Scrubs `line` and returns a new String.
    #[inline]
    pub fn scrub(&mut self, line: &str) -> String {
        let mut out = String::with_capacity(line.len());
        self.scrub_into(line, &mut out);
        out
    }
}

#[inline]
fn lowercase_into(input: &str, out: &mut String) {
    out.clear();
    out.reserve(input.len());

    if input.is_ascii() {
        out.push_str(input);
        out.make_ascii_lowercase();
        return;
    }

    for ch in input.chars() {
        if ch.is_ascii() {
            out.push(ch.to_ascii_lowercase());
        } else {
            // Simple case mapping: one char in, one char out.
            out.push(ch.to_lowercase().next().unwrap_or(ch));
        }
    }
}
