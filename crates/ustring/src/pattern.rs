//! Delimited regular-expression patterns and the Unicode-mode guard.
//!
//! Patterns use the delimited form `<delim>body<delim>options` (for example
//! `/ab+c/i` or `#a/b#iu`): the first character is the delimiter, and the
//! option flags follow its **last** occurrence, so delimiter characters may
//! recur inside the body. [`ensure_unicode_mode`] guarantees the `u` flag is
//! present before a pattern reaches the engine; [`Pattern`] parses the form
//! and compiles it to a [`regex::Regex`] with Unicode mode always on.

use regex::{Regex, RegexBuilder};

use crate::error::Error;

/// Appends the Unicode-mode flag `u` to `pattern`'s trailing options when it
/// is absent.
///
/// The trailing options are located after the last occurrence of the
/// pattern's first character. A pattern without a recognizable delimiter is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use ustring::pattern::ensure_unicode_mode;
///
/// assert_eq!(ensure_unicode_mode("/abc/"), "/abc/u");
/// assert_eq!(ensure_unicode_mode("/abc/u"), "/abc/u");
/// assert_eq!(ensure_unicode_mode("#a/b#i"), "#a/b#iu");
/// ```
#[must_use]
pub fn ensure_unicode_mode(pattern: &str) -> String {
    let mut guarded = String::from(pattern);
    let Some(delimiter) = pattern.chars().next() else {
        return guarded;
    };

    let options_start = pattern
        .rfind(delimiter)
        .map_or(pattern.len(), |index| index + delimiter.len_utf8());
    if !pattern[options_start..].contains('u') {
        guarded.push('u');
    }
    guarded
}

/// A parsed delimited pattern: body plus option flags.
///
/// Recognized options are `i` (case-insensitive), `m` (multi-line), `s`
/// (dot matches newline), `x` (ignore whitespace), and `u` (Unicode mode,
/// guaranteed by [`ensure_unicode_mode`] and always enabled at compilation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Pattern {
    body: String,
    case_insensitive: bool,
    multi_line: bool,
    dot_matches_new_line: bool,
    ignore_whitespace: bool,
}

impl Pattern {
    /// Parses a delimited pattern, running the Unicode guard first.
    pub(crate) fn parse(pattern: &str) -> Result<Self, Error> {
        let guarded = ensure_unicode_mode(pattern);

        let delimiter = guarded
            .chars()
            .next()
            .ok_or_else(|| Error::InvalidPattern(String::from("empty pattern")))?;
        let open = delimiter.len_utf8();
        let close = match guarded[open..].rfind(delimiter) {
            Some(index) => open + index,
            None => {
                return Err(Error::InvalidPattern(format!(
                    "missing closing delimiter `{delimiter}`"
                )));
            }
        };

        let mut parsed = Self::from_body(&guarded[open..close]);
        for flag in guarded[close + delimiter.len_utf8()..].chars() {
            match flag {
                'i' => parsed.case_insensitive = true,
                'm' => parsed.multi_line = true,
                's' => parsed.dot_matches_new_line = true,
                'x' => parsed.ignore_whitespace = true,
                'u' => {}
                other => {
                    return Err(Error::InvalidPattern(format!(
                        "unknown option `{other}`"
                    )));
                }
            }
        }
        Ok(parsed)
    }

    /// A bare pattern body with no options, for internally built patterns.
    pub(crate) fn from_body(body: &str) -> Self {
        Self {
            body: String::from(body),
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            ignore_whitespace: false,
        }
    }

    /// Compiles to a [`Regex`] with Unicode mode enabled.
    pub(crate) fn compile(&self) -> Result<Regex, Error> {
        RegexBuilder::new(&self.body)
            .unicode(true)
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace)
            .build()
            .map_err(|error| Error::InvalidPattern(error.to_string()))
    }
}

/// Parses and compiles a delimited pattern in one step.
pub(crate) fn compile(pattern: &str) -> Result<Regex, Error> {
    Pattern::parse(pattern)?.compile()
}
