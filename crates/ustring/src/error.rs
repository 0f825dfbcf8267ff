use thiserror::Error;

/// Errors surfaced by the string type and its supporting modules.
///
/// The designed fallbacks — byte-wise comparison when no collator is
/// installed, best-effort transliteration when requested — are not errors;
/// everything else is reported through this enum.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input is not valid UTF-8 at the given byte offset.
    ///
    /// Reported for unrecognized leading bytes, malformed or missing
    /// continuation bytes, overlong encodings, surrogate codepoints, and
    /// codepoints beyond U+10FFFF.
    #[error("invalid UTF-8 sequence at byte offset {position}")]
    InvalidEncoding {
        /// Byte offset of the offending byte in the decoded buffer.
        position: usize,
    },

    /// The value is not a Unicode scalar and cannot be encoded as UTF-8.
    #[error("invalid codepoint U+{0:04X}")]
    InvalidCodepoint(u32),

    /// An offset was resolved against a string with no codepoints.
    #[error("cannot resolve an offset against an empty string")]
    EmptyString,

    /// A delimited pattern could not be parsed or compiled.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// Strict ASCII transliteration was requested but no normalization
    /// service is installed.
    #[error(
        "ASCII transliteration needs a normalization service; none is \
         installed (pass best_effort = true to force a try)"
    )]
    NormalizationUnavailable,

    /// The host environment lacks a capability this crate requires.
    #[error("unsupported prerequisite: {0}")]
    UnsupportedPrerequisite(&'static str),
}
