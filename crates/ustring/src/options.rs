//! Flag sets and option structs for the string operations.

use bitflags::bitflags;

bitflags! {
    /// Which end (or ends) of the string an operation applies to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Side: u8 {
        /// The beginning of the string.
        const BEGINNING = 1;
        /// The end of the string.
        const END = 2;
    }
}

impl Default for Side {
    /// Operations default to the end of the string.
    fn default() -> Self {
        Self::END
    }
}

bitflags! {
    /// Behavior flags for [`UnicodeString::split`].
    ///
    /// [`UnicodeString::split`]: crate::UnicodeString::split
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SplitFlags: u8 {
        /// Only non-empty pieces are returned.
        const WITHOUT_EMPTY = 1;
        /// Parenthesized expressions captured by the delimiter pattern are
        /// returned as pieces too.
        const WITH_DELIMITERS = 2;
        /// Each piece carries its byte offset in the subject.
        const WITH_OFFSET = 4;
    }
}

/// How [`UnicodeString::match_all`] groups its results.
///
/// [`UnicodeString::match_all`]: crate::UnicodeString::match_all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grouping {
    /// Outer index is the capture group: element `g` lists group `g` of
    /// every match.
    #[default]
    ByPattern,
    /// Outer index is the match: element `m` lists every capture group of
    /// match `m`.
    ByTuple,
}

/// Options for [`UnicodeString::matches`] and [`UnicodeString::match_all`].
///
/// # Default
///
/// Search from the start, group by pattern, no offset capture.
///
/// [`UnicodeString::matches`]: crate::UnicodeString::matches
/// [`UnicodeString::match_all`]: crate::UnicodeString::match_all
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchOptions {
    /// Result grouping for [`UnicodeString::match_all`].
    ///
    /// [`UnicodeString::match_all`]: crate::UnicodeString::match_all
    pub grouping: Grouping,

    /// Whether captures carry their byte offset in the subject.
    pub with_offset: bool,

    /// Alternate place from which to start the search, as a **codepoint**
    /// offset; it is translated to a byte offset before the engine runs.
    pub offset: usize,
}
