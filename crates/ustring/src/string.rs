//! The `UnicodeString` facade.
//!
//! A `UnicodeString` owns a byte buffer that is valid UTF-8 at every
//! externally observable point and indexes it by codepoint, never by byte
//! (except where an operation is explicitly byte-level). It layers the core
//! primitives — offset wraparound, direction classification, display width,
//! Unicode-safe patterns — over the buffer, and wires the optional
//! collation/normalization services in.

#![expect(clippy::wrong_self_convention)]

use core::cell::Cell;
use core::cmp::Ordering;

use bstr::ByteSlice;

use crate::bidi::{self, Direction};
use crate::codec;
use crate::error::Error;
use crate::offset;
use crate::options::{Grouping, MatchOptions, Side, SplitFlags};
use crate::pattern::{self, Pattern};
use crate::services::{self, Collate, Normalize};
use crate::width;

/// A UTF-8 string indexed by codepoint, with direction and display-width
/// awareness.
///
/// Mutating operations either fully succeed or leave the buffer in its
/// pre-call state. The cached direction is invalidated on every mutation and
/// lazily recomputed from the first character on the next read.
///
/// A `UnicodeString` is a single-owner value type: cheap to clone, `Send`,
/// and deliberately not `Sync` (the direction cache is a [`Cell`]).
///
/// # Examples
///
/// ```
/// use ustring::UnicodeString;
///
/// let mut s = UnicodeString::from("héllo");
/// assert_eq!(s.count(), 5);
/// assert_eq!(s.byte_len(), 6);
/// assert_eq!(s.get(-1).unwrap(), 'o');
/// s.append(" 中");
/// assert_eq!(s.width(), 8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct UnicodeString {
    buffer: String,
    direction: Cell<Option<Direction>>,
}

/// One capture of a match: its text and, when offset capture is requested,
/// its byte offset in the subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    /// The captured text.
    pub text: String,
    /// Byte offset of the capture in the subject, when requested.
    pub offset: Option<usize>,
}

/// An ordered set of captures.
///
/// For a single match (and for [`Grouping::ByTuple`] rows) index 0 is the
/// whole match and index `g` is capture group `g`; groups that did not
/// participate are `None`. For [`Grouping::ByPattern`] rows, index `m` is
/// group `g` of match `m`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchSet {
    captures: Vec<Option<Capture>>,
}

impl MatchSet {
    fn from_captures(caps: &regex::Captures<'_>, with_offset: bool) -> Self {
        let captures = (0..caps.len())
            .map(|group| {
                caps.get(group).map(|m| Capture {
                    text: String::from(m.as_str()),
                    offset: with_offset.then_some(m.start()),
                })
            })
            .collect();
        Self { captures }
    }

    /// The capture at `index`, if it participated.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Capture> {
        self.captures.get(index).and_then(Option::as_ref)
    }

    /// The text of the capture at `index`, if it participated.
    #[must_use]
    pub fn text(&self, index: usize) -> Option<&str> {
        self.get(index).map(|capture| capture.text.as_str())
    }

    /// Number of capture slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.captures.len()
    }

    /// Whether there are no capture slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }

    /// Iterates over the capture slots.
    pub fn iter(&self) -> impl Iterator<Item = Option<&Capture>> {
        self.captures.iter().map(Option::as_ref)
    }
}

/// One piece of a split: its text and, when [`SplitFlags::WITH_OFFSET`] is
/// set, its byte offset in the subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    /// The piece's text.
    pub text: String,
    /// Byte offset of the piece in the subject, when requested.
    pub offset: Option<usize>,
}

/// What to substitute for each match in [`UnicodeString::replace`].
pub enum Replacement<'a> {
    /// A literal or templated replacement; `$1`-style references expand to
    /// the corresponding capture group.
    Template(&'a str),
    /// A callback invoked with each match's captures.
    With(&'a dyn Fn(&MatchSet) -> String),
}

impl core::fmt::Debug for Replacement<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Self::With(_) => f.debug_tuple("With").field(&"<callback>").finish(),
        }
    }
}

// First UTF-8 boundary strictly after `index`.
fn next_boundary(text: &str, index: usize) -> usize {
    let mut next = index + 1;
    while next < text.len() && !text.is_char_boundary(next) {
        next += 1;
    }
    next
}

impl UnicodeString {
    /// Creates an empty string.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a string from raw bytes, validated as UTF-8 by the crate's
    /// own codec.
    ///
    /// This is the checked construction path; it also runs the one-time
    /// Unicode-capability probe the original environment required.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEncoding`] when `bytes` is not valid UTF-8
    /// and [`Error::UnsupportedPrerequisite`] when the capability probe
    /// fails.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        services::ensure_unicode_support()?;

        let mut position = 0;
        while position < bytes.len() {
            let (_, length) = codec::decode(bytes, position)?;
            position += length;
        }

        // The codec just validated the whole buffer.
        let text = core::str::from_utf8(bytes).map_err(|error| Error::InvalidEncoding {
            position: error.valid_up_to(),
        })?;
        Ok(Self::from(text))
    }

    /// Creates a string from raw bytes, replacing invalid sequences with
    /// U+FFFD.
    #[must_use]
    pub fn from_bytes_lossy(bytes: &[u8]) -> Self {
        Self::from(bytes.to_str_lossy().into_owned())
    }

    /// View of the underlying buffer.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consumes the string, returning the underlying buffer.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buffer
    }

    /// Iterates over the string's codepoints.
    pub fn chars(&self) -> core::str::Chars<'_> {
        self.buffer.chars()
    }

    /// Number of codepoints.
    #[must_use]
    pub fn count(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Whether the string has no codepoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of bytes (not codepoints).
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.buffer.len()
    }

    /// Byte (not codepoint) at `offset`, with the usual wraparound
    /// semantics applied against the byte length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyString`] when the string is empty.
    pub fn byte_at(&self, offset: isize) -> Result<u8, Error> {
        let index = offset::resolve(offset, self.buffer.len())?;
        self.buffer
            .as_bytes()
            .get(index)
            .copied()
            .ok_or(Error::EmptyString)
    }

    /// Display width in monospace columns.
    #[must_use]
    pub fn width(&self) -> usize {
        width::string_width(&self.buffer)
    }

    /// Binary rendering of the underlying bytes, an inspection aid.
    #[must_use]
    pub fn to_binary(&self) -> String {
        codec::to_binary(self.buffer.as_bytes())
    }

    /// Direction of the string, from its first character.
    ///
    /// Lazily computed and cached; every mutation invalidates the cache.
    /// The direction of an empty string is left-to-right.
    #[must_use]
    pub fn direction(&self) -> Direction {
        if let Some(direction) = self.direction.get() {
            return direction;
        }
        let direction = bidi::string_direction(&self.buffer);
        self.direction.set(Some(direction));
        direction
    }

    fn invalidate_direction(&mut self) {
        self.direction.set(None);
    }

    /// Adds `substring` at the logical end of the string.
    ///
    /// On a right-to-left string the logical end is the front of the
    /// buffer, mirroring the original implementation.
    pub fn append(&mut self, substring: &str) -> &mut Self {
        match self.direction() {
            Direction::LeftToRight => self.buffer.push_str(substring),
            Direction::RightToLeft => self.buffer.insert_str(0, substring),
        }
        self.invalidate_direction();
        self
    }

    /// Adds `substring` at the logical start of the string.
    pub fn prepend(&mut self, substring: &str) -> &mut Self {
        match self.direction() {
            Direction::LeftToRight => self.buffer.insert_str(0, substring),
            Direction::RightToLeft => self.buffer.push_str(substring),
        }
        self.invalidate_direction();
        self
    }

    /// Pads the string to `length` codepoints by repeating `piece`,
    /// truncated to exactly fill the deficit, on the given `side`.
    ///
    /// A no-op when the string already has `length` codepoints or more, or
    /// when `piece` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ustring::{Side, UnicodeString};
    ///
    /// let mut s = UnicodeString::from("x");
    /// s.pad(5, "ab", Side::END);
    /// assert_eq!(s.as_str(), "xabab");
    ///
    /// let mut s = UnicodeString::from("x");
    /// s.pad(4, "ab", Side::END);
    /// assert_eq!(s.as_str(), "xaba");
    /// ```
    pub fn pad(&mut self, length: usize, piece: &str, side: Side) -> &mut Self {
        let current = self.count();
        if length <= current || piece.is_empty() {
            return self;
        }

        let deficit = length - current;
        let filler: String = piece.chars().cycle().take(deficit).collect();
        if side.contains(Side::END) {
            self.append(&filler)
        } else {
            self.prepend(&filler)
        }
    }

    /// Compares with `other`, delegating to the installed collation service
    /// when present and falling back to byte-wise comparison otherwise.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match services::registry().collator() {
            Some(collator) => collator.compare(self.as_str(), other.as_str()),
            None => self.buffer.as_bytes().cmp(other.buffer.as_bytes()),
        }
    }

    /// Compares with `other` under an explicit collation service.
    #[must_use]
    pub fn compare_with(&self, other: &Self, collator: &dyn Collate) -> Ordering {
        collator.compare(self.as_str(), other.as_str())
    }

    // Byte offset of the codepoint at `codepoint_offset`, by re-encoding
    // the preceding codepoints and measuring their length.
    fn byte_offset_of(&self, codepoint_offset: usize) -> usize {
        self.buffer
            .chars()
            .take(codepoint_offset)
            .map(codec::encoded_len)
            .sum()
    }

    /// First match of `pattern` at or after `options.offset` (a codepoint
    /// offset).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] when `pattern` does not parse or
    /// compile.
    ///
    /// # Examples
    ///
    /// ```
    /// use ustring::{MatchOptions, UnicodeString};
    ///
    /// let s = UnicodeString::from("héllo wörld");
    /// let m = s
    ///     .matches(r"/(\w+) (\w+)/", &MatchOptions::default())
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(m.text(0), Some("héllo wörld"));
    /// assert_eq!(m.text(2), Some("wörld"));
    /// ```
    pub fn matches(
        &self,
        pattern: &str,
        options: &MatchOptions,
    ) -> Result<Option<MatchSet>, Error> {
        let re = pattern::compile(pattern)?;
        let start = self.byte_offset_of(options.offset);
        Ok(re
            .captures_at(&self.buffer, start)
            .map(|caps| MatchSet::from_captures(&caps, options.with_offset)))
    }

    /// Every match of `pattern`, shaped per `options.grouping`.
    ///
    /// With [`Grouping::ByTuple`], element `m` holds the captures of match
    /// `m`; with [`Grouping::ByPattern`], element `g` holds capture group
    /// `g` across all matches.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] when `pattern` does not parse or
    /// compile.
    pub fn match_all(
        &self,
        pattern: &str,
        options: &MatchOptions,
    ) -> Result<Vec<MatchSet>, Error> {
        let re = pattern::compile(pattern)?;
        let text = self.buffer.as_str();

        let mut tuples = Vec::new();
        let mut at = self.byte_offset_of(options.offset);
        while at <= text.len() {
            let Some(caps) = re.captures_at(text, at) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };
            tuples.push(MatchSet::from_captures(&caps, options.with_offset));
            at = if whole.end() > whole.start() {
                whole.end()
            } else {
                next_boundary(text, whole.end())
            };
        }

        match options.grouping {
            Grouping::ByTuple => Ok(tuples),
            Grouping::ByPattern => {
                let mut by_pattern: Vec<MatchSet> =
                    (0..re.captures_len()).map(|_| MatchSet::default()).collect();
                for tuple in tuples {
                    for (group, capture) in tuple.captures.into_iter().enumerate() {
                        by_pattern[group].captures.push(capture);
                    }
                }
                Ok(by_pattern)
            }
        }
    }

    /// Replaces up to `limit` matches of `pattern` (0 for unbounded), in
    /// place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] when `pattern` does not parse or
    /// compile; the buffer is unchanged on error.
    pub fn replace(
        &mut self,
        pattern: &str,
        replacement: &Replacement<'_>,
        limit: usize,
    ) -> Result<&mut Self, Error> {
        let re = pattern::compile(pattern)?;
        let replaced = match replacement {
            Replacement::Template(template) => {
                re.replacen(&self.buffer, limit, *template).into_owned()
            }
            Replacement::With(callback) => re
                .replacen(&self.buffer, limit, |caps: &regex::Captures<'_>| {
                    callback(&MatchSet::from_captures(caps, false))
                })
                .into_owned(),
        };
        self.buffer = replaced;
        self.invalidate_direction();
        Ok(self)
    }

    /// Splits on `pattern` into at most `limit` pieces (0 for unbounded),
    /// the last piece carrying the remainder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] when `pattern` does not parse or
    /// compile.
    ///
    /// # Examples
    ///
    /// ```
    /// use ustring::{SplitFlags, UnicodeString};
    ///
    /// let s = UnicodeString::from("a, b,, c");
    /// let pieces = s.split("/,\\s*/", 0, SplitFlags::WITHOUT_EMPTY).unwrap();
    /// let texts: Vec<&str> = pieces.iter().map(|p| p.text.as_str()).collect();
    /// assert_eq!(texts, ["a", "b", "c"]);
    /// ```
    pub fn split(
        &self,
        pattern: &str,
        limit: usize,
        flags: SplitFlags,
    ) -> Result<Vec<Piece>, Error> {
        fn push(pieces: &mut Vec<Piece>, flags: SplitFlags, text: &str, offset: usize) {
            if flags.contains(SplitFlags::WITHOUT_EMPTY) && text.is_empty() {
                return;
            }
            pieces.push(Piece {
                text: String::from(text),
                offset: flags.contains(SplitFlags::WITH_OFFSET).then_some(offset),
            });
        }

        let re = pattern::compile(pattern)?;
        let text = self.buffer.as_str();

        let mut pieces = Vec::new();
        let mut produced = 0usize;
        let mut last = 0usize;
        let mut at = 0usize;
        while at <= text.len() {
            if limit > 0 && produced + 1 >= limit {
                break;
            }
            let Some(caps) = re.captures_at(text, at) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };

            push(&mut pieces, flags, &text[last..whole.start()], last);
            produced += 1;
            if flags.contains(SplitFlags::WITH_DELIMITERS) {
                for group in 1..caps.len() {
                    if let Some(m) = caps.get(group) {
                        push(&mut pieces, flags, m.as_str(), m.start());
                    }
                }
            }

            last = whole.end();
            at = if whole.end() > whole.start() {
                whole.end()
            } else {
                next_boundary(text, whole.end())
            };
        }
        push(&mut pieces, flags, &text[last..], last);
        Ok(pieces)
    }

    /// Codepoint at `offset` (negative and unbounded offsets wrap around).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyString`] when the string is empty.
    pub fn get(&self, offset: isize) -> Result<char, Error> {
        let index = offset::resolve(offset, self.count())?;
        self.buffer.chars().nth(index).ok_or(Error::EmptyString)
    }

    /// Replaces the codepoint at `offset` with `value` (any number of
    /// codepoints, including none).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyString`] when the string is empty; the buffer
    /// is unchanged on error.
    pub fn set(&mut self, offset: isize, value: &str) -> Result<&mut Self, Error> {
        let index = offset::resolve(offset, self.count())?;
        let Some((start, ch)) = self.buffer.char_indices().nth(index) else {
            return Err(Error::EmptyString);
        };
        self.buffer
            .replace_range(start..start + ch.len_utf8(), value);
        self.invalidate_direction();
        Ok(self)
    }

    /// Deletes the codepoint at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyString`] when the string is empty.
    pub fn delete(&mut self, offset: isize) -> Result<&mut Self, Error> {
        self.set(offset, "")
    }

    /// Reduces the string to at most `length` codepoints starting at the
    /// resolved `start` offset; `None` keeps everything to the end. A no-op
    /// on an empty string.
    ///
    /// # Errors
    ///
    /// Infallible in practice; the signature matches the other mutators.
    pub fn reduce(&mut self, start: isize, length: Option<usize>) -> Result<&mut Self, Error> {
        if self.buffer.is_empty() {
            return Ok(self);
        }
        let index = offset::resolve(start, self.count())?;
        let reduced: String = match length {
            Some(length) => self.buffer.chars().skip(index).take(length).collect(),
            None => self.buffer.chars().skip(index).collect(),
        };
        self.buffer = reduced;
        self.invalidate_direction();
        Ok(self)
    }

    /// Lowercases the string in place, with full Unicode case folding.
    pub fn to_lowercase(&mut self) -> &mut Self {
        self.buffer = self.buffer.to_lowercase();
        self.invalidate_direction();
        self
    }

    /// Uppercases the string in place, with full Unicode case folding.
    pub fn to_uppercase(&mut self) -> &mut Self {
        self.buffer = self.buffer.to_uppercase();
        self.invalidate_direction();
        self
    }

    /// Strips runs of `char_class` (a regex fragment, `\s` for whitespace)
    /// from the given side(s).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] when `char_class` is not a valid
    /// regex fragment.
    pub fn trim(&mut self, char_class: &str, side: Side) -> Result<&mut Self, Error> {
        let class = format!("(?:{char_class})+");
        let mut alternatives = Vec::new();
        if side.contains(Side::BEGINNING) {
            alternatives.push(format!("^{class}"));
        }
        if side.contains(Side::END) {
            alternatives.push(format!("{class}$"));
        }
        if alternatives.is_empty() {
            return Ok(self);
        }

        let re = Pattern::from_body(&alternatives.join("|")).compile()?;
        self.buffer = re.replace_all(&self.buffer, "").into_owned();
        self.invalidate_direction();
        Ok(self)
    }

    /// Strips whitespace from both sides.
    ///
    /// # Errors
    ///
    /// Infallible in practice; the signature matches [`Self::trim`].
    pub fn trim_whitespace(&mut self) -> Result<&mut Self, Error> {
        self.trim(r"\s", Side::all())
    }

    /// Transliterates the string to ASCII in place, using the installed
    /// normalization service.
    ///
    /// A buffer that is already pure ASCII is left untouched. With a
    /// normalization service the string is compatibility-decomposed, its
    /// combining marks stripped, and the remainder transliterated. Without
    /// one, `best_effort == true` transliterates directly and strips the
    /// quote/accent artifacts naive transliteration leaves behind — an
    /// approximate transformation, not a guaranteed one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NormalizationUnavailable`] when no service is
    /// installed and `best_effort` is `false`; the buffer is unchanged on
    /// error.
    pub fn to_ascii(&mut self, best_effort: bool) -> Result<&mut Self, Error> {
        self.to_ascii_with(best_effort, services::registry().normalizer())
    }

    /// Like [`Self::to_ascii`], with an explicit (possibly absent)
    /// normalization service.
    ///
    /// # Errors
    ///
    /// As for [`Self::to_ascii`].
    pub fn to_ascii_with(
        &mut self,
        best_effort: bool,
        normalizer: Option<&dyn Normalize>,
    ) -> Result<&mut Self, Error> {
        if self.buffer.is_ascii() {
            return Ok(self);
        }

        let replaced = match normalizer {
            Some(normalizer) => {
                let decomposed = normalizer.decompose_compat(&self.buffer);
                let stripped = Pattern::from_body(r"\p{Mn}+")
                    .compile()?
                    .replace_all(&decomposed, "")
                    .into_owned();
                normalizer.transliterate(&stripped)
            }
            None if !best_effort => return Err(Error::NormalizationUnavailable),
            None => {
                let transliterated: String =
                    self.buffer.chars().filter(char::is_ascii).collect();
                Pattern::from_body(r#"['"`^](\w)"#)
                    .compile()?
                    .replace_all(&transliterated, "$1")
                    .into_owned()
            }
        };

        self.buffer = replaced;
        self.invalidate_direction();
        Ok(self)
    }
}

impl From<&str> for UnicodeString {
    fn from(value: &str) -> Self {
        Self {
            buffer: String::from(value),
            direction: Cell::new(None),
        }
    }
}

impl From<String> for UnicodeString {
    fn from(value: String) -> Self {
        Self {
            buffer: value,
            direction: Cell::new(None),
        }
    }
}

impl core::str::FromStr for UnicodeString {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl AsRef<str> for UnicodeString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl core::fmt::Display for UnicodeString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.buffer.fmt(f)
    }
}

// Equality and ordering are over the buffer only; the direction cache is
// derived state.
impl PartialEq for UnicodeString {
    fn eq(&self, other: &Self) -> bool {
        self.buffer == other.buffer
    }
}

impl Eq for UnicodeString {}

impl PartialEq<&str> for UnicodeString {
    fn eq(&self, other: &&str) -> bool {
        self.buffer == *other
    }
}

impl core::hash::Hash for UnicodeString {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.buffer.hash(state);
    }
}

impl PartialOrd for UnicodeString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UnicodeString {
    /// Byte order; locale-aware comparison goes through [`Self::compare`].
    fn cmp(&self, other: &Self) -> Ordering {
        self.buffer.cmp(&other.buffer)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UnicodeString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UnicodeString {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}
