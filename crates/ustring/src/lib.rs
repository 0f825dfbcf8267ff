//! A UTF-8, codepoint-indexed string type.
//!
//! [`UnicodeString`] treats its byte buffer as a sequence of codepoints and
//! layers on it: codepoint-level random access with negative/wraparound
//! offsets, first-strong bidirectional-text classification, monospace
//! display-width calculation, and Unicode-safe regular-expression matching,
//! splitting, and replacement.
//!
//! The supporting modules are usable on their own: [`codec`] for UTF-8
//! conversion, [`bidi`] for direction classification, [`width`] for column
//! widths, [`offset`] for wraparound index arithmetic, and [`pattern`] for
//! the Unicode-mode pattern guard. Locale collation and NFKD normalization
//! are optional capabilities injected through [`services`].
//!
//! ```rust
//! use ustring::{Direction, UnicodeString};
//!
//! let s = UnicodeString::from("שלום");
//! assert_eq!(s.direction(), Direction::RightToLeft);
//! assert_eq!(s.count(), 4);
//!
//! let s = UnicodeString::from("中文 text");
//! assert_eq!(s.width(), 9);
//! assert_eq!(s.get(-1).unwrap(), 't');
//! ```

pub mod bidi;
pub mod codec;
mod error;
pub mod offset;
mod options;
pub mod pattern;
mod range_table;
pub mod services;
mod string;
pub mod width;

#[cfg(test)]
mod tests;

pub use bidi::Direction;
pub use error::Error;
pub use options::{Grouping, MatchOptions, Side, SplitFlags};
#[cfg(feature = "normalization")]
pub use services::NfkdNormalizer;
pub use services::{Collate, Normalize, ServiceRegistry};
pub use string::{Capture, MatchSet, Piece, Replacement, UnicodeString};
