//! Signed, unbounded offset resolution against a codepoint count.
//!
//! Offsets behave like Python indices with modular wraparound on top:
//! negative values count from the end, values at or past the length wrap
//! around. Resolution is idempotent — an already-resolved offset resolves to
//! itself.

use crate::error::Error;

/// Resolves `offset` against a string of `length` codepoints into an
/// in-range index.
///
/// # Errors
///
/// Returns [`Error::EmptyString`] when `length` is zero; callers must guard
/// before resolving.
///
/// # Examples
///
/// ```
/// use ustring::offset::resolve;
///
/// assert_eq!(resolve(-1, 5).unwrap(), 4);
/// assert_eq!(resolve(5, 5).unwrap(), 0);
/// assert_eq!(resolve(7, 5).unwrap(), 2);
/// assert_eq!(resolve(3, 5).unwrap(), 3);
/// ```
pub fn resolve(offset: isize, length: usize) -> Result<usize, Error> {
    if length == 0 {
        return Err(Error::EmptyString);
    }

    if offset < 0 {
        let remainder = offset.unsigned_abs() % length;
        if remainder == 0 {
            Ok(0)
        } else {
            Ok(length - remainder)
        }
    } else {
        let offset = offset.unsigned_abs();
        if offset >= length {
            Ok(offset % length)
        } else {
            Ok(offset)
        }
    }
}
