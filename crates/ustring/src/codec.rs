//! UTF-8 ⇄ codepoint conversion.
//!
//! The decoder works byte by byte with the standard leading-byte masks
//! (`0xxxxxxx` → 1, `110xxxxx` → 2, `1110xxxx` → 3, `11110xxx` → 4); each
//! continuation byte contributes six bits to the accumulator. The encoder is
//! the inverse bit-packing. Both reject surrogates, values beyond U+10FFFF,
//! and (on the decode side) overlong encodings, so that
//! `decode(encode(c)) == c` holds for every Unicode scalar value.

use crate::error::Error;

/// Highest valid Unicode scalar value.
pub const MAX_CODEPOINT: u32 = 0x10_FFFF;

const SURROGATES: core::ops::RangeInclusive<u32> = 0xD800..=0xDFFF;

/// Decodes the codepoint starting at `position` in `bytes`.
///
/// Returns the codepoint and the number of bytes it occupies (1–4).
///
/// # Errors
///
/// Returns [`Error::InvalidEncoding`] when `position` is out of bounds, the
/// leading byte matches no recognized pattern, the buffer is truncated before
/// a continuation byte, a continuation byte is malformed, or the decoded
/// value is overlong, a surrogate, or beyond U+10FFFF.
pub fn decode(bytes: &[u8], position: usize) -> Result<(u32, usize), Error> {
    let invalid = |position| Error::InvalidEncoding { position };

    let lead = *bytes.get(position).ok_or(invalid(position))?;
    let (length, mut acc) = match lead {
        0x00..=0x7F => return Ok((u32::from(lead), 1)),
        0xC0..=0xDF => (2, u32::from(lead & 0x1F)),
        0xE0..=0xEF => (3, u32::from(lead & 0x0F)),
        0xF0..=0xF7 => (4, u32::from(lead & 0x07)),
        // Stray continuation bytes (0x80..=0xBF) and 0xF8..=0xFF.
        _ => return Err(invalid(position)),
    };

    for index in 1..length {
        let byte = *bytes.get(position + index).ok_or(invalid(position + index))?;
        if byte & 0xC0 != 0x80 {
            return Err(invalid(position + index));
        }
        acc = (acc << 6) | u32::from(byte & !0x80);
    }

    let minimal = match length {
        2 => 0x80,
        3 => 0x800,
        _ => 0x1_0000,
    };
    if acc < minimal || acc > MAX_CODEPOINT || SURROGATES.contains(&acc) {
        return Err(invalid(position));
    }

    Ok((acc, length))
}

/// Encodes `codepoint` as minimal UTF-8.
///
/// Returns the encoded bytes and the number of them that are significant
/// (1–4).
///
/// # Errors
///
/// Returns [`Error::InvalidCodepoint`] for surrogates and values beyond
/// U+10FFFF.
pub fn encode(codepoint: u32) -> Result<([u8; 4], usize), Error> {
    if codepoint > MAX_CODEPOINT || SURROGATES.contains(&codepoint) {
        return Err(Error::InvalidCodepoint(codepoint));
    }

    let mut buffer = [0u8; 4];
    let length = match codepoint {
        0..=0x7F => {
            buffer[0] = codepoint as u8;
            1
        }
        0x80..=0x7FF => {
            buffer[0] = 0xC0 | (codepoint >> 6) as u8;
            buffer[1] = 0x80 | (codepoint & 0x3F) as u8;
            2
        }
        0x800..=0xFFFF => {
            buffer[0] = 0xE0 | (codepoint >> 12) as u8;
            buffer[1] = 0x80 | ((codepoint >> 6) & 0x3F) as u8;
            buffer[2] = 0x80 | (codepoint & 0x3F) as u8;
            3
        }
        _ => {
            buffer[0] = 0xF0 | (codepoint >> 18) as u8;
            buffer[1] = 0x80 | ((codepoint >> 12) & 0x3F) as u8;
            buffer[2] = 0x80 | ((codepoint >> 6) & 0x3F) as u8;
            buffer[3] = 0x80 | (codepoint & 0x3F) as u8;
            4
        }
    };

    Ok((buffer, length))
}

/// Number of bytes `ch` occupies in UTF-8.
#[must_use]
pub fn encoded_len(ch: char) -> usize {
    match u32::from(ch) {
        0..=0x7F => 1,
        0x80..=0x7FF => 2,
        0x800..=0xFFFF => 3,
        _ => 4,
    }
}

/// Renders `bytes` as a concatenation of 8-digit binary groups, most
/// significant bit first.
///
/// An inspection aid, not performance-critical.
///
/// # Examples
///
/// ```
/// assert_eq!(ustring::codec::to_binary(b"a"), "01100001");
/// ```
#[must_use]
pub fn to_binary(bytes: &[u8]) -> String {
    use core::fmt::Write;

    let mut out = String::with_capacity(bytes.len() * 8);
    for byte in bytes {
        // Writing to a String cannot fail.
        let _ = write!(out, "{byte:08b}");
    }
    out
}

/// Returns `true` iff the entire byte sequence decodes cleanly as UTF-8,
/// with no invalid sequences and no overlong encodings.
#[must_use]
pub fn validate_utf8(bytes: &[u8]) -> bool {
    let mut position = 0;
    while position < bytes.len() {
        match decode(bytes, position) {
            Ok((_, length)) => position += length,
            Err(_) => return false,
        }
    }
    true
}
