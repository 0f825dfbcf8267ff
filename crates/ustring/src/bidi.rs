//! First-strong-character direction classification.
//!
//! Classification covers the scripts with the Unicode Bidi property `R` or
//! `AL` (Hebrew, Arabic, Syriac, Thaana, Samaritan, Mandaic, the
//! Hebrew/Arabic presentation forms, and the supplementary-plane RTL blocks:
//! Cypriot, Phoenician, Lydian, Imperial Aramaic, Parthian, Pahlavi, Old
//! Turkic, Kharoshthi, Old South Arabian, Avestan). This approximates only
//! first-strong-character directionality; it is not the Unicode Bidirectional
//! Algorithm and does not handle embeddings or overrides.

use crate::range_table::RangeTable;

/// ZERO WIDTH NO-BREAK SPACE, aka the byte-order mark.
pub const BOM: char = '\u{FEFF}';
/// LEFT-TO-RIGHT MARK.
pub const LRM: char = '\u{200E}';
/// RIGHT-TO-LEFT MARK.
pub const RLM: char = '\u{200F}';
/// LEFT-TO-RIGHT EMBEDDING.
pub const LRE: char = '\u{202A}';
/// RIGHT-TO-LEFT EMBEDDING.
pub const RLE: char = '\u{202B}';
/// POP DIRECTIONAL FORMATTING.
pub const PDF: char = '\u{202C}';
/// LEFT-TO-RIGHT OVERRIDE.
pub const LRO: char = '\u{202D}';
/// RIGHT-TO-LEFT OVERRIDE.
pub const RLO: char = '\u{202E}';

/// Horizontal flow of a character or string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Text flows left to right.
    #[default]
    LeftToRight,
    /// Text flows right to left.
    RightToLeft,
}

// Union envelope of every RTL range below; anything outside is LTR without a
// table lookup.
const RTL_ENVELOPE: core::ops::RangeInclusive<u32> = 0x5BE..=0x10B7F;

// Hebrew, Arabic, Syriac, Thaana, Samaritan, and Mandaic blocks
// (codepoints at or below U+085E). Singletons are degenerate ranges.
static RTL_LOW: RangeTable = RangeTable::new(&[
    (0x5BE, 0x5BE),
    (0x5C0, 0x5C0),
    (0x5C3, 0x5C3),
    (0x5C6, 0x5C6),
    (0x5D0, 0x5EA),
    (0x5F0, 0x5F4),
    (0x608, 0x608),
    (0x60B, 0x60B),
    (0x60D, 0x60D),
    (0x61B, 0x61B),
    (0x61E, 0x64A),
    (0x66D, 0x66F),
    (0x671, 0x6D5),
    (0x6E5, 0x6E6),
    (0x6EE, 0x6EF),
    (0x6FA, 0x70D),
    (0x710, 0x710),
    (0x712, 0x72F),
    (0x74D, 0x7A5),
    (0x7B1, 0x7B1),
    (0x7C0, 0x7EA),
    (0x7F4, 0x7F5),
    (0x7FA, 0x7FA),
    (0x800, 0x815),
    (0x81A, 0x81A),
    (0x824, 0x824),
    (0x828, 0x828),
    (0x830, 0x83E),
    (0x840, 0x858),
    (0x85E, 0x85E),
]);

// Presentation forms and supplementary-plane RTL scripts (codepoints at or
// above U+FB1D).
static RTL_HIGH: RangeTable = RangeTable::new(&[
    (0xFB1D, 0xFB1D),
    (0xFB1F, 0xFB28),
    (0xFB2A, 0xFB36),
    (0xFB38, 0xFB3C),
    (0xFB3E, 0xFB3E),
    (0xFB40, 0xFB41),
    (0xFB43, 0xFB44),
    (0xFB46, 0xFBC1),
    (0xFBD3, 0xFD3D),
    (0xFD50, 0xFD8F),
    (0xFD92, 0xFDC7),
    (0xFDF0, 0xFDFC),
    (0xFE70, 0xFE74),
    (0xFE76, 0xFEFC),
    (0x10800, 0x10805),
    (0x10808, 0x10808),
    (0x1080A, 0x10835),
    (0x10837, 0x10838),
    (0x1083C, 0x1083C),
    (0x1083F, 0x10855),
    (0x10857, 0x1085F),
    (0x10900, 0x1091B),
    (0x10920, 0x10939),
    (0x1093F, 0x1093F),
    (0x10A00, 0x10A00),
    (0x10A10, 0x10A13),
    (0x10A15, 0x10A17),
    (0x10A19, 0x10A33),
    (0x10A40, 0x10A47),
    (0x10A50, 0x10A58),
    (0x10A60, 0x10A7F),
    (0x10B00, 0x10B35),
    (0x10B40, 0x10B55),
    (0x10B58, 0x10B72),
    (0x10B78, 0x10B7F),
]);

/// Classifies a single character as left-to-right or right-to-left.
///
/// # Examples
///
/// ```
/// use ustring::{Direction, bidi::classify};
///
/// assert_eq!(classify('A'), Direction::LeftToRight);
/// assert_eq!(classify('א'), Direction::RightToLeft);
/// assert_eq!(classify('ا'), Direction::RightToLeft);
/// ```
#[must_use]
pub fn classify(ch: char) -> Direction {
    let codepoint = u32::from(ch);

    if !RTL_ENVELOPE.contains(&codepoint) {
        return Direction::LeftToRight;
    }

    let rtl = if codepoint <= 0x85E {
        RTL_LOW.contains(codepoint)
    } else if codepoint == u32::from(RLM) {
        true
    } else if codepoint >= 0xFB1D {
        RTL_HIGH.contains(codepoint)
    } else {
        false
    };

    if rtl {
        Direction::RightToLeft
    } else {
        Direction::LeftToRight
    }
}

/// Direction of `s`, taken from its first character.
///
/// The direction of an empty string is defined as left-to-right.
#[must_use]
pub fn string_direction(s: &str) -> Direction {
    s.chars().next().map_or(Direction::LeftToRight, classify)
}
