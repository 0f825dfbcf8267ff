use core::cmp::Ordering;

use rstest::rstest;

use crate::{Direction, Error, Side, UnicodeString};

#[test]
fn construction_validates_utf8() {
    let s = UnicodeString::from_bytes("héllo".as_bytes()).unwrap();
    assert_eq!(s, "héllo");

    assert_eq!(
        UnicodeString::from_bytes(&[0x68, 0xC0, 0xAF]),
        Err(Error::InvalidEncoding { position: 1 })
    );
}

#[test]
fn lossy_construction_replaces_invalid_sequences() {
    let s = UnicodeString::from_bytes_lossy(&[0x68, 0x69, 0xFF]);
    assert_eq!(s, "hi\u{FFFD}");
}

#[test]
fn counts_codepoints_not_bytes() {
    let s = UnicodeString::from("héllo 中");
    assert_eq!(s.count(), 7);
    assert_eq!(s.byte_len(), 10);
    assert!(!s.is_empty());
    assert!(UnicodeString::new().is_empty());
}

#[test]
fn append_and_prepend_ltr() {
    let mut s = UnicodeString::from("bc");
    s.append("d").prepend("a");
    assert_eq!(s, "abcd");
}

#[test]
fn append_on_rtl_joins_at_the_logical_end() {
    // The logical end of a right-to-left string is the front of the buffer.
    let mut s = UnicodeString::from("שלום");
    s.append("!");
    assert_eq!(s.as_str(), "!שלום");

    let mut s = UnicodeString::from("שלום");
    s.prepend("«");
    assert_eq!(s.as_str(), "שלום«");
}

#[test]
fn direction_is_cached_until_mutation() {
    let mut s = UnicodeString::from("abc");
    assert_eq!(s.direction(), Direction::LeftToRight);

    // Replace the first character with a Hebrew one; the cache must not
    // serve the stale value.
    s.set(0, "א").unwrap();
    assert_eq!(s.direction(), Direction::RightToLeft);

    s.delete(0).unwrap();
    assert_eq!(s.direction(), Direction::LeftToRight);
}

#[test]
fn empty_string_is_ltr() {
    assert_eq!(UnicodeString::new().direction(), Direction::LeftToRight);
}

#[rstest]
#[case(5, "ab", "xabab")]
#[case(4, "ab", "xaba")]
#[case(1, "ab", "x")]
#[case(0, "ab", "x")]
#[case(3, "longpiece", "xlo")]
fn pad_truncates_to_the_exact_deficit(
    #[case] length: usize,
    #[case] piece: &str,
    #[case] expected: &str,
) {
    let mut s = UnicodeString::from("x");
    s.pad(length, piece, Side::END);
    assert_eq!(s, expected);
}

#[test]
fn pad_at_the_beginning() {
    let mut s = UnicodeString::from("x");
    s.pad(4, "ab", Side::BEGINNING);
    assert_eq!(s, "abax");
}

#[test]
fn pad_with_empty_piece_is_a_no_op() {
    let mut s = UnicodeString::from("x");
    s.pad(5, "", Side::END);
    assert_eq!(s, "x");
}

#[test]
fn get_supports_negative_and_wrapped_offsets() {
    let s = UnicodeString::from("héllo");
    assert_eq!(s.get(0).unwrap(), 'h');
    assert_eq!(s.get(1).unwrap(), 'é');
    assert_eq!(s.get(-1).unwrap(), 'o');
    assert_eq!(s.get(5).unwrap(), 'h');
    assert_eq!(s.get(7).unwrap(), 'l');
    assert_eq!(UnicodeString::new().get(0), Err(Error::EmptyString));
}

#[test]
fn set_replaces_one_codepoint() {
    let mut s = UnicodeString::from("héllo");
    s.set(1, "e").unwrap();
    assert_eq!(s, "hello");

    // Multi-codepoint replacement grows the string.
    s.set(-1, "ooo").unwrap();
    assert_eq!(s, "hellooo");

    // Empty replacement deletes.
    s.set(0, "").unwrap();
    assert_eq!(s, "ellooo");
}

#[test]
fn delete_removes_one_codepoint() {
    let mut s = UnicodeString::from("中文ab");
    s.delete(0).unwrap();
    assert_eq!(s, "文ab");
    s.delete(-1).unwrap();
    assert_eq!(s, "文a");
    assert_eq!(
        UnicodeString::new().delete(0),
        Err(Error::EmptyString)
    );
}

#[test]
fn reduce_slices_in_codepoint_space() {
    let mut s = UnicodeString::from("héllo wörld");
    s.reduce(6, None).unwrap();
    assert_eq!(s, "wörld");

    let mut s = UnicodeString::from("héllo");
    s.reduce(1, Some(3)).unwrap();
    assert_eq!(s, "éll");

    let mut s = UnicodeString::from("héllo");
    s.reduce(-2, None).unwrap();
    assert_eq!(s, "lo");

    let mut s = UnicodeString::new();
    s.reduce(3, None).unwrap();
    assert_eq!(s, "");
}

#[test]
fn byte_level_access_wraps_against_byte_length() {
    let s = UnicodeString::from("é"); // 0xC3 0xA9
    assert_eq!(s.byte_len(), 2);
    assert_eq!(s.byte_at(0).unwrap(), 0xC3);
    assert_eq!(s.byte_at(1).unwrap(), 0xA9);
    assert_eq!(s.byte_at(-1).unwrap(), 0xA9);
    assert_eq!(s.byte_at(2).unwrap(), 0xC3);
    assert_eq!(UnicodeString::new().byte_at(0), Err(Error::EmptyString));
}

#[test]
fn width_sums_columns() {
    assert_eq!(UnicodeString::from("hello").width(), 5);
    assert_eq!(UnicodeString::from("中文").width(), 4);
    assert_eq!(UnicodeString::from("e\u{301}").width(), 1);
}

#[test]
fn compare_falls_back_to_byte_order() {
    let a = UnicodeString::from("a");
    let b = UnicodeString::from("b");
    // No collator is installed in tests; byte-wise comparison applies.
    assert_eq!(a.compare(&b), Ordering::Less);
    assert_eq!(b.compare(&a), Ordering::Greater);
    assert_eq!(a.compare(&a.clone()), Ordering::Equal);
}

#[test]
fn compare_with_uses_the_given_collator() {
    struct ReverseCollator;
    impl crate::Collate for ReverseCollator {
        fn compare(&self, a: &str, b: &str) -> Ordering {
            b.cmp(a)
        }
    }

    let a = UnicodeString::from("a");
    let b = UnicodeString::from("b");
    assert_eq!(a.compare_with(&b, &ReverseCollator), Ordering::Greater);
}

#[test]
fn case_folding_in_place() {
    let mut s = UnicodeString::from("Héllo ÉTÉ");
    s.to_lowercase();
    assert_eq!(s, "héllo été");
    s.to_uppercase();
    assert_eq!(s, "HÉLLO ÉTÉ");
}

#[test]
fn trim_sides_independently() {
    let mut s = UnicodeString::from("  héllo  ");
    s.trim(r"\s", Side::BEGINNING).unwrap();
    assert_eq!(s, "héllo  ");

    let mut s = UnicodeString::from("  héllo  ");
    s.trim(r"\s", Side::END).unwrap();
    assert_eq!(s, "  héllo");

    let mut s = UnicodeString::from("  héllo  ");
    s.trim_whitespace().unwrap();
    assert_eq!(s, "héllo");

    let mut s = UnicodeString::from("xxhéllox");
    s.trim("x", Side::all()).unwrap();
    assert_eq!(s, "héllo");

    // An empty side mask is a no-op.
    let mut s = UnicodeString::from(" a ");
    s.trim(r"\s", Side::empty()).unwrap();
    assert_eq!(s, " a ");
}

#[test]
fn binary_rendering_of_the_buffer() {
    assert_eq!(UnicodeString::from("a").to_binary(), "01100001");
    assert_eq!(UnicodeString::new().to_binary(), "");
}

#[test]
fn value_type_conveniences() {
    let s: UnicodeString = "héllo".parse().unwrap();
    assert_eq!(s.to_string(), "héllo");
    assert_eq!(s.as_ref(), "héllo");
    assert_eq!(s.chars().count(), 5);
    assert_eq!(s.clone().into_string(), "héllo");

    let mut sorted = vec![
        UnicodeString::from("b"),
        UnicodeString::from("a"),
    ];
    sorted.sort();
    assert_eq!(sorted[0], "a");
}
