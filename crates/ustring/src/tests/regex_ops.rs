use crate::{
    Error, Grouping, MatchOptions, Piece, Replacement, SplitFlags, UnicodeString,
};

#[test]
fn single_match_with_captures() {
    let s = UnicodeString::from("héllo wörld");
    let m = s
        .matches(r"/(\w+) (\w+)/", &MatchOptions::default())
        .unwrap()
        .unwrap();
    assert_eq!(m.len(), 3);
    assert_eq!(m.text(0), Some("héllo wörld"));
    assert_eq!(m.text(1), Some("héllo"));
    assert_eq!(m.text(2), Some("wörld"));
}

#[test]
fn no_match_is_none_not_an_error() {
    let s = UnicodeString::from("abc");
    assert_eq!(s.matches("/xyz/", &MatchOptions::default()).unwrap(), None);
}

#[test]
fn match_offset_is_a_codepoint_offset() {
    // Multibyte characters before the offset: codepoint 6 is byte 7.
    let s = UnicodeString::from("héllo wörld");
    let options = MatchOptions {
        offset: 6,
        with_offset: true,
        ..Default::default()
    };
    let m = s.matches(r"/\w+/", &options).unwrap().unwrap();
    assert_eq!(m.text(0), Some("wörld"));
    assert_eq!(m.get(0).and_then(|c| c.offset), Some(7));
}

#[test]
fn match_all_grouped_by_tuple() {
    let s = UnicodeString::from("a1 b2 c3");
    let options = MatchOptions {
        grouping: Grouping::ByTuple,
        ..Default::default()
    };
    let matches = s.match_all(r"/([a-z])(\d)/", &options).unwrap();
    assert_eq!(matches.len(), 3);
    assert_eq!(matches[0].text(0), Some("a1"));
    assert_eq!(matches[0].text(1), Some("a"));
    assert_eq!(matches[2].text(2), Some("3"));
}

#[test]
fn match_all_grouped_by_pattern() {
    let s = UnicodeString::from("a1 b2 c3");
    let matches = s
        .match_all(r"/([a-z])(\d)/", &MatchOptions::default())
        .unwrap();
    // One row per group: whole matches, then group 1, then group 2.
    assert_eq!(matches.len(), 3);
    assert_eq!(matches[0].text(0), Some("a1"));
    assert_eq!(matches[0].text(2), Some("c3"));
    assert_eq!(matches[1].text(1), Some("b"));
    assert_eq!(matches[2].text(0), Some("1"));
}

#[test]
fn match_all_handles_empty_matches() {
    let s = UnicodeString::from("ab");
    let options = MatchOptions {
        grouping: Grouping::ByTuple,
        ..Default::default()
    };
    // An empty-width pattern matches at every boundary without looping.
    let matches = s.match_all(r"/\b/", &options).unwrap();
    assert_eq!(matches.len(), 2);
}

#[test]
fn non_participating_groups_are_none() {
    let s = UnicodeString::from("b");
    let options = MatchOptions {
        grouping: Grouping::ByTuple,
        ..Default::default()
    };
    let matches = s.match_all("/(a)|(b)/", &options).unwrap();
    assert_eq!(matches[0].text(1), None);
    assert_eq!(matches[0].text(2), Some("b"));
}

#[test]
fn case_insensitive_option_flows_through() {
    let s = UnicodeString::from("HÉLLO");
    let m = s.matches("/héllo/i", &MatchOptions::default()).unwrap();
    assert!(m.is_some());
}

#[test]
fn invalid_patterns_are_reported() {
    let s = UnicodeString::from("abc");
    assert!(matches!(
        s.matches("/(/", &MatchOptions::default()),
        Err(Error::InvalidPattern(_))
    ));
    assert!(matches!(
        s.matches("", &MatchOptions::default()),
        Err(Error::InvalidPattern(_))
    ));
}

#[test]
fn replace_with_template() {
    let mut s = UnicodeString::from("héllo wörld");
    s.replace(r"/(\w+)$/", &Replacement::Template("[$1]"), 0)
        .unwrap();
    assert_eq!(s, "héllo [wörld]");
}

#[test]
fn replace_honors_the_limit() {
    let mut s = UnicodeString::from("a a a");
    s.replace("/a/", &Replacement::Template("b"), 2).unwrap();
    assert_eq!(s, "b b a");
}

#[test]
fn replace_with_callback() {
    let mut s = UnicodeString::from("1 22 333");
    let double = |m: &crate::MatchSet| {
        m.text(0).map(|t| t.repeat(2)).unwrap_or_default()
    };
    s.replace(r"/\d+/", &Replacement::With(&double), 0).unwrap();
    assert_eq!(s, "11 2222 333333");
}

#[test]
fn replace_leaves_buffer_unchanged_on_error() {
    let mut s = UnicodeString::from("abc");
    assert!(s.replace("/(/", &Replacement::Template("x"), 0).is_err());
    assert_eq!(s, "abc");
}

fn texts(pieces: &[Piece]) -> Vec<&str> {
    pieces.iter().map(|piece| piece.text.as_str()).collect()
}

#[test]
fn split_on_a_delimiter_pattern() {
    let s = UnicodeString::from("a, b,, c");
    let pieces = s.split(r"/,\s*/", 0, SplitFlags::WITHOUT_EMPTY).unwrap();
    assert_eq!(texts(&pieces), ["a", "b", "c"]);

    let pieces = s.split(r"/,\s*/", 0, SplitFlags::empty()).unwrap();
    assert_eq!(texts(&pieces), ["a", "b", "", "c"]);
}

#[test]
fn split_with_captured_delimiters() {
    let s = UnicodeString::from("a1b2c");
    let pieces = s
        .split(r"/(\d)/", 0, SplitFlags::WITH_DELIMITERS)
        .unwrap();
    assert_eq!(texts(&pieces), ["a", "1", "b", "2", "c"]);
}

#[test]
fn split_with_byte_offsets() {
    let s = UnicodeString::from("aé,b");
    let pieces = s.split("/,/", 0, SplitFlags::WITH_OFFSET).unwrap();
    assert_eq!(texts(&pieces), ["aé", "b"]);
    assert_eq!(pieces[0].offset, Some(0));
    assert_eq!(pieces[1].offset, Some(4));
}

#[test]
fn split_limit_keeps_the_remainder() {
    let s = UnicodeString::from("a,b,c,d");
    let pieces = s.split("/,/", 2, SplitFlags::empty()).unwrap();
    assert_eq!(texts(&pieces), ["a", "b,c,d"]);

    let pieces = s.split("/,/", 1, SplitFlags::empty()).unwrap();
    assert_eq!(texts(&pieces), ["a,b,c,d"]);
}

#[test]
fn split_on_empty_matches_yields_single_codepoints() {
    let s = UnicodeString::from("a中b");
    let pieces = s.split("//", 0, SplitFlags::WITHOUT_EMPTY).unwrap();
    assert_eq!(texts(&pieces), ["a", "中", "b"]);
}

#[test]
fn trim_and_replace_compose() {
    let mut s = UnicodeString::from("__héllo__wörld__");
    s.replace("/_+/", &Replacement::Template(" "), 0).unwrap();
    s.trim_whitespace().unwrap();
    assert_eq!(s, "héllo wörld");
}
