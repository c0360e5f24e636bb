//! Integration tests for the `wordbreak` property.

mod common;

use uniprops::{get_property, Error, Resolver};

#[test]
fn test_wordbreak_tables() {
    common::check_property("wordbreak");
}

#[test]
fn test_wordbreak_membership() {
    let cases = [
        ('a', "aletter"),
        ('é', "aletter"),
        ('\r', "cr"),
        ('\n', "lf"),
        ('\u{0B}', "newline"),
        ('\'', "singlequote"),
        ('"', "doublequote"),
        ('0', "numeric"),
        ('_', "extendnumlet"),
        (' ', "wsegspace"),
        (':', "midletter"),
        (',', "midnum"),
        ('.', "midnumlet"),
        ('\u{05D0}', "hebrewletter"),
        ('\u{30A2}', "katakana"),
        ('\u{200D}', "zwj"),
        ('\u{1F1E6}', "regionalindicator"),
        ('\u{0301}', "extend"),
        ('\u{00AD}', "format"),
        ('{', "other"),
    ];

    for (c, value) in cases {
        let entry = get_property("wordbreak", value, false).unwrap();
        assert!(entry.contains_char(c), "{c:?} not in {value}");

        let negated = get_property("wordbreak", &format!("^{value}"), false).unwrap();
        assert!(!negated.contains_char(c), "{c:?} in ^{value}");
    }
}

#[test]
fn test_wordbreak_ascii_scope() {
    let unicode = get_property("wordbreak", "aletter", false).unwrap();
    let ascii = get_property("wordbreak", "aletter", true).unwrap();

    assert!(unicode.contains_char('é'));
    assert!(!ascii.contains_char('é'));
    assert!(ascii.contains_char('Z'));
    assert_eq!(ascii.class().len(), 52);
    assert!(ascii.class().ranges().iter().all(|&(_, last)| last <= 0x7F));

    // Values without ASCII members keep an empty ASCII entry
    let katakana = get_property("wordbreak", "katakana", true).unwrap();
    assert!(katakana.class().is_empty());
}

#[test]
fn test_wordbreak_empty_values() {
    // Retired emoji values are still addressable
    for value in ["ebase", "ebasegaz", "emodifier", "glueafterzwj"] {
        assert!(get_property("wb", value, false).unwrap().class().is_empty());
        assert_eq!(get_property("wb", &format!("^{value}"), false).unwrap().class().len(), 0x11_0000);
    }
}

#[test]
fn test_wordbreak_loose_matching() {
    let canonical = get_property("wordbreak", "aletter", false).unwrap();
    for (property, value) in [
        ("Word_Break", "ALetter"),
        ("word-break", "a_letter"),
        ("WORD BREAK", "A Letter"),
        ("WB", "LE"),
        ("wb", "le"),
    ] {
        assert_eq!(get_property(property, value, false).unwrap(), canonical);
    }

    let negated = get_property("wordbreak", "^aletter", false).unwrap();
    assert_eq!(get_property("WB", "^LE", false).unwrap(), negated);
}

#[test]
fn test_wordbreak_resolve_key() {
    let resolver = Resolver::builtin();
    let (table, key) = resolver.resolve_key("Word_Break", "^MidNumLet").unwrap();
    assert_eq!(table.name(), "wordbreak");
    assert_eq!(key, "^midnumlet");

    let (_, key) = resolver.resolve_key("wb", "mb").unwrap();
    assert_eq!(key, "midnumlet");
}

#[test]
fn test_wordbreak_unknown_property() {
    match get_property("word_brake", "aletter", false) {
        Err(Error::UnknownProperty { property }) => assert_eq!(property, "word_brake"),
        other => panic!("unexpected {other:?}"),
    }
}
