//! Integration tests for the `sentencebreak` property.

mod common;

use uniprops::get_property;

#[test]
fn test_sentencebreak_tables() {
    common::check_property("sentencebreak");
}

#[test]
fn test_sentencebreak_membership() {
    let cases = [
        ('A', "upper"),
        ('a', "lower"),
        ('.', "aterm"),
        ('?', "sterm"),
        ('!', "sterm"),
        (' ', "sp"),
        ('\n', "lf"),
        ('\r', "cr"),
        (')', "close"),
        (',', "scontinue"),
        ('7', "numeric"),
        ('\u{05D0}', "oletter"),
        ('\u{2029}', "sep"),
    ];

    for (c, value) in cases {
        for restrict_to_ascii in [false, true] {
            if restrict_to_ascii && !c.is_ascii() {
                continue;
            }
            let entry = get_property("sentencebreak", value, restrict_to_ascii).unwrap();
            assert!(entry.contains_char(c), "{c:?} not in {value}");
        }
    }
}

#[test]
fn test_sentencebreak_aliases() {
    assert_eq!(
        get_property("SB", "UP", false).unwrap(),
        get_property("sentencebreak", "upper", false).unwrap()
    );
    assert_eq!(
        get_property("Sentence_Break", "LE", true).unwrap(),
        get_property("sentencebreak", "oletter", true).unwrap()
    );
    // `sp` is a value-key in its own right
    assert!(get_property("sb", "SP", false).unwrap().contains_char(' '));
}

#[test]
fn test_sentencebreak_ascii_scope() {
    let oletter = get_property("sb", "oletter", true).unwrap();
    assert!(oletter.class().is_empty());

    let not_oletter = get_property("sb", "^oletter", true).unwrap();
    assert_eq!(not_oletter.class().len(), 0x80);
}
