//! Integration tests for the `graphemeclusterbreak` property.

mod common;

use uniprops::get_property;

#[test]
fn test_graphemeclusterbreak_tables() {
    common::check_property("graphemeclusterbreak");
}

#[test]
fn test_graphemeclusterbreak_hangul() {
    let cases = [
        ('\u{1100}', "l"),
        ('\u{1161}', "v"),
        ('\u{11A8}', "t"),
        ('\u{AC00}', "lv"),
        ('\u{AC01}', "lvt"),
    ];
    for (c, value) in cases {
        assert!(get_property("gcb", value, false).unwrap().contains_char(c));
        assert!(!get_property("gcb", value, true).unwrap().contains_char(c));
    }
}

#[test]
fn test_graphemeclusterbreak_controls() {
    let control = get_property("graphemeclusterbreak", "control", true).unwrap();
    assert!(control.contains_char('\0'));
    assert!(control.contains_char('\u{7F}'));
    assert!(!control.contains_char('\r'));
    assert!(!control.contains_char('\n'));
    assert_eq!(control.class().to_string(), "\\x{0}-\\x{9}\\x{B}-\\x{C}\\x{E}-\\x{1F}\\x{7F}");

    assert!(get_property("gcb", "cr", true).unwrap().contains_char('\r'));
    assert!(get_property("gcb", "lf", true).unwrap().contains_char('\n'));
    assert!(get_property("gcb", "other", true).unwrap().contains_char('A'));
}

#[test]
fn test_graphemeclusterbreak_surrogates() {
    // Surrogates are controls; they are reachable by code point only
    let control = get_property("gcb", "cn", false).unwrap();
    assert!(control.contains(0xD800));
    assert!(control.contains(0xDFFF));
}

#[test]
fn test_graphemeclusterbreak_marks() {
    assert!(get_property("gcb", "EX", false).unwrap().contains_char('\u{0301}'));
    assert!(get_property("gcb", "SM", false).unwrap().contains_char('\u{0903}'));
    assert!(get_property("gcb", "PP", false).unwrap().contains_char('\u{0600}'));
    assert!(get_property("gcb", "^EX", false).unwrap().contains_char('a'));
}
