//! Integration tests for the `eastasianwidth` property.

mod common;

use uniprops::{get_property, Error};

#[test]
fn test_eastasianwidth_tables() {
    common::check_property("eastasianwidth");
}

#[test]
fn test_eastasianwidth_membership() {
    let cases = [
        ('A', "narrow"),
        ('\u{A1}', "ambiguous"),
        ('\u{3042}', "wide"),
        ('\u{1F600}', "wide"),
        ('\u{FF21}', "fullwidth"),
        ('\u{FF61}', "halfwidth"),
        ('\u{20A9}', "halfwidth"),
        ('\u{E000}', "ambiguous"),
    ];
    for (c, value) in cases {
        assert!(get_property("ea", value, false).unwrap().contains_char(c), "{c:?}");
    }
}

#[test]
fn test_eastasianwidth_single_letter_aliases() {
    for (alias, value) in [
        ("A", "ambiguous"),
        ("F", "fullwidth"),
        ("H", "halfwidth"),
        ("N", "neutral"),
        ("Na", "narrow"),
        ("W", "wide"),
    ] {
        assert_eq!(
            get_property("East_Asian_Width", alias, false).unwrap(),
            get_property("eastasianwidth", value, false).unwrap()
        );
    }
}

#[test]
fn test_eastasianwidth_ascii_is_narrow_or_neutral() {
    let narrow = get_property("ea", "narrow", true).unwrap();
    let neutral = get_property("ea", "neutral", true).unwrap();
    assert_eq!(narrow.class().len() + neutral.class().len(), 0x80);
    assert!(get_property("ea", "wide", true).unwrap().class().is_empty());
}

#[test]
fn test_eastasianwidth_unknown_value() {
    match get_property("ea", "X", false) {
        Err(err @ Error::UnknownValue { .. }) => assert!(err.is_user_error()),
        other => panic!("unexpected {other:?}"),
    }
}
