//! Integration tests for the `numerictype` property.

mod common;

use uniprops::get_property;

#[test]
fn test_numerictype_tables() {
    common::check_property("numerictype");
}

#[test]
fn test_numerictype_membership() {
    let cases = [
        ('0', "decimal"),
        ('\u{B2}', "digit"),
        ('\u{BD}', "numeric"),
        ('\u{2164}', "numeric"),
        ('\u{4E09}', "numeric"),
        ('A', "none"),
    ];
    for (c, value) in cases {
        assert!(get_property("nt", value, false).unwrap().contains_char(c), "{c:?}");
    }
}

#[test]
fn test_numerictype_ascii_digits() {
    let decimal = get_property("Numeric_Type", "De", true).unwrap();
    assert_eq!(decimal.class().ranges(), &[(0x30, 0x39)]);
    assert!(get_property("nt", "di", true).unwrap().class().is_empty());
    assert!(get_property("nt", "nu", true).unwrap().class().is_empty());
}

#[test]
fn test_numerictype_entries_are_classes() {
    let entry = get_property("nt", "decimal", false).unwrap();
    assert_eq!(entry.numeric_value(), None);
}
