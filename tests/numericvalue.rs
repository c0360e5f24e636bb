//! Integration tests for the `numericvalue` property.

mod common;

use uniprops::{get_property, DatasetEntry, EntryKind, Error, NumericValue, Resolver};

#[test]
fn test_numericvalue_tables() {
    common::check_property("numericvalue");
}

#[test]
fn test_numericvalue_two() {
    let unicode = get_property("numericvalue", "2", false).unwrap();
    let ascii = get_property("numericvalue", "2", true).unwrap();

    // The literal is shared, only the code points differ
    assert_eq!(unicode.numeric_value(), Some(NumericValue::from(2)));
    assert_eq!(ascii.numeric_value(), Some(NumericValue::from(2)));
    assert!(unicode.contains_char('2'));
    assert!(unicode.contains_char('\u{B2}'));
    assert!(ascii.contains_char('2'));
    assert!(!ascii.contains_char('\u{B2}'));
    assert_eq!(ascii.class().ranges(), &[(0x32, 0x32)]);

    assert_eq!(get_property("nv", "2", false).unwrap(), unicode);
    assert_eq!(get_property("nv", "2", true).unwrap(), ascii);
}

#[test]
fn test_numericvalue_entries_are_numeric() {
    let table = common::table("numericvalue");
    for (key, entry) in table.unicode().iter().chain(table.ascii().iter()) {
        assert_eq!(entry.kind(), EntryKind::Numeric, "{key}");
        let value = entry.numeric_value().unwrap();
        // Keys spell their literal, negated keys the literal they exclude
        assert_eq!(value.to_string(), key.trim_start_matches('^'), "{key}");
    }
}

#[test]
fn test_numericvalue_fractions() {
    let half = get_property("nv", "1/2", false).unwrap();
    assert_eq!(half.numeric_value(), Some(NumericValue::rational(1, 2)));
    assert!(half.contains_char('½'));
    assert!(get_property("nv", "1/2", true).unwrap().class().is_empty());

    let tiny = get_property("nv", "1/160", false).unwrap();
    assert!((tiny.numeric_value().unwrap().as_f64() - 0.00625).abs() < f64::EPSILON);
}

#[test]
fn test_numericvalue_decimal_aliases() {
    for (decimal, fraction) in [("0.5", "1/2"), ("0.25", "1/4"), ("0.75", "3/4"), ("2.5", "5/2")] {
        for restrict_to_ascii in [false, true] {
            assert_eq!(
                get_property("nv", decimal, restrict_to_ascii).unwrap(),
                get_property("nv", fraction, restrict_to_ascii).unwrap()
            );
        }
    }
    assert_eq!(
        get_property("nv", "^0.5", false).unwrap(),
        get_property("nv", "^1/2", false).unwrap()
    );
}

#[test]
fn test_numericvalue_nan() {
    let nan = get_property("Numeric_Value", "NaN", false).unwrap();
    assert_eq!(nan.numeric_value(), Some(NumericValue::NaN));
    assert!(nan.contains_char('a'));
    assert!(!nan.contains_char('2'));
    assert!(nan.contains(0xD800));

    let any = get_property("nv", "^nan", true).unwrap();
    assert_eq!(any.class().ranges(), &[(0x30, 0x39)]);
}

#[test]
fn test_numericvalue_large_values() {
    let resolver = Resolver::builtin();
    let entry = resolver.get_property("nv", "10000", false).unwrap();
    assert!(entry.contains_char('\u{4E07}'));

    match entry {
        DatasetEntry::Numeric(numeric) => {
            assert_eq!(numeric.value(), NumericValue::from(10_000));
            assert!(numeric.class().contains(0x4E07));
        }
        DatasetEntry::Class(_) => panic!("numeric value stored as a plain class"),
    }
}

#[test]
fn test_numericvalue_unaddressable_negative() {
    // The sign survives loose matching, so a negative value never lands on its magnitude
    for value in ["-1/2", "-0.5", "^-1/2", "_-1/2", "^_-1/2", " -1/2"] {
        for restrict_to_ascii in [false, true] {
            match get_property("nv", value, restrict_to_ascii) {
                Err(Error::UnknownValue { property, value: token }) => {
                    assert_eq!(property, "numericvalue");
                    assert_eq!(token, value);
                }
                other => panic!("{value}: unexpected {other:?}"),
            }
        }
    }
}
