//! Property-agnostic checks shared by the per-property integration tests.
//!
//! Each check walks the built-in tables through the public API only and asserts one of the
//! table properties every supported Unicode property must satisfy.

#![allow(dead_code)]

use uniprops::{
    alias::AliasIndex,
    get_property,
    store::{PropertyStore, PropertyTable},
    Error,
};

/// The built-in table of `property`, which must exist
pub fn table(property: &str) -> &'static PropertyTable {
    PropertyStore::builtin()
        .get(property)
        .unwrap_or_else(|| panic!("no built-in property '{property}'"))
}

/// Every value-key of both variants matches `^\^?[a-z0-9./]+$`
pub fn check_key_grammar(property: &str) {
    let table = table(property);
    for key in table.unicode().keys().chain(table.ascii().keys()) {
        let body = key.strip_prefix('^').unwrap_or(key);
        assert!(!body.is_empty(), "{property}: empty key '{key}'");
        assert!(
            body.bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'.' || b == b'/'),
            "{property}: key '{key}' violates the key grammar"
        );
    }
}

/// The Unicode and ASCII tables hold the same keys
pub fn check_variant_parity(property: &str) {
    let table = table(property);
    let unicode: Vec<&str> = table.unicode().keys().collect();
    let ascii: Vec<&str> = table.ascii().keys().collect();
    assert_eq!(unicode, ascii, "{property}: variant key sets differ");
}

/// Every non-negated key `k` has a `^k` in the same table
pub fn check_negation_parity(property: &str) {
    let table = table(property);
    for values in [table.unicode(), table.ascii()] {
        for key in values.keys().filter(|key| !key.starts_with('^')) {
            assert!(
                values.contains_key(&format!("^{key}")),
                "{property}: '{key}' has no negation"
            );
        }
    }
}

/// Resolving every key returns exactly the stored entry of the selected variant
pub fn check_direct_lookup(property: &str) {
    let table = table(property);
    for (key, entry) in table.unicode().iter() {
        assert_eq!(get_property(property, key, false).unwrap(), entry, "{property}={key}");
    }
    for (key, entry) in table.ascii().iter() {
        assert_eq!(get_property(property, key, true).unwrap(), entry, "{property}={key}");
    }
}

/// Every property name alias of `property` resolves like the canonical identifier
pub fn check_name_aliases(property: &str) {
    let table = table(property);
    let aliases: Vec<&str> = AliasIndex::builtin()
        .property_aliases()
        .iter()
        .filter(|(_, target)| *target == property)
        .map(|(alias, _)| alias)
        .collect();
    assert!(!aliases.is_empty(), "{property} has no name alias");

    for alias in aliases {
        for key in table.keys() {
            for restrict_to_ascii in [false, true] {
                assert_eq!(
                    get_property(alias, key, restrict_to_ascii).unwrap(),
                    get_property(property, key, restrict_to_ascii).unwrap(),
                    "{alias}={key} (ascii: {restrict_to_ascii})"
                );
            }
        }
    }
}

/// Every value alias of `property` resolves like its canonical value-key, negated or not
pub fn check_value_aliases(property: &str) {
    for (alias, target) in AliasIndex::builtin().value_aliases(property).iter() {
        for restrict_to_ascii in [false, true] {
            assert_eq!(
                get_property(property, alias, restrict_to_ascii).unwrap(),
                get_property(property, target, restrict_to_ascii).unwrap(),
                "{property}={alias} (ascii: {restrict_to_ascii})"
            );
            assert_eq!(
                get_property(property, &format!("^{alias}"), restrict_to_ascii).unwrap(),
                get_property(property, &format!("^{target}"), restrict_to_ascii).unwrap(),
                "{property}=^{alias} (ascii: {restrict_to_ascii})"
            );
        }
    }
}

/// Unknown values fail with [`Error::UnknownValue`] carrying the caller's token
pub fn check_unknown_value(property: &str) {
    for bad in ["bad", "^bad", "", "^", "^^other"] {
        match get_property(property, bad, false) {
            Err(Error::UnknownValue { property: p, value }) => {
                assert_eq!(p, property);
                assert_eq!(value, bad);
            }
            other => panic!("{property}={bad}: unexpected {other:?}"),
        }
    }
}

/// Every key and its negation partition the code point space, in both variants
pub fn check_complements(property: &str) {
    let table = table(property);
    for (values, last) in [(table.unicode(), 0x10_FFFF_u32), (table.ascii(), 0x7F)] {
        for (key, entry) in values.iter().filter(|(key, _)| !key.starts_with('^')) {
            let negated = values
                .get(&format!("^{key}"))
                .unwrap_or_else(|| panic!("{property}: '{key}' has no negation"));
            let covered = entry.class().len() + negated.class().len();
            assert_eq!(covered, last as usize + 1, "{property}: '{key}' and '^{key}'");
            for cp in [0, 0x41, last] {
                assert_ne!(entry.contains(cp), negated.contains(cp), "{property}: {key} {cp:#x}");
            }
        }
    }
}

/// Runs every property-agnostic check against `property`
pub fn check_property(property: &str) {
    check_key_grammar(property);
    check_variant_parity(property);
    check_negation_parity(property);
    check_direct_lookup(property);
    check_name_aliases(property);
    check_value_aliases(property);
    check_unknown_value(property);
    check_complements(property);
}
