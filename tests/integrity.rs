//! Integration tests for the integrity pass over the built-in tables.

use uniprops::{
    alias::{AliasIndex, PROPERTY_NAME_KEY},
    get_property,
    store::PropertyStore,
    validation::{validate, validate_builtin, Orchestrator, ValidationConfig},
    Error, Resolver, UNICODE_VERSION,
};

#[test]
fn test_builtin_tables_pass_every_check() {
    for config in [
        ValidationConfig::minimal(),
        ValidationConfig::comprehensive(),
        ValidationConfig::strict(),
    ] {
        if let Err(err) = validate(PropertyStore::builtin(), AliasIndex::builtin(), config) {
            if let Error::Validation(violations) = &err {
                for violation in violations {
                    eprintln!("{violation}");
                }
            }
            panic!("{err}");
        }
    }
    assert!(validate_builtin().is_ok());
}

#[test]
fn test_collect_finds_nothing() {
    let violations = Orchestrator::collect(
        PropertyStore::builtin(),
        AliasIndex::builtin(),
        &ValidationConfig::comprehensive(),
    );
    assert!(violations.is_empty(), "{violations:?}");
}

#[test]
fn test_property_alias_targets_exist() {
    let store = PropertyStore::builtin();
    for (alias, target) in AliasIndex::builtin().property_aliases().iter() {
        assert!(store.contains(target), "{alias} -> {target}");
    }
}

#[test]
fn test_every_alias_group_names_a_property() {
    let store = PropertyStore::builtin();
    for (group, aliases) in AliasIndex::builtin().groups() {
        assert!(!aliases.is_empty(), "{group}");
        assert!(group == PROPERTY_NAME_KEY || store.contains(group), "{group}");
    }
}

#[test]
fn test_supported_properties() {
    let names: Vec<&str> = Resolver::builtin().supported_properties().collect();
    assert_eq!(
        names,
        [
            "eastasianwidth",
            "graphemeclusterbreak",
            "numerictype",
            "numericvalue",
            "sentencebreak",
            "wordbreak",
        ]
    );
    assert_eq!(UNICODE_VERSION, (17, 0, 0));
}

#[test]
fn test_unknown_inputs_are_user_errors() {
    for property in ["bad", "", "^wb", "word break break"] {
        match get_property(property, "anything", false) {
            Err(err @ Error::UnknownProperty { .. }) => assert!(err.is_user_error()),
            other => panic!("{property}: unexpected {other:?}"),
        }
    }
    for property in ["wb", "sb", "gcb", "ea", "nt", "nv"] {
        for restrict_to_ascii in [false, true] {
            match get_property(property, "bad", restrict_to_ascii) {
                Err(err @ Error::UnknownValue { .. }) => assert!(err.is_user_error()),
                other => panic!("{property}: unexpected {other:?}"),
            }
        }
    }
}

#[test]
fn test_concurrent_lookups() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let restrict_to_ascii = i % 2 == 0;
                (0..100)
                    .map(|_| get_property("wb", "^le", restrict_to_ascii).unwrap().class().len())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let expected = [
        get_property("wordbreak", "^aletter", true).unwrap().class().len(),
        get_property("wordbreak", "^aletter", false).unwrap().class().len(),
    ];
    for (i, handle) in handles.into_iter().enumerate() {
        let lengths = handle.join().unwrap();
        assert!(lengths.iter().all(|&len| len == expected[i % 2]));
    }
}
