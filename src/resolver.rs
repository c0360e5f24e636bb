//! Property query resolution.
//!
//! The [`Resolver`] turns a `(property, value)` query, each side possibly an alias and in any
//! spelling, into the [`DatasetEntry`] stored for it:
//!
//! 1. Both tokens are normalised with [`loose_key`] (lowercase, `_`, `-` and spaces dropped).
//! 2. The property token is canonicalised through the property name aliases.
//! 3. The value token is canonicalised through that property's value aliases.
//! 4. The Unicode or ASCII variant of the property's value table is selected.
//! 5. The entry is fetched and returned unchanged.
//!
//! A key starting with `^` is a key like any other. Complements are stored in the tables, the
//! resolver never computes one.
//!
//! # Example
//! ```rust
//! use uniprops::{get_property, NumericValue, Resolver};
//!
//! let aletter = get_property("Word_Break", "ALetter", false)?;
//! assert!(aletter.contains_char('é'));
//!
//! let resolver = Resolver::builtin();
//! let two = resolver.get_property("nv", "2", true)?;
//! assert_eq!(two.numeric_value(), Some(NumericValue::from(2)));
//! assert!(two.contains_char('2'));
//! # Ok::<(), uniprops::Error>(())
//! ```

use std::borrow::Cow;

use log::{trace, warn};

use crate::{
    alias::AliasIndex,
    entry::DatasetEntry,
    store::{PropertyStore, PropertyTable, Variant},
    Error, Result,
};

/// Normalises a token for lookup, following the loose matching rule UAX44-LM3: ASCII letters are
/// lowercased and `_`, `-` and spaces are removed. A `-` that starts the value body, after an
/// optional `^` and any ignored characters, is kept: it is the sign of a numeric value.
///
/// Borrows the input when it is already in canonical form.
#[must_use]
pub fn loose_key(token: &str) -> Cow<'_, str> {
    let mut key = String::with_capacity(token.len());
    for c in token.chars() {
        match c {
            '_' | ' ' => {}
            '-' if !(key.is_empty() || key == "^") => {}
            _ => key.push(c.to_ascii_lowercase()),
        }
    }

    if key == token {
        Cow::Borrowed(token)
    } else {
        Cow::Owned(key)
    }
}

/// Read-only view over a [`PropertyStore`] and an [`AliasIndex`] answering property queries.
///
/// The resolver holds references only and is `Copy`; any number of threads may use the same
/// resolver, or separate copies of it, concurrently.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    store: &'a PropertyStore,
    aliases: &'a AliasIndex,
}

impl Resolver<'static> {
    /// Resolver over the generated Unicode Character Database tables
    #[must_use]
    pub fn builtin() -> Self {
        Resolver::new(PropertyStore::builtin(), AliasIndex::builtin())
    }
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over the given tables
    #[must_use]
    pub fn new(store: &'a PropertyStore, aliases: &'a AliasIndex) -> Self {
        Resolver { store, aliases }
    }

    /// The property tables this resolver reads from
    #[must_use]
    pub fn store(&self) -> &'a PropertyStore {
        self.store
    }

    /// The alias index this resolver reads from
    #[must_use]
    pub fn aliases(&self) -> &'a AliasIndex {
        self.aliases
    }

    /// Canonical identifiers of all properties that can be queried
    pub fn supported_properties(&self) -> impl Iterator<Item = &'static str> + 'a {
        self.store.names()
    }

    /// Canonicalises a property token.
    ///
    /// # Errors
    /// - [`Error::UnknownProperty`] if the token names no property
    /// - [`Error::DanglingAlias`] if the token is an alias of a property the store lacks
    pub fn resolve_property(&self, property: &str) -> Result<&'static PropertyTable> {
        let token = loose_key(property);
        self.aliases
            .resolve_property_name(self.store, &token)
            .map_err(|err| match err {
                Error::UnknownProperty { .. } => Error::UnknownProperty {
                    property: property.to_string(),
                },
                other => other,
            })
    }

    /// Canonicalises a `(property, value)` query without fetching the entry.
    ///
    /// Returns the property table and the canonical value-key.
    ///
    /// # Errors
    /// Returns [`Error::UnknownProperty`] or [`Error::UnknownValue`] for tokens that do not
    /// resolve, and [`Error::DanglingAlias`] for a property alias without a target.
    pub fn resolve_key(
        &self,
        property: &str,
        value: &str,
    ) -> Result<(&'static PropertyTable, String)> {
        let table = self.resolve_property(property)?;

        let token = loose_key(value);
        let key = self
            .aliases
            .resolve_value(table, &token)
            .map_err(|err| match err {
                Error::UnknownValue { .. } => Error::UnknownValue {
                    property: table.name().to_string(),
                    value: value.to_string(),
                },
                other => other,
            })?;

        trace!(
            "resolved '{}={}' to '{}={}'",
            property,
            value,
            table.name(),
            key
        );
        Ok((table, key.into_owned()))
    }

    /// Resolve a property query into its dataset entry.
    ///
    /// ## Arguments
    /// * `property` - Property name or alias, in any loose spelling (`Word_Break`, `wb`)
    /// * `value` - Value-key or alias, optionally `^`-prefixed (`ALetter`, `^le`)
    /// * `restrict_to_ascii` - Select the ASCII table instead of the full Unicode one
    ///
    /// # Errors
    /// - [`Error::UnknownProperty`] if the property token does not resolve
    /// - [`Error::UnknownValue`] if the value token does not resolve for that property
    /// - [`Error::DanglingAlias`] if the property token is an alias without a target
    /// - [`Error::DataIntegrity`] if the canonical key is missing from the selected table, which
    ///   means the tables themselves are defective
    pub fn get_property(
        &self,
        property: &str,
        value: &str,
        restrict_to_ascii: bool,
    ) -> Result<&'static DatasetEntry> {
        self.get_property_variant(property, value, Variant::from_ascii_flag(restrict_to_ascii))
    }

    /// Like [`Resolver::get_property`], with the table variant given explicitly.
    ///
    /// # Errors
    /// See [`Resolver::get_property`].
    pub fn get_property_variant(
        &self,
        property: &str,
        value: &str,
        variant: Variant,
    ) -> Result<&'static DatasetEntry> {
        let (table, key) = self.resolve_key(property, value)?;

        match table.variant(variant).get(&key) {
            Some(entry) => Ok(entry),
            None => {
                warn!(
                    "'{}' resolved to key '{}' which is missing from the {} table",
                    table.name(),
                    key,
                    variant
                );
                Err(Error::DataIntegrity {
                    property: table.name(),
                    key,
                    variant,
                })
            }
        }
    }
}

/// Resolve a property query against the built-in tables.
///
/// Shorthand for [`Resolver::builtin`] followed by [`Resolver::get_property`].
///
/// # Errors
/// See [`Resolver::get_property`].
///
/// # Example
/// ```rust
/// use uniprops::get_property;
///
/// let not_letter = get_property("wb", "^aletter", true)?;
/// assert!(not_letter.contains_char('1'));
/// assert!(!not_letter.contains_char('a'));
/// # Ok::<(), uniprops::Error>(())
/// ```
pub fn get_property(
    property: &str,
    value: &str,
    restrict_to_ascii: bool,
) -> Result<&'static DatasetEntry> {
    Resolver::builtin().get_property(property, value, restrict_to_ascii)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::fixtures;

    #[test]
    fn test_loose_key() {
        assert!(matches!(loose_key("wordbreak"), Cow::Borrowed("wordbreak")));
        assert_eq!(loose_key("Word_Break"), "wordbreak");
        assert_eq!(loose_key("word-break"), "wordbreak");
        assert_eq!(loose_key("WORD BREAK"), "wordbreak");
        assert_eq!(loose_key("^ALetter"), "^aletter");
        assert_eq!(loose_key("1/2"), "1/2");
        assert_eq!(loose_key("0.5"), "0.5");
        assert_eq!(loose_key("-1/2"), "-1/2");
        assert_eq!(loose_key("_-1"), "-1");
        assert_eq!(loose_key("^-1/2"), "^-1/2");
        assert_eq!(loose_key("^ -1/2"), "^-1/2");
        assert_eq!(loose_key("1-2"), "12");
        assert_eq!(loose_key(""), "");
    }

    #[test]
    fn test_fixture_resolution() {
        let resolver = Resolver::new(&fixtures::STORE, &fixtures::ALIASES);

        let red = resolver.get_property("color", "red", false).unwrap();
        assert!(red.contains_char('r'));
        assert!(red.contains_char('\u{1F534}'));

        let red_ascii = resolver.get_property("Colour", "R", true).unwrap();
        assert!(red_ascii.contains_char('r'));
        assert!(!red_ascii.contains_char('\u{1F534}'));

        let size = resolver.get_property("size", "^1", false).unwrap();
        assert!(size.numeric_value().is_some());
    }

    #[test]
    fn test_unknown_inputs() {
        let resolver = Resolver::new(&fixtures::STORE, &fixtures::ALIASES);

        match resolver.get_property("Sh_ape", "red", false) {
            Err(Error::UnknownProperty { property }) => assert_eq!(property, "Sh_ape"),
            other => panic!("unexpected {other:?}"),
        }
        match resolver.get_property("colour", "Gr-een", false) {
            Err(Error::UnknownValue { property, value }) => {
                assert_eq!(property, "color");
                assert_eq!(value, "Gr-een");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_missing_entry_is_integrity_defect() {
        // The broken store lists `blue` for Unicode only
        let resolver = Resolver::new(&fixtures::BROKEN_STORE, &fixtures::BROKEN_ALIASES);

        assert!(resolver.get_property("color", "blue", false).is_ok());
        match resolver.get_property("color", "blue", true) {
            Err(err @ Error::DataIntegrity { .. }) => {
                assert!(!err.is_user_error());
                if let Error::DataIntegrity {
                    property,
                    key,
                    variant,
                } = err
                {
                    assert_eq!(property, "color");
                    assert_eq!(key, "blue");
                    assert_eq!(variant, Variant::Ascii);
                }
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_dangling_property_alias_is_integrity_defect() {
        let resolver = Resolver::new(&fixtures::STORE, &fixtures::ALIASES);
        match resolver.get_property("Hue", "red", false) {
            Err(err @ Error::DanglingAlias { .. }) => {
                assert!(!err.is_user_error());
                assert!(matches!(err, Error::DanglingAlias { target: "shade", .. }));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_ascii_only_key_is_integrity_defect() {
        // `blue` exists in the ASCII table only
        let resolver = Resolver::new(&fixtures::SKEWED_STORE, &fixtures::CLEAN_ALIASES);

        let blue = resolver.get_property("color", "blue", true).unwrap();
        assert!(blue.contains_char('b'));
        match resolver.get_property("color", "B", false) {
            Err(err @ Error::DataIntegrity { .. }) => {
                assert!(!err.is_user_error());
                assert!(matches!(
                    err,
                    Error::DataIntegrity { key, variant: Variant::Unicode, .. } if key == "blue"
                ));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_resolve_key() {
        let resolver = Resolver::builtin();
        let (table, key) = resolver.resolve_key("GCB", "^EX").unwrap();
        assert_eq!(table.name(), "graphemeclusterbreak");
        assert_eq!(key, "^extend");
        assert_eq!(resolver.supported_properties().count(), 6);
    }
}
