//! Alias Index.
//!
//! Two independent levels of indirection sit in front of the property tables:
//!
//! 1. **Property name aliases**, stored under the reserved key `_`, map an alternate property
//!    token (`wb`, `nv`) onto a canonical property identifier (`wordbreak`, `numericvalue`).
//! 2. **Value aliases**, stored under each canonical property identifier, map an alternate value
//!    token (`le`, `0.5`) onto a canonical value-key (`aletter`, `1/2`).
//!
//! Both levels only ever consult a token that is *not* already canonical: a canonical identifier
//! or value-key is returned unchanged. All tokens are expected in canonical (lowercase) form;
//! [`crate::Resolver`] takes care of normalising caller input.
//!
//! # Example
//! ```rust
//! use uniprops::{alias::AliasIndex, store::PropertyStore};
//!
//! let store = PropertyStore::builtin();
//! let aliases = AliasIndex::builtin();
//!
//! let property = aliases.resolve_property_name(store, "wb")?;
//! assert_eq!(property.name(), "wordbreak");
//! assert_eq!(aliases.resolve_value(property, "le")?, "aletter");
//! assert_eq!(aliases.resolve_value(property, "^le")?, "^aletter");
//! # Ok::<(), uniprops::Error>(())
//! ```

use std::borrow::Cow;

use log::warn;

use crate::{store::PropertyStore, store::PropertyTable, unidata, Error, Result};

/// Key under which the property name aliases are stored.
pub const PROPERTY_NAME_KEY: &str = "_";

/// Prefix marking a negated value-key.
pub const NEGATION_PREFIX: char = '^';

/// Sorted mapping from alias token to canonical target.
#[derive(Debug, Clone, Copy)]
pub struct AliasMap {
    entries: &'static [(&'static str, &'static str)],
}

impl AliasMap {
    /// Wraps a static, token-sorted alias slice
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        AliasMap { entries }
    }

    /// Canonical target of `alias`
    #[must_use]
    pub fn get(&self, alias: &str) -> Option<&'static str> {
        self.entries
            .binary_search_by(|(candidate, _)| (*candidate).cmp(alias))
            .ok()
            .map(|index| self.entries[index].1)
    }

    /// Number of aliases
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no alias is defined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(alias, target)` pairs in storage order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// The raw entries, in storage order
    #[must_use]
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }
}

/// Property name aliases plus the value aliases of every property.
///
/// The layout mirrors the generated data: one sorted list of `(key, aliases)` groups, where the
/// `_` group holds the property name aliases and each other group is named after the canonical
/// property identifier it belongs to.
#[derive(Debug)]
pub struct AliasIndex {
    groups: &'static [(&'static str, &'static [(&'static str, &'static str)])],
}

static BUILTIN: AliasIndex = AliasIndex::new(unidata::alias::ALIASES);

impl AliasIndex {
    /// Wraps a static, key-sorted list of alias groups
    #[must_use]
    pub const fn new(
        groups: &'static [(&'static str, &'static [(&'static str, &'static str)])],
    ) -> Self {
        AliasIndex { groups }
    }

    /// The alias index built from the generated Unicode Character Database tables
    #[must_use]
    pub fn builtin() -> &'static AliasIndex {
        &BUILTIN
    }

    fn group(&self, key: &str) -> Option<AliasMap> {
        self.groups
            .binary_search_by(|(candidate, _)| (*candidate).cmp(key))
            .ok()
            .map(|index| AliasMap::new(self.groups[index].1))
    }

    /// The property name aliases (`_` group). Empty if the group is absent.
    #[must_use]
    pub fn property_aliases(&self) -> AliasMap {
        self.group(PROPERTY_NAME_KEY)
            .unwrap_or(AliasMap::new(&[]))
    }

    /// The value aliases of `property`. Empty if the property defines none.
    #[must_use]
    pub fn value_aliases(&self, property: &str) -> AliasMap {
        if property == PROPERTY_NAME_KEY {
            return AliasMap::new(&[]);
        }
        self.group(property).unwrap_or(AliasMap::new(&[]))
    }

    /// Iterates all `(key, aliases)` groups, including the `_` group
    pub fn groups(&self) -> impl Iterator<Item = (&'static str, AliasMap)> + '_ {
        self.groups
            .iter()
            .map(|(key, entries)| (*key, AliasMap::new(entries)))
    }

    /// Resolves a canonical-form property token to its table.
    ///
    /// A token that already names a property is returned as is, otherwise it is looked up in the
    /// property name aliases.
    ///
    /// # Errors
    /// - [`Error::UnknownProperty`] if neither lookup succeeds
    /// - [`Error::DanglingAlias`] if an alias matches but points at a property the store does
    ///   not hold
    pub fn resolve_property_name(
        &self,
        store: &PropertyStore,
        token: &str,
    ) -> Result<&'static PropertyTable> {
        if let Some(table) = store.get(token) {
            return Ok(table);
        }

        let Some(canonical) = self.property_aliases().get(token) else {
            return Err(Error::UnknownProperty {
                property: token.to_string(),
            });
        };

        store.get(canonical).ok_or_else(|| {
            warn!(
                "property alias '{}' points at '{}' which is missing from the store",
                token, canonical
            );
            Error::DanglingAlias {
                alias: token.to_string(),
                target: canonical,
            }
        })
    }

    /// Resolves a canonical-form value token to a value-key of `property`.
    ///
    /// The token is tried, in order, as a value-key of either variant, as a value alias, and
    /// finally, if it carries the `^` prefix, as a negated value alias (`^le` → `^aletter`).
    /// Only the first lookup can return a borrowed key; an aliased negation is assembled.
    ///
    /// # Errors
    /// Returns [`Error::UnknownValue`] if none of the lookups succeeds.
    pub fn resolve_value<'t>(
        &self,
        property: &PropertyTable,
        token: &'t str,
    ) -> Result<Cow<'t, str>> {
        // A key missing from one variant surfaces as a data defect at fetch time
        if property.unicode().contains_key(token) || property.ascii().contains_key(token) {
            return Ok(Cow::Borrowed(token));
        }

        let aliases = self.value_aliases(property.name());
        if let Some(canonical) = aliases.get(token) {
            return Ok(Cow::Borrowed(canonical));
        }

        if let Some(positive) = token.strip_prefix(NEGATION_PREFIX) {
            if let Some(canonical) = aliases.get(positive) {
                return Ok(Cow::Owned(format!("{NEGATION_PREFIX}{canonical}")));
            }
        }

        Err(Error::UnknownValue {
            property: property.name().to_string(),
            value: token.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::fixtures;

    #[test]
    fn test_alias_map() {
        let aliases = fixtures::ALIASES.value_aliases("color");
        assert_eq!(aliases.len(), 2);
        assert!(!aliases.is_empty());
        assert_eq!(aliases.get("b"), Some("blue"));
        assert_eq!(aliases.get("r"), Some("red"));
        assert_eq!(aliases.get("g"), None);
        assert_eq!(aliases.iter().count(), 2);
    }

    #[test]
    fn test_missing_groups() {
        assert!(fixtures::ALIASES.value_aliases("size").is_empty());
        assert!(fixtures::ALIASES.value_aliases("shape").is_empty());
        assert!(fixtures::ALIASES.value_aliases(PROPERTY_NAME_KEY).is_empty());
        assert!(AliasIndex::new(&[]).property_aliases().is_empty());
        assert_eq!(fixtures::ALIASES.groups().count(), 2);
    }

    #[test]
    fn test_resolve_property_name() {
        let store = &fixtures::STORE;
        let aliases = &fixtures::ALIASES;

        assert_eq!(
            aliases.resolve_property_name(store, "color").unwrap().name(),
            "color"
        );
        assert_eq!(
            aliases.resolve_property_name(store, "colour").unwrap().name(),
            "color"
        );
        assert!(matches!(
            aliases.resolve_property_name(store, "shape"),
            Err(Error::UnknownProperty { property }) if property == "shape"
        ));
    }

    #[test]
    fn test_resolve_property_name_dangling_alias() {
        // `hue` is aliased to a property the store does not hold
        match fixtures::ALIASES.resolve_property_name(&fixtures::STORE, "hue") {
            Err(err @ Error::DanglingAlias { .. }) => {
                assert!(!err.is_user_error());
                assert!(matches!(
                    err,
                    Error::DanglingAlias { alias, target } if alias == "hue" && target == "shade"
                ));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_resolve_value() {
        let property = fixtures::color();
        let aliases = &fixtures::ALIASES;

        assert_eq!(aliases.resolve_value(property, "red").unwrap(), "red");
        assert_eq!(aliases.resolve_value(property, "^red").unwrap(), "^red");
        assert_eq!(aliases.resolve_value(property, "r").unwrap(), "red");
        assert_eq!(aliases.resolve_value(property, "^b").unwrap(), "^blue");
        assert!(matches!(
            aliases.resolve_value(property, "^^b"),
            Err(Error::UnknownValue { .. })
        ));
        assert!(matches!(
            aliases.resolve_value(property, "green"),
            Err(Error::UnknownValue { property, value }) if property == "color" && value == "green"
        ));
    }

    #[test]
    fn test_resolve_value_checks_both_variants() {
        let property = fixtures::SKEWED_STORE.get("color").unwrap();
        assert_eq!(
            fixtures::CLEAN_ALIASES.resolve_value(property, "blue").unwrap(),
            "blue"
        );
        assert_eq!(
            fixtures::CLEAN_ALIASES.resolve_value(property, "b").unwrap(),
            "blue"
        );
    }

    #[test]
    fn test_builtin_aliases() {
        let store = PropertyStore::builtin();
        let aliases = AliasIndex::builtin();

        let nv = aliases.resolve_property_name(store, "nv").unwrap();
        assert_eq!(nv.name(), "numericvalue");
        assert_eq!(aliases.resolve_value(nv, "0.5").unwrap(), "1/2");
        assert_eq!(aliases.resolve_value(nv, "2").unwrap(), "2");

        let ea = aliases.resolve_property_name(store, "ea").unwrap();
        assert_eq!(aliases.resolve_value(ea, "na").unwrap(), "narrow");
        assert_eq!(aliases.resolve_value(ea, "n").unwrap(), "neutral");
    }
}
