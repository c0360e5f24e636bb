//! Property Table Store.
//!
//! Immutable collection of per-property value tables, each available in a full-Unicode and an
//! ASCII-restricted variant. The store is an input artifact: the data is generated ahead of time
//! (see [`crate::unidata`]) and only read here.
//!
//! # Key Types
//! - [`PropertyStore`] - Canonical property identifier to [`PropertyTable`]
//! - [`PropertyTable`] - The two variants of one property
//! - [`ValueTable`] - Value-key to [`crate::DatasetEntry`]
//! - [`Variant`] - Which of the two scopes a lookup targets
//!
//! # Example
//! ```rust
//! use uniprops::store::{PropertyStore, Variant};
//!
//! let store = PropertyStore::builtin();
//! let wordbreak = store.get("wordbreak").unwrap();
//! let aletter = wordbreak.variant(Variant::Ascii).get("aletter").unwrap();
//! assert!(aletter.contains_char('a'));
//! assert!(!aletter.contains_char('é'));
//! ```

mod table;

pub use table::{PropertyKind, PropertyTable, ValueTable};

use strum::{Display, EnumCount, EnumIter};

use crate::unidata;

/// Scope of a value table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
#[strum(serialize_all = "lowercase")]
pub enum Variant {
    /// Entries cover the whole Unicode code point space
    Unicode,
    /// Entries are restricted to code points `0x00..=0x7F`
    Ascii,
}

impl Variant {
    /// Maps a `restrict_to_ascii` flag onto a variant
    #[must_use]
    pub fn from_ascii_flag(restrict_to_ascii: bool) -> Self {
        if restrict_to_ascii {
            Variant::Ascii
        } else {
            Variant::Unicode
        }
    }
}

/// Mapping from canonical property identifier to [`PropertyTable`].
///
/// Properties are kept sorted by identifier and looked up by binary search.
#[derive(Debug)]
pub struct PropertyStore {
    properties: &'static [PropertyTable],
}

static BUILTIN: PropertyStore = PropertyStore::new(&unidata::PROPERTIES);

impl PropertyStore {
    /// Wraps a static, name-sorted property slice
    #[must_use]
    pub const fn new(properties: &'static [PropertyTable]) -> Self {
        PropertyStore { properties }
    }

    /// The store built from the generated Unicode Character Database tables
    #[must_use]
    pub fn builtin() -> &'static PropertyStore {
        &BUILTIN
    }

    /// Fetch a property by canonical identifier
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&'static PropertyTable> {
        let properties: &'static [PropertyTable] = self.properties;
        properties
            .binary_search_by(|candidate| candidate.name().cmp(property))
            .ok()
            .map(|index| &properties[index])
    }

    /// Returns `true` if `property` is a canonical property identifier
    #[must_use]
    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    /// All properties in identifier order
    #[must_use]
    pub fn properties(&self) -> &'static [PropertyTable] {
        self.properties
    }

    /// Canonical identifiers in order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.properties.iter().map(PropertyTable::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::fixtures;

    #[test]
    fn test_variant_flag() {
        assert_eq!(Variant::from_ascii_flag(false), Variant::Unicode);
        assert_eq!(Variant::from_ascii_flag(true), Variant::Ascii);
        assert_eq!(Variant::Ascii.to_string(), "ascii");
        assert_eq!(Variant::COUNT, 2);
    }

    #[test]
    fn test_store_lookup() {
        let store = &fixtures::STORE;
        assert!(store.contains("color"));
        assert!(store.contains("size"));
        assert!(!store.contains("shape"));
        assert_eq!(store.names().collect::<Vec<_>>(), vec!["color", "size"]);
    }

    #[test]
    fn test_builtin_store() {
        let store = PropertyStore::builtin();
        assert_eq!(
            store.names().collect::<Vec<_>>(),
            vec![
                "eastasianwidth",
                "graphemeclusterbreak",
                "numerictype",
                "numericvalue",
                "sentencebreak",
                "wordbreak",
            ]
        );
        assert_eq!(
            store.get("numericvalue").map(PropertyTable::kind),
            Some(PropertyKind::Numeric)
        );
        assert_eq!(
            store.get("wordbreak").map(PropertyTable::kind),
            Some(PropertyKind::Enumerated)
        );
    }
}
