//! Value tables and per-property table pairs.
//!
//! A [`ValueTable`] is a static, key-sorted slice of `(value-key, entry)` pairs. Lookups are a
//! binary search over the keys, so a table is usable straight out of read-only memory with no
//! construction step. A [`PropertyTable`] groups the two variants of one property.

use crate::{entry::DatasetEntry, store::Variant};

use strum::{Display, EnumIter};

/// The payload kind every entry of a property shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PropertyKind {
    /// Enumerated property, entries are [`DatasetEntry::Class`]
    Enumerated,
    /// Numeric-valued property, entries are [`DatasetEntry::Numeric`]
    Numeric,
}

/// Mapping from value-key to [`DatasetEntry`] for one property in one variant.
///
/// Keys must be stored in ascending byte order without duplicates; the integrity checker
/// verifies this for the generated tables.
#[derive(Debug)]
pub struct ValueTable {
    entries: &'static [(&'static str, DatasetEntry)],
}

impl ValueTable {
    /// Wraps a static, key-sorted entry slice
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, DatasetEntry)]) -> Self {
        ValueTable { entries }
    }

    /// Fetch the entry stored under `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'static DatasetEntry> {
        self.entries
            .binary_search_by(|(candidate, _)| (*candidate).cmp(key))
            .ok()
            .map(|index| &self.entries[index].1)
    }

    /// Returns `true` if `key` is stored in the table
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table holds no keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the value-keys in storage order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Iterates `(value-key, entry)` pairs in storage order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static DatasetEntry)> + '_ {
        let entries: &'static [(&'static str, DatasetEntry)] = self.entries;
        entries.iter().map(|(key, entry)| (*key, entry))
    }
}

/// Both variants of one property's value table.
#[derive(Debug)]
pub struct PropertyTable {
    name: &'static str,
    kind: PropertyKind,
    unicode: &'static ValueTable,
    ascii: &'static ValueTable,
}

impl PropertyTable {
    /// Creates a new property table
    ///
    /// ## Arguments
    /// * `name` - Canonical property identifier
    /// * `kind` - Payload kind shared by all entries
    /// * `unicode` - Value table scoped to the full Unicode range
    /// * `ascii` - Value table scoped to ASCII code points
    #[must_use]
    pub const fn new(
        name: &'static str,
        kind: PropertyKind,
        unicode: &'static ValueTable,
        ascii: &'static ValueTable,
    ) -> Self {
        PropertyTable {
            name,
            kind,
            unicode,
            ascii,
        }
    }

    /// Canonical property identifier
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Payload kind of the property
    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Select the value table for `variant`
    #[must_use]
    pub fn variant(&self, variant: Variant) -> &'static ValueTable {
        match variant {
            Variant::Unicode => self.unicode,
            Variant::Ascii => self.ascii,
        }
    }

    /// The full Unicode value table
    #[must_use]
    pub fn unicode(&self) -> &'static ValueTable {
        self.unicode
    }

    /// The ASCII value table
    #[must_use]
    pub fn ascii(&self) -> &'static ValueTable {
        self.ascii
    }

    /// Value-keys of the property. Both variants hold the same key set, the Unicode one is
    /// authoritative.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.unicode.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::fixtures;

    #[test]
    fn test_value_table_lookup() {
        let table = &fixtures::COLOR_UNICODE;
        assert_eq!(table.len(), 4);
        assert!(!table.is_empty());
        assert!(table.contains_key("red"));
        assert!(table.contains_key("^red"));
        assert!(!table.contains_key("green"));
        assert!(table.get("blue").is_some());
        assert_eq!(
            table.keys().collect::<Vec<_>>(),
            vec!["^blue", "^red", "blue", "red"]
        );
        assert_eq!(table.iter().count(), 4);
    }

    #[test]
    fn test_property_table_variants() {
        let property = fixtures::color();
        assert_eq!(property.name(), "color");
        assert_eq!(property.kind(), PropertyKind::Enumerated);
        assert!(std::ptr::eq(
            property.variant(Variant::Unicode),
            property.unicode()
        ));
        assert!(std::ptr::eq(property.variant(Variant::Ascii), property.ascii()));
        assert_eq!(property.keys().count(), 4);
    }

    #[test]
    fn test_empty_table() {
        static EMPTY: ValueTable = ValueTable::new(&[]);
        assert!(EMPTY.is_empty());
        assert!(EMPTY.get("anything").is_none());
    }
}
