//! Table Integrity Checker.
//!
//! Structural invariants the property tables and alias maps must satisfy before they are used.
//! The checks are not part of normal lookups: the resolver trusts the tables, and the test suite
//! runs [`validate_builtin`] to make sure that trust is warranted.
//!
//! # Checks
//! - **Key grammar**: value-keys match `^\^?[a-z0-9./]+$`
//! - **Key order**: keys and alias tokens are sorted, so binary search finds them
//! - **Entries**: entry kind matches the property kind, classes are well formed, ASCII
//!   entries stay within `0x00..=0x7F`
//! - **Variant parity**: both variants of a property hold the same keys and numeric literals
//! - **Negation parity**: every key `k` has a `^k` counterpart
//! - **Alias targets**: aliases point at existing properties and value-keys
//! - **Alias ambiguity**: no alias token maps to two targets
//! - **Alias round-trip**: an alias resolves to the same entry as its target
//!
//! # Example
//! ```rust
//! use uniprops::validation::{validate, ValidationConfig};
//! use uniprops::{alias::AliasIndex, store::PropertyStore};
//!
//! validate(
//!     PropertyStore::builtin(),
//!     AliasIndex::builtin(),
//!     ValidationConfig::comprehensive(),
//! )?;
//! # Ok::<(), uniprops::Error>(())
//! ```

mod aliases;
mod config;
mod entries;
mod keys;
mod orchestrator;
mod parity;

pub use config::ValidationConfig;
pub use orchestrator::Orchestrator;

pub(crate) use aliases::AliasValidator;
pub(crate) use entries::EntryValidator;
pub(crate) use keys::KeyValidator;
pub(crate) use parity::ParityValidator;

use std::fmt;

use strum::{Display, EnumIter};

use crate::{alias::AliasIndex, store::PropertyStore, Result};

/// Category of an integrity violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum ViolationKind {
    /// A value-key does not match the key grammar
    KeyGrammar,
    /// Keys or alias tokens are not in ascending order
    KeyOrder,
    /// An entry's kind differs from its property's kind
    EntryKind,
    /// A character class is unsorted, overlapping or outside the code point space
    ClassShape,
    /// An ASCII table entry covers a non-ASCII code point
    AsciiScope,
    /// The two variants of a property disagree on keys or numeric literals
    VariantParity,
    /// A non-negated key lacks its `^` counterpart
    NegationParity,
    /// A property name alias points at a missing property
    PropertyAliasTarget,
    /// A value alias points at a missing key or belongs to a missing property
    ValueAliasTarget,
    /// An alias token maps to more than one target
    AmbiguousAlias,
    /// Resolving through an alias differs from resolving its target
    AliasRoundTrip,
}

/// A single integrity defect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Category of the defect
    pub kind: ViolationKind,
    /// Canonical property identifier, or alias group key, the defect was found in
    pub property: String,
    /// Human readable description
    pub detail: String,
}

impl Violation {
    /// Creates a new violation
    pub fn new(kind: ViolationKind, property: &str, detail: impl Into<String>) -> Self {
        Violation {
            kind,
            property: property.to_string(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.property, self.detail)
    }
}

/// Run an integrity pass over `store` and `aliases`.
///
/// # Errors
/// Returns [`crate::Error::Validation`] with every violation found, or
/// [`crate::Error::Integrity`] for the first one if [`ValidationConfig::fail_fast`] is set.
pub fn validate(
    store: &PropertyStore,
    aliases: &AliasIndex,
    config: ValidationConfig,
) -> Result<()> {
    Orchestrator::validate(store, aliases, config)
}

/// Run a comprehensive integrity pass over the built-in tables.
///
/// # Errors
/// See [`validate`].
pub fn validate_builtin() -> Result<()> {
    validate(
        PropertyStore::builtin(),
        AliasIndex::builtin(),
        ValidationConfig::comprehensive(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_display() {
        let violation = Violation::new(ViolationKind::NegationParity, "wordbreak", "no '^cr'");
        assert_eq!(
            violation.to_string(),
            "[negation-parity] wordbreak: no '^cr'"
        );
        assert_eq!(ViolationKind::AliasRoundTrip.to_string(), "alias-round-trip");
    }

    #[test]
    fn test_builtin_tables_are_valid() {
        if let Err(crate::Error::Validation(violations)) = validate_builtin() {
            for violation in &violations {
                eprintln!("{violation}");
            }
            panic!("{} violation(s) in the built-in tables", violations.len());
        }
        assert!(validate_builtin().is_ok());
    }
}
