//! Entry content checks: kind, class shape and ASCII scope

use crate::{
    entry::EntryKind,
    store::{PropertyKind, PropertyTable, Variant},
    validation::{ValidationConfig, Violation, ViolationKind},
};

/// Highest code point an ASCII table entry may cover
const ASCII_MAX: u32 = 0x7F;

/// Checks every entry of a property for consistency with the property and its variant.
pub(crate) struct EntryValidator;

impl EntryValidator {
    /// Validates both variants of `property`
    pub fn validate(property: &PropertyTable, config: &ValidationConfig) -> Vec<Violation> {
        let mut violations = Vec::new();
        if !config.enable_entry_validation {
            return violations;
        }

        let expected = match property.kind() {
            PropertyKind::Enumerated => EntryKind::Class,
            PropertyKind::Numeric => EntryKind::Numeric,
        };

        for variant in [Variant::Unicode, Variant::Ascii] {
            for (key, entry) in property.variant(variant).iter() {
                if entry.kind() != expected {
                    violations.push(Violation::new(
                        ViolationKind::EntryKind,
                        property.name(),
                        format!(
                            "{variant} entry '{key}' is a {} entry in a {} property",
                            entry.kind(),
                            property.kind()
                        ),
                    ));
                }

                let class = entry.class();
                if !class.is_well_formed() {
                    violations.push(Violation::new(
                        ViolationKind::ClassShape,
                        property.name(),
                        format!("{variant} entry '{key}' has malformed ranges"),
                    ));
                }

                if variant == Variant::Ascii {
                    if let Some(&(_, last)) = class.ranges().last() {
                        if last > ASCII_MAX {
                            violations.push(Violation::new(
                                ViolationKind::AsciiScope,
                                property.name(),
                                format!("ascii entry '{key}' reaches U+{last:04X}"),
                            ));
                        }
                    }
                }
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::fixtures;

    #[test]
    fn test_clean_properties() {
        for property in fixtures::STORE.properties() {
            let violations = EntryValidator::validate(property, &ValidationConfig::default());
            assert!(violations.is_empty(), "{violations:?}");
        }
    }

    #[test]
    fn test_broken_property() {
        let property = fixtures::BROKEN_STORE.get("color").unwrap();
        let violations = EntryValidator::validate(property, &ValidationConfig::default());

        let kinds: Vec<_> = violations.iter().map(|v| v.kind).collect();
        assert_eq!(kinds.len(), 2, "{violations:?}");
        assert!(kinds.contains(&ViolationKind::EntryKind));
        assert!(kinds.contains(&ViolationKind::AsciiScope));
    }
}
