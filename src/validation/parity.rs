//! Cross-variant and negation parity checks

use std::collections::BTreeMap;

use crate::{
    alias::NEGATION_PREFIX,
    store::{PropertyTable, Variant},
    validation::{ValidationConfig, Violation, ViolationKind},
};

/// Checks that the Unicode and ASCII tables of a property are structurally parallel and that
/// every positive key has its negation.
pub(crate) struct ParityValidator;

impl ParityValidator {
    /// Validates `property`
    pub fn validate(property: &PropertyTable, config: &ValidationConfig) -> Vec<Violation> {
        let mut violations = Vec::new();

        if config.enable_variant_parity_validation {
            Self::validate_variants(property, &mut violations);
        }
        if config.enable_negation_parity_validation {
            for variant in [Variant::Unicode, Variant::Ascii] {
                Self::validate_negations(property, variant, &mut violations);
            }
        }

        violations
    }

    fn validate_variants(property: &PropertyTable, violations: &mut Vec<Violation>) {
        // Collected by iteration so that an unordered table is still compared correctly
        let unicode: BTreeMap<&str, _> = property.unicode().iter().collect();
        let ascii: BTreeMap<&str, _> = property.ascii().iter().collect();

        for key in unicode.keys().filter(|key| !ascii.contains_key(*key)) {
            violations.push(Violation::new(
                ViolationKind::VariantParity,
                property.name(),
                format!("key '{key}' is missing from the ascii table"),
            ));
        }
        for key in ascii.keys().filter(|key| !unicode.contains_key(*key)) {
            violations.push(Violation::new(
                ViolationKind::VariantParity,
                property.name(),
                format!("key '{key}' is missing from the unicode table"),
            ));
        }

        // Only the covered code points may differ, never the literal
        for (key, full) in &unicode {
            let Some(restricted) = ascii.get(key) else {
                continue;
            };
            if full.numeric_value() != restricted.numeric_value() {
                violations.push(Violation::new(
                    ViolationKind::VariantParity,
                    property.name(),
                    format!("key '{key}' carries different numeric literals per variant"),
                ));
            }
        }
    }

    fn validate_negations(
        property: &PropertyTable,
        variant: Variant,
        violations: &mut Vec<Violation>,
    ) {
        let table = property.variant(variant);
        for key in table.keys() {
            if key.starts_with(NEGATION_PREFIX) {
                continue;
            }
            if !table.contains_key(&format!("{NEGATION_PREFIX}{key}")) {
                violations.push(Violation::new(
                    ViolationKind::NegationParity,
                    property.name(),
                    format!("{variant} key '{key}' has no '{NEGATION_PREFIX}{key}' counterpart"),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::fixtures;

    #[test]
    fn test_clean_properties() {
        for property in fixtures::STORE.properties() {
            let violations = ParityValidator::validate(property, &ValidationConfig::default());
            assert!(violations.is_empty(), "{violations:?}");
        }
    }

    #[test]
    fn test_broken_property() {
        let property = fixtures::BROKEN_STORE.get("color").unwrap();
        let violations = ParityValidator::validate(property, &ValidationConfig::default());

        let missing: Vec<_> = violations
            .iter()
            .filter(|v| v.kind == ViolationKind::VariantParity)
            .map(|v| v.detail.as_str())
            .collect();
        assert!(missing.contains(&"key 'blue' is missing from the ascii table"));
        assert!(missing
            .contains(&"key 'green!' carries different numeric literals per variant"));

        let negations = violations
            .iter()
            .filter(|v| v.kind == ViolationKind::NegationParity)
            .count();
        // `blue` and `green!` in unicode, `green!` in ascii
        assert_eq!(negations, 3);
    }

    #[test]
    fn test_minimal_config_keeps_parity() {
        let property = fixtures::BROKEN_STORE.get("color").unwrap();
        let violations = ParityValidator::validate(property, &ValidationConfig::minimal());
        assert!(!violations.is_empty());
    }
}
