//! Value-key grammar and ordering checks

use crate::{
    alias::NEGATION_PREFIX,
    store::{PropertyTable, ValueTable, Variant},
    validation::{ValidationConfig, Violation, ViolationKind},
};

/// Checks the value-keys of a property against the key grammar and the storage order.
pub(crate) struct KeyValidator;

impl KeyValidator {
    /// Returns `true` if `key` matches `^\^?[a-z0-9./]+$`
    pub fn is_valid_key(key: &str) -> bool {
        let body = key.strip_prefix(NEGATION_PREFIX).unwrap_or(key);
        !body.is_empty()
            && body
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'.' || b == b'/')
    }

    /// Validates both variants of `property`
    pub fn validate(property: &PropertyTable, config: &ValidationConfig) -> Vec<Violation> {
        let mut violations = Vec::new();

        for variant in [Variant::Unicode, Variant::Ascii] {
            let table = property.variant(variant);

            if config.enable_key_grammar_validation {
                Self::validate_grammar(property.name(), variant, table, &mut violations);
            }
            if config.enable_key_order_validation {
                Self::validate_order(property.name(), variant, table, &mut violations);
            }
        }

        violations
    }

    fn validate_grammar(
        name: &str,
        variant: Variant,
        table: &ValueTable,
        violations: &mut Vec<Violation>,
    ) {
        for key in table.keys().filter(|key| !Self::is_valid_key(key)) {
            violations.push(Violation::new(
                ViolationKind::KeyGrammar,
                name,
                format!("{variant} key '{key}' is not a valid value-key"),
            ));
        }
    }

    fn validate_order(
        name: &str,
        variant: Variant,
        table: &ValueTable,
        violations: &mut Vec<Violation>,
    ) {
        let keys: Vec<&str> = table.keys().collect();
        for pair in keys.windows(2) {
            if pair[0] >= pair[1] {
                violations.push(Violation::new(
                    ViolationKind::KeyOrder,
                    name,
                    format!(
                        "{variant} key '{}' is not ordered before '{}'",
                        pair[0], pair[1]
                    ),
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
    fn test_key_grammar() {
        for key in ["aletter", "^aletter", "1/2", "^1/160", "0.5", "nan", "^10000"] {
            assert!(KeyValidator::is_valid_key(key), "{key}");
        }
        for key in ["", "^", "^^a", "ALetter", "a_letter", "-1/2", "a b", "green!", "é"] {
            assert!(!KeyValidator::is_valid_key(key), "{key}");
        }
    }

    #[test]
    fn test_clean_property() {
        let violations = KeyValidator::validate(fixtures::color(), &ValidationConfig::default());
        assert!(violations.is_empty(), "{violations:?}");
    }

    #[test]
    fn test_broken_property() {
        let property = fixtures::BROKEN_STORE.get("color").unwrap();
        let violations = KeyValidator::validate(property, &ValidationConfig::default());

        let grammar = violations
            .iter()
            .filter(|v| v.kind == ViolationKind::KeyGrammar)
            .count();
        // `green!` in both variants
        assert_eq!(grammar, 2);

        let order: Vec<_> = violations
            .iter()
            .filter(|v| v.kind == ViolationKind::KeyOrder)
            .collect();
        assert_eq!(order.len(), 1);
        assert!(order[0].detail.starts_with("ascii key 'red'"));
    }

    #[test]
    fn test_disabled_checks() {
        let property = fixtures::BROKEN_STORE.get("color").unwrap();
        let violations = KeyValidator::validate(property, &ValidationConfig::disabled());
        assert!(violations.is_empty());
    }
}
