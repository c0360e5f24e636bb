//! Alias index checks: targets, ordering, ambiguity and round-trips

use crate::{
    alias::{AliasIndex, AliasMap, PROPERTY_NAME_KEY},
    resolver::Resolver,
    store::{PropertyStore, PropertyTable, Variant},
    validation::{ValidationConfig, Violation, ViolationKind},
};

/// Checks the alias index against the property store it is resolved with.
pub(crate) struct AliasValidator;

impl AliasValidator {
    /// Validates every alias group of `aliases`
    pub fn validate(
        store: &PropertyStore,
        aliases: &AliasIndex,
        config: &ValidationConfig,
    ) -> Vec<Violation> {
        let mut violations = Vec::new();

        if config.enable_key_order_validation {
            Self::validate_group_order(aliases, &mut violations);
        }

        for (group, map) in aliases.groups() {
            if config.enable_key_order_validation {
                Self::validate_order(group, map, &mut violations);
            }
            if config.enable_alias_ambiguity_validation {
                Self::validate_duplicates(group, map, &mut violations);
            }

            if group == PROPERTY_NAME_KEY {
                Self::validate_property_aliases(store, aliases, map, config, &mut violations);
                continue;
            }

            match store.get(group) {
                Some(property) => Self::validate_value_aliases(
                    store,
                    aliases,
                    property,
                    map,
                    config,
                    &mut violations,
                ),
                None if config.enable_alias_target_validation => {
                    violations.push(Violation::new(
                        ViolationKind::ValueAliasTarget,
                        group,
                        "value aliases are defined for a property that does not exist",
                    ));
                }
                None => {}
            }
        }

        violations
    }

    fn validate_group_order(aliases: &AliasIndex, violations: &mut Vec<Violation>) {
        let groups: Vec<&str> = aliases.groups().map(|(group, _)| group).collect();
        for pair in groups.windows(2) {
            if pair[0] >= pair[1] {
                violations.push(Violation::new(
                    ViolationKind::KeyOrder,
                    pair[1],
                    format!("alias group '{}' is not ordered after '{}'", pair[1], pair[0]),
                ));
            }
        }
    }

    fn validate_order(group: &str, map: AliasMap, violations: &mut Vec<Violation>) {
        // Equal neighbours are duplicates, reported as ambiguity
        for pair in map.entries().windows(2) {
            if pair[0].0 > pair[1].0 {
                violations.push(Violation::new(
                    ViolationKind::KeyOrder,
                    group,
                    format!(
                        "alias '{}' is not ordered before '{}'",
                        pair[0].0, pair[1].0
                    ),
                ));
            }
        }
    }

    fn validate_duplicates(group: &str, map: AliasMap, violations: &mut Vec<Violation>) {
        for pair in map.entries().windows(2) {
            let ((alias, first), (next, second)) = (pair[0], pair[1]);
            if alias == next && first != second {
                violations.push(Violation::new(
                    ViolationKind::AmbiguousAlias,
                    group,
                    format!("alias '{alias}' maps to both '{first}' and '{second}'"),
                ));
            }
        }
    }

    fn validate_property_aliases(
        store: &PropertyStore,
        aliases: &AliasIndex,
        map: AliasMap,
        config: &ValidationConfig,
        violations: &mut Vec<Violation>,
    ) {
        let resolver = Resolver::new(store, aliases);

        for (alias, target) in map.iter() {
            let Some(property) = store.get(target) else {
                if config.enable_alias_target_validation {
                    violations.push(Violation::new(
                        ViolationKind::PropertyAliasTarget,
                        PROPERTY_NAME_KEY,
                        format!("alias '{alias}' points at missing property '{target}'"),
                    ));
                }
                continue;
            };

            if config.enable_alias_ambiguity_validation && alias != target && store.contains(alias)
            {
                violations.push(Violation::new(
                    ViolationKind::AmbiguousAlias,
                    PROPERTY_NAME_KEY,
                    format!("alias '{alias}' shadows the property of the same name"),
                ));
            }

            if config.enable_alias_round_trip_validation {
                Self::validate_property_round_trip(&resolver, alias, property, violations);
            }
        }
    }

    fn validate_property_round_trip(
        resolver: &Resolver<'_>,
        alias: &str,
        property: &PropertyTable,
        violations: &mut Vec<Violation>,
    ) {
        for key in property.keys() {
            for variant in [Variant::Unicode, Variant::Ascii] {
                let via_alias = resolver.get_property_variant(alias, key, variant);
                let direct = resolver.get_property_variant(property.name(), key, variant);
                let same = matches!((&via_alias, &direct), (Ok(a), Ok(b)) if a == b);
                if !same {
                    violations.push(Violation::new(
                        ViolationKind::AliasRoundTrip,
                        PROPERTY_NAME_KEY,
                        format!(
                            "'{alias}={key}' and '{}={key}' differ in the {variant} table",
                            property.name()
                        ),
                    ));
                    // One report per alias is enough
                    return;
                }
            }
        }
    }

    fn validate_value_aliases(
        store: &PropertyStore,
        aliases: &AliasIndex,
        property: &PropertyTable,
        map: AliasMap,
        config: &ValidationConfig,
        violations: &mut Vec<Violation>,
    ) {
        let resolver = Resolver::new(store, aliases);
        let name = property.name();

        for (alias, target) in map.iter() {
            if !property.unicode().contains_key(target) {
                if config.enable_alias_target_validation {
                    violations.push(Violation::new(
                        ViolationKind::ValueAliasTarget,
                        name,
                        format!("alias '{alias}' points at missing value-key '{target}'"),
                    ));
                }
                continue;
            }

            if config.enable_alias_ambiguity_validation
                && alias != target
                && property.unicode().contains_key(alias)
            {
                violations.push(Violation::new(
                    ViolationKind::AmbiguousAlias,
                    name,
                    format!("alias '{alias}' shadows the value-key of the same name"),
                ));
            }

            if !config.enable_alias_round_trip_validation {
                continue;
            }
            for variant in [Variant::Unicode, Variant::Ascii] {
                let via_alias = resolver.get_property_variant(name, alias, variant);
                let direct = resolver.get_property_variant(name, target, variant);
                let same = matches!((&via_alias, &direct), (Ok(a), Ok(b)) if a == b);
                if !same {
                    violations.push(Violation::new(
                        ViolationKind::AliasRoundTrip,
                        name,
                        format!("'{alias}' and '{target}' differ in the {variant} table"),
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::fixtures;

    fn count(violations: &[Violation], kind: ViolationKind) -> usize {
        violations.iter().filter(|v| v.kind == kind).count()
    }

    #[test]
    fn test_clean_aliases() {
        let violations = AliasValidator::validate(
            &fixtures::STORE,
            &fixtures::CLEAN_ALIASES,
            &ValidationConfig::default(),
        );
        assert!(violations.is_empty(), "{violations:?}");
    }

    #[test]
    fn test_dangling_property_alias() {
        let violations = AliasValidator::validate(
            &fixtures::STORE,
            &fixtures::ALIASES,
            &ValidationConfig::default(),
        );
        assert_eq!(violations.len(), 1, "{violations:?}");
        assert_eq!(violations[0].kind, ViolationKind::PropertyAliasTarget);
        assert_eq!(
            violations[0].detail,
            "alias 'hue' points at missing property 'shade'"
        );
    }

    #[test]
    fn test_broken_aliases() {
        let violations = AliasValidator::validate(
            &fixtures::BROKEN_STORE,
            &fixtures::BROKEN_ALIASES,
            &ValidationConfig::default(),
        );

        assert_eq!(count(&violations, ViolationKind::PropertyAliasTarget), 1);
        // `g` -> `gray`, and the `shape` group
        assert_eq!(count(&violations, ViolationKind::ValueAliasTarget), 2);
        // `b` listed twice, `red` shadowing the canonical key
        assert_eq!(count(&violations, ViolationKind::AmbiguousAlias), 2);
        assert!(count(&violations, ViolationKind::AliasRoundTrip) > 0);
        assert_eq!(count(&violations, ViolationKind::KeyOrder), 0);
    }

    #[test]
    fn test_round_trip_only() {
        let config = ValidationConfig {
            enable_alias_round_trip_validation: true,
            ..ValidationConfig::disabled()
        };
        let violations = AliasValidator::validate(
            &fixtures::BROKEN_STORE,
            &fixtures::BROKEN_ALIASES,
            &config,
        );
        assert!(!violations.is_empty());
        assert!(violations
            .iter()
            .all(|v| v.kind == ViolationKind::AliasRoundTrip));
        assert!(violations
            .iter()
            .any(|v| v.detail == "'red' and 'blue' differ in the unicode table"));
    }
}
