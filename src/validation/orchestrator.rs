//! # Integrity Pass Orchestration
//!
//! Runs the individual validators over a [`PropertyStore`] and an [`AliasIndex`] and folds their
//! findings into a single outcome.
//!
//! ## Execution
//! - **Per-property checks** (key grammar and order, entries, variant and negation parity) only
//!   read one property and run in parallel across properties using [`rayon`]
//! - **Alias checks** read the whole store and run alongside the per-property checks
//! - **Fail-fast** passes run sequentially, in storage order, and stop at the first violation
//!
//! Violations are reported in a deterministic order: properties in storage order, followed by
//! the alias findings.

use log::{debug, warn};
use rayon::prelude::*;

use crate::{
    alias::AliasIndex,
    store::{PropertyStore, PropertyTable},
    validation::{
        AliasValidator, EntryValidator, KeyValidator, ParityValidator, ValidationConfig,
        Violation,
    },
    Error, Result,
};

/// Coordinates the validators of an integrity pass.
pub struct Orchestrator;

impl Orchestrator {
    /// Runs an integrity pass.
    ///
    /// # Errors
    /// - [`Error::Integrity`] describing the first violation, if `config.fail_fast` is set
    /// - [`Error::Validation`] with every violation found otherwise
    pub fn validate(
        store: &PropertyStore,
        aliases: &AliasIndex,
        config: ValidationConfig,
    ) -> Result<()> {
        if !config.any_enabled() {
            return Ok(());
        }

        if config.fail_fast {
            return match Self::first(store, aliases, &config) {
                Some(violation) => {
                    warn!("{violation}");
                    Err(integrity_error!("{}", violation))
                }
                None => Ok(()),
            };
        }

        let violations = Self::collect(store, aliases, &config);
        debug!(
            "integrity pass over {} properties and {} alias groups found {} violation(s)",
            store.properties().len(),
            aliases.groups().count(),
            violations.len()
        );

        if violations.is_empty() {
            return Ok(());
        }
        for violation in &violations {
            warn!("{violation}");
        }
        Err(Error::Validation(violations))
    }

    /// Runs every enabled check and returns all violations, ignoring `config.fail_fast`.
    #[must_use]
    pub fn collect(
        store: &PropertyStore,
        aliases: &AliasIndex,
        config: &ValidationConfig,
    ) -> Vec<Violation> {
        let (property_violations, alias_violations) = rayon::join(
            || {
                store
                    .properties()
                    .par_iter()
                    .map(|property| Self::validate_property(property, config))
                    .collect::<Vec<_>>()
            },
            || AliasValidator::validate(store, aliases, config),
        );

        property_violations
            .into_iter()
            .flatten()
            .chain(alias_violations)
            .collect()
    }

    fn validate_property(property: &PropertyTable, config: &ValidationConfig) -> Vec<Violation> {
        let mut violations = KeyValidator::validate(property, config);
        violations.extend(EntryValidator::validate(property, config));
        violations.extend(ParityValidator::validate(property, config));
        violations
    }

    fn first(
        store: &PropertyStore,
        aliases: &AliasIndex,
        config: &ValidationConfig,
    ) -> Option<Violation> {
        store
            .properties()
            .iter()
            .find_map(|property| Self::validate_property(property, config).into_iter().next())
            .or_else(|| {
                AliasValidator::validate(store, aliases, config)
                    .into_iter()
                    .next()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test::fixtures, validation::ViolationKind};

    #[test]
    fn test_clean_fixture() {
        let result = Orchestrator::validate(
            &fixtures::STORE,
            &fixtures::CLEAN_ALIASES,
            ValidationConfig::comprehensive(),
        );
        assert!(result.is_ok(), "{result:?}");
    }

    #[test]
    fn test_disabled_skips_everything() {
        assert!(Orchestrator::validate(
            &fixtures::BROKEN_STORE,
            &fixtures::BROKEN_ALIASES,
            ValidationConfig::disabled(),
        )
        .is_ok());
    }

    #[test]
    fn test_broken_fixture_collects_all() {
        match Orchestrator::validate(
            &fixtures::BROKEN_STORE,
            &fixtures::BROKEN_ALIASES,
            ValidationConfig::comprehensive(),
        ) {
            Err(Error::Validation(violations)) => {
                for kind in [
                    ViolationKind::KeyGrammar,
                    ViolationKind::KeyOrder,
                    ViolationKind::EntryKind,
                    ViolationKind::AsciiScope,
                    ViolationKind::VariantParity,
                    ViolationKind::NegationParity,
                    ViolationKind::PropertyAliasTarget,
                    ViolationKind::ValueAliasTarget,
                    ViolationKind::AmbiguousAlias,
                    ViolationKind::AliasRoundTrip,
                ] {
                    assert!(
                        violations.iter().any(|v| v.kind == kind),
                        "no {kind} violation in {violations:?}"
                    );
                }
                // Property findings come first
                assert_eq!(violations[0].property, "color");
                assert_ne!(violations[0].kind, ViolationKind::PropertyAliasTarget);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_fail_fast() {
        match Orchestrator::validate(
            &fixtures::BROKEN_STORE,
            &fixtures::BROKEN_ALIASES,
            ValidationConfig::strict(),
        ) {
            Err(Error::Integrity { message, .. }) => {
                assert!(message.starts_with("[key-grammar] color:"), "{message}");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_collect_is_deterministic() {
        let config = ValidationConfig::comprehensive();
        let first =
            Orchestrator::collect(&fixtures::BROKEN_STORE, &fixtures::BROKEN_ALIASES, &config);
        let second =
            Orchestrator::collect(&fixtures::BROKEN_STORE, &fixtures::BROKEN_ALIASES, &config);
        assert_eq!(first, second);
    }
}
