//! Validation configuration for the property tables
//!
//! Each flag switches one family of integrity checks. The generated tables are expected to
//! pass [`ValidationConfig::comprehensive`]; the cheaper presets exist for checking hand-built
//! or partially generated stores.

/// Configuration for an integrity pass over a property store and its aliases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ValidationConfig {
    /// Every value-key matches `^\^?[a-z0-9./]+$`
    pub enable_key_grammar_validation: bool,

    /// Value-keys and alias tokens are stored in ascending order, as binary search requires
    pub enable_key_order_validation: bool,

    /// Entries match their property's kind, classes are well formed and ASCII entries stay
    /// within ASCII
    pub enable_entry_validation: bool,

    /// Unicode and ASCII tables of a property hold identical key sets and numeric literals
    pub enable_variant_parity_validation: bool,

    /// Every non-negated key has a `^` counterpart in the same table
    pub enable_negation_parity_validation: bool,

    /// Property name aliases and value aliases point at existing properties and keys
    pub enable_alias_target_validation: bool,

    /// No alias token maps to two different targets, directly or by shadowing a canonical key
    pub enable_alias_ambiguity_validation: bool,

    /// Resolving through an alias yields the same entry as resolving the canonical target
    /// (runs the resolver, most expensive check)
    pub enable_alias_round_trip_validation: bool,

    /// Stop at the first violation instead of collecting all of them
    pub fail_fast: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enable_key_grammar_validation: true,
            enable_key_order_validation: true,
            enable_entry_validation: true,
            enable_variant_parity_validation: true,
            enable_negation_parity_validation: true,
            enable_alias_target_validation: true,
            enable_alias_ambiguity_validation: true,
            enable_alias_round_trip_validation: true,
            fail_fast: false,
        }
    }
}

impl ValidationConfig {
    /// Creates a configuration with every check disabled
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enable_key_grammar_validation: false,
            enable_key_order_validation: false,
            enable_entry_validation: false,
            enable_variant_parity_validation: false,
            enable_negation_parity_validation: false,
            enable_alias_target_validation: false,
            enable_alias_ambiguity_validation: false,
            enable_alias_round_trip_validation: false,
            fail_fast: false,
        }
    }

    /// Creates a minimal configuration covering the key rules only
    ///
    /// Checks grammar, ordering and both parities, skips entry contents and aliases.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            enable_key_grammar_validation: true,
            enable_key_order_validation: true,
            enable_entry_validation: false,
            enable_variant_parity_validation: true,
            enable_negation_parity_validation: true,
            enable_alias_target_validation: false,
            enable_alias_ambiguity_validation: false,
            enable_alias_round_trip_validation: false,
            fail_fast: false,
        }
    }

    /// Creates a configuration with all checks enabled, collecting every violation
    #[must_use]
    pub fn comprehensive() -> Self {
        Self::default()
    }

    /// Creates a configuration with all checks enabled that stops at the first violation
    #[must_use]
    pub fn strict() -> Self {
        Self {
            fail_fast: true,
            ..Self::default()
        }
    }

    /// Returns `true` if at least one check is enabled
    #[must_use]
    pub fn any_enabled(&self) -> bool {
        self.enable_key_grammar_validation
            || self.enable_key_order_validation
            || self.enable_entry_validation
            || self.enable_variant_parity_validation
            || self.enable_negation_parity_validation
            || self.enable_alias_target_validation
            || self.enable_alias_ambiguity_validation
            || self.enable_alias_round_trip_validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidationConfig::default();
        assert!(config.enable_key_grammar_validation);
        assert!(config.enable_alias_round_trip_validation);
        assert!(!config.fail_fast);
        assert_eq!(config, ValidationConfig::comprehensive());
    }

    #[test]
    fn test_disabled_config() {
        let config = ValidationConfig::disabled();
        assert!(!config.any_enabled());
    }

    #[test]
    fn test_minimal_config() {
        let config = ValidationConfig::minimal();
        assert!(config.any_enabled());
        assert!(config.enable_negation_parity_validation);
        assert!(!config.enable_alias_target_validation);
        assert!(!config.enable_entry_validation);
    }

    #[test]
    fn test_strict_config() {
        let config = ValidationConfig::strict();
        assert!(config.fail_fast);
        assert!(config.enable_alias_ambiguity_validation);
    }
}
