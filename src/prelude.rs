//! # uniprops Prelude
//!
//! This module provides a convenient prelude for the most commonly used types of the uniprops
//! library. Import this module to get quick access to everything needed for resolving property
//! queries and inspecting the results.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all uniprops operations
pub use crate::Error;

/// The result type used throughout uniprops
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// Query resolution, against the built-in or custom tables
pub use crate::resolver::{get_property, loose_key, Resolver};

// ================================================================================================
// Lookup Results
// ================================================================================================

/// Dataset entries and their payloads
pub use crate::entry::{
    CharClass, CodepointRange, DatasetEntry, EntryKind, NumericEntry, NumericValue,
};

// ================================================================================================
// Tables and Aliases
// ================================================================================================

/// Property tables and their variants
pub use crate::store::{PropertyKind, PropertyStore, PropertyTable, ValueTable, Variant};

/// Alias maps
pub use crate::alias::{AliasIndex, AliasMap};

/// Unicode version of the built-in tables
pub use crate::unidata::UNICODE_VERSION;

// ================================================================================================
// Integrity Checking
// ================================================================================================

/// Integrity pass entry points and results
pub use crate::validation::{
    validate, validate_builtin, ValidationConfig, Violation, ViolationKind,
};
