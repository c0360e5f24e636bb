// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # uniprops
//!
//! Resolution of Unicode character property queries, as they appear in regular expressions
//! (`\p{Word_Break=ALetter}`, `\P{nv=1/2}`), into pre-computed character classes and numeric
//! values.
//!
//! A query is a `(property, value)` pair of free-form tokens plus an ASCII flag. Both tokens may
//! be aliases and may use any loose spelling; the resolver canonicalises them and returns the
//! [`DatasetEntry`] stored for the canonical key. No character class is ever computed at
//! resolution time, complements included: `^key` entries are part of the tables.
//!
//! ## Features
//!
//! - **Static tables** - Generated from the Unicode Character Database, no allocation or
//!   initialisation on first use
//! - **Loose matching** - Case, `_`, `-` and spaces are ignored (UAX44-LM3)
//! - **Two-level aliasing** - Property name aliases (`wb`) and value aliases (`le`, `0.5`),
//!   including aliased negations (`^le`)
//! - **Unicode and ASCII scopes** - Every entry exists in a full and an ASCII-restricted variant
//! - **Integrity checking** - [`validation`] verifies the structural invariants of the tables
//!
//! ## Supported Properties
//!
//! | Property | Alias | Entries |
//! |----------|-------|---------|
//! | `eastasianwidth` | `ea` | character class |
//! | `graphemeclusterbreak` | `gcb` | character class |
//! | `numerictype` | `nt` | character class |
//! | `numericvalue` | `nv` | numeric literal and character class |
//! | `sentencebreak` | `sb` | character class |
//! | `wordbreak` | `wb` | character class |
//!
//! ## Quick Start
//!
//! ```rust
//! use uniprops::{get_property, NumericValue};
//!
//! let aletter = get_property("Word_Break", "ALetter", false)?;
//! assert!(aletter.contains_char('a'));
//! assert!(aletter.contains_char('é'));
//!
//! let ascii_aletter = get_property("wb", "le", true)?;
//! assert!(!ascii_aletter.contains_char('é'));
//!
//! let half = get_property("nv", "0.5", false)?;
//! assert_eq!(half.numeric_value(), Some(NumericValue::rational(1, 2)));
//! # Ok::<(), uniprops::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`resolver`] - Query canonicalisation and lookup, the main entry point
//! - [`alias`] - Property name and value alias maps
//! - [`store`] - Property tables and their Unicode and ASCII variants
//! - [`entry`] - The dataset entries returned by a lookup
//! - [`validation`] - Integrity checks over the tables and aliases
//! - [`unidata`] - The generated data
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: canonicalised queries at `trace`, integrity pass
//! summaries at `debug`, and data defects at `warn`. No logger is installed by the crate.

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use uniprops::prelude::*;
///
/// let resolver = Resolver::builtin();
/// let entry = resolver.get_property("sb", "upper", true)?;
/// assert!(entry.contains_char('Q'));
/// # Ok::<(), uniprops::Error>(())
/// ```
pub mod prelude;

pub mod alias;
pub mod entry;
pub mod resolver;
pub mod store;
pub mod unidata;
pub mod validation;

/// `uniprops` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `uniprops` Error type
///
/// Distinguishes caller input errors ([`Error::UnknownProperty`], [`Error::UnknownValue`]) from
/// defects in the data artifact ([`Error::DataIntegrity`] and the integrity pass errors).
///
/// # Examples
///
/// ```rust
/// use uniprops::{get_property, Error};
///
/// match get_property("Word_Break", "Bogus", false) {
///     Err(Error::UnknownValue { property, value }) => {
///         assert_eq!(property, "wordbreak");
///         assert_eq!(value, "Bogus");
///     }
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub use error::Error;

/// Query resolution against the built-in tables.
///
/// See [`resolver::Resolver`] for resolving against custom tables.
pub use resolver::{get_property, Resolver};

/// The payload types returned by a lookup.
pub use entry::{CharClass, DatasetEntry, EntryKind, NumericEntry, NumericValue};

/// Table variant selection
pub use store::Variant;

/// Integrity pass configuration
pub use validation::ValidationConfig;

/// Unicode version of the built-in tables
pub use unidata::UNICODE_VERSION;
