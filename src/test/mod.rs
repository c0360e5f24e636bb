//! Shared fixtures for unit tests.
//!
//! The fixtures are tiny hand-written stores that are easy to reason about: a well-formed one
//! that mirrors the shape of the generated tables, and a broken one that violates every
//! integrity rule at least once.

pub(crate) mod fixtures;
