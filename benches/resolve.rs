//! Benchmarks for property query resolution.
//!
//! Measures the cost of the individual resolution paths:
//! - Direct lookups of canonical tokens
//! - Loosely spelled tokens that need normalisation
//! - Property name and value aliases, including aliased negations
//! - ASCII-restricted lookups
//! - The full integrity pass

extern crate uniprops;

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use uniprops::{
    alias::AliasIndex,
    get_property,
    store::PropertyStore,
    validation::{validate, ValidationConfig},
    Resolver,
};

/// Benchmark a canonical property and value-key.
fn bench_resolve_direct(c: &mut Criterion) {
    c.bench_function("resolve_direct", |b| {
        b.iter(|| {
            let entry =
                get_property(black_box("wordbreak"), black_box("aletter"), false).unwrap();
            black_box(entry)
        });
    });
}

/// Benchmark tokens in a non-canonical spelling.
fn bench_resolve_loose(c: &mut Criterion) {
    c.bench_function("resolve_loose", |b| {
        b.iter(|| {
            let entry =
                get_property(black_box("Word_Break"), black_box("ALetter"), false).unwrap();
            black_box(entry)
        });
    });
}

/// Benchmark a property name alias combined with a value alias.
fn bench_resolve_aliased(c: &mut Criterion) {
    c.bench_function("resolve_aliased", |b| {
        b.iter(|| {
            let entry = get_property(black_box("wb"), black_box("le"), false).unwrap();
            black_box(entry)
        });
    });
}

/// Benchmark an aliased negation, which assembles the canonical key.
fn bench_resolve_aliased_negation(c: &mut Criterion) {
    c.bench_function("resolve_aliased_negation", |b| {
        b.iter(|| {
            let entry = get_property(black_box("gcb"), black_box("^ex"), false).unwrap();
            black_box(entry)
        });
    });
}

/// Benchmark an ASCII-restricted numeric value lookup through a decimal alias.
fn bench_resolve_ascii_numeric(c: &mut Criterion) {
    let resolver = Resolver::builtin();
    c.bench_function("resolve_ascii_numeric", |b| {
        b.iter(|| {
            let entry = resolver
                .get_property(black_box("nv"), black_box("0.5"), true)
                .unwrap();
            black_box(entry)
        });
    });
}

/// Benchmark membership tests against a large class.
fn bench_class_contains(c: &mut Criterion) {
    let other = get_property("wordbreak", "other", false).unwrap();
    c.bench_function("class_contains", |b| {
        b.iter(|| black_box(other.contains(black_box(0x1F600))));
    });
}

/// Benchmark a comprehensive integrity pass over the built-in tables.
fn bench_validate_builtin(c: &mut Criterion) {
    c.bench_function("validate_builtin", |b| {
        b.iter(|| {
            let result = validate(
                PropertyStore::builtin(),
                AliasIndex::builtin(),
                ValidationConfig::comprehensive(),
            );
            black_box(result.is_ok())
        });
    });
}

criterion_group!(
    benches,
    bench_resolve_direct,
    bench_resolve_loose,
    bench_resolve_aliased,
    bench_resolve_aliased_negation,
    bench_resolve_ascii_numeric,
    bench_class_contains,
    bench_validate_builtin,
);
criterion_main!(benches);
