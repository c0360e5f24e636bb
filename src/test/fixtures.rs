//! Hand-written property tables and alias indices.
//!
//! `color` is an enumerated property over `b`/`r` (plus one emoji each), `size` a numeric
//! property over the digit `1`.

use crate::{
    alias::AliasIndex,
    entry::{CharClass, DatasetEntry, NumericEntry, NumericValue},
    store::{PropertyKind, PropertyStore, PropertyTable, ValueTable},
};

pub(crate) static COLOR_UNICODE: ValueTable = ValueTable::new(&[
    (
        "^blue",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x0061),
            (0x0063, 0x1F534),
            (0x1F536, 0x10FFFF),
        ])),
    ),
    (
        "^red",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x0071),
            (0x0073, 0x1F533),
            (0x1F535, 0x10FFFF),
        ])),
    ),
    (
        "blue",
        DatasetEntry::Class(CharClass::new(&[(0x0062, 0x0062), (0x1F535, 0x1F535)])),
    ),
    (
        "red",
        DatasetEntry::Class(CharClass::new(&[(0x0072, 0x0072), (0x1F534, 0x1F534)])),
    ),
]);

pub(crate) static COLOR_ASCII: ValueTable = ValueTable::new(&[
    (
        "^blue",
        DatasetEntry::Class(CharClass::new(&[(0x0000, 0x0061), (0x0063, 0x007F)])),
    ),
    (
        "^red",
        DatasetEntry::Class(CharClass::new(&[(0x0000, 0x0071), (0x0073, 0x007F)])),
    ),
    ("blue", DatasetEntry::Class(CharClass::new(&[(0x0062, 0x0062)]))),
    ("red", DatasetEntry::Class(CharClass::new(&[(0x0072, 0x0072)]))),
]);

static SIZE_UNICODE: ValueTable = ValueTable::new(&[
    (
        "1",
        DatasetEntry::Numeric(NumericEntry::new(
            NumericValue::rational(1, 1),
            CharClass::new(&[(0x0031, 0x0031)]),
        )),
    ),
    (
        "^1",
        DatasetEntry::Numeric(NumericEntry::new(
            NumericValue::rational(1, 1),
            CharClass::new(&[(0x0000, 0x0030), (0x0032, 0x10FFFF)]),
        )),
    ),
]);

static SIZE_ASCII: ValueTable = ValueTable::new(&[
    (
        "1",
        DatasetEntry::Numeric(NumericEntry::new(
            NumericValue::rational(1, 1),
            CharClass::new(&[(0x0031, 0x0031)]),
        )),
    ),
    (
        "^1",
        DatasetEntry::Numeric(NumericEntry::new(
            NumericValue::rational(1, 1),
            CharClass::new(&[(0x0000, 0x0030), (0x0032, 0x007F)]),
        )),
    ),
]);

static PROPERTIES: [PropertyTable; 2] = [
    PropertyTable::new(
        "color",
        PropertyKind::Enumerated,
        &COLOR_UNICODE,
        &COLOR_ASCII,
    ),
    PropertyTable::new("size", PropertyKind::Numeric, &SIZE_UNICODE, &SIZE_ASCII),
];

/// Well-formed store holding `color` and `size`
pub(crate) static STORE: PropertyStore = PropertyStore::new(&PROPERTIES);

/// Aliases for [`STORE`]. `hue` deliberately points at a property that does not exist, so it
/// only resolves against stores that define `shade`.
pub(crate) static ALIASES: AliasIndex = AliasIndex::new(&[
    ("_", &[("colour", "color"), ("hue", "shade")]),
    ("color", &[("b", "blue"), ("r", "red")]),
]);

/// Aliases for [`STORE`] without any dangling target
pub(crate) static CLEAN_ALIASES: AliasIndex = AliasIndex::new(&[
    ("_", &[("colour", "color"), ("sz", "size")]),
    ("color", &[("b", "blue"), ("r", "red")]),
    ("size", &[("one", "1")]),
]);

/// The `color` property of [`STORE`]
pub(crate) fn color() -> &'static PropertyTable {
    &PROPERTIES[0]
}

static SKEWED_UNICODE: ValueTable = ValueTable::new(&[
    (
        "^red",
        DatasetEntry::Class(CharClass::new(&[
            (0x0000, 0x0071),
            (0x0073, 0x1F533),
            (0x1F535, 0x10FFFF),
        ])),
    ),
    (
        "red",
        DatasetEntry::Class(CharClass::new(&[(0x0072, 0x0072), (0x1F534, 0x1F534)])),
    ),
]);

static SKEWED_PROPERTIES: [PropertyTable; 1] = [PropertyTable::new(
    "color",
    PropertyKind::Enumerated,
    &SKEWED_UNICODE,
    &COLOR_ASCII,
)];

/// Store whose `color` property lists `blue` and `^blue` in the ASCII table only
pub(crate) static SKEWED_STORE: PropertyStore = PropertyStore::new(&SKEWED_PROPERTIES);

static BROKEN_UNICODE: ValueTable = ValueTable::new(&[
    (
        "^red",
        DatasetEntry::Class(CharClass::new(&[(0x0000, 0x0071), (0x0073, 0x10FFFF)])),
    ),
    ("blue", DatasetEntry::Class(CharClass::new(&[(0x0062, 0x0062)]))),
    (
        "green!",
        DatasetEntry::Class(CharClass::new(&[(0x0067, 0x0067)])),
    ),
    ("red", DatasetEntry::Class(CharClass::new(&[(0x0072, 0x0072)]))),
]);

static BROKEN_ASCII: ValueTable = ValueTable::new(&[
    (
        "^red",
        DatasetEntry::Class(CharClass::new(&[(0x0000, 0x0071), (0x0073, 0x007F)])),
    ),
    (
        "red",
        DatasetEntry::Class(CharClass::new(&[(0x0072, 0x0072), (0x1F534, 0x1F534)])),
    ),
    (
        "green!",
        DatasetEntry::Numeric(NumericEntry::new(
            NumericValue::NaN,
            CharClass::new(&[(0x0067, 0x0067)]),
        )),
    ),
]);

static BROKEN_PROPERTIES: [PropertyTable; 1] = [PropertyTable::new(
    "color",
    PropertyKind::Enumerated,
    &BROKEN_UNICODE,
    &BROKEN_ASCII,
)];

/// Store whose only property breaks every table rule:
/// - `green!` violates the key grammar and, in the ASCII table, the entry kind
/// - `blue` has no `^blue` and is missing from the ASCII table
/// - the ASCII keys are out of order and `red` reaches beyond ASCII
pub(crate) static BROKEN_STORE: PropertyStore = PropertyStore::new(&BROKEN_PROPERTIES);

/// Aliases for [`BROKEN_STORE`] breaking every alias rule:
/// - `hue` targets a missing property
/// - `g` targets a missing value, `red` shadows a canonical key with another target
/// - `b` is listed twice with different targets
/// - `shape` groups value aliases of a missing property
pub(crate) static BROKEN_ALIASES: AliasIndex = AliasIndex::new(&[
    ("_", &[("colour", "color"), ("hue", "shade")]),
    (
        "color",
        &[
            ("b", "blue"),
            ("b", "red"),
            ("g", "gray"),
            ("r", "red"),
            ("red", "blue"),
        ],
    ),
    ("shape", &[("sq", "square")]),
]);
