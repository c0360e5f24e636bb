//! Generated Unicode Character Database tables.
//!
//! Each submodule holds the `UNICODE` and `ASCII` value tables of one property, with keys in
//! ascending order and every non-negated key paired with its `^` complement. `alias` holds the
//! property name aliases (under `_`) and the per-property value aliases.
//!
//! The tables are data, not code: they are regenerated when the Unicode version changes and
//! never edited by hand.

pub(crate) mod alias;

mod eastasianwidth;
mod graphemeclusterbreak;
mod numerictype;
mod numericvalue;
mod sentencebreak;
mod wordbreak;

use crate::store::{PropertyKind, PropertyTable};

/// Unicode version the tables were generated from
pub const UNICODE_VERSION: (u8, u8, u8) = (17, 0, 0);

/// All supported properties, sorted by canonical identifier.
pub(crate) static PROPERTIES: [PropertyTable; 6] = [
    PropertyTable::new(
        "eastasianwidth",
        PropertyKind::Enumerated,
        &eastasianwidth::UNICODE,
        &eastasianwidth::ASCII,
    ),
    PropertyTable::new(
        "graphemeclusterbreak",
        PropertyKind::Enumerated,
        &graphemeclusterbreak::UNICODE,
        &graphemeclusterbreak::ASCII,
    ),
    PropertyTable::new(
        "numerictype",
        PropertyKind::Enumerated,
        &numerictype::UNICODE,
        &numerictype::ASCII,
    ),
    PropertyTable::new(
        "numericvalue",
        PropertyKind::Numeric,
        &numericvalue::UNICODE,
        &numericvalue::ASCII,
    ),
    PropertyTable::new(
        "sentencebreak",
        PropertyKind::Enumerated,
        &sentencebreak::UNICODE,
        &sentencebreak::ASCII,
    ),
    PropertyTable::new(
        "wordbreak",
        PropertyKind::Enumerated,
        &wordbreak::UNICODE,
        &wordbreak::ASCII,
    ),
];
