//! Dataset entries returned by property resolution.
//!
//! Every (property, value-key, variant) triple in the property tables maps to exactly one
//! [`DatasetEntry`]. Most properties store a plain character class, numeric-valued properties
//! additionally carry the numeric literal shared by every code point in the class.
//!
//! # Key Types
//! - [`DatasetEntry`] - Tagged entry, one variant per property kind
//! - [`CharClass`] - Sorted, non-overlapping inclusive code point ranges
//! - [`NumericEntry`] - A numeric literal with the class of code points carrying it
//! - [`NumericValue`] - Exact rational value, or NaN for "no numeric value"
//!
//! # Example
//! ```rust
//! use uniprops::{get_property, NumericValue};
//!
//! let entry = get_property("nv", "1/2", false)?;
//! assert_eq!(entry.numeric_value(), Some(NumericValue::rational(1, 2)));
//! assert!(entry.contains_char('½'));
//! # Ok::<(), uniprops::Error>(())
//! ```

use std::fmt;

use strum::{Display, EnumIter};

/// Inclusive range of code points, `(first, last)`.
pub type CodepointRange = (u32, u32);

/// Highest valid Unicode code point.
pub const MAX_CODEPOINT: u32 = 0x10_FFFF;

/// A set of code points stored as sorted, non-overlapping, inclusive ranges.
///
/// Surrogate code points are part of the code point space and may appear in a class, which is
/// why ranges are expressed as `u32` rather than `char`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharClass {
    ranges: &'static [CodepointRange],
}

impl CharClass {
    /// Wraps a static range list. The ranges must be sorted and must not overlap.
    #[must_use]
    pub const fn new(ranges: &'static [CodepointRange]) -> Self {
        CharClass { ranges }
    }

    /// The underlying ranges
    #[must_use]
    pub fn ranges(&self) -> &'static [CodepointRange] {
        self.ranges
    }

    /// Returns `true` if the class contains no code point
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Number of code points in the class. A reversed range counts as empty.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges
            .iter()
            .filter_map(|&(first, last)| last.checked_sub(first))
            .map(|span| span as usize + 1)
            .sum()
    }

    /// Checks whether `codepoint` is a member of the class.
    #[must_use]
    pub fn contains(&self, codepoint: u32) -> bool {
        self.ranges
            .binary_search_by(|&(first, last)| {
                if last < codepoint {
                    std::cmp::Ordering::Less
                } else if first > codepoint {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Checks whether `c` is a member of the class.
    #[must_use]
    pub fn contains_char(&self, c: char) -> bool {
        self.contains(u32::from(c))
    }

    /// Returns `true` if the ranges are sorted, non-overlapping, non-adjacent and within the
    /// code point space.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let bounded = self
            .ranges
            .iter()
            .all(|&(first, last)| first <= last && last <= MAX_CODEPOINT);

        bounded
            && self
                .ranges
                .windows(2)
                .all(|pair| pair[0].1.saturating_add(1) < pair[1].0)
    }
}

/// Renders the class as the body of a regular expression character class, e.g.
/// `\x{41}-\x{5A}\x{5F}`.
impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &(first, last) in self.ranges {
            if first == last {
                write!(f, "\\x{{{first:X}}}")?;
            } else {
                write!(f, "\\x{{{first:X}}}-\\x{{{last:X}}}")?;
            }
        }
        Ok(())
    }
}

/// The numeric value of a code point.
///
/// Values are kept as exact fractions, the way the Unicode Character Database spells them.
/// `NaN` stands for "has no numeric value" and, unlike floating point NaN, compares equal to
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericValue {
    /// `numerator / denominator`, always in lowest terms with a non-zero denominator
    Rational {
        /// Signed numerator
        numerator: i64,
        /// Positive denominator, `1` for integers
        denominator: u64,
    },
    /// No numeric value
    NaN,
}

impl NumericValue {
    /// Creates a rational value. The caller provides the fraction in lowest terms.
    #[must_use]
    pub const fn rational(numerator: i64, denominator: u64) -> Self {
        NumericValue::Rational {
            numerator,
            denominator,
        }
    }

    /// Returns `true` for [`NumericValue::NaN`]
    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self, NumericValue::NaN)
    }

    /// Lossy conversion to a float, `NaN` maps to [`f64::NAN`].
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> f64 {
        match *self {
            NumericValue::Rational {
                numerator,
                denominator,
            } => numerator as f64 / denominator as f64,
            NumericValue::NaN => f64::NAN,
        }
    }
}

impl From<i64> for NumericValue {
    fn from(value: i64) -> Self {
        NumericValue::rational(value, 1)
    }
}

/// Spells the value the way value-keys do: `2`, `1/2`, `nan`.
impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            NumericValue::Rational {
                numerator,
                denominator: 1,
            } => write!(f, "{numerator}"),
            NumericValue::Rational {
                numerator,
                denominator,
            } => write!(f, "{numerator}/{denominator}"),
            NumericValue::NaN => f.write_str("nan"),
        }
    }
}

/// A numeric literal together with the code points it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumericEntry {
    value: NumericValue,
    class: CharClass,
}

impl NumericEntry {
    /// Creates a new numeric entry
    #[must_use]
    pub const fn new(value: NumericValue, class: CharClass) -> Self {
        NumericEntry { value, class }
    }

    /// The numeric literal. For a negated key this is still the literal being excluded.
    #[must_use]
    pub fn value(&self) -> NumericValue {
        self.value
    }

    /// The code points of the entry
    #[must_use]
    pub fn class(&self) -> &CharClass {
        &self.class
    }
}

/// The kind of payload a [`DatasetEntry`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum EntryKind {
    /// A character class
    Class,
    /// A numeric literal with its character class
    Numeric,
}

/// The payload stored for one (property, value-key, variant) triple.
///
/// The resolver returns entries unchanged; callers switch on the variant to get at the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetEntry {
    /// Character class of a catalog or enumerated property value
    Class(CharClass),
    /// Numeric literal of a numeric-valued property
    Numeric(NumericEntry),
}

impl DatasetEntry {
    /// The kind of this entry
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        match self {
            DatasetEntry::Class(_) => EntryKind::Class,
            DatasetEntry::Numeric(_) => EntryKind::Numeric,
        }
    }

    /// The code points this entry covers, regardless of kind
    #[must_use]
    pub fn class(&self) -> &CharClass {
        match self {
            DatasetEntry::Class(class) => class,
            DatasetEntry::Numeric(numeric) => numeric.class(),
        }
    }

    /// The numeric literal, if this is a numeric entry
    #[must_use]
    pub fn numeric_value(&self) -> Option<NumericValue> {
        match self {
            DatasetEntry::Class(_) => None,
            DatasetEntry::Numeric(numeric) => Some(numeric.value()),
        }
    }

    /// Checks whether `codepoint` is covered by this entry
    #[must_use]
    pub fn contains(&self, codepoint: u32) -> bool {
        self.class().contains(codepoint)
    }

    /// Checks whether `c` is covered by this entry
    #[must_use]
    pub fn contains_char(&self, c: char) -> bool {
        self.class().contains_char(c)
    }
}

impl fmt::Display for DatasetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetEntry::Class(class) => write!(f, "[{class}]"),
            DatasetEntry::Numeric(numeric) => write!(f, "{} [{}]", numeric.value, numeric.class),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static LETTERS: CharClass = CharClass::new(&[(0x41, 0x5A), (0x61, 0x7A)]);

    #[test]
    fn test_class_membership() {
        assert!(LETTERS.contains(0x41));
        assert!(LETTERS.contains(0x5A));
        assert!(LETTERS.contains_char('q'));
        assert!(!LETTERS.contains(0x40));
        assert!(!LETTERS.contains(0x5B));
        assert!(!LETTERS.contains(0x7B));
        assert!(!LETTERS.contains(MAX_CODEPOINT));
        assert_eq!(LETTERS.len(), 52);
        assert!(!LETTERS.is_empty());
        assert!(CharClass::new(&[]).is_empty());
    }

    #[test]
    fn test_class_well_formed() {
        assert!(LETTERS.is_well_formed());
        assert!(CharClass::new(&[]).is_well_formed());
        assert!(CharClass::new(&[(0, MAX_CODEPOINT)]).is_well_formed());
        assert!(!CharClass::new(&[(0x10, 0x01)]).is_well_formed());
        assert_eq!(CharClass::new(&[(0x10, 0x01)]).len(), 0);
        assert_eq!(CharClass::new(&[(0x10, 0x01), (0x20, 0x21)]).len(), 2);
        assert!(!CharClass::new(&[(0x00, 0x10), (0x11, 0x20)]).is_well_formed());
        assert!(!CharClass::new(&[(0x00, 0x10), (0x05, 0x20)]).is_well_formed());
        assert!(!CharClass::new(&[(0x00, 0x11_0000)]).is_well_formed());
    }

    #[test]
    fn test_class_display() {
        assert_eq!(LETTERS.to_string(), "\\x{41}-\\x{5A}\\x{61}-\\x{7A}");
        assert_eq!(CharClass::new(&[(0x5F, 0x5F)]).to_string(), "\\x{5F}");
    }

    #[test]
    fn test_numeric_value() {
        assert_eq!(NumericValue::from(2), NumericValue::rational(2, 1));
        assert_eq!(NumericValue::rational(2, 1).to_string(), "2");
        assert_eq!(NumericValue::rational(1, 2).to_string(), "1/2");
        assert_eq!(NumericValue::NaN.to_string(), "nan");
        assert!((NumericValue::rational(3, 4).as_f64() - 0.75).abs() < f64::EPSILON);
        assert!(NumericValue::NaN.as_f64().is_nan());
        assert!(NumericValue::NaN.is_nan());
        assert_eq!(NumericValue::NaN, NumericValue::NaN);
    }

    #[test]
    fn test_entry_kinds() {
        let class = DatasetEntry::Class(LETTERS);
        assert_eq!(class.kind(), EntryKind::Class);
        assert_eq!(class.numeric_value(), None);
        assert!(class.contains_char('A'));

        let digits = CharClass::new(&[(0x32, 0x32)]);
        let numeric = DatasetEntry::Numeric(NumericEntry::new(NumericValue::from(2), digits));
        assert_eq!(numeric.kind(), EntryKind::Numeric);
        assert_eq!(numeric.numeric_value(), Some(NumericValue::from(2)));
        assert!(numeric.contains_char('2'));
        assert!(!numeric.contains_char('3'));
        assert_eq!(numeric.to_string(), "2 [\\x{32}]");
        assert_eq!(EntryKind::Numeric.to_string(), "numeric");
    }
}
