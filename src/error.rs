use thiserror::Error;

use crate::{store::Variant, validation::Violation};

macro_rules! integrity_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Integrity {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Integrity {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// The variants fall into two groups that must never be confused with each other:
///
/// ## Caller input errors
/// - [`Error::UnknownProperty`] - The property token matches no property, directly or by alias
/// - [`Error::UnknownValue`] - The value token matches no value of the resolved property
///
/// ## Data artifact defects
/// - [`Error::DataIntegrity`] - A canonical value-key reachable through the aliases is missing
///   from the selected table variant
/// - [`Error::DanglingAlias`] - A property name alias points at a property the store lacks
/// - [`Error::Integrity`] - A single structural defect found while checking the tables
/// - [`Error::Validation`] - The aggregated outcome of a failed integrity pass
///
/// # Examples
///
/// ```rust
/// use uniprops::{get_property, Error};
///
/// match get_property("wordbreak", "bogus", false) {
///     Ok(entry) => println!("{entry}"),
///     Err(Error::UnknownValue { property, value }) => {
///         eprintln!("'{value}' is not a value of '{property}'");
///     }
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The property token did not resolve to a canonical property identifier.
    ///
    /// Neither the token itself nor any property name alias matched. The offending token is
    /// carried as the caller supplied it.
    #[error("Unknown property - '{property}'")]
    UnknownProperty {
        /// The token as passed by the caller
        property: String,
    },

    /// The value token did not resolve to a canonical value-key of the resolved property.
    ///
    /// # Fields
    ///
    /// * `property` - Canonical identifier of the property the value was looked up against
    /// * `value` - The value token as passed by the caller
    #[error("Unknown value '{value}' for property '{property}'")]
    UnknownValue {
        /// Canonical identifier of the resolved property
        property: String,
        /// The token as passed by the caller
        value: String,
    },

    /// A canonical value-key passed alias resolution but is absent from the selected table.
    ///
    /// This is a defect in the generated tables and never a consequence of caller input.
    #[error("Data integrity defect - '{property}' has no '{key}' entry in the {variant} table")]
    DataIntegrity {
        /// Canonical property identifier
        property: &'static str,
        /// Canonical value-key that could not be fetched
        key: String,
        /// The table variant the lookup was made against
        variant: Variant,
    },

    /// A property name alias matched, but its target property is absent from the store.
    ///
    /// Like [`Error::DataIntegrity`], this is a defect in the alias tables and never a
    /// consequence of caller input.
    #[error("Data integrity defect - property alias '{alias}' points at missing property '{target}'")]
    DanglingAlias {
        /// The alias token, in canonical form
        alias: String,
        /// The canonical property identifier the alias points at
        target: &'static str,
    },

    /// A structural defect in the property tables or alias maps.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of the defect
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Integrity - {file}:{line}: {message}")]
    Integrity {
        /// The message to be printed for the Integrity error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An integrity pass found one or more violations.
    #[error("Integrity check failed with {} violation(s)", .0.len())]
    Validation(Vec<Violation>),
}

impl Error {
    /// Returns `true` if the error was caused by the caller's tokens rather than the tables.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownProperty { .. } | Error::UnknownValue { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_errors() {
        let err = Error::UnknownProperty {
            property: "bad".to_string(),
        };
        assert!(err.is_user_error());
        assert_eq!(err.to_string(), "Unknown property - 'bad'");

        let err = Error::UnknownValue {
            property: "wordbreak".to_string(),
            value: "bad".to_string(),
        };
        assert!(err.is_user_error());
        assert_eq!(
            err.to_string(),
            "Unknown value 'bad' for property 'wordbreak'"
        );
    }

    #[test]
    fn test_data_errors() {
        let err = Error::DataIntegrity {
            property: "wordbreak",
            key: "aletter".to_string(),
            variant: Variant::Ascii,
        };
        assert!(!err.is_user_error());
        assert_eq!(
            err.to_string(),
            "Data integrity defect - 'wordbreak' has no 'aletter' entry in the ascii table"
        );

        let err = Error::DanglingAlias {
            alias: "hue".to_string(),
            target: "shade",
        };
        assert!(!err.is_user_error());
        assert_eq!(
            err.to_string(),
            "Data integrity defect - property alias 'hue' points at missing property 'shade'"
        );

        let err = integrity_error!("key '{}' is out of order", "zz");
        assert!(!err.is_user_error());
        match err {
            Error::Integrity { message, file, .. } => {
                assert_eq!(message, "key 'zz' is out of order");
                assert!(file.ends_with("error.rs"));
            }
            _ => panic!("expected an integrity error"),
        }
    }
}
