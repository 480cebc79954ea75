//! Error types for the file-extensions crate.

use thiserror::Error;

/// Errors raised while building or querying the catalogue.
///
/// None of these are fatal; the command loop turns each into guidance for
/// the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No record is stored under the normalised token.
    #[error("extension '.{token}' not found in catalog")]
    ExtensionNotFound {
        /// The normalised token that was looked up.
        token: String,
    },

    /// The value does not name one of the fixed categories.
    #[error("unknown category '{value}'")]
    UnknownCategory {
        /// The rejected label or menu number.
        value: String,
    },

    /// The token is empty once whitespace and leading dots are removed.
    #[error("extension token must not be empty")]
    EmptyToken,

    /// The embedded catalogue document is malformed.
    #[error("invalid catalog JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The catalogue document version is not supported.
    #[error("unsupported catalog version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the document.
        actual: u32,
    },
}
