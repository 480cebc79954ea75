//! Error types for the contact-book crate.
//!
//! Validation, lookup and date parsing failures are all local and
//! recoverable. The command loop reports them and carries on.

use thiserror::Error;

/// A contact field failed its format rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The mobile number is not nine ASCII digits, or is all zero.
    #[error("invalid mobile number '{value}': must be exactly 9 digits and not all zero")]
    InvalidMobileNumber {
        /// The rejected input.
        value: String,
    },
}

/// No contact exists at the requested position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no contact at position {position} (book holds {count})")]
pub struct NotFoundError {
    /// The 1-based position that was requested.
    pub position: usize,
    /// Number of contacts held when the lookup failed.
    pub count: usize,
}

/// Errors from operations that both look up and validate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactBookError {
    /// A supplied field was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The position does not address a contact.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// A birthdate token could not be read as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date '{value}': use dd/mm/yyyy")]
pub struct DateParseError {
    /// The rejected input.
    pub value: String,
}
