//! Error types for the contact book binary.

use console_menu::ConsoleError;
use thiserror::Error;

/// Errors that end the contact book process.
///
/// Data errors never reach this type; the command loop reports them and
/// carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Settings could not be loaded from flags or the environment.
    #[error("failed to load configuration: {message}")]
    Config {
        /// Description of the configuration failure.
        message: String,
    },
    /// The terminal streams failed.
    #[error(transparent)]
    Console(#[from] ConsoleError),
}
