//! Error types for the file extensions binary.

use console_menu::ConsoleError;
use thiserror::Error;

use crate::error::CatalogError;

/// Errors that end the file extensions process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Settings could not be loaded from flags or the environment.
    #[error("failed to load configuration: {message}")]
    Config {
        /// Description of the configuration failure.
        message: String,
    },
    /// The built-in catalogue could not be loaded.
    #[error("failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),
    /// The terminal streams failed.
    #[error(transparent)]
    Console(#[from] ConsoleError),
}
