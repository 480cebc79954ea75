//! Settings for the file extensions binary.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Settings loaded from flags and `FILE_EXTENSIONS_*` environment variables.
///
/// The catalogue is read-only at runtime, so the built-in records are always
/// loaded.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FILE_EXTENSIONS")]
pub struct FileExtensionsSettings {
    /// Tracing directive used when `RUST_LOG` is unset.
    pub log_level: Option<String>,
}

impl FileExtensionsSettings {
    /// Return the configured log directive, falling back to the default.
    #[must_use]
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
