//! Contact book configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Settings for the contact book binary.
///
/// Values come from command-line flags and `CONTACT_BOOK_*` environment
/// variables; every field has a default.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CONTACT_BOOK")]
pub struct ContactBookSettings {
    /// Start with an empty book instead of the sample contacts.
    #[ortho_config(default = false)]
    pub skip_sample_data: bool,
    /// Tracing directive used when `RUST_LOG` is unset.
    pub log_level: Option<String>,
}

impl ContactBookSettings {
    /// Return the configured log directive, falling back to the default.
    #[must_use]
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
