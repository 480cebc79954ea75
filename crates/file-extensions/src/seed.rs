//! Built-in catalogue data.
//!
//! The reference set of extensions ships as an embedded JSON document and
//! is parsed once at startup.

use serde::Deserialize;
use tracing::info;

use crate::catalog::FileExtensionCatalog;
use crate::category::Category;
use crate::error::CatalogError;

/// Current supported catalogue document version.
const SUPPORTED_VERSION: u32 = 1;

/// Number of records in the built-in catalogue.
pub const SAMPLE_EXTENSION_COUNT: usize = 25;

const SAMPLE_CATALOG_JSON: &str = include_str!("../data/extensions.json");

/// Builds the built-in catalogue.
///
/// Takes no external input; the data is compiled into the binary.
///
/// # Errors
///
/// Returns [`CatalogError`] if the embedded document is malformed.
///
/// # Example
///
/// ```
/// use file_extensions::{SAMPLE_EXTENSION_COUNT, seed_catalog};
///
/// let catalog = seed_catalog().expect("embedded catalog parses");
/// assert_eq!(catalog.len(), SAMPLE_EXTENSION_COUNT);
/// assert_eq!(catalog.lookup("MP4").expect("found").description(), "MPEG-4 Video");
/// ```
pub fn seed_catalog() -> Result<FileExtensionCatalog, CatalogError> {
    let catalog = FileExtensionCatalog::from_json(SAMPLE_CATALOG_JSON)?;
    info!(extension_count = catalog.len(), "sample catalog loaded");
    Ok(catalog)
}

impl FileExtensionCatalog {
    /// Parses a catalogue from a JSON document.
    ///
    /// Records are inserted in document order; a repeated token overwrites
    /// the earlier record.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if:
    /// - The JSON is malformed or names an unknown category
    /// - The version is unsupported
    /// - Any token is empty
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog =
            serde_json::from_str(json).map_err(|e| CatalogError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawCatalog) -> Result<Self, CatalogError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(CatalogError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let mut catalog = Self::new();
        for entry in raw.extensions {
            catalog.add_or_replace(
                &entry.extension,
                entry.description,
                entry.category,
                entry.common_use,
            )?;
        }
        Ok(catalog)
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCatalog {
    version: u32,
    extensions: Vec<RawExtension>,
}

/// Raw JSON representation of one record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawExtension {
    extension: String,
    description: String,
    category: Category,
    common_use: String,
}
