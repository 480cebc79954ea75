//! File extension reference catalogue.
//!
//! The catalogue maps normalised extension tokens (lower case, no leading
//! `.`) to descriptive records grouped into a fixed set of categories.
//! Lookups normalise the query the same way, so `"MP4"`, `"mp4"` and
//! `".mp4"` all find the same record.
//!
//! # Example
//!
//! ```
//! use file_extensions::{Category, FileExtensionCatalog};
//!
//! let mut catalog = FileExtensionCatalog::new();
//! catalog
//!     .add_or_replace("mp4", "MPEG-4 Video", Category::Video, "Video streaming")
//!     .expect("valid token");
//!
//! assert_eq!(catalog.lookup(".MP4").expect("found").display_name(), ".mp4");
//! assert!(catalog.lookup("mov").is_err());
//! ```

mod catalog;
mod category;
pub mod cli;
mod config;
mod error;
mod extension;
mod seed;

pub use catalog::{CategoryGroup, FileExtensionCatalog};
pub use category::Category;
pub use config::FileExtensionsSettings;
pub use error::CatalogError;
pub use extension::{FileExtension, normalize_token};
pub use seed::{SAMPLE_EXTENSION_COUNT, seed_catalog};
