//! File extension record model.

use crate::category::Category;
use crate::error::CatalogError;

/// Normalises a user-supplied extension token.
///
/// Surrounding whitespace and any leading `.` characters are removed and the
/// remainder is lower-cased. Insertion and lookup both go through this
/// function.
///
/// # Examples
///
/// ```
/// use file_extensions::normalize_token;
///
/// assert_eq!(normalize_token("MP4"), "mp4");
/// assert_eq!(normalize_token(" .Mp4 "), "mp4");
/// assert_eq!(normalize_token("..tar"), "tar");
/// ```
#[must_use]
pub fn normalize_token(token: &str) -> String {
    token.trim().trim_start_matches('.').to_lowercase()
}

/// A catalogue entry describing one file extension.
///
/// ## Invariants
/// - `extension` is stored normalised and is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileExtension {
    extension: String,
    description: String,
    category: Category,
    common_use: String,
}

impl FileExtension {
    /// Builds a record, normalising the token.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyToken`] if nothing remains after
    /// normalisation.
    pub fn new(
        token: &str,
        description: impl Into<String>,
        category: Category,
        common_use: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let extension = normalize_token(token);
        if extension.is_empty() {
            return Err(CatalogError::EmptyToken);
        }
        Ok(Self {
            extension,
            description: description.into(),
            category,
            common_use: common_use.into(),
        })
    }

    /// Normalised lookup key, without the leading `.`.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.extension
    }

    /// The extension as users write it, e.g. `.mp4`.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!(".{}", self.extension)
    }

    /// Human-readable format name.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Category label.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// What the format is typically used for.
    #[must_use]
    pub fn common_use(&self) -> &str {
        &self.common_use
    }

    /// Replaces the description.
    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    /// Replaces the category.
    pub const fn set_category(&mut self, value: Category) {
        self.category = value;
    }

    /// Replaces the common-use text.
    pub fn set_common_use(&mut self, value: impl Into<String>) {
        self.common_use = value.into();
    }
}
