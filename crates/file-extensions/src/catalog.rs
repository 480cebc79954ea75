//! The extension catalogue.
//!
//! Records are keyed by normalised token. Inserting an existing key
//! overwrites the record in place, keeping its original listing slot.
//! Listing follows insertion order, and category groups appear in the order
//! their first record was inserted.

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::category::Category;
use crate::error::CatalogError;
use crate::extension::{FileExtension, normalize_token};

/// In-memory mapping from normalised token to record, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileExtensionCatalog {
    entries: IndexMap<String, FileExtension>,
}

/// Records sharing a category, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    /// The shared category.
    pub category: Category,
    /// Records in that category.
    pub extensions: Vec<&'a FileExtension>,
}

impl FileExtensionCatalog {
    /// Creates an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the catalogue holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FileExtension> {
        self.entries.values()
    }

    /// Stores a record under its token, returning any record it replaced.
    ///
    /// A replaced record keeps its listing slot.
    pub fn insert(&mut self, record: FileExtension) -> Option<FileExtension> {
        let token = record.token().to_owned();
        let replaced = self.entries.insert(token.clone(), record);
        if replaced.is_some() {
            debug!(token = %token, "catalog entry replaced");
        }
        replaced
    }

    /// Builds a record and stores it, overwriting any existing entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyToken`] if the token normalises to
    /// nothing.
    pub fn add_or_replace(
        &mut self,
        token: &str,
        description: impl Into<String>,
        category: Category,
        common_use: impl Into<String>,
    ) -> Result<Option<FileExtension>, CatalogError> {
        let record = FileExtension::new(token, description, category, common_use)?;
        Ok(self.insert(record))
    }

    /// Finds the record for a token, ignoring case and leading dots.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyToken`] for a blank query and
    /// [`CatalogError::ExtensionNotFound`] when nothing matches.
    pub fn lookup(&self, token: &str) -> Result<&FileExtension, CatalogError> {
        let key = normalize_token(token);
        if key.is_empty() {
            return Err(CatalogError::EmptyToken);
        }
        self.entries.get(&key).ok_or_else(|| {
            debug!(token = %key, "extension lookup missed");
            CatalogError::ExtensionNotFound { token: key }
        })
    }

    /// Removes and returns the record for a token.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyToken`] for a blank token and
    /// [`CatalogError::ExtensionNotFound`] when nothing matches.
    pub fn remove(&mut self, token: &str) -> Result<FileExtension, CatalogError> {
        let key = normalize_token(token);
        if key.is_empty() {
            return Err(CatalogError::EmptyToken);
        }
        let removed = self
            .entries
            .shift_remove(&key)
            .ok_or_else(|| CatalogError::ExtensionNotFound { token: key.clone() })?;
        info!(token = %key, "catalog entry removed");
        Ok(removed)
    }

    /// Groups every record by category.
    ///
    /// Groups appear in the order their first record was inserted; records
    /// within a group keep insertion order.
    #[must_use]
    pub fn list_all(&self) -> Vec<CategoryGroup<'_>> {
        let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
        for record in self.iter() {
            match groups
                .iter_mut()
                .find(|group| group.category == record.category())
            {
                Some(group) => group.extensions.push(record),
                None => groups.push(CategoryGroup {
                    category: record.category(),
                    extensions: vec![record],
                }),
            }
        }
        groups
    }

    /// Records in exactly `category`, in insertion order.
    ///
    /// An empty result means the category is valid but has no records.
    #[must_use]
    pub fn list_by_category(&self, category: Category) -> Vec<&FileExtension> {
        self.iter()
            .filter(|record| record.category() == category)
            .collect()
    }
}
