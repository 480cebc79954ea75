//! The closed set of extension categories.

use std::fmt;

use serde::Deserialize;

use crate::error::CatalogError;

/// Category label attached to every catalogue record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Category {
    /// Video containers and codecs.
    Video,
    /// Raster and vector images.
    Image,
    /// Audio formats.
    Audio,
    /// Office and text documents.
    Document,
    /// Markup and styling for the web.
    Web,
    /// Source code.
    Programming,
    /// Data interchange formats.
    Data,
}

impl Category {
    /// Every category in menu order.
    pub const ALL: [Self; 7] = [
        Self::Video,
        Self::Image,
        Self::Audio,
        Self::Document,
        Self::Web,
        Self::Programming,
        Self::Data,
    ];

    /// Display label, identical to the variant name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Image => "Image",
            Self::Audio => "Audio",
            Self::Document => "Document",
            Self::Web => "Web",
            Self::Programming => "Programming",
            Self::Data => "Data",
        }
    }

    /// Maps a 1-based browse-menu number to its category.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownCategory`] for anything other than
    /// `1` to `7`.
    ///
    /// # Examples
    ///
    /// ```
    /// use file_extensions::Category;
    ///
    /// assert_eq!(Category::from_menu_choice("6"), Ok(Category::Programming));
    /// assert!(Category::from_menu_choice("8").is_err());
    /// ```
    pub fn from_menu_choice(choice: &str) -> Result<Self, CatalogError> {
        let trimmed = choice.trim();
        trimmed
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or_else(|| CatalogError::UnknownCategory {
                value: trimmed.to_owned(),
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1", Category::Video)]
    #[case("2", Category::Image)]
    #[case("3", Category::Audio)]
    #[case("4", Category::Document)]
    #[case("5", Category::Web)]
    #[case(" 6 ", Category::Programming)]
    #[case("7", Category::Data)]
    fn maps_menu_numbers(#[case] choice: &str, #[case] expected: Category) {
        assert_eq!(Category::from_menu_choice(choice), Ok(expected));
    }

    #[rstest]
    #[case("0")]
    #[case("8")]
    #[case("-1")]
    #[case("Video")]
    #[case("")]
    fn rejects_other_menu_choices(#[case] choice: &str) {
        assert_eq!(
            Category::from_menu_choice(choice),
            Err(CatalogError::UnknownCategory {
                value: choice.trim().to_owned()
            })
        );
    }

    #[test]
    fn display_matches_label() {
        for category in Category::ALL {
            assert_eq!(category.to_string(), category.label());
        }
    }

    #[rstest]
    #[case("\"video\"")]
    #[case("\"Videos\"")]
    #[case("\"Spreadsheet\"")]
    fn deserialization_requires_an_exact_label(#[case] json: &str) {
        assert!(serde_json::from_str::<Category>(json).is_err());
    }

    #[test]
    fn deserializes_from_label() {
        let category: Category = serde_json::from_str("\"Programming\"").expect("valid label");
        assert_eq!(category, Category::Programming);
    }
}
