//! Integration tests for the extension catalogue public API.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use file_extensions::{
    CatalogError, Category, FileExtensionCatalog, SAMPLE_EXTENSION_COUNT, seed_catalog,
};
use rstest::{fixture, rstest};

#[fixture]
fn seeded() -> FileExtensionCatalog {
    seed_catalog().expect("embedded catalog parses")
}

#[rstest]
fn spellings_resolve_to_the_same_record(seeded: FileExtensionCatalog) {
    let upper = seeded.lookup("MP4").expect("found");
    let lower = seeded.lookup("mp4").expect("found");
    let dotted = seeded.lookup(".mp4").expect("found");

    assert_eq!(upper, lower);
    assert_eq!(lower, dotted);
}

#[rstest]
fn missing_extension_is_not_found(seeded: FileExtensionCatalog) {
    assert_eq!(
        seeded.lookup("MOV2"),
        Err(CatalogError::ExtensionNotFound {
            token: "mov2".to_owned()
        })
    );
}

#[rstest]
fn sample_catalog_groups_every_record(seeded: FileExtensionCatalog) {
    let groups = seeded.list_all();

    let categories: Vec<Category> = groups.iter().map(|group| group.category).collect();
    assert_eq!(categories, Category::ALL.to_vec());
    let total: usize = groups.iter().map(|group| group.extensions.len()).sum();
    assert_eq!(total, SAMPLE_EXTENSION_COUNT);
}

#[rstest]
#[case(Category::Video, 5)]
#[case(Category::Image, 5)]
#[case(Category::Audio, 4)]
#[case(Category::Document, 5)]
#[case(Category::Web, 2)]
#[case(Category::Programming, 3)]
#[case(Category::Data, 1)]
fn sample_category_sizes(
    seeded: FileExtensionCatalog,
    #[case] category: Category,
    #[case] expected: usize,
) {
    assert_eq!(seeded.list_by_category(category).len(), expected);
}

#[rstest]
fn browse_menu_numbers_select_categories(seeded: FileExtensionCatalog) {
    let category = Category::from_menu_choice("7").expect("valid choice");
    let records = seeded.list_by_category(category);

    let tokens: Vec<&str> = records.iter().map(|record| record.token()).collect();
    assert_eq!(tokens, vec!["json"]);
}

#[rstest]
fn removed_records_disappear_from_listings(mut seeded: FileExtensionCatalog) {
    seeded.remove(".json").expect("record removed");

    assert_eq!(seeded.len(), SAMPLE_EXTENSION_COUNT - 1);
    assert!(seeded.list_by_category(Category::Data).is_empty());
    assert_eq!(seeded.list_all().len(), 6);
}

#[test]
fn single_entry_catalog_resolves_only_that_entry() {
    let mut catalog = FileExtensionCatalog::new();
    catalog
        .add_or_replace("mp4", "MPEG-4 Video", Category::Video, "Video streaming")
        .expect("valid token");

    assert_eq!(
        catalog.lookup("MOV"),
        Err(CatalogError::ExtensionNotFound {
            token: "mov".to_owned()
        })
    );
    let record = catalog.lookup(".mp4").expect("found");
    assert_eq!(record.display_name(), ".mp4");
    assert_eq!(record.description(), "MPEG-4 Video");
}
