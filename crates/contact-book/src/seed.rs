//! Sample contacts loaded at startup.
//!
//! The sample book is built from two fixed name lists. Every other field is
//! derived from the contact's index, so the output is identical on every
//! run.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::book::ContactBook;
use crate::contact::{Contact, ContactDraft};

/// Company shared by every sample contact.
pub const SAMPLE_COMPANY: &str = "Dublin Business School";

/// Number of contacts produced by [`seed_contacts`].
pub const SAMPLE_CONTACT_COUNT: usize = FIRST_NAMES.len();

const FIRST_NAMES: [&str; 20] = [
    "Emily",
    "John",
    "Sarah",
    "Michael",
    "Jessica",
    "David",
    "Emma",
    "Daniel",
    "Olivia",
    "James",
    "Sophia",
    "William",
    "Isabella",
    "Robert",
    "Mia",
    "Thomas",
    "Charlotte",
    "Christopher",
    "Amelia",
    "Matthew",
];

const LAST_NAMES: [&str; 20] = [
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Garcia",
    "Miller",
    "Davis",
    "Rodriguez",
    "Martinez",
    "Hernandez",
    "Lopez",
    "Gonzalez",
    "Wilson",
    "Anderson",
    "Thomas",
    "Taylor",
    "Moore",
    "Jackson",
    "Martin",
];

/// Base subscriber number; the index is added to keep numbers distinct.
const MOBILE_BASE: u32 = 7_001_000;

/// Builds the sample contact book.
///
/// Takes no external input. Contacts that fail validation are logged and
/// skipped rather than aborting startup.
///
/// # Example
///
/// ```
/// use contact_book::{SAMPLE_CONTACT_COUNT, seed_contacts};
///
/// let book = seed_contacts();
/// assert_eq!(book.len(), SAMPLE_CONTACT_COUNT);
/// assert_eq!(book.get(1).expect("first contact").full_name(), "Emily Smith");
/// ```
#[must_use]
pub fn seed_contacts() -> ContactBook {
    let book: ContactBook = (0_u32..)
        .zip(FIRST_NAMES.iter().zip(LAST_NAMES.iter()))
        .filter_map(|(index, (first_name, last_name))| {
            sample_contact(index, first_name, last_name)
        })
        .collect();
    info!(contact_count = book.len(), "sample contacts loaded");
    book
}

fn sample_contact(index: u32, first_name: &str, last_name: &str) -> Option<Contact> {
    let Some(birthdate) = sample_birthdate(index) else {
        warn!(index, "skipping sample contact with impossible birthdate");
        return None;
    };
    let draft = ContactDraft {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        company: SAMPLE_COMPANY.to_owned(),
        mobile_number: format!("08{}", MOBILE_BASE + index),
        email: format!(
            "{}.{}@dbs.ie",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        birthdate,
    };
    Contact::new(draft)
        .inspect_err(|err| warn!(index, error = %err, "skipping invalid sample contact"))
        .ok()
}

fn sample_birthdate(index: u32) -> Option<NaiveDate> {
    let year = 1985 + i32::try_from(index % 10).ok()?;
    NaiveDate::from_ymd_opt(year, index % 12 + 1, index % 28 + 1)
}
