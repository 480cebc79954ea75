//! In-memory contact book with validated contact records.
//!
//! The crate keeps contacts in insertion order and addresses them by 1-based
//! position. Mobile numbers are validated on every assignment, so a
//! [`Contact`] can never hold a malformed number.
//!
//! # Overview
//!
//! - [`Contact`] and [`MobileNumber`] model a single validated record
//! - [`ContactBook`] owns the records and exposes add/list/get/update/delete
//! - [`seed_contacts`] builds the sample book used at startup
//! - [`cli`] drives the book from a line-oriented console menu
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use contact_book::{ContactBook, ContactDraft, ContactUpdate};
//!
//! let mut book = ContactBook::new();
//! let position = book
//!     .add(ContactDraft {
//!         first_name: "Ada".to_owned(),
//!         last_name: "Lovelace".to_owned(),
//!         company: "Analytical Engines".to_owned(),
//!         mobile_number: "871234567".to_owned(),
//!         email: "ada@example.com".to_owned(),
//!         birthdate: NaiveDate::from_ymd_opt(1815, 12, 10).expect("valid date"),
//!     })
//!     .expect("valid contact");
//!
//! assert_eq!(position, 1);
//!
//! let update = ContactUpdate {
//!     company: Some("Babbage & Co".to_owned()),
//!     ..ContactUpdate::default()
//! };
//! book.update(position, update).expect("update succeeds");
//! assert_eq!(book.get(1).expect("contact exists").company(), "Babbage & Co");
//! ```

mod birthdate;
mod book;
pub mod cli;
mod config;
mod contact;
mod error;
mod seed;
mod validation;

pub use birthdate::{BIRTHDATE_FORMAT, format_birthdate, parse_birthdate};
pub use book::{ContactBook, ListEntry, Listing};
pub use config::ContactBookSettings;
pub use contact::{Contact, ContactDraft, ContactUpdate, MobileNumber};
pub use error::{ContactBookError, DateParseError, NotFoundError, ValidationError};
pub use seed::{SAMPLE_COMPANY, SAMPLE_CONTACT_COUNT, seed_contacts};
pub use validation::{MOBILE_NUMBER_LEN, is_valid_mobile_number};
