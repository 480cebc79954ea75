//! The contact collection.
//!
//! Contacts are kept in insertion order. Positions are 1-based and derived
//! from the current index, so deleting a contact shifts every later contact
//! down by one.

use tracing::{debug, info};

use crate::contact::{Contact, ContactDraft, ContactUpdate};
use crate::error::{ContactBookError, NotFoundError, ValidationError};

/// An ordered, in-memory collection of contacts.
///
/// No field is required to be unique; duplicate names and emails are
/// allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

/// A contact paired with its current display position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListEntry<'a> {
    /// 1-based position in the book.
    pub position: usize,
    /// The contact at that position.
    pub contact: &'a Contact,
}

/// Result of listing the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<'a> {
    /// The book holds no contacts.
    Empty,
    /// Every contact in storage order with positions `1..=n`.
    Entries(Vec<ListEntry<'a>>),
}

impl ContactBook {
    /// Creates an empty book.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            contacts: Vec::new(),
        }
    }

    /// Number of contacts held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Returns `true` when the book holds no contacts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Iterates over contacts in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    /// Validates a draft and appends it.
    ///
    /// Returns the new contact's 1-based position.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the mobile number is malformed; the
    /// book is unchanged in that case.
    pub fn add(&mut self, draft: ContactDraft) -> Result<usize, ValidationError> {
        let contact = Contact::new(draft)?;
        Ok(self.push(contact))
    }

    /// Appends an already validated contact and returns its position.
    pub fn push(&mut self, contact: Contact) -> usize {
        self.contacts.push(contact);
        let position = self.contacts.len();
        info!(position, "contact added");
        position
    }

    /// Lists every contact with its position.
    #[must_use]
    pub fn list(&self) -> Listing<'_> {
        if self.contacts.is_empty() {
            return Listing::Empty;
        }
        let entries = self
            .contacts
            .iter()
            .enumerate()
            .map(|(index, contact)| ListEntry {
                position: index + 1,
                contact,
            })
            .collect();
        Listing::Entries(entries)
    }

    /// Returns the contact at a 1-based position.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when `position` is outside `1..=len()`.
    pub fn get(&self, position: usize) -> Result<&Contact, NotFoundError> {
        let index = self.index_of(position)?;
        self.contacts
            .get(index)
            .ok_or_else(|| self.not_found(position))
    }

    /// Applies a partial update to the contact at `position`.
    ///
    /// Blank or omitted fields keep their current value. The update is
    /// atomic: if the replacement mobile number is rejected, no field
    /// changes.
    ///
    /// # Errors
    ///
    /// Returns [`ContactBookError::NotFound`] for a bad position and
    /// [`ContactBookError::Validation`] for a malformed mobile number.
    pub fn update(
        &mut self,
        position: usize,
        update: ContactUpdate,
    ) -> Result<&Contact, ContactBookError> {
        let index = self.index_of(position)?;
        let not_found = self.not_found(position);
        let contact = self.contacts.get_mut(index).ok_or(not_found)?;
        contact.apply(update)?;
        info!(position, "contact updated");
        Ok(contact)
    }

    /// Removes and returns the contact at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when `position` is outside `1..=len()`.
    pub fn delete(&mut self, position: usize) -> Result<Contact, NotFoundError> {
        let index = self.index_of(position)?;
        let removed = self.contacts.remove(index);
        info!(position, remaining = self.contacts.len(), "contact deleted");
        Ok(removed)
    }

    fn index_of(&self, position: usize) -> Result<usize, NotFoundError> {
        position
            .checked_sub(1)
            .filter(|index| *index < self.contacts.len())
            .ok_or_else(|| {
                debug!(position, count = self.contacts.len(), "no contact at position");
                self.not_found(position)
            })
    }

    fn not_found(&self, position: usize) -> NotFoundError {
        NotFoundError {
            position,
            count: self.contacts.len(),
        }
    }
}

impl FromIterator<Contact> for ContactBook {
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        Self {
            contacts: iter.into_iter().collect(),
        }
    }
}
