//! Contact record model.

use std::fmt;

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::validation::is_valid_mobile_number;

/// A mobile number that passed [`is_valid_mobile_number`].
///
/// # Examples
///
/// ```
/// use contact_book::MobileNumber;
///
/// let number = MobileNumber::new("087001000").expect("valid number");
/// assert_eq!(number.as_ref(), "087001000");
/// assert!(MobileNumber::new("000000000").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MobileNumber(String);

impl MobileNumber {
    /// Validate and construct a [`MobileNumber`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidMobileNumber`] when the value is not
    /// exactly nine ASCII digits or is all zero.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let number = value.into();
        if !is_valid_mobile_number(&number) {
            return Err(ValidationError::InvalidMobileNumber { value: number });
        }
        Ok(Self(number))
    }
}

impl AsRef<str> for MobileNumber {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Raw field values for a new contact, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Employer or organisation.
    pub company: String,
    /// Unvalidated mobile number input.
    pub mobile_number: String,
    /// Email address; not validated.
    pub email: String,
    /// Date of birth.
    pub birthdate: NaiveDate,
}

/// Replacement values for an existing contact.
///
/// `None` and blank strings leave the current value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New employer or organisation.
    pub company: Option<String>,
    /// New mobile number, validated before anything is applied.
    pub mobile_number: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New date of birth.
    pub birthdate: Option<NaiveDate>,
}

impl ContactUpdate {
    /// Returns `true` when no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.company,
            &self.mobile_number,
            &self.email,
        ]
        .into_iter()
        .all(|field| supplied(field.as_deref()).is_none())
            && self.birthdate.is_none()
    }
}

/// A stored contact.
///
/// ## Invariants
/// - `mobile_number` always satisfies [`is_valid_mobile_number`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    first_name: String,
    last_name: String,
    company: String,
    mobile_number: MobileNumber,
    email: String,
    birthdate: NaiveDate,
}

impl Contact {
    /// Validates a draft and builds the contact.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the mobile number is malformed; no
    /// contact is constructed in that case.
    pub fn new(draft: ContactDraft) -> Result<Self, ValidationError> {
        let ContactDraft {
            first_name,
            last_name,
            company,
            mobile_number,
            email,
            birthdate,
        } = draft;
        Ok(Self {
            first_name,
            last_name,
            company,
            mobile_number: MobileNumber::new(mobile_number)?,
            email,
            birthdate,
        })
    }

    /// Given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// First and last name separated by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Employer or organisation.
    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Validated mobile number.
    #[must_use]
    pub const fn mobile_number(&self) -> &MobileNumber {
        &self.mobile_number
    }

    /// Email address as entered.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Date of birth.
    #[must_use]
    pub const fn birthdate(&self) -> NaiveDate {
        self.birthdate
    }

    /// Replaces the given name.
    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.first_name = value.into();
    }

    /// Replaces the family name.
    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.last_name = value.into();
    }

    /// Replaces the company.
    pub fn set_company(&mut self, value: impl Into<String>) {
        self.company = value.into();
    }

    /// Replaces the mobile number after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] and keeps the previous number when the new
    /// value is malformed.
    pub fn set_mobile_number(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.mobile_number = MobileNumber::new(value)?;
        Ok(())
    }

    /// Replaces the email address.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Replaces the date of birth.
    pub const fn set_birthdate(&mut self, value: NaiveDate) {
        self.birthdate = value;
    }

    /// Applies every supplied field of `update`, or none of them.
    ///
    /// The mobile number is validated before any field is written, so a
    /// rejected update leaves the contact untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the replacement mobile number is
    /// malformed.
    pub fn apply(&mut self, update: ContactUpdate) -> Result<(), ValidationError> {
        let mobile_number = supplied(update.mobile_number.as_deref())
            .map(MobileNumber::new)
            .transpose()?;

        if let Some(value) = supplied(update.first_name.as_deref()) {
            self.set_first_name(value);
        }
        if let Some(value) = supplied(update.last_name.as_deref()) {
            self.set_last_name(value);
        }
        if let Some(value) = supplied(update.company.as_deref()) {
            self.set_company(value);
        }
        if let Some(value) = mobile_number {
            self.mobile_number = value;
        }
        if let Some(value) = supplied(update.email.as_deref()) {
            self.set_email(value);
        }
        if let Some(value) = update.birthdate {
            self.set_birthdate(value);
        }
        Ok(())
    }
}

/// Treats blank replacement text as "not supplied".
fn supplied(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}
