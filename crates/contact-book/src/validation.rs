//! Mobile number validation.
//!
//! # Validation Rules
//!
//! - Exactly [`MOBILE_NUMBER_LEN`] characters
//! - Every character is an ASCII digit
//! - Not all zero

/// Required length of a mobile number.
pub const MOBILE_NUMBER_LEN: usize = 9;

/// Validates a mobile number.
///
/// # Examples
///
/// ```
/// use contact_book::is_valid_mobile_number;
///
/// assert!(is_valid_mobile_number("087001000"));
/// assert!(!is_valid_mobile_number("000000000")); // All zero
/// assert!(!is_valid_mobile_number("08700100"));  // Too short
/// assert!(!is_valid_mobile_number("08700100a")); // Non-digit
/// ```
#[must_use]
pub fn is_valid_mobile_number(value: &str) -> bool {
    value.len() == MOBILE_NUMBER_LEN
        && value.bytes().all(|b| b.is_ascii_digit())
        && value.bytes().any(|b| b != b'0')
}
