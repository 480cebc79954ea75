//! Parsing helpers for raw console tokens.

use std::str::FromStr;

use crate::error::ParseError;

/// Parses a trimmed console token as a number.
///
/// # Errors
///
/// Returns [`ParseError::NotANumber`] when the token is not a valid `T`.
///
/// # Examples
///
/// ```
/// use console_menu::{ParseError, parse_number};
///
/// assert_eq!(parse_number::<i64>(" 7 "), Ok(7));
/// assert_eq!(
///     parse_number::<i64>("seven"),
///     Err(ParseError::NotANumber { value: "seven".to_owned() })
/// );
/// ```
pub fn parse_number<T>(token: &str) -> Result<T, ParseError>
where
    T: FromStr,
{
    let trimmed = token.trim();
    trimmed.parse::<T>().map_err(|_| ParseError::NotANumber {
        value: trimmed.to_owned(),
    })
}

/// Returns `true` when a reply is empty or whitespace only.
///
/// Blank replies mean "keep the current value" in update prompts.
#[must_use]
pub fn is_blank(reply: &str) -> bool {
    reply.trim().is_empty()
}
