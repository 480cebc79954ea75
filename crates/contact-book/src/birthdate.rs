//! Birthdate parsing and formatting.

use chrono::NaiveDate;

use crate::error::DateParseError;

/// Day-first format used for prompts and display.
pub const BIRTHDATE_FORMAT: &str = "%d/%m/%Y";

/// ISO 8601 fallback accepted on input.
const ISO_FORMAT: &str = "%Y-%m-%d";

/// Parses a birthdate typed as `dd/mm/yyyy` or `yyyy-mm-dd`.
///
/// # Errors
///
/// Returns [`DateParseError`] when neither format matches or the date does
/// not exist.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use contact_book::parse_birthdate;
///
/// let expected = NaiveDate::from_ymd_opt(1990, 3, 25).expect("valid date");
/// assert_eq!(parse_birthdate("25/03/1990"), Ok(expected));
/// assert_eq!(parse_birthdate("1990-03-25"), Ok(expected));
/// assert!(parse_birthdate("March 25th").is_err());
/// ```
pub fn parse_birthdate(input: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, BIRTHDATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, ISO_FORMAT))
        .map_err(|_| DateParseError {
            value: trimmed.to_owned(),
        })
}

/// Formats a birthdate as `dd/mm/yyyy`.
#[must_use]
pub fn format_birthdate(date: NaiveDate) -> String {
    date.format(BIRTHDATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("01/02/1985", 1985, 2, 1)]
    #[case(" 29/02/2000 ", 2000, 2, 29)]
    #[case("1999-12-31", 1999, 12, 31)]
    fn parses_supported_formats(
        #[case] input: &str,
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
    ) {
        let expected = NaiveDate::from_ymd_opt(year, month, day).expect("valid date");
        assert_eq!(parse_birthdate(input), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("yesterday")]
    #[case("31/02/1990")]
    #[case("29/02/2001")]
    #[case("12/31/1990")]
    fn rejects_unparsable_dates(#[case] input: &str) {
        assert_eq!(
            parse_birthdate(input),
            Err(DateParseError {
                value: input.trim().to_owned()
            })
        );
    }

    #[test]
    fn formats_day_first_with_padding() {
        let date = NaiveDate::from_ymd_opt(1986, 2, 2).expect("valid date");
        assert_eq!(format_birthdate(date), "02/02/1986");
    }
}
