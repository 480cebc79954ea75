//! Error types for console interaction.

use thiserror::Error;

/// Raised when a console token does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token could not be read as an integer.
    #[error("'{value}' is not a valid number")]
    NotANumber {
        /// The raw token as typed.
        value: String,
    },
}

/// Failures reading from or writing to the terminal streams.
///
/// These are the only errors that end a command loop early; data errors are
/// reported to the user and the loop continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    /// Writing to the output stream failed.
    #[error("failed to write to console: {message}")]
    Write {
        /// Description of the I/O error.
        message: String,
    },
    /// Reading from the input stream failed.
    #[error("failed to read from console: {message}")]
    Read {
        /// Description of the I/O error.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_the_token() {
        let err = ParseError::NotANumber {
            value: "abc".to_owned(),
        };
        assert_eq!(err.to_string(), "'abc' is not a valid number");
    }

    #[test]
    fn console_write_error_formats_correctly() {
        let err = ConsoleError::Write {
            message: "broken pipe".to_owned(),
        };
        assert_eq!(err.to_string(), "failed to write to console: broken pipe");
    }

    #[test]
    fn console_read_error_formats_correctly() {
        let err = ConsoleError::Read {
            message: "stream did not contain valid UTF-8".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read from console: stream did not contain valid UTF-8"
        );
    }
}
