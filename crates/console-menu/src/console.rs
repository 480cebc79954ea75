//! Prompt/response wrapper over a reader and writer pair.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::ConsoleError;

/// Whether a command loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Show the menu again.
    Continue,
    /// Leave the loop.
    Exit,
}

/// A line-oriented console bound to an input and an output stream.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Binds a console to the given streams.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes a single line followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Write`] if the output stream rejects the write.
    pub fn say(&mut self, line: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{line}").map_err(write_error)
    }

    /// Writes an empty line.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Write`] if the output stream rejects the write.
    pub fn blank_line(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output).map_err(write_error)
    }

    /// Writes `label` without a newline and reads the reply.
    ///
    /// The trailing line terminator (`\n` or `\r\n`) is stripped. Returns
    /// `Ok(None)` once the input stream is exhausted so callers can treat a
    /// closed stdin like an exit request.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`] when either stream fails.
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>, ConsoleError> {
        write!(self.output, "{label}").map_err(write_error)?;
        self.output.flush().map_err(write_error)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|err| ConsoleError::Read {
                message: err.to_string(),
            })?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Consumes the console and returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

fn write_error(err: std::io::Error) -> ConsoleError {
    ConsoleError::Write {
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rstest::rstest;

    use super::*;

    fn console(input: &str) -> Console<Cursor<String>, Vec<u8>> {
        Console::new(Cursor::new(input.to_owned()), Vec::new())
    }

    fn output_of(console: Console<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8_lossy(&console.into_output()).into_owned()
    }

    #[rstest]
    #[case("hello\n", "hello")]
    #[case("hello\r\n", "hello")]
    #[case("hello", "hello")]
    #[case("\n", "")]
    #[case("  padded  \n", "  padded  ")]
    fn prompt_strips_only_the_line_terminator(#[case] input: &str, #[case] expected: &str) {
        let mut console = console(input);

        let line = console.prompt("> ").expect("prompt succeeds");

        assert_eq!(line.as_deref(), Some(expected));
    }

    #[test]
    fn prompt_returns_none_at_end_of_input() {
        let mut console = console("");

        let line = console.prompt("> ").expect("prompt succeeds");

        assert_eq!(line, None);
    }

    #[test]
    fn prompt_reads_successive_lines() {
        let mut console = console("first\nsecond\n");

        let first = console.prompt("a: ").expect("first prompt");
        let second = console.prompt("b: ").expect("second prompt");
        let third = console.prompt("c: ").expect("third prompt");

        assert_eq!(first.as_deref(), Some("first"));
        assert_eq!(second.as_deref(), Some("second"));
        assert_eq!(third, None);
    }

    #[test]
    fn prompt_writes_label_without_newline() {
        let mut console = console("x\n");

        console.prompt("Enter your choice: ").expect("prompt succeeds");

        assert_eq!(output_of(console), "Enter your choice: ");
    }

    #[test]
    fn say_and_blank_line_append_newlines() {
        let mut console = console("");

        console.say("Main Menu").expect("say succeeds");
        console.blank_line().expect("blank line succeeds");
        console.say(format_args!("{} items", 3)).expect("say succeeds");

        assert_eq!(output_of(console), "Main Menu\n\n3 items\n");
    }
}
