//! Line-oriented console plumbing for menu-driven tools.
//!
//! The crate keeps terminal concerns out of the domain crates. A
//! [`Console`] wraps any buffered reader and writer pair so the command loops
//! can be driven by standard input in production and by an in-memory cursor
//! in tests.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//!
//! use console_menu::{Console, parse_number};
//!
//! let mut console = Console::new(Cursor::new("42\n"), Vec::new());
//! let line = console.prompt("Enter a number: ").expect("prompt succeeds");
//! let value: i64 = parse_number(line.as_deref().unwrap_or_default()).expect("number");
//!
//! assert_eq!(value, 42);
//! ```

mod console;
mod error;
mod input;
mod logging;

pub use console::{Console, Flow};
pub use error::{ConsoleError, ParseError};
pub use input::{is_blank, parse_number};
pub use logging::init_tracing;
