//! Contact book console application.
//!
//! This binary delegates to `contact_book::cli` for the command loop, keeping
//! the menu behaviour testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use console_menu::{Console, init_tracing};
use contact_book::cli::{self, CliError};
use contact_book::{ContactBook, ContactBookSettings, seed_contacts};
use ortho_config::OrthoConfig;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let settings =
        ContactBookSettings::load_from_iter(env::args_os()).map_err(|err| CliError::Config {
            message: err.to_string(),
        })?;
    init_tracing(settings.log_level());

    let mut book = if settings.skip_sample_data {
        ContactBook::new()
    } else {
        seed_contacts()
    };

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    cli::run(&mut console, &mut book)?;
    Ok(())
}
