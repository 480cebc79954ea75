//! File extension lookup console application.
//!
//! This binary delegates to `file_extensions::cli` for the command loop.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use console_menu::{Console, init_tracing};
use file_extensions::cli::{self, CliError};
use file_extensions::{FileExtensionsSettings, seed_catalog};
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
    let settings = FileExtensionsSettings::load_from_iter(env::args_os()).map_err(|err| {
        CliError::Config {
            message: err.to_string(),
        }
    })?;
    init_tracing(settings.log_level());

    let catalog = seed_catalog()?;

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    cli::run(&mut console, &catalog)?;
    Ok(())
}
