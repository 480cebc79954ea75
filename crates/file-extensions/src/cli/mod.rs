//! Console command loop for the extension catalogue.
//!
//! Search, list and browse are read-only, so the loop only borrows the
//! catalogue. Lookup failures become guidance text; only stream failures
//! escape [`run`].

use std::io::{BufRead, Write};

use console_menu::{Console, ConsoleError, Flow};
use tracing::debug;

use crate::catalog::FileExtensionCatalog;
use crate::category::Category;
use crate::error::CatalogError;
use crate::extension::FileExtension;

mod error;

pub use error::CliError;

const BOX_TOP: &str = "╔════════════════════════════════════════════════════╗";
const BOX_BOTTOM: &str = "╚════════════════════════════════════════════════════╝";
const BANNER_TITLE: &str = "║     FILE EXTENSION INFORMATION SYSTEM              ║";
const MENU_RULE: &str = "════════════════════════════════════════════════════";
const SECTION_RULE_WIDTH: usize = 50;

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `1`: look up one extension.
    Search,
    /// `2`: list every extension grouped by category.
    ListAll,
    /// `3`: list the extensions in one category.
    Browse,
    /// `0`: leave the program.
    Exit,
}

impl Command {
    /// Maps a menu reply to a command, ignoring surrounding whitespace.
    #[must_use]
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Search),
            "2" => Some(Self::ListAll),
            "3" => Some(Self::Browse),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Runs the menu loop until the exit command or end of input.
///
/// # Errors
///
/// Returns [`ConsoleError`] only when the terminal streams fail.
pub fn run<R, W>(
    console: &mut Console<R, W>,
    catalog: &FileExtensionCatalog,
) -> Result<(), ConsoleError>
where
    R: BufRead,
    W: Write,
{
    console.say(BOX_TOP)?;
    console.say(BANNER_TITLE)?;
    console.say(BOX_BOTTOM)?;
    console.say(format_args!(
        "\nDatabase contains {} file extensions",
        catalog.len()
    ))?;
    loop {
        console.say(format_args!("\n{MENU_RULE}"))?;
        console.say("Main Menu:")?;
        console.say("1. Search for file extension")?;
        console.say("2. Show all extensions")?;
        console.say("3. Browse by category")?;
        console.say("0. Exit")?;
        console.say(MENU_RULE)?;
        let Some(choice) = console.prompt("Enter your choice: ")? else {
            return say_goodbye(console);
        };
        if execute(console, catalog, &choice)? == Flow::Exit {
            return Ok(());
        }
    }
}

/// Executes a single menu reply.
///
/// # Errors
///
/// Returns [`ConsoleError`] only when the terminal streams fail.
pub fn execute<R, W>(
    console: &mut Console<R, W>,
    catalog: &FileExtensionCatalog,
    choice: &str,
) -> Result<Flow, ConsoleError>
where
    R: BufRead,
    W: Write,
{
    let Some(command) = Command::from_choice(choice) else {
        debug!(choice, "unrecognised menu choice");
        console.say("\n✗ Invalid choice. Please select 0-3.")?;
        return Ok(Flow::Continue);
    };

    match command {
        Command::Search => search(console, catalog)?,
        Command::ListAll => show_all(console, catalog)?,
        Command::Browse => browse(console, catalog)?,
        Command::Exit => {
            say_goodbye(console)?;
            return Ok(Flow::Exit);
        }
    }
    Ok(Flow::Continue)
}

fn search<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &FileExtensionCatalog,
) -> Result<(), ConsoleError> {
    let query = console
        .prompt("\nEnter file extension (e.g., mp4 or .mp4): ")?
        .unwrap_or_default();

    match catalog.lookup(&query) {
        Ok(record) => {
            console.say("\n✓ Extension found!")?;
            say_card(console, record)
        }
        Err(CatalogError::ExtensionNotFound { token }) => say_not_found(console, &token),
        Err(err) => {
            debug!(error = %err, "rejected extension query");
            console.say("\n✗ Please enter a valid extension.")
        }
    }
}

fn show_all<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &FileExtensionCatalog,
) -> Result<(), ConsoleError> {
    console.say(format_args!("\n{BOX_TOP}"))?;
    console.say(format_args!(
        "  Available File Extensions ({} total)",
        catalog.len()
    ))?;
    console.say(BOX_BOTTOM)?;

    for group in catalog.list_all() {
        console.say(format_args!("\n{}:", group.category))?;
        say_section_rule(console)?;
        for record in group.extensions {
            console.say(format_args!(
                "  {:<8} - {}",
                record.display_name(),
                record.description()
            ))?;
        }
    }
    Ok(())
}

fn browse<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &FileExtensionCatalog,
) -> Result<(), ConsoleError> {
    console.say("\nAvailable Categories:")?;
    for (number, category) in (1_usize..).zip(Category::ALL) {
        console.say(format_args!("{number}. {category}"))?;
    }
    let choice = console
        .prompt("\nEnter category number: ")?
        .unwrap_or_default();

    let category = match Category::from_menu_choice(&choice) {
        Ok(category) => category,
        Err(err) => {
            debug!(error = %err, "rejected category choice");
            return console.say("\n✗ Invalid category choice.");
        }
    };

    console.say(format_args!("\n{category} File Extensions:"))?;
    say_section_rule(console)?;
    let records = catalog.list_by_category(category);
    if records.is_empty() {
        return console.say("No extensions found in this category.");
    }
    for record in records {
        console.say(format_args!(
            "{} - {}",
            record.display_name(),
            record.description()
        ))?;
    }
    Ok(())
}

fn say_card<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    record: &FileExtension,
) -> Result<(), ConsoleError> {
    console.say(format_args!("\n{BOX_TOP}"))?;
    console.say(format_args!("  Extension: {}", record.display_name()))?;
    console.say(format_args!("  Description: {}", record.description()))?;
    console.say(format_args!("  Category: {}", record.category()))?;
    console.say(format_args!("  Common Use: {}", record.common_use()))?;
    console.say(BOX_BOTTOM)
}

fn say_not_found<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    token: &str,
) -> Result<(), ConsoleError> {
    console.say(format_args!("\n{BOX_TOP}"))?;
    console.say(format_args!(
        "  ✗ Extension '.{token}' not found in database."
    ))?;
    console.say("  ")?;
    console.say("  This could be:")?;
    console.say("  • A less common file format")?;
    console.say("  • A typo in the extension name")?;
    console.say("  • A custom or proprietary format")?;
    console.say("  ")?;
    console.say("  Suggestion: Try browsing all extensions (Option 2)")?;
    console.say(BOX_BOTTOM)
}

fn say_section_rule<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<(), ConsoleError> {
    console.say("-".repeat(SECTION_RULE_WIDTH))
}

fn say_goodbye<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), ConsoleError> {
    console.say("\n✓ Thank you for using File Extension System!")
}
