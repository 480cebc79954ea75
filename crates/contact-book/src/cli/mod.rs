//! Console command loop for the contact book.
//!
//! The binary hands stdin and stdout to [`run`]; tests hand it an in-memory
//! cursor and buffer. All formatting lives here so the record and book types
//! stay free of console concerns.

use std::io::{BufRead, Write};

use console_menu::{Console, ConsoleError, Flow, is_blank, parse_number};
use tracing::debug;

use crate::birthdate::{format_birthdate, parse_birthdate};
use crate::book::{ContactBook, ListEntry, Listing};
use crate::contact::{Contact, ContactDraft, ContactUpdate};

mod error;

pub use error::CliError;

const BANNER: &str = concat!(
    "╔════════════════════════════════════════╗\n",
    "║    CONTACT BOOK MANAGEMENT SYSTEM      ║\n",
    "╚════════════════════════════════════════╝",
);

const MENU: &str = concat!(
    "\n- - - - - - - - - - - - - - - - - - - -\n",
    "Main Menu\n",
    "1: Add Contact\n",
    "2: Show All Contacts\n",
    "3: Show Contact Details\n",
    "4: Update Contact\n",
    "5: Delete Contact\n",
    "0: Exit\n",
    "- - - - - - - - - - - - - - - - - - - -",
);

const RULE: &str = "----------------------------------------";
const INVALID_DATE: &str = "Invalid date format. Please use dd/mm/yyyy";
const INVALID_POSITION: &str = "\n✗ Invalid contact number.";

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `1`: add a contact.
    Add,
    /// `2`: list every contact.
    ListAll,
    /// `3`: show one contact in full.
    ShowDetails,
    /// `4`: update a contact.
    Update,
    /// `5`: delete a contact.
    Delete,
    /// `0`: leave the program.
    Exit,
}

impl Command {
    /// Maps a menu reply to a command.
    ///
    /// Surrounding whitespace is ignored; anything else unrecognised yields
    /// `None`.
    #[must_use]
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::ListAll),
            "3" => Some(Self::ShowDetails),
            "4" => Some(Self::Update),
            "5" => Some(Self::Delete),
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
pub fn run<R, W>(console: &mut Console<R, W>, book: &mut ContactBook) -> Result<(), ConsoleError>
where
    R: BufRead,
    W: Write,
{
    console.say(BANNER)?;
    loop {
        console.say(MENU)?;
        let Some(choice) = console.prompt("Enter your choice: ")? else {
            return say_goodbye(console);
        };
        if execute(console, book, &choice)? == Flow::Exit {
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
    book: &mut ContactBook,
    choice: &str,
) -> Result<Flow, ConsoleError>
where
    R: BufRead,
    W: Write,
{
    let Some(command) = Command::from_choice(choice) else {
        debug!(choice, "unrecognised menu choice");
        console.say("\n✗ Invalid choice. Please try again.")?;
        return Ok(Flow::Continue);
    };

    match command {
        Command::Add => add_contact(console, book)?,
        Command::ListAll => show_all(console, book)?,
        Command::ShowDetails => show_details(console, book)?,
        Command::Update => update_contact(console, book)?,
        Command::Delete => delete_contact(console, book)?,
        Command::Exit => {
            say_goodbye(console)?;
            return Ok(Flow::Exit);
        }
    }
    Ok(Flow::Continue)
}

fn add_contact<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    book: &mut ContactBook,
) -> Result<(), ConsoleError> {
    console.say("\n--- Add New Contact ---")?;
    let first_name = ask(console, "First Name: ")?;
    let last_name = ask(console, "Last Name: ")?;
    let company = ask(console, "Company: ")?;
    let mobile_number = ask(console, "Mobile Number (9 digits): ")?;
    let email = ask(console, "Email: ")?;
    let birthdate_reply = ask(console, "Birthdate (dd/mm/yyyy): ")?;

    let birthdate = match parse_birthdate(&birthdate_reply) {
        Ok(date) => date,
        Err(err) => {
            debug!(error = %err, "rejected birthdate");
            return console.say(format_args!("\n✗ Error: {INVALID_DATE}"));
        }
    };

    let draft = ContactDraft {
        first_name,
        last_name,
        company,
        mobile_number,
        email,
        birthdate,
    };
    match book.add(draft) {
        Ok(position) => console.say(format_args!(
            "\n✓ Contact added successfully! (#{position})"
        )),
        Err(err) => console.say(format_args!("\n✗ Error: {err}")),
    }
}

fn show_all<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    book: &ContactBook,
) -> Result<(), ConsoleError> {
    match book.list() {
        Listing::Empty => console.say("\nNo contacts found."),
        Listing::Entries(entries) => {
            console.say(format_args!("\n--- All Contacts ({}) ---", entries.len()))?;
            for entry in entries {
                console.say(render_entry(entry))?;
            }
            Ok(())
        }
    }
}

fn show_details<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    book: &ContactBook,
) -> Result<(), ConsoleError> {
    if book.is_empty() {
        return console.say("\nNo contacts available.");
    }
    let Some(position) = ask_position(console, "\nEnter contact number to view: ")? else {
        return Ok(());
    };
    match book.get(position) {
        Ok(contact) => {
            console.say("\n--- Contact Details ---")?;
            console.say(render_detail(contact))
        }
        Err(_) => console.say(INVALID_POSITION),
    }
}

fn update_contact<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    book: &mut ContactBook,
) -> Result<(), ConsoleError> {
    if book.is_empty() {
        return console.say("\nNo contacts to update.");
    }
    show_all(console, book)?;
    let Some(position) = ask_position(console, "\nEnter contact number to update: ")? else {
        return Ok(());
    };
    let Ok(current) = book.get(position).cloned() else {
        return console.say(INVALID_POSITION);
    };

    console.say("\n--- Update Contact (press Enter to keep current value) ---")?;
    let first_name = ask(console, &format!("First Name [{}]: ", current.first_name()))?;
    let last_name = ask(console, &format!("Last Name [{}]: ", current.last_name()))?;
    let company = ask(console, &format!("Company [{}]: ", current.company()))?;
    let mobile_number = ask(console, &format!("Mobile [{}]: ", current.mobile_number()))?;
    let email = ask(console, &format!("Email [{}]: ", current.email()))?;
    let birthdate_reply = ask(
        console,
        &format!("Birthdate [{}]: ", format_birthdate(current.birthdate())),
    )?;

    let birthdate = if is_blank(&birthdate_reply) {
        None
    } else {
        match parse_birthdate(&birthdate_reply) {
            Ok(date) => Some(date),
            Err(err) => {
                debug!(error = %err, "rejected birthdate");
                return console.say(format_args!("\n✗ Update failed: {INVALID_DATE}"));
            }
        }
    };

    let update = ContactUpdate {
        first_name: Some(first_name),
        last_name: Some(last_name),
        company: Some(company),
        mobile_number: Some(mobile_number),
        email: Some(email),
        birthdate,
    };
    if update.is_empty() {
        return console.say("\nNo changes made.");
    }
    match book.update(position, update) {
        Ok(_) => console.say("\n✓ Contact updated successfully!"),
        Err(err) => console.say(format_args!("\n✗ Update failed: {err}")),
    }
}

fn delete_contact<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    book: &mut ContactBook,
) -> Result<(), ConsoleError> {
    if book.is_empty() {
        return console.say("\nNo contacts to delete.");
    }
    show_all(console, book)?;
    let Some(position) = ask_position(console, "\nEnter contact number to delete: ")? else {
        return Ok(());
    };
    match book.delete(position) {
        Ok(removed) => console.say(format_args!(
            "\n✓ Contact '{}' deleted successfully!",
            removed.full_name()
        )),
        Err(_) => console.say(INVALID_POSITION),
    }
}

fn say_goodbye<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), ConsoleError> {
    console.say("\nThank you for using Contact Book!")
}

/// Prompts for a reply; end of input reads as a blank reply.
fn ask<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
) -> Result<String, ConsoleError> {
    Ok(console.prompt(label)?.unwrap_or_default())
}

/// Prompts for a position, reporting a non-numeric reply.
///
/// Any integer is accepted here. Negative values map to position 0, which
/// the book rejects as not found.
fn ask_position<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
) -> Result<Option<usize>, ConsoleError> {
    let reply = ask(console, label)?;
    match parse_number::<i64>(&reply) {
        Ok(number) => Ok(Some(usize::try_from(number).unwrap_or(0))),
        Err(err) => {
            debug!(error = %err, "rejected position");
            console.say("\n✗ Please enter a valid number.")?;
            Ok(None)
        }
    }
}

fn render_entry(entry: ListEntry<'_>) -> String {
    let ListEntry { position, contact } = entry;
    format!(
        "\n[{position}] {}\n    Company: {}\n    Mobile: {}\n    Email: {}\n    Birthdate: {}",
        contact.full_name(),
        contact.company(),
        contact.mobile_number(),
        contact.email(),
        format_birthdate(contact.birthdate()),
    )
}

fn render_detail(contact: &Contact) -> String {
    format!(
        "Name: {}\nCompany: {}\nMobile: {}\nEmail: {}\nBirthdate: {}\n{RULE}",
        contact.full_name(),
        contact.company(),
        contact.mobile_number(),
        contact.email(),
        format_birthdate(contact.birthdate()),
    )
}

#[cfg(test)]
mod tests;
