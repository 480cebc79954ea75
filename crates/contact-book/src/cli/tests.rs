//! Unit tests for the contact book command loop.

use std::io::Cursor;

use chrono::NaiveDate;
use rstest::{fixture, rstest};

use super::*;
use crate::seed::seed_contacts;

type ScriptConsole = Console<Cursor<String>, Vec<u8>>;

fn console(script: &str) -> ScriptConsole {
    Console::new(Cursor::new(script.to_owned()), Vec::new())
}

fn output_of(console: ScriptConsole) -> String {
    String::from_utf8(console.into_output()).expect("console output is UTF-8")
}

/// Runs the full loop over `script` and returns everything written.
fn run_script(book: &mut ContactBook, script: &str) -> String {
    let mut console = console(script);
    run(&mut console, book).expect("loop completes");
    output_of(console)
}

#[fixture]
fn seeded() -> ContactBook {
    seed_contacts()
}

#[rstest]
#[case("1", Some(Command::Add))]
#[case(" 2 ", Some(Command::ListAll))]
#[case("3", Some(Command::ShowDetails))]
#[case("4", Some(Command::Update))]
#[case("5", Some(Command::Delete))]
#[case("0", Some(Command::Exit))]
#[case("6", None)]
#[case("", None)]
#[case("add", None)]
fn maps_menu_choices(#[case] choice: &str, #[case] expected: Option<Command>) {
    assert_eq!(Command::from_choice(choice), expected);
}

#[test]
fn exit_prints_banner_menu_and_farewell() {
    let mut book = ContactBook::new();

    let output = run_script(&mut book, "0\n");

    assert!(output.contains("CONTACT BOOK MANAGEMENT SYSTEM"));
    assert!(output.contains("5: Delete Contact"));
    assert!(output.ends_with("Thank you for using Contact Book!\n"));
}

#[test]
fn end_of_input_behaves_like_exit() {
    let mut book = ContactBook::new();

    let output = run_script(&mut book, "");

    assert!(output.ends_with("Thank you for using Contact Book!\n"));
}

#[test]
fn execute_reports_exit_flow() {
    let mut book = ContactBook::new();
    let mut console = console("");

    let flow = execute(&mut console, &mut book, "0").expect("command runs");

    assert_eq!(flow, Flow::Exit);
}

#[test]
fn unknown_choice_is_reported_and_loop_continues() {
    let mut book = ContactBook::new();

    let output = run_script(&mut book, "9\n2\n0\n");

    assert!(output.contains("✗ Invalid choice. Please try again."));
    assert!(output.contains("No contacts found."));
}

#[test]
fn add_appends_a_valid_contact() {
    let mut book = ContactBook::new();

    let output = run_script(
        &mut book,
        "1\nAda\nLovelace\nAnalytical Engines\n871234567\nada@example.com\n10/12/1815\n0\n",
    );

    assert!(output.contains("✓ Contact added successfully! (#1)"));
    let contact = book.get(1).expect("contact added");
    assert_eq!(contact.full_name(), "Ada Lovelace");
    assert_eq!(
        contact.birthdate(),
        NaiveDate::from_ymd_opt(1815, 12, 10).expect("valid date")
    );
}

#[test]
fn add_reports_invalid_mobile_number() {
    let mut book = ContactBook::new();

    let output = run_script(
        &mut book,
        "1\nAda\nLovelace\nAE\n000000000\nada@example.com\n10/12/1815\n0\n",
    );

    assert!(output.contains("✗ Error: invalid mobile number '000000000'"));
    assert!(book.is_empty());
}

#[test]
fn add_reports_invalid_date() {
    let mut book = ContactBook::new();

    let output = run_script(
        &mut book,
        "1\nAda\nLovelace\nAE\n871234567\nada@example.com\nsoon\n0\n",
    );

    assert!(output.contains("✗ Error: Invalid date format. Please use dd/mm/yyyy"));
    assert!(book.is_empty());
}

#[rstest]
fn list_shows_count_and_positions(mut seeded: ContactBook) {
    let output = run_script(&mut seeded, "2\n0\n");

    assert!(output.contains("--- All Contacts (20) ---"));
    assert!(output.contains("[1] Emily Smith\n    Company: Dublin Business School"));
    assert!(output.contains("[20] Matthew Martin"));
    assert!(output.contains("    Birthdate: 01/01/1985"));
}

#[rstest]
fn details_show_the_selected_contact(mut seeded: ContactBook) {
    let output = run_script(&mut seeded, "3\n2\n0\n");

    assert!(output.contains("--- Contact Details ---"));
    assert!(output.contains("Name: John Johnson\nCompany: Dublin Business School\nMobile: 087001001"));
    assert!(output.contains("Birthdate: 02/02/1986\n----------------------------------------"));
}

#[rstest]
#[case("abc\n", "✗ Please enter a valid number.")]
#[case("2.5\n", "✗ Please enter a valid number.")]
#[case("-1\n", "✗ Invalid contact number.")]
#[case("0\n", "✗ Invalid contact number.")]
#[case("21\n", "✗ Invalid contact number.")]
fn details_report_bad_positions(
    mut seeded: ContactBook,
    #[case] reply: &str,
    #[case] message: &str,
) {
    let output = run_script(&mut seeded, &format!("3\n{reply}0\n"));

    assert!(output.contains(message), "missing {message:?} in {output}");
}

#[rstest]
#[case("3\n", "No contacts available.")]
#[case("4\n", "No contacts to update.")]
#[case("5\n", "No contacts to delete.")]
#[case("2\n", "No contacts found.")]
fn empty_book_commands_do_not_prompt(#[case] command: &str, #[case] message: &str) {
    let mut book = ContactBook::new();

    let output = run_script(&mut book, &format!("{command}0\n"));

    assert!(output.contains(message));
    assert!(!output.contains("Enter contact number"));
}

#[rstest]
fn update_keeps_blank_fields(mut seeded: ContactBook) {
    let output = run_script(&mut seeded, "4\n1\n\n\nAcme\n\nemily@acme.test\n\n0\n");

    assert!(output.contains("First Name [Emily]: "));
    assert!(output.contains("Mobile [087001000]: "));
    assert!(output.contains("Birthdate [01/01/1985]: "));
    assert!(output.contains("✓ Contact updated successfully!"));
    let contact = seeded.get(1).expect("contact exists");
    assert_eq!(contact.full_name(), "Emily Smith");
    assert_eq!(contact.company(), "Acme");
    assert_eq!(contact.email(), "emily@acme.test");
    assert_eq!(contact.mobile_number().as_ref(), "087001000");
}

#[rstest]
fn update_with_invalid_mobile_changes_nothing(mut seeded: ContactBook) {
    let before = seeded.clone();

    let output = run_script(&mut seeded, "4\n1\nEmma\n\n\n123\n\n\n0\n");

    assert!(output.contains("✗ Update failed: invalid mobile number '123'"));
    assert_eq!(seeded, before);
}

#[rstest]
fn update_with_invalid_date_changes_nothing(mut seeded: ContactBook) {
    let before = seeded.clone();

    let output = run_script(&mut seeded, "4\n1\nEmma\n\n\n\n\n30/02/1990\n0\n");

    assert!(output.contains("✗ Update failed: Invalid date format."));
    assert_eq!(seeded, before);
}

#[rstest]
fn update_with_only_blank_replies_reports_no_changes(mut seeded: ContactBook) {
    let output = run_script(&mut seeded, "4\n1\n\n\n\n\n\n\n0\n");

    assert!(output.contains("No changes made."));
}

#[rstest]
fn delete_removes_and_names_the_contact(mut seeded: ContactBook) {
    let output = run_script(&mut seeded, "5\n1\n0\n");

    assert!(output.contains("✓ Contact 'Emily Smith' deleted successfully!"));
    assert_eq!(seeded.len(), 19);
    assert_eq!(
        seeded.get(1).expect("contact exists").full_name(),
        "John Johnson"
    );
}

#[rstest]
#[case("42")]
#[case("-1")]
fn delete_rejects_out_of_range_position(mut seeded: ContactBook, #[case] reply: &str) {
    let output = run_script(&mut seeded, &format!("5\n{reply}\n0\n"));

    assert!(output.contains("✗ Invalid contact number."));
    assert!(!output.contains("Please enter a valid number"));
    assert_eq!(seeded.len(), 20);
}
