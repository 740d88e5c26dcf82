use super::input::Prompter;
use super::menu::{MENU, MenuChoice};
use super::print::{BookLayout, print_books, print_messages};
use bookshelf::api::{CmdMessage, CmdResult, LibraryApi, NewBook};
use bookshelf::error::{LibraryError, Result};
use bookshelf::model::KindLabel;
use bookshelf::store::DataStore;
use std::io::{self, BufRead, Write};

enum Flow {
    Continue,
    Quit,
}

/// Runs the menu loop until the user quits or input runs out.
pub fn run<S, R, W>(api: &mut LibraryApi<S>, prompter: &mut Prompter<R, W>) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    loop {
        match step(api, prompter) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => return Ok(()),
            Err(LibraryError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                tracing::debug!("input closed, leaving shell");
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    }
}

fn step<S, R, W>(api: &mut LibraryApi<S>, p: &mut Prompter<R, W>) -> Result<Flow>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let choice = p.choice(MENU)?;
    tracing::debug!(?choice, books = api.len(), "menu choice");

    match choice.and_then(MenuChoice::from_char) {
        Some(MenuChoice::Add) => add_book(api, p)?,
        Some(MenuChoice::Delete) => {
            let isbn = p.int("Enter ISBN of book to delete: ")?;
            report(p.output(), api.delete_book(isbn), BookLayout::Plain)?;
        }
        Some(MenuChoice::Edit) => edit_book(api, p)?,
        Some(MenuChoice::Search) => {
            let query = p.line("Enter title to search for: ")?;
            report(p.output(), api.search_books(&query), BookLayout::Plain)?;
        }
        Some(MenuChoice::ViewAll) => {
            report(p.output(), api.list_books(), BookLayout::Separated)?;
        }
        Some(MenuChoice::Quit) => {
            writeln!(p.output(), "Exiting the program...")?;
            return Ok(Flow::Quit);
        }
        None => print_messages(
            p.output(),
            &[CmdMessage::error("Invalid choice, please try again.")],
        )?,
    }
    Ok(Flow::Continue)
}

fn add_book<S, R, W>(api: &mut LibraryApi<S>, p: &mut Prompter<R, W>) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let isbn = p.int("Enter ISBN: ")?;
    let title = p.line("Enter Title: ")?;
    let author = p.line("Enter Author: ")?;
    let edition = p.int("Enter Edition: ")?;
    let publisher = p.line("Enter Publisher: ")?;
    let kind = p.line("Enter book type (Fiction/NonFiction): ")?;

    // An unknown label skips the extra prompt; the add command rejects it.
    let kind_field = match kind.parse::<KindLabel>() {
        Ok(label) => p.line(&format!("Enter {}: ", label.field_name()))?,
        Err(_) => String::new(),
    };

    let outcome = api.add_book(NewBook {
        isbn,
        title,
        author,
        edition,
        publisher,
        kind,
        kind_field,
    });
    report(p.output(), outcome, BookLayout::Plain)
}

fn edit_book<S, R, W>(api: &mut LibraryApi<S>, p: &mut Prompter<R, W>) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let isbn = p.int("Enter ISBN of book to edit: ")?;
    if !api.contains(isbn) {
        return report(
            p.output(),
            Err(LibraryError::BookNotFound(isbn)),
            BookLayout::Plain,
        );
    }
    let new_title = p.line("Enter new title: ")?;
    report(p.output(), api.edit_title(isbn, new_title), BookLayout::Plain)
}

/// Prints a command outcome. Not-found and bad-kind errors are shown to the
/// user; anything else is passed up.
fn report<W: Write>(out: &mut W, outcome: Result<CmdResult>, layout: BookLayout) -> Result<()> {
    match outcome {
        Ok(result) => {
            print_books(out, &result.listed_books, layout)?;
            print_messages(out, &result.messages)?;
        }
        Err(e @ (LibraryError::BookNotFound(_) | LibraryError::InvalidType(_))) => {
            tracing::debug!(error = ?e, "operation rejected");
            print_messages(out, &[CmdMessage::error(e.to_string())])?;
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf::store::memory::InMemoryStore;

    struct Session {
        api: LibraryApi<InMemoryStore>,
        output: String,
    }

    fn session(input: &str) -> Session {
        session_bytes(input.as_bytes())
    }

    fn session_bytes(input: &[u8]) -> Session {
        colored::control::set_override(false);
        let mut api = LibraryApi::new(InMemoryStore::new());
        let mut prompter = Prompter::new(input, Vec::new());
        run(&mut api, &mut prompter).unwrap();
        let output = String::from_utf8(prompter.output().clone()).unwrap();
        Session { api, output }
    }

    const ADD_DUNE: &str = "1\n111\nDune\nHerbert\n1\nAce\nFiction\nSciFi\n";
    const ADD_COSMOS: &str = "1\n222\nCosmos\nSagan\n1\nRandom\nNonFiction\nScience\n";

    #[test]
    fn add_and_list_both_kinds() {
        let s = session(&format!("{ADD_DUNE}{ADD_COSMOS}5\n6\n"));
        assert_eq!(s.api.len(), 2);
        assert_eq!(s.output.matches("Book added successfully!").count(), 2);
        assert!(s.output.contains("Enter Genre: "));
        assert!(s.output.contains("Enter Subject: "));
        assert!(s.output.contains(
            "ISBN: 111\nTitle: Dune\nAuthor: Herbert\nEdition: 1\nPublisher: Ace\nGenre: SciFi\n-----------------\n"
        ));
        assert!(s.output.contains("Subject: Science\n-----------------\n"));
        assert!(s.output.ends_with("Exiting the program...\n"));
    }

    #[test]
    fn invalid_kind_skips_field_prompt() {
        let s = session("1\n5\nGone Girl\nFlynn\n1\nCrown\nMystery\n6\n");
        assert!(s.api.is_empty());
        assert!(s.output.contains("Invalid book type entered.\n"));
        assert!(!s.output.contains("Enter Genre: "));
        assert!(!s.output.contains("Enter Subject: "));
        assert!(!s.output.contains("Book added successfully!"));
    }

    #[test]
    fn delete_missing_reports_not_found() {
        let s = session(&format!("{ADD_DUNE}{ADD_COSMOS}2\n999\n6\n"));
        assert!(s.output.contains("Book not found.\n"));
        assert_eq!(s.api.len(), 2);
    }

    #[test]
    fn delete_existing() {
        let s = session(&format!("{ADD_DUNE}2\n111\n5\n6\n"));
        assert!(s.output.contains("Book deleted successfully!\n"));
        assert!(s.output.contains("No books in the library.\n"));
        assert!(s.api.is_empty());
    }

    #[test]
    fn edit_prompts_for_title_only_when_found() {
        let s = session(&format!("{ADD_DUNE}3\n42\n3\n111\nDune Messiah\n4\nMessiah\n6\n"));
        assert_eq!(s.output.matches("Enter new title: ").count(), 1);
        assert!(s.output.contains("Book not found.\n"));
        assert!(s.output.contains("Book title updated successfully!\n"));
        assert!(s.output.contains("Title: Dune Messiah\n"));
    }

    #[test]
    fn search_reports_no_match() {
        let s = session(&format!("{ADD_DUNE}4\nCosmos\n6\n"));
        assert!(s.output.contains("No books found with that title.\n"));
    }

    #[test]
    fn search_prints_matches_without_separator() {
        let s = session(&format!("{ADD_DUNE}{ADD_COSMOS}4\nos\n6\n"));
        assert!(s.output.contains("Title: Cosmos\n"));
        assert!(!s.output.contains("Title: Dune\n"));
        assert!(!s.output.contains("-----------------"));
    }

    #[test]
    fn invalid_choice_loops() {
        let s = session("9\n\nx\n6\n");
        assert_eq!(
            s.output.matches("Invalid choice, please try again.").count(),
            3
        );
        assert_eq!(s.output.matches("ENTER CHOICE: ").count(), 4);
    }

    #[test]
    fn malformed_isbn_becomes_zero() {
        let s = session("1\nnot-a-number\nTitle\nAuthor\nxx\nPub\nFiction\nDrama\n6\n");
        let listed = s.api.list_books().unwrap().listed_books;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].isbn, 0);
        assert_eq!(listed[0].edition, 0);
        assert_eq!(listed[0].title, "Title");
        assert_eq!(listed[0].publisher, "Pub");
    }

    #[test]
    fn non_utf8_title_keeps_session_alive() {
        let mut input = ADD_DUNE.as_bytes().to_vec();
        input.extend_from_slice(b"1\n7\nCaf\xe9\nAuthor\n1\nPub\nFiction\nDrama\n5\n6\n");
        let s = session_bytes(&input);
        assert_eq!(s.api.len(), 2);
        assert!(s.output.contains("Title: Caf\u{FFFD}\n"));
        assert!(s.output.ends_with("Exiting the program...\n"));
    }

    #[test]
    fn end_of_input_quits_cleanly() {
        let s = session("1\n7\nHalf");
        assert!(s.api.is_empty());
        assert!(!s.output.contains("Exiting the program..."));
    }
}
