use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LibraryError, Result};
use crate::model::Isbn;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, isbn: Isbn) -> Result<CmdResult> {
    let Some(book) = store.remove_first(isbn) else {
        tracing::debug!(isbn, "delete: no matching book");
        return Err(LibraryError::BookNotFound(isbn));
    };
    tracing::debug!(isbn, title = %book.title, "deleted book");

    let mut result = CmdResult::default().with_affected_books(vec![book]);
    result.add_message(CmdMessage::success("Book deleted successfully!"));
    Ok(result)
}
