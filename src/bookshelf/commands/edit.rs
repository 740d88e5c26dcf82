use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LibraryError, Result};
use crate::model::Isbn;
use crate::store::DataStore;

/// Replace the title of the first book with `isbn`. No other field is editable.
pub fn run<S: DataStore>(store: &mut S, isbn: Isbn, new_title: String) -> Result<CmdResult> {
    let book = store
        .find_first_mut(isbn)
        .ok_or(LibraryError::BookNotFound(isbn))?;
    tracing::debug!(isbn, from = %book.title, to = %new_title, "retitling book");
    book.title = new_title;
    let updated = book.clone();

    let mut result = CmdResult::default().with_affected_books(vec![updated]);
    result.add_message(CmdMessage::success("Book title updated successfully!"));
    Ok(result)
}
