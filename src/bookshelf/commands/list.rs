use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.is_empty() {
        result.add_message(CmdMessage::info("No books in the library."));
        return Ok(result);
    }
    Ok(result.with_listed_books(store.books().to_vec()))
}
