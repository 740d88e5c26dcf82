use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Case-sensitive substring match on titles, in store order.
///
/// An empty query matches every book. No match is reported as an info
/// message, not as an error.
pub fn run<S: DataStore>(store: &S, query: &str) -> Result<CmdResult> {
    let matches: Vec<_> = store
        .books()
        .iter()
        .filter(|b| b.title.contains(query))
        .cloned()
        .collect();
    tracing::debug!(query, hits = matches.len(), "title search");

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info("No books found with that title."));
    }
    Ok(result.with_listed_books(matches))
}
