use crate::commands::{CmdMessage, CmdResult, NewBook};
use crate::error::Result;
use crate::model::{Book, KindLabel};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, new_book: NewBook) -> Result<CmdResult> {
    let label: KindLabel = new_book.kind.parse()?;

    let book = Book::new(
        new_book.isbn,
        new_book.title,
        new_book.author,
        new_book.edition,
        new_book.publisher,
        label.with_field(new_book.kind_field),
    );
    tracing::debug!(isbn = book.isbn, kind = %label, "adding book");
    store.push(book.clone());

    let mut result = CmdResult::default().with_affected_books(vec![book]);
    result.add_message(CmdMessage::success("Book added successfully!"));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LibraryError;
    use crate::model::BookKind;
    use crate::store::memory::InMemoryStore;

    fn new_book(isbn: i32, title: &str, kind: &str, field: &str) -> NewBook {
        NewBook {
            isbn,
            title: title.into(),
            author: "Someone".into(),
            edition: 2,
            publisher: "Press".into(),
            kind: kind.into(),
            kind_field: field.into(),
        }
    }

    #[test]
    fn appends_fiction_with_genre() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, new_book(111, "Dune", "Fiction", "SciFi")).unwrap();

        assert_eq!(store.len(), 1);
        let stored = &store.books()[0];
        assert_eq!(stored.title, "Dune");
        assert_eq!(stored.edition, 2);
        assert_eq!(
            stored.kind,
            BookKind::Fiction {
                genre: "SciFi".into()
            }
        );
        assert_eq!(result.affected_books, vec![stored.clone()]);
        assert_eq!(result.messages[0].content, "Book added successfully!");
    }

    #[test]
    fn appends_non_fiction_with_subject() {
        let mut store = InMemoryStore::new();
        run(&mut store, new_book(222, "Cosmos", "NonFiction", "Science")).unwrap();
        assert_eq!(
            store.books()[0].kind,
            BookKind::NonFiction {
                subject: "Science".into()
            }
        );
    }

    #[test]
    fn size_tracks_valid_adds_only() {
        let mut store = InMemoryStore::new();
        for i in 0..5 {
            run(&mut store, new_book(i, "T", "Fiction", "G")).unwrap();
            let err = run(&mut store, new_book(i, "T", "Poetry", "G")).unwrap_err();
            assert!(matches!(err, LibraryError::InvalidType(_)));
        }
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, new_book(1, "Gone Girl", "Mystery", "Thriller")).unwrap_err();
        assert!(matches!(err, LibraryError::InvalidType(ref label) if label == "Mystery"));
        assert_eq!(err.to_string(), "Invalid book type entered.");
        assert!(store.is_empty());
    }

    #[test]
    fn duplicate_isbns_are_allowed() {
        let mut store = InMemoryStore::new();
        run(&mut store, new_book(1, "A", "Fiction", "G")).unwrap();
        run(&mut store, new_book(1, "B", "NonFiction", "S")).unwrap();
        assert_eq!(store.len(), 2);
    }
}
