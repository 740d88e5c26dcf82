use super::DataStore;
use crate::model::{Book, Isbn};

/// Vec-backed storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    books: Vec<Book>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    fn remove_first(&mut self, isbn: Isbn) -> Option<Book> {
        let pos = self.books.iter().position(|b| b.isbn == isbn)?;
        Some(self.books.remove(pos))
    }

    fn find_first_mut(&mut self, isbn: Isbn) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.isbn == isbn)
    }

    fn books(&self) -> &[Book] {
        &self.books
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::BookKind;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let n = i as Isbn + 1;
                let book = Book::new(
                    n,
                    format!("Test Book {}", n),
                    format!("Author {}", n),
                    1,
                    "Test Press",
                    BookKind::Fiction {
                        genre: "Drama".to_string(),
                    },
                );
                self.store.push(book);
            }
            self
        }

        pub fn with_fiction(mut self, isbn: Isbn, title: &str, genre: &str) -> Self {
            self.store.push(Book::new(
                isbn,
                title,
                "Some Author",
                1,
                "Some Press",
                BookKind::Fiction {
                    genre: genre.to_string(),
                },
            ));
            self
        }

        pub fn with_non_fiction(mut self, isbn: Isbn, title: &str, subject: &str) -> Self {
            self.store.push(Book::new(
                isbn,
                title,
                "Some Author",
                1,
                "Some Press",
                BookKind::NonFiction {
                    subject: subject.to_string(),
                },
            ));
            self
        }
    }
}
