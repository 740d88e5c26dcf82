//! # Storage Layer
//!
//! The [`DataStore`] trait is the seam between the command layer and wherever
//! books are kept. The catalogue only ever lives in memory, so the one
//! implementation is [`memory::InMemoryStore`], a `Vec` in insertion order.
//!
//! ## Ordering and duplicates
//!
//! Stores keep books in the order they were pushed. ISBNs are not unique:
//! every lookup by ISBN resolves to the *first* book in that order, and later
//! duplicates are never touched by removal or lookup.
//!
//! ## Ownership
//!
//! Books are held by value. [`DataStore::remove_first`] moves the book out of
//! the store and hands it to the caller, so there is no separate release step
//! and no handle into the store survives the removal.

use crate::model::{Book, Isbn};

pub mod memory;

pub trait DataStore {
    /// Append a book at the end of the sequence
    fn push(&mut self, book: Book);

    /// Remove the first book with this ISBN, returning it
    fn remove_first(&mut self, isbn: Isbn) -> Option<Book>;

    /// Mutable access to the first book with this ISBN
    fn find_first_mut(&mut self, isbn: Isbn) -> Option<&mut Book>;

    /// All books, in insertion order
    fn books(&self) -> &[Book];

    fn find_first(&self, isbn: Isbn) -> Option<&Book> {
        self.books().iter().find(|b| b.isbn == isbn)
    }

    fn len(&self) -> usize {
        self.books().len()
    }

    fn is_empty(&self) -> bool {
        self.books().is_empty()
    }
}
