//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for
//! catalogue operations. It owns the store for the whole session; the shell
//! holds one `LibraryApi` and passes it by `&mut` into every operation.
//!
//! The facade dispatches and returns structured results. It does no I/O and
//! holds no business logic of its own.

use crate::commands;
use crate::error::Result;
use crate::model::Isbn;
use crate::store::DataStore;

pub struct LibraryApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> LibraryApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_book(&mut self, new_book: NewBook) -> Result<CmdResult> {
        commands::add::run(&mut self.store, new_book)
    }

    pub fn delete_book(&mut self, isbn: Isbn) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, isbn)
    }

    pub fn edit_title(&mut self, isbn: Isbn, new_title: String) -> Result<CmdResult> {
        commands::edit::run(&mut self.store, isbn, new_title)
    }

    pub fn search_books(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn list_books(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    /// Whether any book carries this ISBN.
    pub fn contains(&self, isbn: Isbn) -> bool {
        self.store.find_first(isbn).is_some()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, NewBook};
