use crate::model::{Book, Isbn};

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod search;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Books created, removed or modified by the command
    pub affected_books: Vec<Book>,
    /// Books to show, in store order
    pub listed_books: Vec<Book>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }
}

/// Arguments of the add operation, as entered by the user.
///
/// `kind` is kept as the raw label so that an unknown label is reported by
/// the command itself rather than by whoever collected the input.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub isbn: Isbn,
    pub title: String,
    pub author: String,
    pub edition: i32,
    pub publisher: String,
    pub kind: String,
    pub kind_field: String,
}
