use crate::error::{LibraryError, Result};
use std::fmt;
use std::str::FromStr;

pub type Isbn = i32;

/// The literal labels users type to pick a book kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindLabel {
    Fiction,
    NonFiction,
}

impl KindLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            KindLabel::Fiction => "Fiction",
            KindLabel::NonFiction => "NonFiction",
        }
    }

    /// Name of the extra field this kind carries ("Genre" or "Subject").
    pub fn field_name(&self) -> &'static str {
        match self {
            KindLabel::Fiction => "Genre",
            KindLabel::NonFiction => "Subject",
        }
    }

    pub fn with_field(self, value: String) -> BookKind {
        match self {
            KindLabel::Fiction => BookKind::Fiction { genre: value },
            KindLabel::NonFiction => BookKind::NonFiction { subject: value },
        }
    }
}

impl FromStr for KindLabel {
    type Err = LibraryError;

    // Exact match only: "fiction" or " Fiction" are rejected.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Fiction" => Ok(KindLabel::Fiction),
            "NonFiction" => Ok(KindLabel::NonFiction),
            other => Err(LibraryError::InvalidType(other.to_string())),
        }
    }
}

impl fmt::Display for KindLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookKind {
    Fiction { genre: String },
    NonFiction { subject: String },
}

impl BookKind {
    pub fn label(&self) -> KindLabel {
        match self {
            BookKind::Fiction { .. } => KindLabel::Fiction,
            BookKind::NonFiction { .. } => KindLabel::NonFiction,
        }
    }

    pub fn field_value(&self) -> &str {
        match self {
            BookKind::Fiction { genre } => genre,
            BookKind::NonFiction { subject } => subject,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub isbn: Isbn,
    pub title: String,
    pub author: String,
    pub edition: i32,
    pub publisher: String,
    pub kind: BookKind,
}

impl Book {
    pub fn new(
        isbn: Isbn,
        title: impl Into<String>,
        author: impl Into<String>,
        edition: i32,
        publisher: impl Into<String>,
        kind: BookKind,
    ) -> Self {
        Self {
            isbn,
            title: title.into(),
            author: author.into(),
            edition,
            publisher: publisher.into(),
            kind,
        }
    }

    /// Renders the record as display text, one field per line.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ISBN: {}", self.isbn)?;
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Author: {}", self.author)?;
        writeln!(f, "Edition: {}", self.edition)?;
        writeln!(f, "Publisher: {}", self.publisher)?;
        writeln!(
            f,
            "{}: {}",
            self.kind.label().field_name(),
            self.kind.field_value()
        )
    }
}
