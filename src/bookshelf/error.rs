use crate::model::Isbn;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Book not found.")]
    BookNotFound(Isbn),

    #[error("Invalid book type entered.")]
    InvalidType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LibraryError>;
