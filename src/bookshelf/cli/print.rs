use bookshelf::api::{CmdMessage, MessageLevel};
use bookshelf::model::Book;
use colored::Colorize;
use std::io::{self, Write};

pub const SEPARATOR: &str = "-----------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookLayout {
    /// Records back to back (search results)
    Plain,
    /// Each record followed by a separator line (full listing)
    Separated,
}

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        let styled = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Error => message.content.red(),
        };
        writeln!(out, "{}", styled)?;
    }
    Ok(())
}

pub(super) fn print_books<W: Write>(
    out: &mut W,
    books: &[Book],
    layout: BookLayout,
) -> io::Result<()> {
    for book in books {
        write!(out, "{}", book.render())?;
        if layout == BookLayout::Separated {
            writeln!(out, "{}", SEPARATOR)?;
        }
    }
    Ok(())
}
