//! # Bookshelf Architecture
//!
//! Bookshelf keeps a catalogue of books in memory for the length of one
//! interactive session. The catalogue logic is a library; the menu-driven
//! terminal shell is just one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, line input, colored output           │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the store                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, delete, edit, search, list                          │
//! │  - Returns `Result<CmdResult>`, never prints                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, InMemoryStore (Vec in insertion order)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Outcomes
//!
//! Commands distinguish hard failures from plain reports:
//! - an unknown ISBN or book kind is an `Err(LibraryError)`; the shell shows
//!   it and keeps going
//! - an empty search or an empty catalogue is a normal result carrying an
//!   info message
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: Storage abstraction and the in-memory store
//! - [`model`]: `Book`, `BookKind`, `KindLabel` and rendering
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod store;
