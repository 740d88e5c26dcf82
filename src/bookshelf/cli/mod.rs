//! # CLI Behavior
//!
//! This is one client of the bookshelf library: a menu-driven loop over
//! stdin/stdout. It is the only place that knows about the terminal.
//!
//! ## Session
//!
//! One [`LibraryApi`] over an [`InMemoryStore`] is created here and handed to
//! the shell by `&mut`. It lives until the loop ends; nothing is saved.
//!
//! ## Input Contract
//!
//! Every prompt consumes exactly one full input line. Numbers are coerced
//! from the start of the line and the rest is thrown away, so a bad entry
//! like `abc` can never leak into the next prompt.

mod config;
mod input;
mod menu;
mod print;
mod setup;
mod shell;

use bookshelf::api::LibraryApi;
use bookshelf::error::Result;
use bookshelf::store::memory::InMemoryStore;
use clap::Parser;
use config::ShellConfig;
use input::Prompter;
use setup::Cli;
use std::io;
use tracing_subscriber::FmtSubscriber;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = ShellConfig::from(&cli);

    FmtSubscriber::builder()
        .with_max_level(config.log_level())
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
    config.apply_color();

    tracing::debug!(?config, "starting shell");
    let mut api = LibraryApi::new(InMemoryStore::new());
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
    shell::run(&mut api, &mut prompter)
}
