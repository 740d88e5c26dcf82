use super::setup::Cli;
use tracing::Level;

/// Session settings. Built from flags only; there is no config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub color: bool,
    pub verbose: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            color: true,
            verbose: false,
        }
    }
}

impl From<&Cli> for ShellConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            color: !cli.no_color,
            verbose: cli.verbose,
        }
    }
}

impl ShellConfig {
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }

    /// Only ever forces color off; otherwise `colored` decides from the terminal.
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
