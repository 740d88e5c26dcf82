use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bookshelf", bin_name = "bookshelf", version)]
#[command(about = "Interactive in-memory book catalogue", long_about = None)]
pub struct Cli {
    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_is_valid() {
        let cli = Cli::try_parse_from(["bookshelf"]).unwrap();
        assert!(!cli.verbose);
        assert!(!cli.no_color);
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["bookshelf", "-v", "--no-color"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
    }

    #[test]
    fn rejects_positional_args() {
        assert!(Cli::try_parse_from(["bookshelf", "list"]).is_err());
    }
}
