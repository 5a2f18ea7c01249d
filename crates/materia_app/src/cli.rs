use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "materia")]
#[command(version, about = "Format medicinal-reference entries for display", long_about = None)]
pub struct Cli {
    /// Which display form to print
    #[arg(value_enum)]
    pub mode: Mode,

    /// Entry file; reads stdin when omitted
    pub file: Option<PathBuf>,

    /// RON file with markup settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Keep abbreviated book citations as written
    #[arg(long)]
    pub no_books: bool,

    /// Print JSON instead of plain output
    #[arg(long)]
    pub json: bool,

    /// Re-render this many times after a failure before giving up
    #[arg(long, default_value_t = 0)]
    pub retries: u32,

    /// Also write logs to ./materia.log
    #[arg(long)]
    pub log_file: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Text content with markup removed
    Plain,
    /// Citation-free summary
    Summary,
    /// HTML detail markup
    Markup,
    /// All three forms
    All,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Plain => "plain",
            Mode::Summary => "summary",
            Mode::Markup => "markup",
            Mode::All => "all",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "materia", "markup", "entry.txt", "--no-books", "--retries", "2",
        ])
        .unwrap();
        assert_eq!(cli.mode, Mode::Markup);
        assert_eq!(cli.file, Some(PathBuf::from("entry.txt")));
        assert!(cli.no_books);
        assert!(!cli.json);
        assert_eq!(cli.retries, 2);
    }
}
