use clap::{Args, Parser, Subcommand, ValueEnum};
use flashgen_core::{ExtraFields, ParseOptions};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Tsv,
    Csv,
    Json,
}

#[derive(Debug, Parser, Clone)]
#[command(name = "flashgen", version, about = "Flashcards from comma/tab separated pairs")]
pub struct Cli {
    /// Keep everything after the first delimiter as the back ("a,b,c" -> back "b,c")
    #[arg(long, global = true)]
    pub join_extra_fields: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

impl Cli {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            extra_fields: if self.join_extra_fields {
                ExtraFields::JoinIntoBack
            } else {
                ExtraFields::Ignore
            },
        }
    }
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the parsed cards
    Parse(ParseCmd),
    /// Study loop on the terminal (line based)
    Study(InputArg),
    /// Launch Terminal UI
    Tui(InputArg),
}

impl Command {
    /// True for subcommands that draw full-screen and must not share the terminal with log output.
    pub fn owns_terminal(&self) -> bool {
        matches!(self, Command::Tui(_))
    }
}

#[derive(Debug, Args, Clone)]
pub struct InputArg {
    /// Card text file; "-" or omitted reads stdin (for tui: omitted starts with an empty editor)
    pub input: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct ParseCmd {
    #[command(flatten)]
    pub source: InputArg,
    /// Output format. tsv is plain "front<TAB>back" and cannot represent a side that
    /// contains a comma or tab (possible with --join-extra-fields); use csv or json for those.
    #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_extra_fields_reaches_parse_options() {
        let cli = Cli::try_parse_from(["flashgen", "parse", "--join-extra-fields"]).unwrap();
        assert_eq!(cli.parse_options().extra_fields, ExtraFields::JoinIntoBack);

        // global flag is accepted before the subcommand too
        let cli = Cli::try_parse_from(["flashgen", "--join-extra-fields", "study", "deck.txt"]).unwrap();
        assert_eq!(cli.parse_options().extra_fields, ExtraFields::JoinIntoBack);
    }

    #[test]
    fn only_tui_owns_the_terminal() {
        let tui = Cli::try_parse_from(["flashgen", "tui"]).unwrap();
        assert!(tui.cmd.owns_terminal());
        let study = Cli::try_parse_from(["flashgen", "study"]).unwrap();
        assert!(!study.cmd.owns_terminal());
        let parse = Cli::try_parse_from(["flashgen", "parse", "-"]).unwrap();
        assert!(!parse.cmd.owns_terminal());
    }

    #[test]
    fn default_ignores_extra_fields() {
        let cli = Cli::try_parse_from(["flashgen", "parse", "--format", "json"]).unwrap();
        assert_eq!(cli.parse_options(), ParseOptions::default());
        assert!(matches!(cli.cmd, Command::Parse(ParseCmd { format: OutputFormat::Json, .. })));
    }
}
