mod cli;
mod logging;
pub mod tui;

use anyhow::Result;
use clap::Parser; // needed for Cli::parse()

use cli::commands::run_cli;
use cli::opts::Cli;

fn main() -> Result<()> {
    let args = Cli::parse();
    logging::init(args.cmd.owns_terminal());
    run_cli(args)
}
