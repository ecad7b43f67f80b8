//! recite command-line entry point

use clap::Parser;
use recite_cli::commands::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    cli.execute()
}
