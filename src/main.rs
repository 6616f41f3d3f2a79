use clap::Parser;
use tradepreview::cli::{self, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Check(command) => cli::check::execute(command),
        Commands::Outcomes(args) => cli::outcomes::execute(args),
    }
}
