//! Configuration and snapshot validation commands.

use std::path::Path;

use crate::cli::CheckCommand;
use crate::config::Config;
use crate::domain::Event;
use crate::snapshot::load_market;

pub fn execute(command: &CheckCommand) -> anyhow::Result<()> {
    match command {
        CheckCommand::Config(arg) => execute_config(&arg.config),
        CheckCommand::Market(arg) => execute_market(&arg.market),
    }
}

/// Validate a configuration file.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> anyhow::Result<()> {
    let path = config_path.as_ref();
    println!("Checking configuration: {}", path.display());
    println!();

    let config = Config::load(path)?;
    println!("✓ Configuration file is valid");
    println!();
    println!("Summary:");
    println!("  Log level: {}", config.logging.level);
    println!("  Log format: {}", config.logging.format);
    println!("  Palette: {} colors", config.palette.colors.len());
    Ok(())
}

/// Validate a market snapshot file.
pub fn execute_market<P: AsRef<Path>>(market_path: P) -> anyhow::Result<()> {
    let path = market_path.as_ref();
    println!("Checking market snapshot: {}", path.display());
    println!();

    let market = load_market(path)?;
    println!("✓ Market snapshot is valid");
    println!();
    println!("Summary:");
    println!("  Event type: {}", market.event().kind());
    println!("  Funding: {} base units", market.funding());
    println!("  Outcomes: {}", market.net_outcome_tokens_sold().len());
    if let Some(symbol) = market.collateral_token() {
        println!("  Collateral: {symbol}");
    }
    if let Event::Unrecognized { kind } = market.event() {
        println!();
        println!("⚠ Event type \"{kind}\" cannot be previewed");
    }
    Ok(())
}
