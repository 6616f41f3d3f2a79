//! Handler for the `outcomes` command.

use tracing::debug;

use crate::cli::OutcomesArgs;
use crate::config::Config;
use crate::preview::{OutcomeDispatcher, OutcomeSelection};
use crate::snapshot::load_market;

/// Print what a buy form would offer for the given snapshot.
pub fn execute(args: &OutcomesArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.init_logging();

    let market = load_market(&args.market)?;
    debug!(kind = market.event().kind(), "Loaded market snapshot");

    let dispatcher = OutcomeDispatcher::new(config.palette()?);
    let selection = dispatcher.options(&market);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&selection)?);
        return Ok(());
    }

    match selection {
        OutcomeSelection::Discrete { options } => {
            for option in options {
                println!("{:>3}  {}  {}", option.index.get(), option.color, option.label);
            }
        }
        OutcomeSelection::Continuous { range } => {
            println!(
                "range {} .. {} {} ({} decimals), previews buy the short side",
                range.lower_bound(),
                range.upper_bound(),
                range.unit(),
                range.decimals()
            );
        }
        OutcomeSelection::Invalid { kind } => {
            println!("Invalid outcomes: unrecognized event type \"{kind}\"");
        }
    }
    Ok(())
}
