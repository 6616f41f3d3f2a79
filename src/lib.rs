//! Tradepreview - trade previews for AMM-backed prediction markets.
//!
//! Given a market snapshot, a raw investment string and the selected outcome,
//! this crate computes how many outcome tokens the investment buys, the
//! maximum payout and the percentage return, without losing precision at the
//! `10^18` base-unit scale.
//!
//! # Modules
//!
//! - [`domain`] - Market snapshots, base-unit amounts, fixed-point values, previews
//! - [`pricing`] - The market-maker pricing interface (implemented elsewhere)
//! - [`preview`] - Input normalization, outcome dispatch, preview computation
//! - [`submit`] - Buy preparation and the share-buyer interface
//! - [`snapshot`] - JSON market snapshots
//! - [`config`] - Configuration loading from TOML files
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use tradepreview::preview::PreviewCalculator;
//! use tradepreview::snapshot::load_market;
//! # fn pricing() -> Box<dyn tradepreview::pricing::PricingClient> { unimplemented!() }
//!
//! let calculator = PreviewCalculator::new(pricing());
//! let market = load_market("market.json").unwrap();
//! let outcome = calculator.preview(&market, "10", Some(1));
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod preview;
pub mod pricing;
pub mod snapshot;
pub mod submit;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
