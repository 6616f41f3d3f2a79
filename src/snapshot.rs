//! Market snapshot data transfer objects.
//!
//! Snapshots arrive as JSON from whatever refreshes market state. Integer
//! amounts are decimal strings. Unknown event type tags are kept rather than
//! rejected so the caller can show an "invalid outcomes" state.

use std::path::Path;

use alloy_primitives::I256;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{signed_string_seq, BaseUnits, ContinuousRange, DomainError, Event, Market};
use crate::error::Result;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    pub funding: BaseUnits,
    #[serde(with = "signed_string_seq")]
    pub net_outcome_tokens_sold: Vec<I256>,
    pub event: EventSnapshot,
    #[serde(default)]
    pub event_description: EventDescription,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSnapshot {
    #[serde(rename = "type")]
    pub kind: String,
    pub lower_bound: Option<Decimal>,
    pub upper_bound: Option<Decimal>,
    pub collateral_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EventDescription {
    #[serde(default)]
    pub outcomes: Vec<String>,
    #[serde(default)]
    pub decimals: u32,
    #[serde(default)]
    pub unit: String,
}

impl TryFrom<MarketSnapshot> for Market {
    type Error = DomainError;

    fn try_from(snapshot: MarketSnapshot) -> std::result::Result<Self, Self::Error> {
        let MarketSnapshot {
            funding,
            net_outcome_tokens_sold,
            event,
            event_description,
        } = snapshot;

        let parsed = match event.kind.to_ascii_lowercase().as_str() {
            "categorical" => Event::Discrete {
                outcomes: event_description.outcomes,
            },
            "scalar" => {
                let lower = event.lower_bound.ok_or(DomainError::MissingBound {
                    field: "lowerBound",
                })?;
                let upper = event.upper_bound.ok_or(DomainError::MissingBound {
                    field: "upperBound",
                })?;
                Event::Continuous(ContinuousRange::try_new(
                    lower,
                    upper,
                    event_description.decimals,
                    event_description.unit,
                )?)
            }
            _ => Event::Unrecognized {
                kind: event.kind.clone(),
            },
        };

        let market = Market::try_new(funding, net_outcome_tokens_sold, parsed)?;
        Ok(match event.collateral_token {
            Some(symbol) => market.with_collateral_token(symbol),
            None => market,
        })
    }
}

/// Parse a market snapshot from JSON.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or the snapshot violates a
/// domain invariant.
pub fn parse_market(json: &str) -> Result<Market> {
    let snapshot: MarketSnapshot = serde_json::from_str(json)?;
    Ok(Market::try_from(snapshot)?)
}

/// Read and parse a market snapshot file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_market<P: AsRef<Path>>(path: P) -> Result<Market> {
    let content = std::fs::read_to_string(path)?;
    parse_market(&content)
}
