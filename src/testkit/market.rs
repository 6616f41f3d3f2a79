//! Builders for market snapshots used across tests.

use rust_decimal::Decimal;

use crate::domain::{BaseUnits, ContinuousRange, Event, Market, I256};

/// Funding used by the builders: 100 collateral units.
pub fn default_funding() -> BaseUnits {
    BaseUnits::from(100_000_000_000_000_000_000u128)
}

/// Discrete market over `labels` with nothing sold yet.
pub fn discrete_market(labels: &[&str]) -> Market {
    Market::new(
        default_funding(),
        vec![I256::ZERO; labels.len()],
        Event::discrete(labels.iter().copied()),
    )
}

/// Two-sided continuous market over `[lower, upper]` with nothing sold yet.
pub fn continuous_market(lower: Decimal, upper: Decimal, decimals: u32, unit: &str) -> Market {
    Market::new(
        default_funding(),
        vec![I256::ZERO; 2],
        Event::Continuous(ContinuousRange::new(lower, upper, decimals, unit)),
    )
}

/// Market whose event type tag is not one this crate understands.
pub fn unrecognized_market(kind: &str) -> Market {
    Market::new(
        default_funding(),
        vec![I256::ZERO; 2],
        Event::Unrecognized { kind: kind.into() },
    )
}

/// Same market with different funding.
pub fn with_funding(market: &Market, funding: BaseUnits) -> Market {
    let rebuilt = Market::new(
        funding,
        market.net_outcome_tokens_sold().to_vec(),
        market.event().clone(),
    );
    match market.collateral_token() {
        Some(symbol) => rebuilt.with_collateral_token(symbol),
        None => rebuilt,
    }
}
