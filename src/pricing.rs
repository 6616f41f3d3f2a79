//! Market-maker pricing interface.
//!
//! The cost function itself (an LMSR or similar) lives outside this crate.
//! Implementations receive a read-only view of the market snapshot and
//! exchange amounts as base-unit integers only.

use std::sync::Arc;

use alloy_primitives::I256;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::{BaseUnits, Market, OutcomeIndex};

/// Market-maker state a pricing call is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingQuery<'a> {
    pub funding: BaseUnits,
    pub net_outcome_tokens_sold: &'a [I256],
    pub outcome: OutcomeIndex,
}

impl<'a> PricingQuery<'a> {
    /// Query a market snapshot for one outcome.
    #[must_use]
    pub fn new(market: &'a Market, outcome: OutcomeIndex) -> Self {
        Self {
            funding: market.funding(),
            net_outcome_tokens_sold: market.net_outcome_tokens_sold(),
            outcome,
        }
    }
}

/// An expected, in-domain refusal by the pricing function.
///
/// Callers treat this as a normal result, not a fault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingRejection {
    /// The requested cost lies outside the function's valid domain,
    /// e.g. above what the market's liquidity can absorb.
    #[error("cost {cost} is outside the pricing domain")]
    CostOutOfDomain { cost: BaseUnits },

    /// The outcome index is not one the pricing function accepts.
    #[error("outcome {outcome} is not priced by this market")]
    UnknownOutcome { outcome: OutcomeIndex },

    /// Any other refusal, with the pricing function's reason.
    #[error("pricing rejected: {0}")]
    Rejected(String),
}

/// Cost and price functions of a market maker.
pub trait PricingClient: Send + Sync {
    /// Number of outcome tokens that `cost` buys, in base units.
    fn outcome_token_count(
        &self,
        query: &PricingQuery<'_>,
        cost: BaseUnits,
    ) -> Result<BaseUnits, PricingRejection>;

    /// Instantaneous price of the next unit of the outcome, in `[0, 1]`.
    fn marginal_price(&self, query: &PricingQuery<'_>) -> Result<Decimal, PricingRejection>;
}

impl<P: PricingClient + ?Sized> PricingClient for Arc<P> {
    fn outcome_token_count(
        &self,
        query: &PricingQuery<'_>,
        cost: BaseUnits,
    ) -> Result<BaseUnits, PricingRejection> {
        (**self).outcome_token_count(query, cost)
    }

    fn marginal_price(&self, query: &PricingQuery<'_>) -> Result<Decimal, PricingRejection> {
        (**self).marginal_price(query)
    }
}

impl<P: PricingClient + ?Sized> PricingClient for Box<P> {
    fn outcome_token_count(
        &self,
        query: &PricingQuery<'_>,
        cost: BaseUnits,
    ) -> Result<BaseUnits, PricingRejection> {
        (**self).outcome_token_count(query, cost)
    }

    fn marginal_price(&self, query: &PricingQuery<'_>) -> Result<Decimal, PricingRejection> {
        (**self).marginal_price(query)
    }
}
