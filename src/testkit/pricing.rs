//! Pricing client with canned answers.

use std::collections::HashMap;

use alloy_primitives::U256;
use parking_lot::Mutex;
use rust_decimal::Decimal;

use crate::domain::{BaseUnits, OutcomeIndex};
use crate::pricing::{PricingClient, PricingQuery, PricingRejection};

/// One recorded `outcome_token_count` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCountCall {
    pub funding: BaseUnits,
    pub outcome: OutcomeIndex,
    pub cost: BaseUnits,
}

/// Pricing client driven by a script.
///
/// Token counts come from exact `(outcome, cost)` entries first, then from a
/// linear rate `cost × numerator / denominator`. Costs above the rejection
/// limit, if set, are refused as out of domain. Marginal prices must be
/// scripted per outcome.
#[derive(Debug)]
pub struct ScriptedPricing {
    token_counts: HashMap<(OutcomeIndex, BaseUnits), BaseUnits>,
    rate: Option<(u64, u64)>,
    reject_above: Option<BaseUnits>,
    marginal_prices: HashMap<OutcomeIndex, Decimal>,
    token_count_calls: Mutex<Vec<TokenCountCall>>,
    marginal_price_calls: Mutex<Vec<OutcomeIndex>>,
}

impl ScriptedPricing {
    /// A client with no script: every call is rejected.
    pub fn new() -> Self {
        Self {
            token_counts: HashMap::new(),
            rate: None,
            reject_above: None,
            marginal_prices: HashMap::new(),
            token_count_calls: Mutex::new(Vec::new()),
            marginal_price_calls: Mutex::new(Vec::new()),
        }
    }

    /// A client that returns `cost × numerator / denominator` tokens.
    pub fn linear(numerator: u64, denominator: u64) -> Self {
        Self {
            rate: Some((numerator, denominator)),
            ..Self::new()
        }
    }

    /// Answer `(outcome, cost)` with exactly `tokens`.
    #[must_use]
    pub fn with_token_count(mut self, outcome: usize, cost: BaseUnits, tokens: BaseUnits) -> Self {
        self.token_counts
            .insert((OutcomeIndex::new(outcome), cost), tokens);
        self
    }

    /// Refuse any cost strictly above `limit`.
    #[must_use]
    pub fn with_rejection_above(mut self, limit: BaseUnits) -> Self {
        self.reject_above = Some(limit);
        self
    }

    #[must_use]
    pub fn with_marginal_price(mut self, outcome: usize, price: Decimal) -> Self {
        self.marginal_prices.insert(OutcomeIndex::new(outcome), price);
        self
    }

    pub fn token_count_calls(&self) -> Vec<TokenCountCall> {
        self.token_count_calls.lock().clone()
    }

    pub fn marginal_price_calls(&self) -> Vec<OutcomeIndex> {
        self.marginal_price_calls.lock().clone()
    }
}

impl Default for ScriptedPricing {
    fn default() -> Self {
        Self::new()
    }
}

impl PricingClient for ScriptedPricing {
    fn outcome_token_count(
        &self,
        query: &PricingQuery<'_>,
        cost: BaseUnits,
    ) -> Result<BaseUnits, PricingRejection> {
        self.token_count_calls.lock().push(TokenCountCall {
            funding: query.funding,
            outcome: query.outcome,
            cost,
        });

        if self.reject_above.is_some_and(|limit| cost > limit) {
            return Err(PricingRejection::CostOutOfDomain { cost });
        }
        if let Some(tokens) = self.token_counts.get(&(query.outcome, cost)) {
            return Ok(*tokens);
        }
        let (numerator, denominator) = self
            .rate
            .ok_or_else(|| PricingRejection::Rejected("no scripted token count".into()))?;
        cost.raw()
            .checked_mul(U256::from(numerator))
            .and_then(|scaled| scaled.checked_div(U256::from(denominator)))
            .map(BaseUnits::new)
            .ok_or(PricingRejection::CostOutOfDomain { cost })
    }

    fn marginal_price(&self, query: &PricingQuery<'_>) -> Result<Decimal, PricingRejection> {
        self.marginal_price_calls.lock().push(query.outcome);
        self.marginal_prices
            .get(&query.outcome)
            .copied()
            .ok_or(PricingRejection::UnknownOutcome {
                outcome: query.outcome,
            })
    }
}
