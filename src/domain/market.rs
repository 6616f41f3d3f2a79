//! Market snapshot types.
//!
//! - [`Market`] - Immutable snapshot of an AMM-backed prediction market
//! - [`Event`] - What the market resolves on: discrete labels or a numeric range
//! - [`ContinuousRange`] - Bounds and display settings of a range event
//! - [`OutcomeIndex`] - Position of an outcome within the market

use std::fmt;
use std::result::Result;

use alloy_primitives::I256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount::BaseUnits;
use super::error::DomainError;

/// Position of an outcome token within a market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OutcomeIndex(usize);

impl OutcomeIndex {
    /// The short side of a continuous market.
    pub const SHORT: Self = Self(0);

    /// The long side of a continuous market.
    pub const LONG: Self = Self(1);

    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for OutcomeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for OutcomeIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Bounds and display settings of a continuous (scalar) event.
///
/// The market has two outcome tokens: short at index 0 and long at index 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinuousRange {
    lower_bound: Decimal,
    upper_bound: Decimal,
    decimals: u32,
    unit: String,
}

impl ContinuousRange {
    pub fn new(
        lower_bound: Decimal,
        upper_bound: Decimal,
        decimals: u32,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            lower_bound,
            upper_bound,
            decimals,
            unit: unit.into(),
        }
    }

    /// Create a range, rejecting inverted bounds.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvertedRange`] if `lower_bound >= upper_bound`.
    pub fn try_new(
        lower_bound: Decimal,
        upper_bound: Decimal,
        decimals: u32,
        unit: impl Into<String>,
    ) -> Result<Self, DomainError> {
        if lower_bound >= upper_bound {
            return Err(DomainError::InvertedRange {
                lower: lower_bound,
                upper: upper_bound,
            });
        }
        Ok(Self::new(lower_bound, upper_bound, decimals, unit))
    }

    #[must_use]
    pub const fn lower_bound(&self) -> Decimal {
        self.lower_bound
    }

    #[must_use]
    pub const fn upper_bound(&self) -> Decimal {
        self.upper_bound
    }

    /// Number of fractional digits shown for values in this range.
    #[must_use]
    pub const fn decimals(&self) -> u32 {
        self.decimals
    }

    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Point in the range that a long-side price maps to:
    /// `lower + price × (upper − lower)`, rounded to the range's decimals.
    ///
    /// Returns `None` if the price is outside `[0, 1]` or the arithmetic overflows.
    #[must_use]
    pub fn value_at(&self, price: Decimal) -> Option<Decimal> {
        if price < Decimal::ZERO || price > Decimal::ONE {
            return None;
        }
        let width = self.upper_bound.checked_sub(self.lower_bound)?;
        let value = self.lower_bound.checked_add(price.checked_mul(width)?)?;
        Some(value.round_dp(self.decimals))
    }
}

/// What a market resolves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// One of a fixed, ordered set of labels.
    Discrete { outcomes: Vec<String> },
    /// A value within a bounded range.
    Continuous(ContinuousRange),
    /// A type tag this crate does not know how to preview.
    Unrecognized { kind: String },
}

impl Event {
    /// Build a discrete event from labels.
    pub fn discrete<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Discrete {
            outcomes: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Short type tag used in snapshots and logs.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Discrete { .. } => "categorical",
            Self::Continuous(_) => "scalar",
            Self::Unrecognized { kind } => kind,
        }
    }

    /// Number of outcome tokens, if the event type is known.
    #[must_use]
    pub fn outcome_count(&self) -> Option<usize> {
        match self {
            Self::Discrete { outcomes } => Some(outcomes.len()),
            Self::Continuous(_) => Some(2),
            Self::Unrecognized { .. } => None,
        }
    }
}

/// Immutable snapshot of a market maker's state.
///
/// A snapshot is sourced once and shared by reference for the duration of a
/// preview; nothing in this crate mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Market {
    funding: BaseUnits,
    net_outcome_tokens_sold: Vec<I256>,
    event: Event,
    collateral_token: Option<String>,
}

impl Market {
    /// Create a new market snapshot.
    pub fn new(funding: BaseUnits, net_outcome_tokens_sold: Vec<I256>, event: Event) -> Self {
        Self {
            funding,
            net_outcome_tokens_sold,
            event,
            collateral_token: None,
        }
    }

    /// Create a market snapshot with domain invariant validation.
    ///
    /// # Domain Invariants
    ///
    /// - discrete events must have at least one outcome
    /// - one net-sold entry per outcome when the event type is known
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if any invariant is violated.
    pub fn try_new(
        funding: BaseUnits,
        net_outcome_tokens_sold: Vec<I256>,
        event: Event,
    ) -> Result<Self, DomainError> {
        if let Event::Discrete { outcomes } = &event {
            if outcomes.is_empty() {
                return Err(DomainError::EmptyOutcomes);
            }
        }

        if let Some(expected) = event.outcome_count() {
            if net_outcome_tokens_sold.len() != expected {
                return Err(DomainError::OutcomeCountMismatch {
                    expected,
                    actual: net_outcome_tokens_sold.len(),
                });
            }
        }

        Ok(Self::new(funding, net_outcome_tokens_sold, event))
    }

    /// Attach the collateral token symbol shown next to amounts.
    #[must_use]
    pub fn with_collateral_token(mut self, symbol: impl Into<String>) -> Self {
        self.collateral_token = Some(symbol.into());
        self
    }

    /// Market maker funding in base units.
    #[must_use]
    pub const fn funding(&self) -> BaseUnits {
        self.funding
    }

    /// Net tokens sold per outcome, in outcome order.
    #[must_use]
    pub fn net_outcome_tokens_sold(&self) -> &[I256] {
        &self.net_outcome_tokens_sold
    }

    #[must_use]
    pub const fn event(&self) -> &Event {
        &self.event
    }

    #[must_use]
    pub fn collateral_token(&self) -> Option<&str> {
        self.collateral_token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sold(n: usize) -> Vec<I256> {
        vec![I256::ZERO; n]
    }

    fn temperature() -> ContinuousRange {
        ContinuousRange::new(dec!(-10), dec!(40), 1, "°C")
    }

    #[test]
    fn market_try_new_accepts_valid_discrete_market() {
        let market = Market::try_new(
            BaseUnits::from_tokens(100).unwrap(),
            sold(2),
            Event::discrete(["Yes", "No"]),
        );
        assert!(market.is_ok());
    }

    #[test]
    fn market_try_new_rejects_empty_outcomes() {
        let result = Market::try_new(
            BaseUnits::ZERO,
            sold(0),
            Event::discrete(Vec::<String>::new()),
        );
        assert!(matches!(result, Err(DomainError::EmptyOutcomes)));
    }

    #[test]
    fn market_try_new_rejects_net_sold_length_mismatch() {
        let result = Market::try_new(
            BaseUnits::ZERO,
            sold(3),
            Event::Continuous(temperature()),
        );
        assert!(matches!(
            result,
            Err(DomainError::OutcomeCountMismatch {
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn market_try_new_skips_length_check_for_unknown_events() {
        let result = Market::try_new(
            BaseUnits::ZERO,
            sold(5),
            Event::Unrecognized {
                kind: "combinatorial".into(),
            },
        );
        assert!(result.is_ok());
    }

    #[test]
    fn event_kind_tags() {
        assert_eq!(Event::discrete(["A"]).kind(), "categorical");
        assert_eq!(Event::Continuous(temperature()).kind(), "scalar");
        assert_eq!(
            Event::Unrecognized {
                kind: "ranged".into()
            }
            .kind(),
            "ranged"
        );
    }

    #[test]
    fn range_try_new_rejects_inverted_bounds() {
        let result = ContinuousRange::try_new(dec!(5), dec!(5), 0, "");
        assert!(matches!(result, Err(DomainError::InvertedRange { .. })));
    }

    #[test]
    fn value_at_maps_price_onto_range() {
        let range = temperature();
        assert_eq!(range.value_at(dec!(0)), Some(dec!(-10)));
        assert_eq!(range.value_at(dec!(1)), Some(dec!(40)));
        assert_eq!(range.value_at(dec!(0.5)), Some(dec!(15)));
        assert_eq!(range.value_at(dec!(0.124)), Some(dec!(-3.8)));
    }

    #[test]
    fn value_at_rejects_prices_outside_unit_interval() {
        let range = temperature();
        assert_eq!(range.value_at(dec!(-0.01)), None);
        assert_eq!(range.value_at(dec!(1.01)), None);
    }

    #[test]
    fn collateral_token_is_optional() {
        let market = Market::new(BaseUnits::ZERO, sold(2), Event::discrete(["Yes", "No"]));
        assert_eq!(market.collateral_token(), None);

        let market = market.with_collateral_token("ETH");
        assert_eq!(market.collateral_token(), Some("ETH"));
    }
}
