//! Trade preview results handed to the rendering layer.

use rust_decimal::Decimal;
use serde::Serialize;

use super::amount::BaseUnits;
use super::fixed::FixedPoint;

/// Economic outcome of a prospective buy.
///
/// Derived on every input change and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    /// Outcome tokens the investment buys, in base units.
    pub share_cost: BaseUnits,
    /// Payout in collateral units if the outcome resolves in the buyer's favor.
    pub maximum_win: FixedPoint,
    /// `(share_cost / investment − 1) × 100`.
    pub percentage_return: FixedPoint,
    /// Long-side tokens the same investment would buy in a continuous market.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_side_cost: Option<BaseUnits>,
    /// Current long-side price of a continuous market.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marginal_price: Option<Decimal>,
    /// Point in a continuous market's range implied by `marginal_price`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implied_value: Option<Decimal>,
}

impl Preview {
    /// The neutral preview: nothing bought, nothing won.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            share_cost: BaseUnits::ZERO,
            maximum_win: FixedPoint::ZERO,
            percentage_return: FixedPoint::ZERO,
            long_side_cost: None,
            marginal_price: None,
            implied_value: None,
        }
    }

    /// True when no tokens would be bought.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.share_cost.is_zero() && self.percentage_return.is_zero()
    }
}

impl Default for Preview {
    fn default() -> Self {
        Self::zero()
    }
}

/// Result of previewing a trade against a market snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PreviewOutcome {
    /// A preview, possibly the zero preview after a silent degrade.
    Ready(Preview),
    /// The market's event type is unknown; there are no outcomes to preview.
    InvalidOutcomes { kind: String },
}

impl PreviewOutcome {
    /// The preview, if the market's outcomes were valid.
    #[must_use]
    pub fn preview(&self) -> Option<&Preview> {
        match self {
            Self::Ready(preview) => Some(preview),
            Self::InvalidOutcomes { .. } => None,
        }
    }

    #[must_use]
    pub fn is_invalid_outcomes(&self) -> bool {
        matches!(self, Self::InvalidOutcomes { .. })
    }
}
