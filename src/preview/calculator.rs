//! Trade preview computation.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::dispatch::{resolve_outcome, OutcomeDispatcher, OutcomeSelection, SelectionError};
use super::guard::{guard, guard_optional, PreviewError};
use super::normalize::parse_investment;
use crate::domain::{
    BaseUnits, ContinuousRange, Event, FixedPoint, Market, OutcomeIndex, Palette, Preview,
    PreviewOutcome,
};
use crate::pricing::{PricingClient, PricingQuery};

/// Computes trade previews against market snapshots.
///
/// Stateless apart from its collaborators: the same market, input and
/// selection always produce the same preview.
#[derive(Debug, Clone)]
pub struct PreviewCalculator<P> {
    pricing: P,
    dispatcher: OutcomeDispatcher,
}

impl<P: PricingClient> PreviewCalculator<P> {
    /// Create a calculator using the built-in outcome palette.
    pub fn new(pricing: P) -> Self {
        Self {
            pricing,
            dispatcher: OutcomeDispatcher::default(),
        }
    }

    /// Create a calculator with a custom outcome palette.
    pub fn with_palette(pricing: P, palette: Palette) -> Self {
        Self {
            pricing,
            dispatcher: OutcomeDispatcher::new(palette),
        }
    }

    /// Selectable outcomes of `market`, for rendering.
    pub fn options<'a>(&'a self, market: &'a Market) -> OutcomeSelection<'a> {
        self.dispatcher.options(market)
    }

    /// Preview buying `selected` with the raw investment `input`.
    ///
    /// Returns [`PreviewOutcome::InvalidOutcomes`] for unknown event types.
    /// Every other failure yields the zero preview. Continuous markets price
    /// the short side and also carry what the same investment buys on the
    /// long side, plus the current long-side marginal price and the range
    /// value it implies.
    pub fn preview(&self, market: &Market, input: &str, selected: Option<usize>) -> PreviewOutcome {
        let outcome = match resolve_outcome(market.event(), selected) {
            Err(SelectionError::InvalidOutcomes { kind }) => {
                warn!(kind = %kind, "Cannot preview market with unrecognized event type");
                return PreviewOutcome::InvalidOutcomes { kind };
            }
            outcome => outcome,
        };

        let mut preview = guard(self.compute(market, input, outcome));
        if let Event::Continuous(range) = market.event() {
            preview.long_side_cost = guard_optional(self.long_side_cost(market, input));
            let (price, value) = self.range_reference(market, range);
            preview.marginal_price = price;
            preview.implied_value = value;
        }
        PreviewOutcome::Ready(preview)
    }

    fn compute(
        &self,
        market: &Market,
        input: &str,
        outcome: Result<OutcomeIndex, SelectionError>,
    ) -> Result<Preview, PreviewError> {
        let invest = parse_investment(input)?;
        let outcome = outcome?;

        let query = PricingQuery::new(market, outcome);
        let share_cost = self.pricing.outcome_token_count(&query, invest)?;
        debug!(
            outcome = %outcome,
            invest = %invest,
            share_cost = %share_cost,
            "Priced preview"
        );
        derive_preview(share_cost, invest)
    }

    fn long_side_cost(&self, market: &Market, input: &str) -> Result<BaseUnits, PreviewError> {
        let invest = parse_investment(input)?;
        let query = PricingQuery::new(market, OutcomeIndex::LONG);
        Ok(self.pricing.outcome_token_count(&query, invest)?)
    }

    fn range_reference(
        &self,
        market: &Market,
        range: &ContinuousRange,
    ) -> (Option<Decimal>, Option<Decimal>) {
        let query = PricingQuery::new(market, OutcomeIndex::LONG);
        match self.pricing.marginal_price(&query) {
            Ok(price) => (Some(price), range.value_at(price)),
            Err(e) => {
                debug!(reason = %e, "Marginal price unavailable");
                (None, None)
            }
        }
    }
}

/// Display metrics for `share_cost` tokens bought with `invest`.
///
/// `maximum_win` is `share_cost / 10^18` exactly; `percentage_return` is
/// `(share_cost / invest − 1) × 100` rounded at the 18th fractional digit,
/// or zero when `invest` is zero.
///
/// # Errors
///
/// Returns [`PreviewError::Overflow`] if the return does not fit in 256 bits.
pub fn derive_preview(share_cost: BaseUnits, invest: BaseUnits) -> Result<Preview, PreviewError> {
    if invest.is_zero() {
        return Ok(Preview::zero());
    }
    let percentage_return =
        FixedPoint::percent_change(share_cost, invest).ok_or(PreviewError::Overflow)?;
    Ok(Preview {
        share_cost,
        maximum_win: FixedPoint::from_base_units(share_cost),
        percentage_return,
        long_side_cost: None,
        marginal_price: None,
        implied_value: None,
    })
}
