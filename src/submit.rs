//! Buy submission.
//!
//! This crate only prepares the order. Signing, wallet and network handling
//! and the transaction itself belong to the [`ShareBuyer`] implementation.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::domain::{BaseUnits, Market, OutcomeIndex};
use crate::error::Result;
use crate::preview::{parse_investment, resolve_outcome, InputError, SelectionError};

/// Why a buy could not be prepared.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Investment(#[from] InputError),
}

/// A prepared buy, ready for the share buyer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyOrder {
    pub market: Market,
    pub outcome: OutcomeIndex,
    /// The investment exactly as the user entered it.
    pub investment: String,
    pub amount: BaseUnits,
}

/// Executes buys on behalf of the user.
#[async_trait]
pub trait ShareBuyer: Send + Sync {
    /// Buy outcome tokens as described by `order`.
    async fn buy_shares(&self, order: BuyOrder) -> Result<()>;
}

/// Submit handler bound to one share buyer for its whole lifetime.
#[derive(Clone)]
pub struct BuySharesHandler {
    buyer: Arc<dyn ShareBuyer>,
}

impl BuySharesHandler {
    pub fn new(buyer: Arc<dyn ShareBuyer>) -> Self {
        Self { buyer }
    }

    /// Prepare a buy of `selected` for `investment` and pass it to the buyer.
    ///
    /// The outcome is resolved exactly as for previews, so continuous markets
    /// always buy the short side.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError`] if the outcome or investment is invalid, or
    /// whatever the share buyer reports.
    pub async fn submit(
        &self,
        market: &Market,
        selected: Option<usize>,
        investment: &str,
    ) -> Result<()> {
        let order = prepare_order(market, selected, investment)?;
        info!(
            outcome = %order.outcome,
            amount = %order.amount,
            "Submitting buy"
        );
        self.buyer.buy_shares(order).await
    }
}

impl std::fmt::Debug for BuySharesHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuySharesHandler").finish_non_exhaustive()
    }
}

/// Build the order a submit would send, without sending it.
///
/// # Errors
///
/// Returns [`SubmitError`] if the outcome or investment is invalid.
pub fn prepare_order(
    market: &Market,
    selected: Option<usize>,
    investment: &str,
) -> std::result::Result<BuyOrder, SubmitError> {
    let outcome = resolve_outcome(market.event(), selected)?;
    let amount = parse_investment(investment)?;
    Ok(BuyOrder {
        market: market.clone(),
        outcome,
        investment: investment.to_string(),
        amount,
    })
}
