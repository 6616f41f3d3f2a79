//! Integration tests for buy submission.

mod support;

use std::sync::Arc;

use rust_decimal_macros::dec;
use tradepreview::domain::OutcomeIndex;
use tradepreview::error::Error;
use tradepreview::preview::{InputError, SelectionError};
use tradepreview::submit::{prepare_order, BuySharesHandler, SubmitError};
use tradepreview::testkit::buyer::RecordingBuyer;
use tradepreview::testkit::market::{continuous_market, discrete_market, unrecognized_market};

use support::amounts::tokens;

#[tokio::test]
async fn submit_forwards_selected_discrete_outcome() {
    let buyer = Arc::new(RecordingBuyer::new());
    let handler = BuySharesHandler::new(buyer.clone());
    let market = discrete_market(&["Yes", "No"]);

    handler.submit(&market, Some(1), "2.5").await.unwrap();

    let orders = buyer.orders();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].outcome, OutcomeIndex::new(1));
    assert_eq!(orders[0].investment, "2.5");
    assert_eq!(orders[0].amount.to_string(), "2500000000000000000");
    assert_eq!(orders[0].market, market);
}

#[tokio::test]
async fn submit_buys_short_side_of_continuous_market() {
    let buyer = Arc::new(RecordingBuyer::new());
    let handler = BuySharesHandler::new(buyer.clone());
    let market = continuous_market(dec!(0), dec!(1), 2, "");

    handler.submit(&market, Some(1), "3").await.unwrap();

    assert_eq!(buyer.orders()[0].outcome, OutcomeIndex::SHORT);
    assert_eq!(buyer.orders()[0].amount, tokens(3));
}

#[tokio::test]
async fn handler_keeps_its_buyer_across_submissions() {
    let buyer = Arc::new(RecordingBuyer::new());
    let handler = BuySharesHandler::new(buyer.clone());
    let market = discrete_market(&["A", "B", "C"]);

    let cloned = handler.clone();
    handler.submit(&market, Some(0), "1").await.unwrap();
    cloned.submit(&market, Some(2), "1").await.unwrap();

    let outcomes: Vec<_> = buyer.orders().iter().map(|o| o.outcome.get()).collect();
    assert_eq!(outcomes, vec![0, 2]);
}

#[tokio::test]
async fn submit_rejects_zero_investment() {
    let buyer = Arc::new(RecordingBuyer::new());
    let handler = BuySharesHandler::new(buyer.clone());
    let market = discrete_market(&["Yes", "No"]);

    let result = handler.submit(&market, Some(0), "0").await;

    assert!(matches!(
        result,
        Err(Error::Submit(SubmitError::Investment(InputError::NonPositive { .. })))
    ));
    assert!(buyer.orders().is_empty());
}

#[tokio::test]
async fn submit_rejects_unrecognized_market() {
    let buyer = Arc::new(RecordingBuyer::new());
    let handler = BuySharesHandler::new(buyer.clone());

    let result = handler.submit(&unrecognized_market("ranged"), Some(0), "1").await;

    assert!(matches!(
        result,
        Err(Error::Submit(SubmitError::Selection(SelectionError::InvalidOutcomes { .. })))
    ));
    assert!(buyer.orders().is_empty());
}

#[tokio::test]
async fn buyer_failure_is_returned_to_caller() {
    let buyer = Arc::new(RecordingBuyer::failing("insufficient balance"));
    let handler = BuySharesHandler::new(buyer.clone());
    let market = discrete_market(&["Yes", "No"]);

    let result = handler.submit(&market, Some(0), "1").await;

    match result {
        Err(Error::Buy(reason)) => assert_eq!(reason, "insufficient balance"),
        other => panic!("expected buy failure, got {other:?}"),
    }
    assert_eq!(buyer.orders().len(), 1);
}

#[test]
fn prepare_order_checks_selection_bounds() {
    let market = discrete_market(&["Yes", "No"]);

    assert_eq!(
        prepare_order(&market, Some(5), "1"),
        Err(SubmitError::Selection(SelectionError::OutOfRange { index: 5, count: 2 }))
    );
}
