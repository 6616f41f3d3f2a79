//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`pricing`] - [`ScriptedPricing`](pricing::ScriptedPricing), a
//!   [`PricingClient`](crate::pricing::PricingClient) with canned answers
//!   that records every call.
//! - [`buyer`] - [`RecordingBuyer`](buyer::RecordingBuyer), a
//!   [`ShareBuyer`](crate::submit::ShareBuyer) that keeps submitted orders.
//! - [`market`] - Builders for market snapshots.

pub mod buyer;
pub mod market;
pub mod pricing;
