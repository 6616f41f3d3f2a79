//! Market snapshots, amounts and preview results.

mod amount;
mod fixed;
mod market;
mod palette;
mod preview;

pub mod error;

pub(crate) use amount::signed_string_seq;

pub use alloy_primitives::{I256, U256};
pub use amount::{BaseUnits, BASE_UNIT_DECIMALS};
pub use error::DomainError;
pub use fixed::FixedPoint;
pub use market::{ContinuousRange, Event, Market, OutcomeIndex};
pub use palette::{Palette, DEFAULT_COLORS};
pub use preview::{Preview, PreviewOutcome};
