//! Trade preview pipeline.
//!
//! Raw input and a market snapshot flow through four stages:
//!
//! - [`normalize`] - investment string to base units, or the zero sentinel
//! - [`dispatch`] - outcome index and selectable options per event type
//! - [`calculator`] - pricing call and derived display metrics
//! - [`guard`] - collapses recoverable failures into the zero preview

pub mod calculator;
pub mod dispatch;
pub mod guard;
pub mod normalize;

pub use calculator::{derive_preview, PreviewCalculator};
pub use dispatch::{
    resolve_outcome, OutcomeDispatcher, OutcomeOption, OutcomeSelection, SelectionError,
};
pub use guard::PreviewError;
pub use normalize::{normalize_investment, parse_investment, InputError};
