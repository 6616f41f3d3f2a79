//! Domain validation errors for market snapshots and display settings.
//!
//! These errors are returned by `try_new` constructors that validate inputs.
//!
//! # Examples
//!
//! ```
//! use tradepreview::domain::{BaseUnits, DomainError, Event, Market};
//!
//! // Discrete markets need at least one outcome
//! let result = Market::try_new(BaseUnits::ZERO, vec![], Event::discrete(Vec::<String>::new()));
//!
//! assert!(matches!(result, Err(DomainError::EmptyOutcomes)));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Discrete markets must have at least one outcome.
    #[error("outcomes cannot be empty")]
    EmptyOutcomes,

    /// Each outcome needs exactly one net-sold entry.
    #[error("expected {expected} net-sold entries, got {actual}")]
    OutcomeCountMismatch {
        /// Outcome count implied by the event.
        expected: usize,
        /// Length of the net-sold sequence.
        actual: usize,
    },

    /// A continuous range must have `lower < upper`.
    #[error("lower bound {lower} must be below upper bound {upper}")]
    InvertedRange {
        lower: rust_decimal::Decimal,
        upper: rust_decimal::Decimal,
    },

    /// Continuous events need both bounds.
    #[error("continuous event is missing its {field}")]
    MissingBound { field: &'static str },

    /// The outcome color palette needs at least one color.
    #[error("palette cannot be empty")]
    EmptyPalette,
}
