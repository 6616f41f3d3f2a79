//! Silent-degrade policy for previews.
//!
//! A preview is advisory. Malformed input, a pricing refusal or an
//! out-of-range selection must never block the form, so every such failure
//! collapses into the zero preview here and goes no further.

use thiserror::Error;
use tracing::debug;

use super::dispatch::SelectionError;
use super::normalize::InputError;
use crate::domain::Preview;
use crate::pricing::PricingRejection;

/// Recoverable reasons a preview could not be computed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreviewError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Pricing(#[from] PricingRejection),

    #[error("percentage return overflows 256 bits")]
    Overflow,
}

/// Collapse a fallible preview into a preview.
pub fn guard(result: Result<Preview, PreviewError>) -> Preview {
    result.unwrap_or_else(|e| {
        debug!(reason = %e, "Preview degraded to zero");
        Preview::zero()
    })
}

/// Collapse a fallible supplementary figure into `None`.
pub fn guard_optional<T>(result: Result<T, PreviewError>) -> Option<T> {
    result
        .map_err(|e| debug!(reason = %e, "Supplementary figure unavailable"))
        .ok()
}
