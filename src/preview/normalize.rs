//! Investment input normalization.
//!
//! Turns whatever the user typed into a base-unit amount. The decimal string
//! is scaled by `10^18` digit by digit, so there is no intermediate type with
//! a narrower precision than the 256-bit result. The preview path never fails
//! here: anything that is not a positive number becomes the "No investment"
//! sentinel.

use alloy_primitives::U256;
use thiserror::Error;
use tracing::trace;

use crate::domain::{BaseUnits, BASE_UNIT_DECIMALS};

/// Decimal digits in `U256::MAX`.
const MAX_DIGITS: i64 = 78;

/// Why an investment string did not produce an amount.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("investment is empty")]
    Empty,

    #[error("investment '{input}' is not a number")]
    Malformed { input: String },

    #[error("investment must be positive, got {input}")]
    NonPositive { input: String },

    /// Positive but below half a base unit.
    #[error("investment {input} rounds to zero base units")]
    BelowResolution { input: String },

    #[error("investment {input} does not fit in 256 bits of base units")]
    TooLarge { input: String },
}

/// A decimal string split into `digits × 10^exponent`.
#[derive(Debug, PartialEq, Eq)]
struct DecimalParts<'a> {
    negative: bool,
    /// Significant digits with leading zeros removed; empty for zero.
    digits: String,
    exponent: i64,
    raw: &'a str,
}

/// Parse a decimal investment string into base units.
///
/// Accepts plain (`"10.5"`, `".5"`, `"1."`) and scientific (`"1e3"`,
/// `"2.5E-1"`) notation with an optional sign; surrounding whitespace is
/// ignored. The result is `investment × 10^18` rounded half away from zero,
/// exactly once, at the 18th fractional digit.
///
/// # Errors
///
/// Returns an [`InputError`] describing why the input is not a positive amount.
pub fn parse_investment(input: &str) -> Result<BaseUnits, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    let parts = split_decimal(trimmed).ok_or_else(|| InputError::Malformed {
        input: trimmed.to_string(),
    })?;
    if parts.digits.is_empty() || parts.negative {
        return Err(InputError::NonPositive {
            input: parts.raw.to_string(),
        });
    }

    let units = scale_to_base_units(&parts.digits, parts.exponent).ok_or_else(|| {
        InputError::TooLarge {
            input: parts.raw.to_string(),
        }
    })?;
    if units.is_zero() {
        return Err(InputError::BelowResolution {
            input: parts.raw.to_string(),
        });
    }
    Ok(BaseUnits::new(units))
}

/// Parse an investment, mapping every failure to the zero sentinel.
#[must_use]
pub fn normalize_investment(input: &str) -> BaseUnits {
    parse_investment(input).unwrap_or_else(|e| {
        trace!(reason = %e, "No investment");
        BaseUnits::ZERO
    })
}

fn split_decimal(s: &str) -> Option<DecimalParts<'_>> {
    let (negative, unsigned) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let (mantissa, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
        Some(at) => (&unsigned[..at], parse_exponent(&unsigned[at + 1..])?),
        None => (unsigned, 0),
    };

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if whole.len() + fraction.len() == 0 || !all_digits(whole) || !all_digits(fraction) {
        return None;
    }

    let mut digits = String::with_capacity(whole.len() + fraction.len());
    digits.push_str(whole);
    digits.push_str(fraction);
    let digits = digits.trim_start_matches('0').to_string();

    let fraction_len = i64::try_from(fraction.len()).unwrap_or(i64::MAX);
    Some(DecimalParts {
        negative,
        digits,
        exponent: exponent.saturating_sub(fraction_len),
        raw: s,
    })
}

/// Exponent after `e`: optional sign and at least one digit. Magnitudes past
/// `i64` saturate, which still lands on the right side of every bound.
fn parse_exponent(s: &str) -> Option<i64> {
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// `digits × 10^(exponent + 18)` rounded half away from zero, or `None` if it
/// does not fit in 256 bits.
fn scale_to_base_units(digits: &str, exponent: i64) -> Option<U256> {
    let shift = exponent.saturating_add(i64::from(BASE_UNIT_DECIMALS));
    let len = i64::try_from(digits.len()).unwrap_or(i64::MAX);

    if shift >= 0 {
        if len.saturating_add(shift) > MAX_DIGITS {
            return None;
        }
        let factor = U256::from(10u64).checked_pow(U256::from(shift.unsigned_abs()))?;
        return U256::from_str_radix(digits, 10).ok()?.checked_mul(factor);
    }

    // Keep the leading digits; the first dropped digit decides the rounding.
    let dropped = usize::try_from(shift.unsigned_abs()).unwrap_or(usize::MAX);
    if dropped > digits.len() {
        return Some(U256::ZERO);
    }
    let (kept, rest) = digits.split_at(digits.len() - dropped);
    let truncated = if kept.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(kept, 10).ok()?
    };
    if rest.as_bytes()[0] >= b'5' {
        truncated.checked_add(U256::from(1u64))
    } else {
        Some(truncated)
    }
}
