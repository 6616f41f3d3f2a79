//! Exact signed fixed-point values with 18 fractional digits.
//!
//! Display metrics (maximum win, percentage return) are derived from base-unit
//! integers by division. Keeping them as `magnitude / 10^18` means dividing a
//! base-unit amount by `10^18` is exact and any other ratio is rounded exactly
//! once, at the 18th fractional digit.

use std::fmt;

use alloy_primitives::U256;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use super::amount::{BaseUnits, BASE_UNIT_DECIMALS, ONE_TOKEN_RAW};

/// A signed decimal `±magnitude / 10^18`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FixedPoint {
    negative: bool,
    magnitude: U256,
}

impl FixedPoint {
    pub const ZERO: Self = Self {
        negative: false,
        magnitude: U256::ZERO,
    };

    /// Reinterpret a base-unit amount as collateral units. Exact.
    #[must_use]
    pub fn from_base_units(amount: BaseUnits) -> Self {
        Self {
            negative: false,
            magnitude: amount.raw(),
        }
    }

    /// `(numerator / denominator − 1) × 100`, rounded half away from zero.
    ///
    /// Returns `Some(ZERO)` for a zero denominator and `None` if an
    /// intermediate product does not fit in 256 bits.
    #[must_use]
    pub fn percent_change(numerator: BaseUnits, denominator: BaseUnits) -> Option<Self> {
        if denominator.is_zero() {
            return Some(Self::ZERO);
        }
        let (num, den) = (numerator.raw(), denominator.raw());
        let (negative, diff) = if num >= den {
            (false, num - den)
        } else {
            (true, den - num)
        };

        let scaled = diff
            .checked_mul(U256::from(100u64))?
            .checked_mul(U256::from(ONE_TOKEN_RAW))?;
        let (mut quotient, remainder) = scaled.div_rem(den);
        if remainder >= den - remainder {
            quotient = quotient.checked_add(U256::from(1u64))?;
        }

        Some(Self::signed(negative, quotient))
    }

    fn signed(negative: bool, magnitude: U256) -> Self {
        Self {
            negative: negative && !magnitude.is_zero(),
            magnitude,
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// The raw `10^18`-scaled magnitude.
    #[must_use]
    pub const fn magnitude(&self) -> U256 {
        self.magnitude
    }

    /// Convert to a `Decimal` when the magnitude fits in its 96-bit mantissa.
    #[must_use]
    pub fn to_decimal(&self) -> Option<Decimal> {
        let mantissa = i128::try_from(u128::try_from(self.magnitude).ok()?).ok()?;
        let mantissa = if self.negative { -mantissa } else { mantissa };
        Decimal::try_from_i128_with_scale(mantissa, BASE_UNIT_DECIMALS)
            .ok()
            .map(|d| d.normalize())
    }
}

impl fmt::Display for FixedPoint {
    /// Prints the shortest exact decimal form, e.g. `-12.5` or `3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (whole, frac) = self.magnitude.div_rem(U256::from(ONE_TOKEN_RAW));
        if self.negative {
            f.write_str("-")?;
        }
        write!(f, "{whole}")?;
        if !frac.is_zero() {
            let width = BASE_UNIT_DECIMALS as usize;
            let digits = format!("{:0>width$}", frac.to_string());
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }
        Ok(())
    }
}

impl Serialize for FixedPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
