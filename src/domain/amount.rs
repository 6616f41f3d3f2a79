//! Base-unit integer amounts.
//!
//! Every amount that crosses the pricing boundary is an integer count of the
//! smallest indivisible unit, i.e. the human-facing decimal scaled by `10^18`.
//! These types never pass through floating point.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::{ruint::ParseError, I256, U256};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Number of fractional digits between a collateral unit and its base unit.
pub const BASE_UNIT_DECIMALS: u32 = 18;

/// `10^18` as a raw integer.
pub(crate) const ONE_TOKEN_RAW: u64 = 1_000_000_000_000_000_000;

/// A non-negative amount in base units.
///
/// Serialized as a decimal string so that values larger than any JSON number
/// survive the round trip untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BaseUnits(U256);

impl BaseUnits {
    /// The "no investment" sentinel.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Wrap a raw integer.
    #[must_use]
    pub const fn new(raw: U256) -> Self {
        Self(raw)
    }

    /// Exactly one collateral unit (`10^18` base units).
    #[must_use]
    pub fn one_token() -> Self {
        Self(U256::from(ONE_TOKEN_RAW))
    }

    /// Whole collateral units, scaled up to base units.
    ///
    /// Returns `None` if the result does not fit in 256 bits.
    #[must_use]
    pub fn from_tokens(tokens: u128) -> Option<Self> {
        U256::from(tokens)
            .checked_mul(U256::from(ONE_TOKEN_RAW))
            .map(Self)
    }

    /// The underlying integer.
    #[must_use]
    pub const fn raw(&self) -> U256 {
        self.0
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<u64> for BaseUnits {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<u128> for BaseUnits {
    fn from(value: u128) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for BaseUnits {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl FromStr for BaseUnits {
    type Err = ParseError;

    /// Parse a decimal integer string. Hex prefixes are not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        U256::from_str_radix(s, 10).map(Self)
    }
}

impl fmt::Display for BaseUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for BaseUnits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BaseUnits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Serde adapter for signed token balances, which may go negative once
/// holders sell back more than the market maker sold.
pub(crate) mod signed_string_seq {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<I256>, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|s| I256::from_dec_str(s).map_err(de::Error::custom))
            .collect()
    }
}
