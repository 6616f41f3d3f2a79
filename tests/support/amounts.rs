use tradepreview::domain::BaseUnits;

/// Whole collateral units as base units.
pub fn tokens(n: u128) -> BaseUnits {
    BaseUnits::from_tokens(n).expect("fits in 256 bits")
}

/// Base units from a decimal integer string.
pub fn units(s: &str) -> BaseUnits {
    s.parse().expect("decimal integer")
}
