//! Rates and provisions are `cosmwasm_std::Decimal` (18 fractional digits).
//!
//! The chain writes decimals in their full legacy form
//! (`0.130000000000000000`), while `Decimal`'s own serde emits the short form
//! (`0.13`). Fields that cross the genesis boundary use `legacy_dec` so both
//! the JSON document and the stored bytes carry the canonical text.

use std::str::FromStr;

pub use cosmwasm_std::Decimal;

use crate::error::MintError;

/// `10^18`, the atomics of `Decimal::one()`.
const ATOMICS_PER_UNIT: u128 = 1_000_000_000_000_000_000;

/// Parse a non-negative decimal with at most 18 fractional digits.
pub fn parse_decimal(s: &str) -> Result<Decimal, MintError> {
    Decimal::from_str(s).map_err(|e| MintError::InvalidDecimal(format!("{s:?}: {e}")))
}

/// Full 18-digit text form, e.g. `0.070000000000000000`.
pub fn to_legacy_string(value: &Decimal) -> String {
    let atomics = value.atomics().u128();
    format!(
        "{}.{:018}",
        atomics / ATOMICS_PER_UNIT,
        atomics % ATOMICS_PER_UNIT
    )
}

/// serde adapter writing `Decimal` in its 18-digit form and accepting any
/// form `parse_decimal` accepts.
pub mod legacy_dec {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{parse_decimal, to_legacy_string, Decimal};

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_legacy_string(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_decimal(&s).map_err(de::Error::custom)
    }
}
