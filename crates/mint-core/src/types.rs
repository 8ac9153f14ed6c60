use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BLOCKS_PER_YEAR, DEFAULT_GOAL_BONDED, DEFAULT_INFLATION, DEFAULT_INFLATION_MAX,
    DEFAULT_INFLATION_MIN, DEFAULT_INFLATION_RATE_CHANGE, DEFAULT_MINT_DENOM, DENOM_MAX_LEN,
    DENOM_MIN_LEN,
};
use crate::decimal::{legacy_dec, to_legacy_string, Decimal};
use crate::error::MintError;

// ── Minter ───────────────────────────────────────────────────────────────────

/// Current monetary-policy state, overwritten every block by the inflation
/// recalculation and seeded from genesis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minter {
    /// Current annual inflation rate.
    #[serde(with = "legacy_dec")]
    pub inflation: Decimal,
    /// Tokens expected to be minted over the next year at `inflation`.
    #[serde(with = "legacy_dec")]
    pub annual_provisions: Decimal,
}

impl Minter {
    pub fn new(inflation: Decimal, annual_provisions: Decimal) -> Self {
        Self {
            inflation,
            annual_provisions,
        }
    }

    /// A minter that has not yet provisioned anything.
    pub fn initial(inflation: Decimal) -> Self {
        Self::new(inflation, Decimal::zero())
    }

    /// `Decimal` cannot go negative, so any decoded minter is well-formed.
    pub fn validate(&self) -> Result<(), MintError> {
        Ok(())
    }
}

impl Default for Minter {
    fn default() -> Self {
        Self::initial(DEFAULT_INFLATION)
    }
}

// ── Params ───────────────────────────────────────────────────────────────────

/// Governance-controlled configuration of the mint module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Denomination of the minted coin.
    pub mint_denom: String,
    /// Maximum annual change in the inflation rate.
    #[serde(with = "legacy_dec")]
    pub inflation_rate_change: Decimal,
    #[serde(with = "legacy_dec")]
    pub inflation_max: Decimal,
    #[serde(with = "legacy_dec")]
    pub inflation_min: Decimal,
    /// Bonded share of the supply the inflation feedback steers towards.
    #[serde(with = "legacy_dec")]
    pub goal_bonded: Decimal,
    #[serde(with = "u64_string")]
    pub blocks_per_year: u64,
}

impl Params {
    pub fn new(
        mint_denom: impl Into<String>,
        inflation_rate_change: Decimal,
        inflation_max: Decimal,
        inflation_min: Decimal,
        goal_bonded: Decimal,
        blocks_per_year: u64,
    ) -> Self {
        Self {
            mint_denom: mint_denom.into(),
            inflation_rate_change,
            inflation_max,
            inflation_min,
            goal_bonded,
            blocks_per_year,
        }
    }

    /// Check every field bound, then the min/max relationship.
    pub fn validate(&self) -> Result<(), MintError> {
        validate_denom(&self.mint_denom)?;
        validate_unit_interval("inflation_rate_change", self.inflation_rate_change)?;
        validate_unit_interval("inflation_max", self.inflation_max)?;
        validate_unit_interval("inflation_min", self.inflation_min)?;
        validate_unit_interval("goal_bonded", self.goal_bonded)?;
        if self.goal_bonded.is_zero() {
            return Err(MintError::params("goal_bonded must be positive"));
        }
        if self.blocks_per_year == 0 {
            return Err(MintError::params("blocks_per_year must be positive"));
        }
        if self.inflation_max < self.inflation_min {
            return Err(MintError::params(format!(
                "inflation_max ({}) must be greater than or equal to inflation_min ({})",
                to_legacy_string(&self.inflation_max),
                to_legacy_string(&self.inflation_min)
            )));
        }
        Ok(())
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new(
            DEFAULT_MINT_DENOM,
            DEFAULT_INFLATION_RATE_CHANGE,
            DEFAULT_INFLATION_MAX,
            DEFAULT_INFLATION_MIN,
            DEFAULT_GOAL_BONDED,
            DEFAULT_BLOCKS_PER_YEAR,
        )
    }
}

fn validate_unit_interval(field: &str, value: Decimal) -> Result<(), MintError> {
    if value > Decimal::one() {
        return Err(MintError::params(format!(
            "{field} too large: {} (max 1)",
            to_legacy_string(&value)
        )));
    }
    Ok(())
}

/// Denoms: a letter followed by 2..=127 of `[a-zA-Z0-9/:._-]`.
fn validate_denom(denom: &str) -> Result<(), MintError> {
    if denom.trim().is_empty() {
        return Err(MintError::params("mint_denom cannot be blank"));
    }
    if !(DENOM_MIN_LEN..=DENOM_MAX_LEN).contains(&denom.len()) {
        return Err(MintError::params(format!(
            "mint_denom {denom:?} must be {DENOM_MIN_LEN}..={DENOM_MAX_LEN} characters"
        )));
    }
    let mut chars = denom.chars();
    let leads_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_ok = chars.all(|c| c.is_ascii_alphanumeric() || "/:._-".contains(c));
    if !leads_with_letter || !rest_ok {
        return Err(MintError::params(format!(
            "mint_denom {denom:?} is not a valid denomination"
        )));
    }
    Ok(())
}

// ── GenesisState ─────────────────────────────────────────────────────────────

/// The mint section of a chain genesis document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    pub minter: Minter,
    pub params: Params,
}

impl GenesisState {
    pub fn new(minter: Minter, params: Params) -> Self {
        Self { minter, params }
    }
}

/// uint64 fields travel as decimal strings in genesis JSON.
mod u64_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xion_params() -> Params {
        Params {
            mint_denom: "uxion".into(),
            ..Params::default()
        }
    }

    #[test]
    fn default_params_are_valid() {
        Params::default().validate().expect("defaults must validate");
        assert_eq!(Params::default().blocks_per_year, 6_311_520);
    }

    #[test]
    fn default_minter_starts_at_thirteen_percent() {
        let minter = Minter::default();
        assert_eq!(minter.inflation, Decimal::percent(13));
        assert!(minter.annual_provisions.is_zero());
        minter.validate().unwrap();
    }

    #[test]
    fn rejects_bad_denoms() {
        let too_long = "a".repeat(129);
        for denom in ["", "   ", "ux", "1xion", "u xion", "uxion!", too_long.as_str()] {
            let params = Params {
                mint_denom: denom.to_string(),
                ..xion_params()
            };
            assert!(
                matches!(params.validate(), Err(MintError::InvalidParams(_))),
                "denom {denom:?} should be rejected"
            );
        }
    }

    #[test]
    fn accepts_ibc_style_denom() {
        let params = Params {
            mint_denom: "ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2".into(),
            ..xion_params()
        };
        params.validate().unwrap();
    }

    #[test]
    fn rejects_rates_above_one() {
        let params = Params {
            inflation_max: Decimal::from_ratio(2u128, 1u128),
            ..xion_params()
        };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("inflation_max"), "{err}");
    }

    #[test]
    fn rejects_zero_goal_bonded() {
        let params = Params {
            goal_bonded: Decimal::zero(),
            ..xion_params()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_zero_blocks_per_year() {
        let params = Params {
            blocks_per_year: 0,
            ..xion_params()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_inverted_bounds() {
        let params = Params {
            inflation_max: Decimal::percent(5),
            inflation_min: Decimal::percent(10),
            ..xion_params()
        };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("inflation_min"), "{err}");
    }

    #[test]
    fn genesis_json_uses_named_fields_and_strings() {
        let genesis = GenesisState::new(Minter::default(), xion_params());
        let json = serde_json::to_value(&genesis).unwrap();
        assert_eq!(json["minter"]["inflation"], "0.130000000000000000");
        assert_eq!(json["minter"]["annual_provisions"], "0.000000000000000000");
        assert_eq!(json["params"]["mint_denom"], "uxion");
        assert_eq!(json["params"]["blocks_per_year"], "6311520");

        let back: GenesisState = serde_json::from_value(json).unwrap();
        assert_eq!(back, genesis);
    }

    #[test]
    fn genesis_survives_bincode() {
        let genesis = GenesisState::new(
            Minter::new(Decimal::percent(9), Decimal::from_ratio(1_000u128, 1u128)),
            xion_params(),
        );
        let bytes = bincode::serialize(&genesis).unwrap();
        let back: GenesisState = bincode::deserialize(&bytes).unwrap();
        assert_eq!(back, genesis);
    }
}
