//! ─── Mint Module Constants ──────────────────────────────────────────────────
//!
//! Store keys, the module account name and the default genesis values used
//! when a chain is initialised without an explicit mint section.

use crate::decimal::Decimal;

// ── Module identity ──────────────────────────────────────────────────────────

/// Name of the module and of its module account.
pub const MODULE_NAME: &str = "mint";

/// sled tree holding the module's key/value namespace.
pub const STORE_KEY: &str = "mint";

// ── Store keys ───────────────────────────────────────────────────────────────

/// Key of the single `Minter` value.
pub const MINTER_KEY: &[u8] = &[0x00];

/// Key of the single `Params` value.
pub const PARAMS_KEY: &[u8] = &[0x01];

// ── Defaults ─────────────────────────────────────────────────────────────────

/// Default staking denomination of a fresh chain.
pub const DEFAULT_MINT_DENOM: &str = "stake";

/// Initial inflation rate of the default minter: 13%.
pub const DEFAULT_INFLATION: Decimal = Decimal::percent(13);

/// Maximum annual change in the inflation rate: 13%.
pub const DEFAULT_INFLATION_RATE_CHANGE: Decimal = Decimal::percent(13);

/// Inflation ceiling: 20%.
pub const DEFAULT_INFLATION_MAX: Decimal = Decimal::percent(20);

/// Inflation floor: 7%.
pub const DEFAULT_INFLATION_MIN: Decimal = Decimal::percent(7);

/// Target bonded share of the supply: 67%.
pub const DEFAULT_GOAL_BONDED: Decimal = Decimal::percent(67);

/// Expected blocks per year assuming 5-second blocks.
pub const DEFAULT_BLOCKS_PER_YEAR: u64 = 60 * 60 * 8766 / 5;

// ── Denomination format ──────────────────────────────────────────────────────

/// Minimum denom length (one leading letter plus two more characters).
pub const DENOM_MIN_LEN: usize = 3;

/// Maximum denom length.
pub const DENOM_MAX_LEN: usize = 128;
