//! mint-genesis
//!
//! Moves the mint module's state across the genesis boundary:
//!
//! * `init_genesis` writes the snapshot's minter and params through the
//!   keeper, then asks the account subsystem for the module account.
//! * `export_genesis` reads both values back into a `GenesisState`.
//!
//! Neither call recovers from a store failure. Errors are returned as-is and
//! the host decides to halt.

pub mod file;

pub use file::{load_genesis, save_genesis, to_json};

use mint_core::constants::MODULE_NAME;
use mint_core::error::MintError;
use mint_core::traits::{AccountKeeper, MinterStore, ParamsStore};
use mint_core::types::GenesisState;
use tracing::{debug, info, warn};

/// Stateless orchestrator over a minter store and a params store.
///
/// Usually both are the same `MintKeeper`, passed by reference twice.
pub struct GenesisCoordinator<M, P> {
    minter: M,
    params: P,
}

impl<M: MinterStore, P: ParamsStore> GenesisCoordinator<M, P> {
    pub fn new(minter: M, params: P) -> Self {
        Self { minter, params }
    }

    /// Import the mint section of a genesis document.
    ///
    /// Stops at the first store failure; the module account is only
    /// requested once both values are stored. The account result is logged
    /// and otherwise ignored, since consumers of the account create it
    /// lazily anyway.
    pub fn init_genesis<A: AccountKeeper + ?Sized>(
        &self,
        account_keeper: &A,
        state: &GenesisState,
    ) -> Result<(), MintError> {
        info!(denom = %state.params.mint_denom, "importing mint genesis");

        self.minter.set_minter(&state.minter)?;
        debug!(inflation = %state.minter.inflation, "genesis: minter stored");

        self.params.set_params(&state.params)?;
        debug!(
            blocks_per_year = state.params.blocks_per_year,
            "genesis: params stored"
        );

        match account_keeper.ensure_module_account(MODULE_NAME) {
            Ok(account) => debug!(address = %account.address, "genesis: module account ready"),
            Err(e) => warn!(error = %e, "genesis: module account bootstrap failed"),
        }

        info!("mint genesis imported");
        Ok(())
    }

    /// Snapshot the current minter and params.
    pub fn export_genesis(&self) -> Result<GenesisState, MintError> {
        let minter = self.minter.get_minter()?;
        let params = self.params.get_params()?;
        info!(
            inflation = %minter.inflation,
            denom = %params.mint_denom,
            "mint genesis exported"
        );
        Ok(GenesisState::new(minter, params))
    }
}

/// Stateless checks on a genesis document before it is imported.
pub fn validate_genesis(state: &GenesisState) -> Result<(), MintError> {
    state.params.validate()?;
    state.minter.validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mint_core::account::{ModuleAccount, Permission};
    use mint_core::decimal::Decimal;
    use mint_core::types::{Minter, Params};
    use mint_state::{MemStore, MintKeeper};

    struct NoAccounts;

    impl AccountKeeper for NoAccounts {
        fn ensure_module_account(&self, name: &str) -> Result<ModuleAccount, MintError> {
            Err(MintError::Account(format!("{name} unavailable")))
        }
    }

    struct AlwaysAccounts;

    impl AccountKeeper for AlwaysAccounts {
        fn ensure_module_account(&self, name: &str) -> Result<ModuleAccount, MintError> {
            Ok(ModuleAccount::new(name, vec![Permission::Minter]))
        }
    }

    #[test]
    fn default_genesis_validates() {
        validate_genesis(&GenesisState::default()).unwrap();
    }

    #[test]
    fn validate_rejects_bad_params() {
        let mut state = GenesisState::default();
        state.params.inflation_min = Decimal::percent(30);
        assert!(matches!(
            validate_genesis(&state),
            Err(MintError::InvalidParams(_))
        ));
    }

    #[test]
    fn import_then_export_is_identity() {
        let keeper = MintKeeper::new(MemStore::new());
        let coordinator = GenesisCoordinator::new(&keeper, &keeper);
        let state = GenesisState::new(
            Minter::new(Decimal::percent(11), Decimal::from_ratio(42u128, 1u128)),
            Params {
                mint_denom: "uxion".into(),
                ..Params::default()
            },
        );
        coordinator.init_genesis(&AlwaysAccounts, &state).unwrap();
        assert_eq!(coordinator.export_genesis().unwrap(), state);
    }

    #[test]
    fn account_failure_does_not_fail_import() {
        let keeper = MintKeeper::new(MemStore::new());
        let coordinator = GenesisCoordinator::new(&keeper, &keeper);
        coordinator
            .init_genesis(&NoAccounts, &GenesisState::default())
            .expect("account bootstrap result is not inspected");
        assert_eq!(
            coordinator.export_genesis().unwrap(),
            GenesisState::default()
        );
    }

    #[test]
    fn export_before_import_is_not_found() {
        let keeper = MintKeeper::new(MemStore::new());
        let coordinator = GenesisCoordinator::new(&keeper, &keeper);
        let err = coordinator.export_genesis().unwrap_err();
        assert!(matches!(err, MintError::NotFound("minter")), "got {err:?}");
    }
}
