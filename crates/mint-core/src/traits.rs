use crate::account::ModuleAccount;
use crate::error::MintError;
use crate::types::{Minter, Params};

/// Persistent slot for the module's `Minter`.
///
/// Implemented by mint-state's `MintKeeper`.
pub trait MinterStore {
    /// Replace the stored minter. Either the whole value lands or nothing does.
    fn set_minter(&self, minter: &Minter) -> Result<(), MintError>;

    /// Fails with `MintError::NotFound` before the first `set_minter`.
    fn get_minter(&self) -> Result<Minter, MintError>;
}

/// Persistent slot for the module's `Params`.
///
/// Implemented by mint-state's `MintKeeper`.
pub trait ParamsStore {
    /// Validate, then replace the stored params. Invalid params are never written.
    fn set_params(&self, params: &Params) -> Result<(), MintError>;

    /// Fails with `MintError::NotFound` before the first `set_params`.
    fn get_params(&self) -> Result<Params, MintError>;
}

/// The slice of the account subsystem this module needs.
///
/// Implemented by mint-state's `ModuleAccounts`.
pub trait AccountKeeper {
    /// Return the named module account, creating it first if absent.
    /// Calling it for an existing account must not change that account.
    fn ensure_module_account(&self, name: &str) -> Result<ModuleAccount, MintError>;
}

impl<T: MinterStore + ?Sized> MinterStore for &T {
    fn set_minter(&self, minter: &Minter) -> Result<(), MintError> {
        (**self).set_minter(minter)
    }

    fn get_minter(&self) -> Result<Minter, MintError> {
        (**self).get_minter()
    }
}

impl<T: ParamsStore + ?Sized> ParamsStore for &T {
    fn set_params(&self, params: &Params) -> Result<(), MintError> {
        (**self).set_params(params)
    }

    fn get_params(&self) -> Result<Params, MintError> {
        (**self).get_params()
    }
}
