use std::collections::HashMap;

use mint_core::account::{ModuleAccount, Permission};
use mint_core::error::MintError;
use mint_core::traits::AccountKeeper;
use tracing::info;

use crate::kv::KvStore;

/// Module account registry: one bincode(ModuleAccount) per module name.
///
/// Only modules registered with `with_permissions` may have an account
/// created; asking for any other name is an error.
pub struct ModuleAccounts<S> {
    kv: S,
    permissions: HashMap<String, Vec<Permission>>,
}

impl<S: KvStore> ModuleAccounts<S> {
    pub fn new(kv: S) -> Self {
        Self {
            kv,
            permissions: HashMap::new(),
        }
    }

    /// Register `name` as a module allowed to own an account.
    pub fn with_permissions(mut self, name: impl Into<String>, perms: Vec<Permission>) -> Self {
        self.permissions.insert(name.into(), perms);
        self
    }

    pub fn get_module_account(&self, name: &str) -> Result<Option<ModuleAccount>, MintError> {
        match self.kv.read(name.as_bytes()).map_err(|e| account_err(name, e))? {
            Some(bytes) => {
                let acc = bincode::deserialize(&bytes).map_err(|e| account_err(name, e))?;
                Ok(Some(acc))
            }
            None => Ok(None),
        }
    }

    fn put_module_account(&self, account: &ModuleAccount) -> Result<(), MintError> {
        let bytes = bincode::serialize(account).map_err(|e| account_err(&account.name, e))?;
        self.kv
            .write(account.name.as_bytes(), &bytes)
            .map_err(|e| account_err(&account.name, e))?;
        Ok(())
    }
}

impl<S: KvStore> AccountKeeper for ModuleAccounts<S> {
    fn ensure_module_account(&self, name: &str) -> Result<ModuleAccount, MintError> {
        if let Some(existing) = self.get_module_account(name)? {
            return Ok(existing);
        }
        let perms = self.permissions.get(name).ok_or_else(|| {
            MintError::Account(format!("module {name} has no registered permissions"))
        })?;

        let account = ModuleAccount::new(name, perms.clone());
        self.put_module_account(&account)?;
        info!(module = name, address = %account.address, "created module account");
        Ok(account)
    }
}

fn account_err(name: &str, e: impl std::fmt::Display) -> MintError {
    MintError::Account(format!("{name}: {e}"))
}
