use mint_core::constants::STORE_KEY;
use mint_core::error::MintError;
use std::path::Path;

/// Persistent state database backed by sled (pure-Rust, no C dependencies).
///
/// Named trees (analogous to column families):
///   mint             — single-byte key → bincode(Minter | Params)
///   module_accounts  — utf8 module name → bincode(ModuleAccount)
pub struct StateDb {
    db: sled::Db,
    mint: sled::Tree,
    module_accounts: sled::Tree,
}

impl StateDb {
    /// Open or create the state database at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, MintError> {
        let db = sled::open(path).map_err(|e| storage("database", e))?;
        Self::from_db(db)
    }

    /// A database that lives only as long as this handle.
    pub fn temporary() -> Result<Self, MintError> {
        let db = sled::Config::new()
            .temporary(true)
            .open()
            .map_err(|e| storage("database", e))?;
        Self::from_db(db)
    }

    fn from_db(db: sled::Db) -> Result<Self, MintError> {
        let mint = db.open_tree(STORE_KEY).map_err(|e| storage("mint tree", e))?;
        let module_accounts = db
            .open_tree("module_accounts")
            .map_err(|e| storage("module_accounts tree", e))?;
        Ok(Self {
            db,
            mint,
            module_accounts,
        })
    }

    /// The mint module's key/value namespace.
    pub fn mint_tree(&self) -> &sled::Tree {
        &self.mint
    }

    pub fn module_accounts_tree(&self) -> &sled::Tree {
        &self.module_accounts
    }

    /// Flush all pending writes to disk.
    pub fn flush(&self) -> Result<(), MintError> {
        self.db.flush().map_err(|e| storage("database", e))?;
        Ok(())
    }
}

fn storage(item: &'static str, e: sled::Error) -> MintError {
    MintError::Storage {
        item,
        reason: e.to_string(),
    }
}
