use mint_core::constants::{MINTER_KEY, PARAMS_KEY};
use mint_core::error::MintError;
use mint_core::traits::{MinterStore, ParamsStore};
use mint_core::types::{Minter, Params};

use crate::item::Item;
use crate::kv::KvStore;

const MINTER: Item<Minter> = Item::new(MINTER_KEY, "minter");
const PARAMS: Item<Params> = Item::new(PARAMS_KEY, "params");

/// Owns the mint module's two state slots on top of any `KvStore`.
///
/// The keeper holds no cached copy: every `get_*` reads the backend.
pub struct MintKeeper<S> {
    kv: S,
}

impl<S: KvStore> MintKeeper<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }
}

impl<S: KvStore> MinterStore for MintKeeper<S> {
    fn set_minter(&self, minter: &Minter) -> Result<(), MintError> {
        MINTER.save(&self.kv, minter)
    }

    fn get_minter(&self) -> Result<Minter, MintError> {
        MINTER.load(&self.kv)
    }
}

impl<S: KvStore> ParamsStore for MintKeeper<S> {
    fn set_params(&self, params: &Params) -> Result<(), MintError> {
        params.validate()?;
        PARAMS.save(&self.kv, params)
    }

    fn get_params(&self) -> Result<Params, MintError> {
        PARAMS.load(&self.kv)
    }
}
