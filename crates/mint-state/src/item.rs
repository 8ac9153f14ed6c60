use std::marker::PhantomData;

use mint_core::error::MintError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::kv::KvStore;

/// A single typed value stored under a fixed key.
///
/// `name` identifies the value in errors and logs ("minter", "params").
pub struct Item<T> {
    key: &'static [u8],
    name: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> Item<T> {
    pub const fn new(key: &'static [u8], name: &'static str) -> Self {
        Self {
            key,
            name,
            _value: PhantomData,
        }
    }

    /// Encode first, then issue one write, so a codec failure never
    /// touches the backend.
    pub fn save<S: KvStore + ?Sized>(&self, kv: &S, value: &T) -> Result<(), MintError> {
        let bytes = bincode::serialize(value).map_err(|e| self.storage(e))?;
        kv.write(self.key, &bytes).map_err(|e| self.storage(e))?;
        debug!(item = self.name, bytes = bytes.len(), "stored");
        Ok(())
    }

    pub fn load<S: KvStore + ?Sized>(&self, kv: &S) -> Result<T, MintError> {
        self.may_load(kv)?.ok_or(MintError::NotFound(self.name))
    }

    pub fn may_load<S: KvStore + ?Sized>(&self, kv: &S) -> Result<Option<T>, MintError> {
        match kv.read(self.key).map_err(|e| self.storage(e))? {
            Some(bytes) => {
                let value = bincode::deserialize(&bytes).map_err(|e| self.storage(e))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn storage(&self, e: impl ToString) -> MintError {
        MintError::Storage {
            item: self.name,
            reason: e.to_string(),
        }
    }
}
