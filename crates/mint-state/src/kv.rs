use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard};

use thiserror::Error;

/// Failure reported by a key/value backend, before any item context is known.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct BackendError(pub String);

impl From<sled::Error> for BackendError {
    fn from(e: sled::Error) -> Self {
        BackendError(e.to_string())
    }
}

/// Byte-level key/value namespace the typed stores sit on.
///
/// A single `write` is atomic: readers see the old value or the new one.
pub trait KvStore {
    fn read(&self, key: &[u8]) -> Result<Option<Vec<u8>>, BackendError>;
    fn write(&self, key: &[u8], value: &[u8]) -> Result<(), BackendError>;
}

impl<T: KvStore + ?Sized> KvStore for &T {
    fn read(&self, key: &[u8]) -> Result<Option<Vec<u8>>, BackendError> {
        (**self).read(key)
    }

    fn write(&self, key: &[u8], value: &[u8]) -> Result<(), BackendError> {
        (**self).write(key, value)
    }
}

impl<T: KvStore + ?Sized> KvStore for Arc<T> {
    fn read(&self, key: &[u8]) -> Result<Option<Vec<u8>>, BackendError> {
        (**self).read(key)
    }

    fn write(&self, key: &[u8], value: &[u8]) -> Result<(), BackendError> {
        (**self).write(key, value)
    }
}

impl KvStore for sled::Tree {
    fn read(&self, key: &[u8]) -> Result<Option<Vec<u8>>, BackendError> {
        Ok(self.get(key)?.map(|v| v.to_vec()))
    }

    fn write(&self, key: &[u8], value: &[u8]) -> Result<(), BackendError> {
        self.insert(key, value)?;
        Ok(())
    }
}

/// In-memory backend for tests and throwaway state.
#[derive(Default)]
pub struct MemStore {
    entries: RwLock<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, BackendError> {
        Ok(self.read_entries()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, BackendError> {
        Ok(self.len()? == 0)
    }

    fn read_entries(
        &self,
    ) -> Result<RwLockReadGuard<'_, BTreeMap<Vec<u8>, Vec<u8>>>, BackendError> {
        self.entries
            .read()
            .map_err(|_| BackendError("memory store lock poisoned".into()))
    }
}

impl KvStore for MemStore {
    fn read(&self, key: &[u8]) -> Result<Option<Vec<u8>>, BackendError> {
        Ok(self.read_entries()?.get(key).cloned())
    }

    fn write(&self, key: &[u8], value: &[u8]) -> Result<(), BackendError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| BackendError("memory store lock poisoned".into()))?;
        entries.insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}
