//! mint-state
//!
//! Persistence for the mint module. A `KvStore` is the only seam to the
//! underlying database; everything above it (`Item`, `MintKeeper`,
//! `ModuleAccounts`) works the same against sled or the in-memory backend.
//!
//! Layout inside the `mint` tree:
//!   0x00 — bincode(Minter)
//!   0x01 — bincode(Params)
//!
//! Module accounts live in their own `module_accounts` tree, keyed by name.

pub mod accounts;
pub mod db;
pub mod item;
pub mod keeper;
pub mod kv;

pub use accounts::ModuleAccounts;
pub use db::StateDb;
pub use item::Item;
pub use keeper::MintKeeper;
pub use kv::{BackendError, KvStore, MemStore};
