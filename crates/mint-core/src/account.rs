use serde::{Deserialize, Serialize};
use std::fmt;

// ── ModuleAddress ────────────────────────────────────────────────────────────

/// 32-byte module account address derived as BLAKE3("module:" || name).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleAddress(pub [u8; 32]);

impl ModuleAddress {
    pub fn for_module(name: &str) -> Self {
        let mut input = b"module:".to_vec();
        input.extend_from_slice(name.as_bytes());
        Self(*blake3::hash(&input).as_bytes())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for ModuleAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for ModuleAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleAddress({})", &self.to_hex()[..8])
    }
}

// ── ModuleAccount ────────────────────────────────────────────────────────────

/// What a module account is allowed to do with the supply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Permission {
    Minter,
    Burner,
    Staking,
}

/// Account owned by a module rather than a key holder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleAccount {
    pub name: String,
    pub address: ModuleAddress,
    pub permissions: Vec<Permission>,
}

impl ModuleAccount {
    pub fn new(name: impl Into<String>, permissions: Vec<Permission>) -> Self {
        let name = name.into();
        Self {
            address: ModuleAddress::for_module(&name),
            name,
            permissions,
        }
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_is_deterministic_per_name() {
        assert_eq!(
            ModuleAddress::for_module("mint"),
            ModuleAddress::for_module("mint")
        );
        assert_ne!(
            ModuleAddress::for_module("mint"),
            ModuleAddress::for_module("distribution")
        );
    }

    #[test]
    fn new_account_carries_derived_address() {
        let acc = ModuleAccount::new("mint", vec![Permission::Minter]);
        assert_eq!(acc.address, ModuleAddress::for_module("mint"));
        assert!(acc.has_permission(Permission::Minter));
        assert!(!acc.has_permission(Permission::Burner));
        assert_eq!(acc.address.to_hex().len(), 64);
    }
}
