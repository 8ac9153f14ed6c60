use std::path::Path;

use mint_core::error::MintError;
use mint_core::types::GenesisState;

/// Read a mint genesis document (JSON) from disk.
pub fn load_genesis(path: &Path) -> Result<GenesisState, MintError> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| MintError::Genesis(format!("reading {}: {e}", path.display())))?;
    serde_json::from_str(&json)
        .map_err(|e| MintError::Genesis(format!("parsing {}: {e}", path.display())))
}

/// Write a mint genesis document as pretty JSON.
pub fn save_genesis(path: &Path, state: &GenesisState) -> Result<(), MintError> {
    let json = to_json(state)?;
    std::fs::write(path, json)
        .map_err(|e| MintError::Genesis(format!("writing {}: {e}", path.display())))
}

/// Pretty JSON form of a genesis document, newline-terminated.
pub fn to_json(state: &GenesisState) -> Result<String, MintError> {
    let mut json = serde_json::to_string_pretty(state)
        .map_err(|e| MintError::Genesis(format!("encoding genesis: {e}")))?;
    json.push('\n');
    Ok(json)
}
