use thiserror::Error;

#[derive(Debug, Error)]
pub enum MintError {
    // ── Serialization / storage ──────────────────────────────────────────────
    #[error("storage error on {item}: {reason}")]
    Storage { item: &'static str, reason: String },

    #[error("{0} not found in store")]
    NotFound(&'static str),

    // ── Validation ───────────────────────────────────────────────────────────
    #[error("invalid params: {0}")]
    InvalidParams(String),

    #[error("invalid decimal {0}")]
    InvalidDecimal(String),

    // ── Collaborators ────────────────────────────────────────────────────────
    #[error("account error: {0}")]
    Account(String),

    #[error("genesis error: {0}")]
    Genesis(String),
}

impl MintError {
    /// True when a `get` found no value ever stored for the item.
    pub fn is_not_found(&self) -> bool {
        matches!(self, MintError::NotFound(_))
    }

    pub(crate) fn params(msg: impl Into<String>) -> Self {
        MintError::InvalidParams(msg.into())
    }
}
