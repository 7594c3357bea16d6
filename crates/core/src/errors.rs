use thiserror::Error;

/// Unified error type for the aurea-core library.
///
/// The valuation and guarantee computations themselves are total and never
/// fail; errors only come from loading/validating input data and from
/// lookups by asset id.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input data ──────────────────────────────────────────────────
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Catalog validation failed: {0}")]
    ValidationError(String),

    #[error("Duplicate asset id in catalog: {0}")]
    DuplicateAsset(String),

    // ── Lookups ─────────────────────────────────────────────────────
    #[error("Asset not found: {0}")]
    AssetNotFound(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
