use super::backend::StorageBackend;
use crate::error::{CardzError, Result};
use crate::model::Card;

pub const DEFAULT_KEY: &str = "cards";

/// Serializes the whole card sequence as one blob under one key.
///
/// Every save is a total overwrite. There is no version field in the blob.
pub struct Persistence<B: StorageBackend> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> Persistence<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Write the full sequence. Any backend failure is reported as
    /// [`CardzError::StorageUnavailable`]; nothing is retried.
    pub fn save(&self, cards: &[Card]) -> Result<()> {
        let blob = serde_json::to_string_pretty(cards).map_err(CardzError::Serialization)?;
        self.backend.write(&self.key, &blob).map_err(|e| {
            tracing::warn!(key = %self.key, error = %e, "failed to save cards");
            CardzError::StorageUnavailable(e.to_string())
        })?;
        tracing::debug!(key = %self.key, count = cards.len(), "saved cards");
        Ok(())
    }

    /// Read the sequence back. A missing blob is an empty collection; a blob
    /// that does not parse is [`CardzError::CorruptData`].
    pub fn load(&self) -> Result<Vec<Card>> {
        let Some(blob) = self.backend.read(&self.key)? else {
            return Ok(Vec::new());
        };
        if blob.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&blob).map_err(|e| CardzError::CorruptData(e.to_string()))
    }
}
