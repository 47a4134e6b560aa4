use crate::model::CardId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardzError {
    #[error("Card not found: {0}")]
    CardNotFound(CardId),

    #[error("Order does not match the collection: {0}")]
    OrderingMismatch(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Stored data is corrupt: {0}")]
    CorruptData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl CardzError {
    /// True when the in-memory state is valid but could not be written out.
    pub fn is_unsaved(&self) -> bool {
        matches!(self, CardzError::StorageUnavailable(_))
    }
}

pub type Result<T> = std::result::Result<T, CardzError>;
