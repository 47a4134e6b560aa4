use crate::error::Result;

/// Abstract interface for a durable key-value store.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`Persistence`](super::persistence::Persistence) handles the "what"
/// (serializing the card collection under a key).
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if nothing was ever written there.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
