use crate::errors::StoreError;

/// Trait representing the key-value storage the record store writes through.
///
/// Values are opaque UTF-8 strings; the caller decides the encoding (the
/// record store stores one JSON object). Implementations do not interpret
/// keys beyond using them as identifiers.
pub trait StorageBackend: Send + Sync {
    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Remove the value stored under `key`. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}
