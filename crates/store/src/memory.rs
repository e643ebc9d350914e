use crate::backend::StorageBackend;
use crate::errors::StoreError;
use std::collections::HashMap;

/// MemoryBackend: volatile key-value storage.
///
/// Serves as the test double for the file backend and as storage for
/// embeddings that do not want anything on disk. Contents die with the
/// process.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries (test convenience).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StorageBackend for MemoryBackend {
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        let mut backend = MemoryBackend::new();
        assert_eq!(backend.get("k").unwrap(), None);

        backend.set("k", "v1").unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("v1"));

        backend.set("k", "v2").unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(backend.len(), 1);

        backend.remove("k").unwrap();
        assert_eq!(backend.get("k").unwrap(), None);
        assert!(backend.is_empty());
    }

    #[test]
    fn removing_absent_key_succeeds() {
        let mut backend = MemoryBackend::new();
        backend.remove("missing").unwrap();
    }
}
