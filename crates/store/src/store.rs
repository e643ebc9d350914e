//! Single-slot record store bound to the fixed storage key.
//!
//! The store serializes the submitted [`SavedRecord`] to JSON and hands it to
//! a [`StorageBackend`] under [`RECORD_KEY`]. There is exactly one slot: the
//! newest save replaces any previous one. The backend sits behind a mutex so
//! a save and a concurrent reset cannot interleave on the single key.

use crate::backend::StorageBackend;
use crate::errors::StoreError;
use crate::file::FileBackend;
use crate::memory::MemoryBackend;
use form::SavedRecord;
use std::sync::Mutex;

/// The single key every record save/load/delete goes through.
pub const RECORD_KEY: &str = "myData";

/// Store for persisting the one submitted record.
pub struct RecordStore {
    backend: Mutex<Box<dyn StorageBackend>>,
}

impl RecordStore {
    /// Create a store over an arbitrary backend.
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Mutex::new(Box::new(backend)),
        }
    }

    /// Create a store over volatile in-memory storage.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Create a store over the app's standard on-disk location.
    pub fn on_disk(ctx: &paths::PathContext) -> Self {
        Self::new(FileBackend::for_context(ctx))
    }

    /// Persist `record` under the fixed key, replacing any previous save.
    pub fn save(&self, record: &SavedRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string(record)?;
        let mut backend = self.backend.lock().map_err(|_| StoreError::Poisoned)?;
        backend.set(RECORD_KEY, &json)
    }

    /// Retrieve the stored record, if any.
    pub fn load(&self) -> Result<Option<SavedRecord>, StoreError> {
        let backend = self.backend.lock().map_err(|_| StoreError::Poisoned)?;
        match backend.get(RECORD_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Delete the stored record. Deleting an empty slot succeeds.
    pub fn delete(&self) -> Result<(), StoreError> {
        let mut backend = self.backend.lock().map_err(|_| StoreError::Poisoned)?;
        backend.remove(RECORD_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use form::Gender;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_record() -> SavedRecord {
        SavedRecord {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            mobile_number: "11111-22222".into(),
            date_of_birth: "01-01-2000".into(),
            gender: Gender::Female,
            postal_code: "12345".into(),
            city: "Metropolis".into(),
            state: "NY".into(),
        }
    }

    #[test]
    fn save_then_load_returns_equal_record() {
        let store = RecordStore::in_memory();
        assert_eq!(store.load().unwrap(), None);

        let record = sample_record();
        store.save(&record).unwrap();
        assert_eq!(store.load().unwrap(), Some(record));
    }

    #[test]
    fn newest_save_replaces_previous_one() {
        let store = RecordStore::in_memory();
        store.save(&sample_record()).unwrap();

        let mut updated = sample_record();
        updated.city = "Gotham".into();
        store.save(&updated).unwrap();

        assert_eq!(store.load().unwrap(), Some(updated));
    }

    #[test]
    fn delete_empties_the_slot() {
        let store = RecordStore::in_memory();
        store.save(&sample_record()).unwrap();

        store.delete().unwrap();
        assert_eq!(store.load().unwrap(), None);

        // Deleting again is a no-op.
        store.delete().unwrap();
    }

    #[test]
    fn on_disk_record_survives_a_fresh_store() {
        let temp = TempDir::new().unwrap();
        let record = sample_record();
        {
            let store = RecordStore::new(FileBackend::new(temp.path()));
            store.save(&record).unwrap();
        }

        let store = RecordStore::new(FileBackend::new(temp.path()));
        assert_eq!(store.load().unwrap(), Some(record));
    }

    #[test]
    fn corrupted_blob_surfaces_as_json_error() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(format!("{}.json", RECORD_KEY)),
            "not json",
        )
        .unwrap();

        let store = RecordStore::new(FileBackend::new(temp.path()));
        assert!(matches!(store.load(), Err(StoreError::Json(_))));
    }
}
