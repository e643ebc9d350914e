use crate::backend::StorageBackend;
use crate::errors::StoreError;
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// FileBackend: file-per-key storage rooted at a base directory.
///
/// Notes:
/// - Each key maps to `<base>/<key>.json`; the value is written as UTF-8.
/// - Writes go to a temporary file which is renamed into place; an advisory
///   lock is acquired around the write for cross-process safety.
/// - Reads are plain `read_to_string`; a missing file means "no value".
#[derive(Debug, Clone)]
pub struct FileBackend {
    base_dir: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `base_dir`. The directory is created lazily
    /// on the first write.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Create a backend rooted at the app's standard data directory.
    pub fn for_context(ctx: &paths::PathContext) -> Self {
        Self::new(ctx.data_dir())
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }

    /// Acquire an exclusive lock on the backing file (creating it if needed),
    /// run the closure, release the lock.
    fn with_lock<F, R>(&self, path: &Path, mut f: F) -> Result<R, StoreError>
    where
        F: FnMut(&File) -> Result<R, StoreError>,
    {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path)?;
        file.lock_exclusive().map_err(StoreError::Io)?;
        let res = f(&file);
        file.unlock().map_err(StoreError::Io)?;
        res
    }
}

impl StorageBackend for FileBackend {
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_dir)?;

        let path = self.file_path(key);
        let tmp = path.with_extension("json.tmp");
        self.with_lock(&path, |_file| {
            fs::write(&tmp, value)?;
            fs::rename(&tmp, &path)?;
            Ok(())
        })
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.file_path(key);
        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(fs::read_to_string(path)?))
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let path = self.file_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
