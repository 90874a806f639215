//! Directory-backed [`KeyValueStore`].

use std::path::{Path, PathBuf};

use wardrobe_core::store::KeyValueStore;
use wardrobe_core::{Result, WardrobeError};

use crate::paths::WardrobePaths;
use crate::storage::AtomicFile;

/// Stores each key as `<dir>/<key>.json`.
///
/// Every `set` replaces the whole file atomically, so a reader never sees a
/// partially written snapshot.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the platform data directory.
    pub fn open_default() -> Result<Self> {
        let dir = WardrobePaths::storage_dir().map_err(|e| WardrobeError::storage(e.to_string()))?;
        Ok(Self::new(dir))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_for(&self, key: &str) -> Result<AtomicFile> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(WardrobeError::storage(format!("invalid storage key '{}'", key)));
        }
        Ok(AtomicFile::new(self.dir.join(format!("{}.json", key))))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.file_for(key)?.read()?)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.file_for(key)?.write(value)?;
        tracing::debug!("Wrote '{}' to {}", key, self.dir.display());
        Ok(())
    }
}
