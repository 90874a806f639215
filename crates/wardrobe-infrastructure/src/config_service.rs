//! Configuration service.
//!
//! Loads [`WardrobeConfig`] from the configuration file
//! (`~/.config/wardrobe/config.toml`).

use std::path::{Path, PathBuf};

use wardrobe_core::config::WardrobeConfig;
use wardrobe_core::{Result, WardrobeError};

use crate::paths::WardrobePaths;
use crate::storage::{AtomicFile, AtomicFileError};

#[derive(Debug, Clone)]
pub struct ConfigService {
    file: AtomicFile,
}

impl ConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::new(path),
        }
    }

    /// Service for the platform config file.
    pub fn open_default() -> Result<Self> {
        let path = WardrobePaths::config_file().map_err(|e| WardrobeError::config(e.to_string()))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Loads the config. A missing or blank file yields the defaults.
    pub fn load(&self) -> Result<WardrobeConfig> {
        match self.file.read()? {
            Some(content) => Ok(toml::from_str(&content)?),
            None => Ok(WardrobeConfig::default()),
        }
    }

    /// Like [`load`](Self::load), but a malformed file also yields the
    /// defaults.
    ///
    /// Every setting in the file is dropped, including `storage.data_dir`,
    /// so the snapshots then come from the platform data directory.
    pub fn load_or_default(&self) -> WardrobeConfig {
        self.load().unwrap_or_else(|e| {
            tracing::warn!(
                "Ignoring config at {} (all settings including storage.data_dir fall back to defaults): {}",
                self.file.path().display(),
                e
            );
            WardrobeConfig::default()
        })
    }

    pub fn save(&self, config: &WardrobeConfig) -> Result<()> {
        let content = toml::to_string_pretty(config)?;
        self.file.write(&content)?;
        Ok(())
    }

    /// Applies `f` to the stored config and writes the result back.
    ///
    /// The read, the change, and the write happen under the file lock, so
    /// concurrent updates never lose each other's changes. A malformed file
    /// is left untouched and reported as an error.
    ///
    /// # Returns
    ///
    /// - `Ok(WardrobeConfig)`: The config as written
    /// - `Err`: Failed to lock, parse, serialize, or write
    pub fn update<F>(&self, f: F) -> Result<WardrobeConfig>
    where
        F: FnOnce(&mut WardrobeConfig),
    {
        let mut updated = None;
        self.file.update(|current| {
            let mut config = match current {
                Some(content) => toml::from_str(&content)?,
                None => WardrobeConfig::default(),
            };
            f(&mut config);
            let content = toml::to_string_pretty(&config)?;
            updated = Some(config);
            Ok::<_, AtomicFileError>(Some(content))
        })?;
        Ok(updated.unwrap_or_default())
    }
}
