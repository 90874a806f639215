//! Unified path management for wardrobe files.
//!
//! ```text
//! ~/.config/wardrobe/          # Config directory
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/wardrobe/     # Data directory
//! └── storage/                 # One JSON document per snapshot key
//!     ├── wardrobe_clothes.json
//!     ├── wardrobe_outfits.json
//!     ├── wardrobe_likedOutfits.json
//!     └── wardrobe_weather.json
//! ```

use std::path::PathBuf;

use wardrobe_core::config::WardrobeConfig;

const APP_DIR: &str = "wardrobe";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// The platform directory could not be determined.
    DirNotFound(&'static str),
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::DirNotFound(kind) => write!(f, "Cannot find {} directory", kind),
        }
    }
}

impl std::error::Error for PathError {}

/// Platform paths for the wardrobe app (XDG on Linux, the native layout
/// elsewhere).
pub struct WardrobePaths;

impl WardrobePaths {
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::DirNotFound("config"))
    }

    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::DirNotFound("data"))
    }

    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Default directory for snapshot files.
    pub fn storage_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("storage"))
    }

    /// Snapshot directory honoring the `storage.data_dir` override.
    pub fn resolve_storage_dir(config: &WardrobeConfig) -> Result<PathBuf, PathError> {
        match &config.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Self::storage_dir(),
        }
    }
}
