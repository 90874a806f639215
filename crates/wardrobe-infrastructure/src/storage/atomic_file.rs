//! Atomic file operations with ACID guarantees.
//!
//! Provides a thin layer for safe concurrent access to small text files:
//! snapshot documents and the config file.

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use wardrobe_core::WardrobeError;

/// Errors that can occur during atomic file operations.
#[derive(Debug)]
pub enum AtomicFileError {
    /// File I/O error.
    IoError(std::io::Error),
    /// File locking error.
    LockError(String),
    /// The file contents could not be parsed or produced.
    FormatError { format: &'static str, message: String },
    /// The target path cannot be written atomically.
    InvalidPath(PathBuf),
}

impl std::fmt::Display for AtomicFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomicFileError::IoError(e) => write!(f, "I/O error: {}", e),
            AtomicFileError::LockError(e) => write!(f, "Lock error: {}", e),
            AtomicFileError::FormatError { format, message } => {
                write!(f, "{} format error: {}", format, message)
            }
            AtomicFileError::InvalidPath(path) => {
                write!(f, "Invalid file path: {}", path.display())
            }
        }
    }
}

impl std::error::Error for AtomicFileError {}

impl From<std::io::Error> for AtomicFileError {
    fn from(e: std::io::Error) -> Self {
        AtomicFileError::IoError(e)
    }
}

impl From<toml::de::Error> for AtomicFileError {
    fn from(e: toml::de::Error) -> Self {
        AtomicFileError::FormatError {
            format: "TOML",
            message: e.to_string(),
        }
    }
}

impl From<toml::ser::Error> for AtomicFileError {
    fn from(e: toml::ser::Error) -> Self {
        AtomicFileError::FormatError {
            format: "TOML",
            message: e.to_string(),
        }
    }
}

impl From<AtomicFileError> for WardrobeError {
    fn from(e: AtomicFileError) -> Self {
        match e {
            AtomicFileError::IoError(e) => WardrobeError::from(e),
            AtomicFileError::FormatError { format, message } => WardrobeError::Serialization {
                format: format.to_string(),
                message,
            },
            other => WardrobeError::storage(other.to_string()),
        }
    }
}

/// A handle to a text file that is only ever replaced whole.
///
/// Provides:
/// - **Atomicity**: Writes go to a tmp file that is renamed over the target
/// - **Isolation**: An exclusive lock on `<name>.lock` serializes writers
/// - **Durability**: Explicit fsync before rename
#[derive(Debug, Clone)]
pub struct AtomicFile {
    path: PathBuf,
}

impl AtomicFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file contents.
    ///
    /// Returns `Ok(None)` when the file doesn't exist or is blank.
    pub fn read(&self) -> Result<Option<String>, AtomicFileError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(content))
    }

    /// Replaces the file contents under the exclusive lock.
    ///
    /// # Arguments
    ///
    /// * `content` - The complete new contents
    ///
    /// # Returns
    ///
    /// - `Ok(())`: The new contents are durable
    /// - `Err`: Failed to lock, write, sync, or rename
    pub fn write(&self, content: &str) -> Result<(), AtomicFileError> {
        let _lock = self.acquire_lock()?;
        self.write_unlocked(content)
    }

    /// Read-modify-write under the exclusive lock.
    ///
    /// `f` receives the current contents (`None` if absent) and returns the
    /// replacement, or `None` to leave the file untouched. No other writer
    /// can interleave between the read and the write.
    pub fn update<F>(&self, f: F) -> Result<(), AtomicFileError>
    where
        F: FnOnce(Option<String>) -> Result<Option<String>, AtomicFileError>,
    {
        let _lock = self.acquire_lock()?;

        let current = self.read()?;
        if let Some(next) = f(current)? {
            self.write_unlocked(&next)?;
        }

        Ok(())
    }

    fn write_unlocked(&self, content: &str) -> Result<(), AtomicFileError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write to temporary file in the same directory
        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(content.as_bytes())?;

        // Ensure data is written to disk
        tmp_file.sync_all()?;
        drop(tmp_file);

        // Atomic rename
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf, AtomicFileError> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| AtomicFileError::InvalidPath(self.path.clone()))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| AtomicFileError::InvalidPath(self.path.clone()))?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(parent.join(tmp_name))
    }

    fn acquire_lock(&self) -> Result<FileLock, AtomicFileError> {
        FileLock::acquire(&self.path)
    }
}

/// A file lock guard that releases the lock when dropped.
///
/// The lock file is left in place: unlinking it would let a waiter hold a
/// lock on the orphaned inode while a newcomer locks a fresh file.
struct FileLock {
    #[cfg_attr(not(unix), allow(dead_code))]
    file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, AtomicFileError> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| AtomicFileError::LockError(format!("Failed to acquire lock: {}", e)))?;
        }

        Ok(FileLock { file })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        #[cfg(unix)]
        {
            use fs2::FileExt;
            let _ = self.file.unlock();
        }
    }
}
