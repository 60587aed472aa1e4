//! File-backed key-value store.
//!
//! Each key lives in its own file under a root directory. Writes go through a
//! temporary file that is fsynced and renamed over the target, under an
//! exclusive lock file, so a failed or interrupted write never leaves a
//! half-written value behind.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write as IoWrite};
use std::path::{Path, PathBuf};

use recipes_core::error::{RecipeError, Result};
use recipes_core::storage::KeyValueStore;

const VALUE_EXTENSION: &str = "value";

/// A [`KeyValueStore`] persisting one file per key.
///
/// Provides:
/// - **Atomicity**: `set_item` is all-or-nothing via tmp file + atomic rename
/// - **Isolation**: an exclusive lock file serializes writers across processes
/// - **Durability**: explicit fsync before rename
/// - **Quota**: values larger than the configured limit are rejected up front
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
    quota_bytes: Option<usize>,
}

impl FileKeyValueStore {
    /// Creates a store rooted at `root`, without a quota.
    ///
    /// The directory is created lazily on the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            quota_bytes: None,
        }
    }

    /// Rejects values larger than `quota_bytes`.
    pub fn with_quota(mut self, quota_bytes: usize) -> Self {
        self.quota_bytes = Some(quota_bytes);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", sanitize_key(key), VALUE_EXTENSION))
    }

    fn check_quota(&self, key: &str, value: &str) -> Result<()> {
        match self.quota_bytes {
            Some(limit) if value.len() > limit => Err(RecipeError::QuotaExceeded {
                key: key.to_string(),
                size: value.len(),
                limit,
            }),
            _ => Ok(()),
        }
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.check_quota(key, value)?;
        self.ensure_root()?;

        let path = self.path_for(key);
        let _lock = FileLock::acquire(&path)?;

        let tmp_path = temp_path(&path)?;
        let written = write_synced(&tmp_path, value);
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }
        fs::rename(&tmp_path, &path)?;

        tracing::debug!("Stored {} bytes under '{}'", value.len(), key);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(());
        }
        let _lock = FileLock::acquire(&path)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!("Removed '{}'", key);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Maps an arbitrary key to a portable file stem.
///
/// ASCII alphanumerics plus `-` and `_` pass through; every other byte is
/// percent-encoded, so distinct keys never share a file.
fn sanitize_key(key: &str) -> String {
    let mut stem = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            stem.push(byte as char);
        } else {
            stem.push_str(&format!("%{:02X}", byte));
        }
    }
    if stem.is_empty() {
        stem.push('%');
    }
    stem
}

fn temp_path(path: &Path) -> Result<PathBuf> {
    let parent = path
        .parent()
        .ok_or_else(|| RecipeError::io("Path has no parent directory"))?;
    let file_name = path
        .file_name()
        .ok_or_else(|| RecipeError::io("Path has no file name"))?;
    Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
}

fn write_synced(path: &Path, value: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(value.as_bytes())?;
    file.sync_all()?;
    Ok(())
}

/// Exclusive lock guard, released and removed on drop.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| RecipeError::storage(format!("Failed to acquire lock: {}", e)))?;
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
    }
}
