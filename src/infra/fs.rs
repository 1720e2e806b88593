//! JSON file I/O with atomic writes.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors during persistence of notes, tags and settings.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Creates an appropriate StoreError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => StoreError::PermissionDenied { path: path.into() },
            _ => StoreError::Io {
                path: path.into(),
                source: error,
            },
        }
    }

    /// Returns true when the file simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Creates `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> Result<(), StoreError> {
    std::fs::create_dir_all(dir).map_err(|e| StoreError::CreateDir {
        path: dir.into(),
        source: e,
    })
}

/// Reads and parses a JSON document.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if the file doesn't exist, and
/// `StoreError::Parse` if it is not valid JSON for `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let bytes = std::fs::read(path).map_err(|e| StoreError::from_io(path, e))?;
    // Tolerate a UTF-8 BOM written by other editors.
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(&bytes);
    serde_json::from_slice(bytes).map_err(|e| StoreError::Parse {
        path: path.into(),
        source: e,
    })
}

/// Serializes `value` as pretty JSON and replaces `path` atomically.
///
/// Uses a temporary file in the same directory and an atomic rename, so a
/// crash mid-write leaves the previous file intact.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));

    let mut content = serde_json::to_vec_pretty(value).map_err(|e| StoreError::Serialize {
        path: path.into(),
        source: e,
    })?;
    content.push(b'\n');

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| StoreError::from_io(path, e))?;
    temp.write_all(&content)
        .map_err(|e| StoreError::from_io(path, e))?;

    temp.persist(path).map_err(|e| StoreError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}
