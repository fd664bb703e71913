//! Loading and saving the note collection with atomic writes.

pub mod codec;

use crate::domain::Note;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Default location of the save file, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = "data/notes.bin";

/// Errors while loading or saving the note store.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The save file exists but could not be decoded. Surfaced instead of
    /// silently starting empty, so the host can warn before overwriting.
    #[error("corrupt note store at {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode note store: {source}")]
    Encode {
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

/// Reads the note collection from `path`.
///
/// A missing file is not an error; it means no notes have been saved yet.
///
/// # Errors
///
/// Returns `PersistError::Corrupt` if the file exists but cannot be decoded,
/// and `PersistError::Io` for any other read failure.
pub fn load(path: &Path) -> Result<Vec<Note>, PersistError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(PersistError::Io {
                path: path.into(),
                source: e,
            });
        }
    };
    codec::decode(&bytes).map_err(|e| PersistError::Corrupt {
        path: path.into(),
        reason: e.to_string(),
    })
}

/// Writes the note collection to `path`, creating the containing directory
/// if absent.
///
/// Uses a temporary file and atomic rename so a failed save never truncates
/// an existing store.
///
/// # Errors
///
/// Returns `PersistError::Io` if the directory cannot be created or the
/// temporary file cannot be written, and `PersistError::AtomicWrite` if the
/// final rename fails.
pub fn save(path: &Path, notes: &[Note]) -> Result<(), PersistError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|e| PersistError::Io {
        path: parent.into(),
        source: e,
    })?;

    let bytes = codec::encode(notes).map_err(|e| PersistError::Encode { source: e })?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| PersistError::Io {
        path: path.into(),
        source: e,
    })?;
    temp.write_all(&bytes).map_err(|e| PersistError::Io {
        path: path.into(),
        source: e,
    })?;
    temp.persist(path).map_err(|e| PersistError::AtomicWrite {
        path: path.into(),
        source: e.error,
    })?;

    Ok(())
}
