//! Preference record persistence.
//!
//! The preference record is the last explicitly chosen [`ThemeMode`], stored
//! as a single small file. Absence of the record means the session follows
//! the OS preference; see [`crate::resolve`].
//!
//! [`PreferenceStore`] abstracts over storage backends so the store and the
//! resolver can be exercised without touching the filesystem.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::mode::ThemeMode;

/// Errors from preference store operations.
#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    /// IO error reading or writing the record.
    #[error("preference store IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for preference operations.
pub type PrefsResult<T> = Result<T, PrefsError>;

/// Trait for preference storage backends.
pub trait PreferenceStore {
    /// Reads the stored record. `Ok(None)` when no record exists.
    fn load(&self) -> PrefsResult<Option<ThemeMode>>;

    /// Writes the record, replacing any previous one.
    fn store(&mut self, mode: ThemeMode) -> PrefsResult<()>;

    /// Removes the record. Removing an absent record is not an error.
    fn clear(&mut self) -> PrefsResult<()>;
}

/// File-based preference store.
///
/// The record is the mode's string form (`light` or `dark`) in a file at an
/// explicit path. A missing file reads as no record; unrecognized contents
/// are logged and also read as no record, so a corrupt file degrades to
/// following the OS preference instead of failing startup.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferences {
    fn load(&self) -> PrefsResult<Option<ThemeMode>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match content.trim().parse::<ThemeMode>() {
            Ok(mode) => Ok(Some(mode)),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "ignoring unrecognized theme preference");
                Ok(None)
            }
        }
    }

    fn store(&mut self, mode: ThemeMode) -> PrefsResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, mode.as_str())?;
        Ok(())
    }

    fn clear(&mut self) -> PrefsResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory preference store for tests and storage-less sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    record: Option<ThemeMode>,
}

impl MemoryPreferences {
    /// Creates an empty store (no record).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds a record.
    pub fn with_record(mode: ThemeMode) -> Self {
        Self { record: Some(mode) }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self) -> PrefsResult<Option<ThemeMode>> {
        Ok(self.record)
    }

    fn store(&mut self, mode: ThemeMode) -> PrefsResult<()> {
        self.record = Some(mode);
        Ok(())
    }

    fn clear(&mut self) -> PrefsResult<()> {
        self.record = None;
        Ok(())
    }
}
