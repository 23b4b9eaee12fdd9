//! Session persistence layer for atomic file-based storage.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::{SessionState, SESSION_STATE_VERSION};
use crate::error::{LifePathError, Result};

/// Default session file name.
const SESSION_FILE: &str = "session.json";

/// Temporary file suffix for atomic writes.
const TMP_SUFFIX: &str = ".tmp";

/// Lock file suffix for concurrent access prevention.
const LOCK_SUFFIX: &str = ".lock";

/// Session store providing atomic file operations.
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// Directory where session files are stored.
    dir: PathBuf,
}

impl SessionStore {
    /// Creates a new session store rooted at the given directory.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the path to the session file.
    #[must_use]
    pub fn session_file_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    /// Returns the path to the temporary session file.
    #[must_use]
    pub fn tmp_file_path(&self) -> PathBuf {
        self.dir.join(format!("{SESSION_FILE}{TMP_SUFFIX}"))
    }

    /// Returns the path to the lock file.
    #[must_use]
    pub fn lock_file_path(&self) -> PathBuf {
        self.dir.join(format!("{SESSION_FILE}{LOCK_SUFFIX}"))
    }

    /// Saves session state atomically.
    ///
    /// Writes to a temp file, syncs, then renames over the session file
    /// under an exclusive advisory lock, so a crash mid-save never leaves
    /// a half-written session behind.
    pub fn save(&self, state: &SessionState) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let lock_file = File::create(self.lock_file_path())?;
        FileExt::lock_exclusive(&lock_file)
            .map_err(|e| LifePathError::session(format!("failed to acquire session lock: {e}")))?;

        let tmp_path = self.tmp_file_path();
        let json = serde_json::to_string_pretty(state)?;

        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.sync_all()?;

        fs::rename(&tmp_path, self.session_file_path())?;

        tracing::debug!(path = %self.session_file_path().display(), "session saved");
        Ok(())
    }

    /// Loads session state from file.
    ///
    /// # Errors
    ///
    /// - [`LifePathError::SessionNotFound`] when no session exists yet
    /// - [`LifePathError::Session`] for an unreadable or incompatible file
    /// - [`LifePathError::CorruptRoadmap`] when the stored stage list
    ///   violates the ordering invariant
    pub fn load(&self) -> Result<SessionState> {
        let session_path = self.session_file_path();

        if !session_path.exists() {
            return Err(LifePathError::SessionNotFound { path: session_path });
        }

        let lock_path = self.lock_file_path();
        if lock_path.exists() {
            let lock_file = File::open(&lock_path)?;
            FileExt::lock_shared(&lock_file).map_err(|e| {
                LifePathError::session(format!("failed to acquire session lock: {e}"))
            })?;
        }

        let mut file = File::open(&session_path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let state: SessionState = serde_json::from_str(&contents).map_err(|e| {
            LifePathError::session(format!(
                "unreadable session file at {}: {e}",
                session_path.display()
            ))
        })?;

        if state.version != SESSION_STATE_VERSION {
            return Err(LifePathError::session(format!(
                "session version {} is not supported (expected {})",
                state.version, SESSION_STATE_VERSION
            )));
        }

        state.validate()?;
        Ok(state)
    }

    /// Deletes the session file if it exists.
    pub fn delete(&self) -> Result<()> {
        let session_path = self.session_file_path();
        if session_path.exists() {
            fs::remove_file(&session_path)?;
        }
        Ok(())
    }

    /// Checks if a session file exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.session_file_path().exists()
    }
}
