//! Single-instance application lock
//!
//! A named exclusive lock on a file in the system temp directory. The lock is
//! held for the whole process run: acquired before argument parsing, released
//! on drop and, if the process dies without unwinding, by the operating
//! system at process exit. There are no renewal or heartbeat semantics.

use crate::domain::{DefenderError, Result};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

/// Process-wide named mutual-exclusion resource.
#[derive(Debug)]
pub struct ApplicationLock {
    file: File,
    path: PathBuf,
}

impl ApplicationLock {
    /// Try to acquire the named lock.
    ///
    /// Returns [`DefenderError::AlreadyRunning`] when another process holds
    /// the lock. That condition is fatal for the caller; there is no retry.
    pub fn acquire(name: &str) -> Result<Self> {
        let path = std::env::temp_dir().join(format!("{name}.lock"));
        Self::acquire_at(name, path)
    }

    /// Try to acquire the lock at an explicit path.
    pub fn acquire_at(name: &str, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| {
                DefenderError::Lock(format!(
                    "Failed to open lock file {}: {}",
                    path.display(),
                    e
                ))
            })?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(Self { file, path }),
            Err(e) if e.kind() == fs2::lock_contended_error().kind() => {
                Err(DefenderError::AlreadyRunning(name.to_string()))
            }
            Err(e) => Err(DefenderError::Lock(format!(
                "Failed to lock {}: {}",
                path.display(),
                e
            ))),
        }
    }

    /// Path of the underlying lock file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ApplicationLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}
