use crate::error::StoreError;
use std::ffi::OsString;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// `decisions.json` -> `decisions.json.lock`, next to the target.
fn lock_path_for(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".lock");
    target.with_file_name(name)
}

/// Held write lock on one document.
///
/// The lock file doubles as the staging file: the new document is written
/// into it and renamed over the target on [`commit`](Lockfile::commit).
/// Until that rename succeeds the target is untouched, and dropping the
/// guard (including after a failed commit) deletes the lock file so the
/// next writer can proceed.
pub struct Lockfile {
    target: PathBuf,
    lock_path: PathBuf,
    file: fs::File,
    released: bool,
}

impl Lockfile {
    pub fn acquire(target: impl AsRef<Path>) -> Result<Self, StoreError> {
        let target = target.as_ref().to_path_buf();
        let lock_path = lock_path_for(&target);

        let file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&lock_path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => {
                    StoreError::LockConflict(lock_path.display().to_string())
                }
                // No parent creation: a vanished workspace directory is reported, not recreated.
                ErrorKind::NotFound => StoreError::Unavailable(format!(
                    "{} does not exist",
                    lock_path.parent().unwrap_or(&lock_path).display()
                )),
                _ => StoreError::Io(e),
            })?;

        Ok(Self {
            target,
            lock_path,
            file,
            released: false,
        })
    }

    pub fn lock_path(&self) -> &Path {
        &self.lock_path
    }

    pub fn write_all(&mut self, data: &[u8]) -> Result<(), StoreError> {
        self.file.write_all(data)?;
        self.file.flush()?;
        Ok(())
    }

    /// Flush to disk and move the staged document onto the target.
    ///
    /// On error the lock file is removed when `self` drops.
    pub fn commit(mut self) -> Result<(), StoreError> {
        self.file.sync_all()?;
        fs::rename(&self.lock_path, &self.target)?;
        self.released = true;
        Ok(())
    }
}

impl Drop for Lockfile {
    fn drop(&mut self) {
        if !self.released {
            if let Err(e) = fs::remove_file(&self.lock_path) {
                tracing::warn!(lock = %self.lock_path.display(), error = %e, "could not remove lock file");
            }
        }
    }
}
