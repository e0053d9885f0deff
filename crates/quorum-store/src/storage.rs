//! Key-value storage backends.
//!
//! A backend maps string keys to whole JSON documents. Writes go through a
//! [`PendingWrite`] obtained *before* the caller reads, so the backend can
//! hold exclusive access across a read-modify-write.

use crate::error::StoreError;
use crate::lockfile::Lockfile;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

pub trait Storage {
    /// Read the document stored under `key`, `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Take exclusive write access to `key` until the returned handle is
    /// committed or dropped.
    fn begin_write(&self, key: &str) -> Result<Box<dyn PendingWrite + '_>, StoreError>;
}

/// Exclusive access to one key. Dropping without committing leaves the
/// stored document unchanged.
pub trait PendingWrite {
    fn commit(self: Box<Self>, value: &str) -> Result<(), StoreError>;
}

/// Reject keys that could escape the storage directory.
fn validate_key(key: &str) -> Result<(), StoreError> {
    let bad = key.is_empty()
        || key.starts_with('.')
        || key.contains('\0')
        || key.contains('/')
        || key.contains('\\');
    if bad {
        return Err(StoreError::InvalidKey(key.replace('\0', "\\0")));
    }
    Ok(())
}

/// Storage backed by a directory: key `k` lives in `<dir>/k.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        validate_key(key)?;
        if !self.dir.is_dir() {
            return Err(StoreError::Unavailable(format!(
                "{} is not a directory",
                self.dir.display()
            )));
        }
        match fs::read_to_string(self.path_for(key)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn begin_write(&self, key: &str) -> Result<Box<dyn PendingWrite + '_>, StoreError> {
        validate_key(key)?;
        let lock = Lockfile::acquire(self.path_for(key))?;
        tracing::trace!(lock = %lock.lock_path().display(), "acquired lock");
        Ok(Box::new(lock))
    }
}

impl PendingWrite for Lockfile {
    fn commit(self: Box<Self>, value: &str) -> Result<(), StoreError> {
        let mut lock = *self;
        lock.write_all(value.as_bytes())?;
        lock.commit()
    }
}

/// In-process storage with the same locking behaviour as [`FileStorage`].
///
/// Can be built unavailable to model running without any persistent storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    held: RefCell<HashSet<String>>,
    writes: Cell<usize>,
    unavailable: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend on which every operation fails with [`StoreError::Unavailable`].
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Number of committed writes so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Replace a document directly, bypassing locks.
    pub fn insert(&self, key: &str, value: impl Into<String>) {
        self.entries.borrow_mut().insert(key.to_string(), value.into());
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable("memory storage disabled".into()));
        }
        Ok(())
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check_available()?;
        validate_key(key)?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn begin_write(&self, key: &str) -> Result<Box<dyn PendingWrite + '_>, StoreError> {
        self.check_available()?;
        validate_key(key)?;
        if !self.held.borrow_mut().insert(key.to_string()) {
            return Err(StoreError::LockConflict(key.to_string()));
        }
        Ok(Box::new(MemoryWrite {
            storage: self,
            key: key.to_string(),
        }))
    }
}

struct MemoryWrite<'a> {
    storage: &'a MemoryStorage,
    key: String,
}

impl PendingWrite for MemoryWrite<'_> {
    fn commit(self: Box<Self>, value: &str) -> Result<(), StoreError> {
        self.storage
            .entries
            .borrow_mut()
            .insert(self.key.clone(), value.to_string());
        self.storage.writes.set(self.storage.writes.get() + 1);
        Ok(())
    }
}

impl Drop for MemoryWrite<'_> {
    fn drop(&mut self) {
        self.storage.held.borrow_mut().remove(&self.key);
    }
}
