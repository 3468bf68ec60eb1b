//! Durable store backed by a single JSON document.

use fs2::FileExt;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::error::StoreError;
use super::value::StoredValue;
use super::KeyValueStore;

/// Key-value store persisted as pretty-printed JSON.
///
/// The whole document is kept in memory and rewritten on every `set`
/// (temp file + rename). An exclusive advisory lock on `<path>.lock` is
/// held for the lifetime of the store so two instances never race on
/// the same file.
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, StoredValue>>,
    _lock: File,
}

impl FileStore {
    /// Open the store at `path`, creating parent directories as needed.
    ///
    /// A missing file opens as an empty store. Entries that do not decode
    /// are skipped; only a document that is not JSON at all is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::WriteError {
                path: path.clone(),
                source,
            })?;
        }

        let lock = acquire_lock(&path)?;
        let entries = read_entries(&path)?;
        tracing::debug!(path = %path.display(), keys = entries.len(), "Opened file store");

        Ok(Self {
            path,
            entries: RwLock::new(entries),
            _lock: lock,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, StoredValue>) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        let write_err = |source| StoreError::WriteError {
            path: self.path.clone(),
            source,
        };

        let mut file = File::create(&tmp).map_err(write_err)?;
        file.write_all(&json).map_err(write_err)?;
        file.flush().map_err(write_err)?;
        drop(file);
        fs::rename(&tmp, &self.path).map_err(write_err)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<StoredValue>, StoreError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: StoredValue) -> Result<(), StoreError> {
        let mut entries = self.entries.write();
        let previous = entries.insert(key.to_string(), value);
        if let Err(err) = self.flush(&entries) {
            // Keep memory in step with what is on disk.
            match previous {
                Some(previous) => entries.insert(key.to_string(), previous),
                None => entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }
}

fn lock_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".lock");
    PathBuf::from(name)
}

fn acquire_lock(path: &Path) -> Result<File, StoreError> {
    let lock_path = lock_path(path);
    let file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(&lock_path)
        .map_err(|source| StoreError::WriteError {
            path: lock_path.clone(),
            source,
        })?;
    file.try_lock_exclusive().map_err(|_| StoreError::Locked {
        path: path.to_path_buf(),
    })?;
    Ok(file)
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, StoredValue>, StoreError> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let content = fs::read(path).map_err(|source| StoreError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    if content.iter().all(u8::is_ascii_whitespace) {
        return Ok(BTreeMap::new());
    }

    let document: BTreeMap<String, serde_json::Value> =
        serde_json::from_slice(&content).map_err(|source| StoreError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;

    // A bad entry costs only its own key.
    let mut entries = BTreeMap::new();
    for (key, raw) in document {
        match serde_json::from_value::<StoredValue>(raw) {
            Ok(value) => {
                entries.insert(key, value);
            }
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "Dropping undecodable store entry");
            }
        }
    }
    Ok(entries)
}
