use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use super::error::StoreError;
use super::value::StoredValue;
use super::KeyValueStore;

#[derive(Default)]
struct Inner {
    entries: HashMap<String, StoredValue>,
    writes: HashMap<String, usize>,
}

/// In-process store. Clones share the same entries.
///
/// Counts writes per key so callers can observe when persistence happens.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls made for `key`.
    pub fn writes_for(&self, key: &str) -> usize {
        self.inner.lock().writes.get(key).copied().unwrap_or(0)
    }

    /// Number of `set` calls made for any key.
    pub fn write_count(&self) -> usize {
        self.inner.lock().writes.values().sum()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<StoredValue>, StoreError> {
        Ok(self.inner.lock().entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: StoredValue) -> Result<(), StoreError> {
        let mut inner = self.inner.lock();
        inner.entries.insert(key.to_string(), value);
        *inner.writes.entry(key.to_string()).or_insert(0) += 1;
        Ok(())
    }
}
