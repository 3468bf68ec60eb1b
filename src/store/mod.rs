//! Flat key-value persistence for the ticket screen.
//!
//! ```text
//! TicketController ──→ PersistenceAdapter ──→ dyn KeyValueStore
//!                                              ├─ FileStore   (JSON on disk)
//!                                              └─ MemoryStore (in-process)
//! ```

mod adapter;
mod error;
mod file;
mod memory;
mod value;

pub use adapter::{
    PersistError, PersistenceAdapter, StoredFields, DESTINATION_KEY, ORIGIN_KEY,
    PROFILE_IMAGE_KEY, USER_NAME_KEY,
};
pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use value::StoredValue;

/// String-keyed store of text and byte values.
///
/// Unordered, no transactions. Writes apply immediately; how soon they
/// become durable is up to the implementation.
pub trait KeyValueStore: Send + Sync {
    /// `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<StoredValue>, StoreError>;

    fn set(&self, key: &str, value: StoredValue) -> Result<(), StoreError>;
}
