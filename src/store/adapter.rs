//! Typed access to the four persisted ticket fields.

use std::sync::Arc;
use thiserror::Error;

use super::error::StoreError;
use super::value::StoredValue;
use super::KeyValueStore;
use crate::profile_image::ProfileImage;

pub const PROFILE_IMAGE_KEY: &str = "profileImage";
pub const USER_NAME_KEY: &str = "userName";
/// Origin is stored under its historical key name.
pub const ORIGIN_KEY: &str = "location";
pub const DESTINATION_KEY: &str = "destination";

/// Errors from a save. Loads never fail; they yield absent instead.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Failed to encode profile image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Every persisted field as read from the store. `None` means absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoredFields {
    pub profile_image: Option<ProfileImage>,
    pub user_name: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
}

/// Maps ticket fields onto fixed keys of a [`KeyValueStore`].
#[derive(Clone)]
pub struct PersistenceAdapter {
    store: Arc<dyn KeyValueStore>,
}

impl PersistenceAdapter {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn load_all(&self) -> StoredFields {
        StoredFields {
            profile_image: self.load_profile_image(),
            user_name: self.load_user_name(),
            origin: self.load_origin(),
            destination: self.load_destination(),
        }
    }

    /// Undecodable bytes are treated as no image.
    pub fn load_profile_image(&self) -> Option<ProfileImage> {
        let bytes = match self.load(PROFILE_IMAGE_KEY)? {
            StoredValue::Bytes(bytes) => bytes,
            other => {
                warn_kind(PROFILE_IMAGE_KEY, "bytes", &other);
                return None;
            }
        };
        match ProfileImage::decode(&bytes) {
            Ok(image) => Some(image),
            Err(err) => {
                tracing::warn!(key = PROFILE_IMAGE_KEY, error = %err, "Stored profile image is unreadable");
                None
            }
        }
    }

    /// Encodes as PNG. `None` writes nothing.
    pub fn save_profile_image(&self, image: Option<&ProfileImage>) -> Result<(), PersistError> {
        let Some(image) = image else {
            return Ok(());
        };
        let bytes = image.encode_png()?;
        self.save(PROFILE_IMAGE_KEY, StoredValue::Bytes(bytes))
    }

    pub fn load_user_name(&self) -> Option<String> {
        self.load_text(USER_NAME_KEY)
    }

    pub fn save_user_name(&self, name: &str) -> Result<(), PersistError> {
        self.save_text(USER_NAME_KEY, name)
    }

    pub fn load_origin(&self) -> Option<String> {
        self.load_text(ORIGIN_KEY)
    }

    pub fn save_origin(&self, origin: &str) -> Result<(), PersistError> {
        self.save_text(ORIGIN_KEY, origin)
    }

    pub fn load_destination(&self) -> Option<String> {
        self.load_text(DESTINATION_KEY)
    }

    pub fn save_destination(&self, destination: &str) -> Result<(), PersistError> {
        self.save_text(DESTINATION_KEY, destination)
    }

    fn load_text(&self, key: &str) -> Option<String> {
        match self.load(key)? {
            StoredValue::Text(text) => Some(text),
            other => {
                warn_kind(key, "text", &other);
                None
            }
        }
    }

    fn save_text(&self, key: &str, text: &str) -> Result<(), PersistError> {
        self.save(key, StoredValue::Text(text.to_string()))
    }

    fn load(&self, key: &str) -> Option<StoredValue> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "Failed to load stored field");
                None
            }
        }
    }

    fn save(&self, key: &str, value: StoredValue) -> Result<(), PersistError> {
        self.store.set(key, value)?;
        tracing::trace!(key, "Saved field");
        Ok(())
    }
}

fn warn_kind(key: &str, expected: &str, found: &StoredValue) {
    tracing::warn!(
        key,
        expected,
        found = found.kind(),
        "Stored field has unexpected type"
    );
}
