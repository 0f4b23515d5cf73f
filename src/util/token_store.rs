//! Single-slot credential storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session core owns exactly one durable value: the backend credential.
//! `LocalStorageTokenStore` keeps it in browser `localStorage` so it survives
//! reloads; `MemoryTokenStore` backs SSR and tests.
//!
//! There is a single logical writer (the session core), so no locking is
//! done and nothing beyond one string value is persisted.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Failure to persist a credential.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("browser storage rejected the write: {0}")]
    Rejected(String),
}

/// Durable storage for one opaque credential string.
pub trait TokenStore {
    /// Persist `credential`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing storage refuses the write.
    fn save(&self, credential: &str) -> Result<(), StorageError>;

    /// Return the stored credential, or `None` when the slot is empty or
    /// storage cannot be read.
    fn load(&self) -> Option<String>;

    /// Remove the stored credential. Clearing an empty slot is a no-op.
    fn clear(&self);
}

/// Credential slot in `window.localStorage` under a fixed key.
///
/// Outside the `hydrate` feature there is no browser, so the slot always
/// reads as empty and writes report [`StorageError::Unavailable`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[cfg(feature = "hydrate")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn save(&self, credential: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = Self::storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(&self.key, credential)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credential;
            Err(StorageError::Unavailable)
        }
    }

    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?.get_item(&self.key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::storage() {
                let _ = storage.remove_item(&self.key);
            }
        }
    }
}

/// In-memory credential slot. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
    reject_writes: bool,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `credential`.
    #[must_use]
    pub fn with_credential(credential: impl Into<String>) -> Self {
        let store = Self::new();
        *store.slot.borrow_mut() = Some(credential.into());
        store
    }

    /// Store that refuses every write, like a browser with storage disabled.
    #[must_use]
    pub fn read_only(credential: Option<String>) -> Self {
        Self { slot: Rc::new(RefCell::new(credential)), reject_writes: true }
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, credential: &str) -> Result<(), StorageError> {
        if self.reject_writes {
            return Err(StorageError::Rejected("read-only store".to_owned()));
        }
        *self.slot.borrow_mut() = Some(credential.to_owned());
        Ok(())
    }

    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}
