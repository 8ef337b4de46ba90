//! Key-value storage capability
//!
//! Components never reach for `window.localStorage` directly. They receive a
//! `ProfileStorage` implementation through context, so the same view runs
//! against the browser or, in tests, an in-memory map or no storage at all.

use std::fmt;
use std::str::FromStr;

use wasm_bindgen::JsValue;

/// Error type for storage reads
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// No storage medium in this environment (no window, storage blocked, non-wasm target)
    Unavailable,
    /// The medium exists but the read threw
    Access(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "Storage is not available"),
            Self::Access(msg) => write!(f, "Storage access failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<JsValue> for StorageError {
    fn from(err: JsValue) -> Self {
        let msg = err.as_string().unwrap_or_else(|| format!("{:?}", err));
        Self::Access(msg)
    }
}

/// Read access to a string key-value store
pub trait ProfileStorage {
    /// Read the raw value stored under `key`, `Ok(None)` if the key is absent
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
}

/// Which browser storage area to read from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StorageScope {
    /// Persists across sessions on this device
    #[default]
    Local,
    /// Cleared when the tab closes
    Session,
}

impl StorageScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageScope::Local => "local",
            StorageScope::Session => "session",
        }
    }
}

impl FromStr for StorageScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(StorageScope::Local),
            "session" => Ok(StorageScope::Session),
            other => Err(format!("Unknown storage scope: {}", other)),
        }
    }
}

/// Web Storage API backed by `window.localStorage` or `window.sessionStorage`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserStorage {
    scope: StorageScope,
}

impl BrowserStorage {
    pub fn new(scope: StorageScope) -> Self {
        Self { scope }
    }

    pub fn local() -> Self {
        Self::new(StorageScope::Local)
    }

    #[cfg(test)]
    pub fn session() -> Self {
        Self::new(StorageScope::Session)
    }

    pub fn scope(&self) -> StorageScope {
        self.scope
    }

    /// Resolve the underlying storage area, if this environment has one
    #[cfg(target_arch = "wasm32")]
    fn raw(&self) -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;

        // Accessing a blocked storage area throws, a missing one yields None
        let storage = match self.scope {
            StorageScope::Local => window.local_storage(),
            StorageScope::Session => window.session_storage(),
        };
        match storage {
            Ok(Some(storage)) => Ok(storage),
            _ => Err(StorageError::Unavailable),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn raw(&self) -> Result<web_sys::Storage, StorageError> {
        Err(StorageError::Unavailable)
    }
}

impl Default for BrowserStorage {
    fn default() -> Self {
        Self::local()
    }
}

impl ProfileStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = self.raw()?;
        Ok(storage.get_item(key)?)
    }
}

/// In-process map standing in for browser storage in tests
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding a single entry
    pub fn with_item(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.set_item(key, value);
        storage
    }

    pub fn set_item(&self, key: impl Into<String>, value: impl Into<String>) {
        self.items.borrow_mut().insert(key.into(), value.into());
    }

    pub fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[cfg(test)]
impl ProfileStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }
}

/// Environment without any storage medium (e.g. server-side rendering)
#[cfg(test)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoStorage;

#[cfg(test)]
impl ProfileStorage for NoStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }
}
