//! Session token persistence.
//!
//! The token is an opaque string written by the login flow and read by the
//! dashboard guard. In the browser it lives in `window.localStorage`; native
//! builds keep an equivalent key/value file in the platform data directory.

use std::collections::BTreeMap;
use std::ops::Deref;
use std::rc::Rc;
use std::sync::Mutex;

use dioxus::logger::tracing::warn;
use dioxus::prelude::try_use_context;
use once_cell::sync::Lazy;
use thiserror::Error;

use crate::core::config::config;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable: {0}")]
    Unavailable(String),

    #[error("storage call failed: {0}")]
    Js(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt session file: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Minimal key/value view of client-local persistent storage.
pub trait TokenStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: TokenStore + ?Sized> TokenStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Current session token, if any. Empty strings count as absent.
pub fn session_token(store: &dyn TokenStore) -> Result<Option<String>, StorageError> {
    Ok(store
        .get(config().token_key)?
        .filter(|token| !token.is_empty()))
}

pub fn store_token(store: &dyn TokenStore, token: &str) -> Result<(), StorageError> {
    store.set(config().token_key, token)
}

pub fn sign_out(store: &dyn TokenStore) -> Result<(), StorageError> {
    store.remove(config().token_key)
}

/// In-process store. Used by tests and as the fallback when the platform
/// store cannot be opened.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        store
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("memory store poisoned".into()))
    }
}

impl TokenStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{StorageError, TokenStore};

    /// `window.localStorage`.
    pub struct BrowserStore {
        storage: web_sys::Storage,
    }

    impl BrowserStore {
        pub fn open() -> Result<Self, StorageError> {
            let window = web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("window unavailable".into()))?;
            let storage = window
                .local_storage()
                .map_err(js_error)?
                .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))?;
            Ok(Self { storage })
        }
    }

    impl TokenStore for BrowserStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.storage.get_item(key).map_err(js_error)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage.set_item(key, value).map_err(js_error)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.storage.remove_item(key).map_err(js_error)
        }
    }

    fn js_error(value: wasm_bindgen::JsValue) -> StorageError {
        StorageError::Js(format!("{value:?}"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::{Path, PathBuf};

    use dioxus::logger::tracing::warn;
    use directories::ProjectDirs;

    use super::{StorageError, TokenStore};

    const FILE_NAME: &str = "session.json";

    /// JSON key/value file standing in for local storage on native targets.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn at(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `<data_dir>/session.json` for the current user.
        pub fn in_data_dir() -> Result<Self, StorageError> {
            let dirs = ProjectDirs::from("org", "void", "void").ok_or_else(|| {
                StorageError::Unavailable("no home directory for the current user".into())
            })?;
            Ok(Self::at(dirs.data_dir().join(FILE_NAME)))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
            if !self.path.exists() {
                return Ok(BTreeMap::new());
            }
            let raw = fs::read_to_string(&self.path)?;
            if raw.trim().is_empty() {
                return Ok(BTreeMap::new());
            }
            Ok(serde_json::from_str(&raw)?)
        }

        /// Entries to write back, and whether a corrupt file was discarded
        /// to get them. Writes never fail on a corrupt file.
        fn load_for_write(&self) -> Result<(BTreeMap<String, String>, bool), StorageError> {
            match self.load() {
                Ok(entries) => Ok((entries, false)),
                Err(StorageError::Serialization(err)) => {
                    warn!("discarding corrupt session file {}: {err}", self.path.display());
                    Ok((BTreeMap::new(), true))
                }
                Err(err) => Err(err),
            }
        }

        fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            let raw = serde_json::to_string_pretty(entries)?;
            fs::write(&self.path, raw)?;
            Ok(())
        }
    }

    impl TokenStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.load()?.remove(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let (mut entries, _) = self.load_for_write()?;
            entries.insert(key.to_string(), value.to_string());
            self.save(&entries)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            let (mut entries, reset) = self.load_for_write()?;
            if entries.remove(key).is_some() || reset {
                self.save(&entries)?;
            }
            Ok(())
        }
    }
}

/// Process-wide fallback so a token stored without a platform store still
/// survives until reload.
static FALLBACK: Lazy<MemoryStore> = Lazy::new(MemoryStore::new);

/// Store backing the current platform, falling back to memory when the
/// platform store cannot be opened.
pub fn platform_store() -> Box<dyn TokenStore> {
    #[cfg(target_arch = "wasm32")]
    let opened = BrowserStore::open().map(|s| Box::new(s) as Box<dyn TokenStore>);

    #[cfg(not(target_arch = "wasm32"))]
    let opened = FileStore::in_data_dir().map(|s| Box::new(s) as Box<dyn TokenStore>);

    opened.unwrap_or_else(|err| {
        warn!("session storage unavailable ({err}); using in-memory store");
        Box::new(&*FALLBACK)
    })
}

/// Token store shared through the component tree.
#[derive(Clone)]
pub struct SharedStore(Rc<dyn TokenStore>);

impl SharedStore {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    pub fn platform() -> Self {
        Self(Rc::from(platform_store()))
    }
}

impl Deref for SharedStore {
    type Target = dyn TokenStore;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

/// Store provided by an ancestor (`Root` provides the platform store), or the
/// platform store when rendered outside of `Root`.
pub fn use_token_store() -> SharedStore {
    try_use_context::<SharedStore>().unwrap_or_else(SharedStore::platform)
}
