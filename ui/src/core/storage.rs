//! Durable key/value preferences (selected language, first-visit flag).
//!
//! - Web: browser `localStorage`.
//! - Desktop: a small JSON map in the platform config directory.
//! - Anywhere: an in-memory map, used when durable storage is unavailable.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::warn;

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("preference storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to access preference file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed preference file: {0}")]
    Format(#[from] serde_json::Error),
}

pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Open the durable store for the current platform, or an in-memory one if
/// that fails. Never fails itself.
pub fn open_default_store() -> Rc<dyn PreferenceStore> {
    match open_platform_store() {
        Ok(store) => store,
        Err(err) => {
            warn!("{err}; preferences will not survive a restart");
            Rc::new(MemoryStore::default())
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn open_platform_store() -> Result<Rc<dyn PreferenceStore>, StorageError> {
    Ok(Rc::new(LocalStorage::open()?))
}

#[cfg(not(target_arch = "wasm32"))]
fn open_platform_store() -> Result<Rc<dyn PreferenceStore>, StorageError> {
    Ok(Rc::new(FileStore::in_config_dir()?))
}

/// Shared in-memory map. Clones see the same entries, which lets tests
/// "restart" a consumer against the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(describe_js_error)?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".into()))?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(describe_js_error)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(describe_js_error)
    }
}

#[cfg(target_arch = "wasm32")]
fn describe_js_error(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Unavailable(
        err.as_string()
            .unwrap_or_else(|| "localStorage access was rejected".to_string()),
    )
}

/// Preferences persisted as a flat JSON object on disk.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    const FILE_NAME: &'static str = "preferences.json";

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_config_dir() -> Result<Self, StorageError> {
        let dirs = directories::ProjectDirs::from("com", "MedCare", "medcare").ok_or_else(|| {
            StorageError::Unavailable("no home directory for this user".into())
        })?;
        Ok(Self::at(dirs.config_dir().join(Self::FILE_NAME)))
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    /// A malformed file is replaced rather than blocking every later write.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(StorageError::Format(err)) => {
                warn!(path = %self.path.display(), "discarding malformed preference file: {err}");
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        entries.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_clones_share_entries() {
        let store = MemoryStore::default();
        let other = store.clone();
        store.save("language", "uk").unwrap();
        assert_eq!(other.load("language").unwrap().as_deref(), Some("uk"));
        assert_eq!(other.load("missing").unwrap(), None);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        FileStore::at(&path).save("language", "ru").unwrap();
        FileStore::at(&path).save("hasVisited", "true").unwrap();

        let reopened = FileStore::at(&path);
        assert_eq!(reopened.load("language").unwrap().as_deref(), Some("ru"));
        assert_eq!(reopened.load("hasVisited").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn file_store_treats_missing_file_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::at(dir.path().join("absent.json"));
        assert_eq!(store.load("language").unwrap(), None);
    }

    #[test]
    fn file_store_reports_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "not json").unwrap();

        let err = FileStore::at(&path).load("language").unwrap_err();
        assert!(matches!(err, StorageError::Format(_)));
    }

    #[test]
    fn file_store_write_replaces_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, r#"{"language": "uk","#).unwrap();

        FileStore::at(&path).save("language", "ru").unwrap();
        assert_eq!(FileStore::at(&path).load("language").unwrap().as_deref(), Some("ru"));
    }
}
