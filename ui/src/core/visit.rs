//! First-visit tracking for the hero intro animation.

use tracing::debug;

use super::storage::PreferenceStore;

/// Record a visit under `key` and report whether it was the first one.
///
/// Storage failures count as "not first" so the full intro never replays
/// on every page because the flag cannot be written.
pub fn register_visit(store: &dyn PreferenceStore, key: &str) -> bool {
    match store.load(key) {
        Ok(Some(_)) => false,
        Ok(None) => {
            if let Err(err) = store.save(key, "true") {
                debug!("could not record first visit: {err}");
            }
            true
        }
        Err(err) => {
            debug!("could not read visit flag: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::{MemoryStore, StorageError};

    struct Broken;

    impl PreferenceStore for Broken {
        fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("test".into()))
        }

        fn save(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("test".into()))
        }
    }

    #[test]
    fn only_the_first_visit_is_first() {
        let store = MemoryStore::default();
        assert!(register_visit(&store, "hasVisited"));
        assert!(!register_visit(&store, "hasVisited"));
        assert_eq!(store.load("hasVisited").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn visit_flag_survives_a_restart() {
        let store = MemoryStore::default();
        register_visit(&store, "hasVisited");

        let restarted = store.clone();
        assert!(!register_visit(&restarted, "hasVisited"));
    }

    #[test]
    fn unreadable_storage_is_not_a_first_visit() {
        assert!(!register_visit(&Broken, "hasVisited"));
    }
}
