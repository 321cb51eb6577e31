use super::{load_json, save_json, StorageError};
use crate::models::NewTabPageIntroDataStoring;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// New Tab Page preferences (persisted to JSON file)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Preferences {
    /// `None` until the app decides whether to onboard this user
    #[serde(default)]
    pub new_tab_page_intro_message_enabled: Option<bool>,
}

pub struct PreferencesStorage {
    path: PathBuf,
    prefs: RwLock<Preferences>,
    /// Last error that occurred (for surfacing to UI)
    last_error: RwLock<Option<StorageError>>,
}

impl PreferencesStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let (prefs, last_error) = load_json(&path);
        Self {
            path,
            prefs: RwLock::new(prefs),
            last_error: RwLock::new(last_error),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn prefs(&self) -> Preferences {
        self.prefs.read().clone()
    }

    pub fn last_error(&self) -> Option<StorageError> {
        self.last_error.read().clone()
    }

    fn update(&self, apply: impl FnOnce(&mut Preferences)) {
        let mut prefs = self.prefs.write();
        apply(&mut prefs);
        let result = save_json(&self.path, &*prefs);
        drop(prefs);

        if let Err(e) = &result {
            tracing::error!("Failed to save preferences: {}", e);
        }
        *self.last_error.write() = result.err();
    }
}

impl NewTabPageIntroDataStoring for PreferencesStorage {
    fn intro_message_enabled(&self) -> bool {
        self.prefs
            .read()
            .new_tab_page_intro_message_enabled
            .unwrap_or(false)
    }

    fn set_intro_message_enabled(&self, enabled: bool) {
        self.update(|prefs| prefs.new_tab_page_intro_message_enabled = Some(enabled));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_unset_reads_false() {
        let dir = tempfile::tempdir().unwrap();
        let storage = PreferencesStorage::new(dir.path().join("prefs.json"));

        assert!(!storage.intro_message_enabled());
        assert_eq!(storage.prefs().new_tab_page_intro_message_enabled, None);
        assert!(storage.last_error().is_none());
    }

    #[test]
    fn test_flag_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        PreferencesStorage::new(&path).set_intro_message_enabled(true);

        let reloaded = PreferencesStorage::new(&path);
        assert!(reloaded.intro_message_enabled());
        assert_eq!(reloaded.prefs().new_tab_page_intro_message_enabled, Some(true));
    }

    #[test]
    fn test_corrupt_file_fails_safe_to_hidden() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "[1, 2").unwrap();

        let storage = PreferencesStorage::new(&path);

        assert!(!storage.intro_message_enabled());
        assert!(matches!(storage.last_error(), Some(StorageError::Parse { .. })));
    }

    #[test]
    fn test_write_failure_is_recorded() {
        let dir = tempfile::tempdir().unwrap();
        // Parent is a regular file, so the store cannot create its directory.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let storage = PreferencesStorage::new(blocker.join("prefs.json"));

        storage.set_intro_message_enabled(true);

        // In-memory value still reflects the request for this session
        assert!(storage.intro_message_enabled());
        assert!(matches!(storage.last_error(), Some(StorageError::Write { .. })));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(
            &path,
            r#"{"new_tab_page_intro_message_enabled": true, "legacy": 1}"#,
        )
        .unwrap();

        assert!(PreferencesStorage::new(&path).intro_message_enabled());
    }
}
