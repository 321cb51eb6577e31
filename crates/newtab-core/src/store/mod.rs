pub mod favorites_store;
pub mod memory;
pub mod preferences;

pub use favorites_store::FavoritesStorage;
pub use memory::{InMemoryFavoritesStore, InMemoryIntroDataStore};
pub use preferences::{Preferences, PreferencesStorage};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Errors from the JSON-file stores.
///
/// Stores never hand these to the models; they log them and keep the last one
/// for the UI to surface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to read {file}: {message}")]
    Read { file: String, message: String },
    #[error("Failed to parse {file}: {message}")]
    Parse { file: String, message: String },
    #[error("Failed to write {file}: {message}")]
    Write { file: String, message: String },
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Load a JSON document, falling back to `T::default()`.
/// A missing file is not an error.
pub(crate) fn load_json<T>(path: &Path) -> (T, Option<StorageError>)
where
    T: DeserializeOwned + Default,
{
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return (T::default(), None),
        Err(e) => {
            let err = StorageError::Read {
                file: file_label(path),
                message: e.to_string(),
            };
            tracing::warn!("{}", err);
            return (T::default(), Some(err));
        }
    };

    match serde_json::from_str(&contents) {
        Ok(value) => (value, None),
        Err(e) => {
            let err = StorageError::Parse {
                file: file_label(path),
                message: e.to_string(),
            };
            tracing::warn!("{}", err);
            (T::default(), Some(err))
        }
    }
}

/// Write a JSON document via temp file + rename so a crash mid-write never
/// leaves a truncated file behind.
pub(crate) fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    let write_err = |message: String| StorageError::Write {
        file: file_label(path),
        message,
    };

    let json = serde_json::to_string_pretty(value).map_err(|e| write_err(e.to_string()))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
    }

    let temp_file = path.with_extension("json.tmp");
    fs::write(&temp_file, json).map_err(|e| write_err(e.to_string()))?;
    fs::rename(&temp_file, path).map_err(|e| write_err(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_load_missing_file_is_default_without_error() {
        let dir = tempfile::tempdir().unwrap();
        let (value, err): (HashMap<String, u32>, _) = load_json(&dir.path().join("absent.json"));
        assert!(value.is_empty());
        assert!(err.is_none());
    }

    #[test]
    fn test_load_corrupt_file_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let (value, err): (HashMap<String, u32>, _) = load_json(&path);

        assert!(value.is_empty());
        assert!(matches!(err, Some(StorageError::Parse { ref file, .. }) if file == "broken.json"));
    }

    #[test]
    fn test_save_creates_parent_dirs_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("doc.json");
        let value = HashMap::from([("a".to_string(), 1u32)]);

        save_json(&path, &value).unwrap();

        let (loaded, err): (HashMap<String, u32>, _) = load_json(&path);
        assert_eq!(loaded, value);
        assert!(err.is_none());
        assert!(!path.with_extension("json.tmp").exists());
    }
}
