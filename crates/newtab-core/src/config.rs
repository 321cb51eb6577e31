use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CoreConfig {
    pub data_dir: PathBuf,
}

impl CoreConfig {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join(crate::constants::PREFERENCES_FILE)
    }

    pub fn favorites_path(&self) -> PathBuf {
        self.data_dir.join(crate::constants::FAVORITES_FILE)
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new(default_data_dir())
    }
}

/// Resolve the data directory: `NEWTAB_BASE_DIR` wins, then the platform data dir.
pub fn default_data_dir() -> PathBuf {
    if let Ok(base_dir) = std::env::var("NEWTAB_BASE_DIR") {
        return PathBuf::from(base_dir);
    }
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("newtab")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_paths_live_in_data_dir() {
        let config = CoreConfig::new("/tmp/ntp");
        assert_eq!(
            config.preferences_path(),
            PathBuf::from("/tmp/ntp/newtab_preferences.json")
        );
        assert_eq!(config.favorites_path(), PathBuf::from("/tmp/ntp/favorites.json"));
    }
}
