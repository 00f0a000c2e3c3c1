//! Marker-file access store
//!
//! The remembered unlock is a single empty marker file under the user
//! config directory. Presence of the file is the grant; no content is
//! read. Persistence failures are warned and swallowed, the worst
//! outcome is being asked for the password again next session.

use decksmith_application::ports::access::AccessStore;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

pub struct FileAccessStore {
    path: PathBuf,
}

impl FileAccessStore {
    /// Store under the platform config directory
    /// (`~/.config/decksmith/access` on Linux). `None` when no config
    /// directory can be determined.
    pub fn default_location() -> Option<Self> {
        let path = dirs::config_dir()?.join("decksmith").join("access");
        Some(Self { path })
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl AccessStore for FileAccessStore {
    fn load_granted(&self) -> bool {
        self.path.exists()
    }

    fn save_granted(&self) {
        if let Some(parent) = self.path.parent()
            && let Err(error) = fs::create_dir_all(parent)
        {
            warn!("Failed to create access marker directory: {}", error);
            return;
        }
        if let Err(error) = fs::write(&self.path, b"") {
            warn!("Failed to write access marker: {}", error);
        }
    }

    fn clear(&self) {
        if let Err(error) = fs::remove_file(&self.path)
            && error.kind() != std::io::ErrorKind::NotFound
        {
            warn!("Failed to remove access marker: {}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn grant_round_trips_through_the_marker_file() {
        let dir = TempDir::new().unwrap();
        let store = FileAccessStore::at(dir.path().join("nested").join("access"));

        assert!(!store.load_granted());
        store.save_granted();
        assert!(store.load_granted());
        store.clear();
        assert!(!store.load_granted());
    }

    #[test]
    fn clearing_an_absent_marker_is_quiet() {
        let dir = TempDir::new().unwrap();
        let store = FileAccessStore::at(dir.path().join("access"));
        store.clear();
        assert!(!store.load_granted());
    }
}
