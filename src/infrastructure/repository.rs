//! File system workspace holding config and stored entries

use crate::error::{NewsboardError, Result};
use crate::infrastructure::entry_store::KeyValueEntryStore;
use crate::infrastructure::kv_store::FileKeyValueStore;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the metadata directory marking a board root
pub const BOARD_DIR: &str = ".newsboard";

/// Abstract repository for board workspace operations
pub trait BoardRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .newsboard/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .newsboard/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .newsboard directory exists
    fn is_initialized(&self) -> bool;

    /// Create .newsboard directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of BoardRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover board root.
    /// First checks NEWSBOARD_ROOT, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("NEWSBOARD_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_board_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(NewsboardError::Config(format!(
                    "NEWSBOARD_ROOT is set to '{}' but no .newsboard directory found. \
                    Run 'newsboard init' in that directory or unset NEWSBOARD_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover board root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_board_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(NewsboardError::NotInitialized(start.to_path_buf())),
            }
        }
    }

    fn has_board_dir(path: &Path) -> bool {
        path.join(BOARD_DIR).is_dir()
    }

    /// Directory holding one file per storage key
    pub fn store_dir(&self) -> PathBuf {
        self.root.join(BOARD_DIR).join("store")
    }

    /// Entry store for this workspace at the configured key
    pub fn entry_store(&self, config: &Config) -> Result<KeyValueEntryStore<FileKeyValueStore>> {
        KeyValueEntryStore::with_key(
            FileKeyValueStore::new(self.store_dir()),
            &config.storage_key,
        )
    }
}

impl BoardRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_board_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let board_dir = self.root.join(BOARD_DIR);

        if board_dir.exists() {
            return Err(NewsboardError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&board_dir)?;
        fs::create_dir(self.store_dir())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Draft, Entry, EntryId};
    use crate::infrastructure::EntryStore;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_dirs() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize().unwrap();
        assert!(repo.is_initialized());
        assert!(temp.path().join(".newsboard/store").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();
        assert!(repo.initialize().is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let nested = temp.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();

        let found = FileSystemRepository::discover_from(&nested).unwrap();
        assert_eq!(found.root, temp.path());
    }

    #[test]
    fn test_discover_from_uninitialized() {
        let temp = TempDir::new().unwrap();

        match FileSystemRepository::discover_from(temp.path()) {
            Err(NewsboardError::NotInitialized(path)) => assert_eq!(path, temp.path()),
            Ok(repo) => {
                // An ancestor of the temp dir may itself be a board
                assert!(repo.root != temp.path());
            }
            Err(other) => panic!("Unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_entry_store_uses_configured_key() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let mut config = Config::new();
        config.storage_key = "weekly".to_string();

        let store = repo.entry_store(&config).unwrap();
        let entry = Entry::new(EntryId::new(1), Draft::new("T", "X").unwrap());
        store.save(&[entry]).unwrap();

        assert!(temp.path().join(".newsboard/store/weekly.json").exists());
    }
}
