//! Initialize board use case

use crate::error::Result;
use crate::infrastructure::{BoardRepository, Config, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Initialize a new board at the specified path.
pub fn init(path: &Path) -> Result<FileSystemRepository> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::new())?;

    log::info!("initialized board at {}", path.display());
    Ok(repo)
}
