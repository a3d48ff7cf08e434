//! Config management use case

use crate::error::{NewsboardError, Result};
use crate::infrastructure::config::normalize_log_level;
use crate::infrastructure::kv_store::validate_key;
use crate::infrastructure::{BoardRepository, Config, FileSystemRepository};

/// Service for managing board configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "storage_key" => Ok(config.storage_key),
            "log_level" => Ok(config.log_level),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(NewsboardError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: storage_key, log_level, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "storage_key" => {
                validate_key(value)?;
                config.storage_key = value.to_string();
            }
            "log_level" => {
                config.log_level = normalize_log_level(value)?;
            }
            "created" => {
                return Err(NewsboardError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(NewsboardError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: storage_key, log_level",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::init;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        ConfigService::new(init(temp.path()).unwrap())
    }

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert_eq!(service.get("storage_key").unwrap(), "news");
        assert_eq!(service.get("log_level").unwrap(), "warn");
        assert!(!service.get("created").unwrap().is_empty());
    }

    #[test]
    fn test_set_values() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("storage_key", "archive").unwrap();
        service.set("log_level", "DEBUG").unwrap();

        assert_eq!(service.get("storage_key").unwrap(), "archive");
        assert_eq!(service.get("log_level").unwrap(), "debug");
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(matches!(
            service.set("storage_key", "a/b"),
            Err(NewsboardError::InvalidStorageKey(_))
        ));
        assert!(service.set("log_level", "loud").is_err());
        assert!(service.set("created", "2025-01-01T00:00:00Z").is_err());
        assert!(service.set("colour", "blue").is_err());
        assert_eq!(service.get("storage_key").unwrap(), "news");
    }

    #[test]
    fn test_get_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        match service.get("colour") {
            Err(NewsboardError::Config(msg)) => assert!(msg.contains("Unknown config key")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
