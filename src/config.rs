//! Configuration management for Homebook server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Where the JSON collections live
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub expenses_file: String,
    pub categories_file: String,
    pub books_file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub expense: ServerConfig,
    pub library: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from defaults, files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .set_default("expense.host", "0.0.0.0")?
            .set_default("expense.port", 12000)?
            .set_default("library.host", "0.0.0.0")?
            .set_default("library.port", 11000)?
            .set_default("storage.data_dir", ".")?
            .set_default("storage.expenses_file", "expenses.json")?
            .set_default("storage.categories_file", "categories.json")?
            .set_default("storage.books_file", "books.json")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // HOMEBOOK_STORAGE__DATA_DIR=/var/lib/homebook and friends
            .add_source(
                Environment::with_prefix("HOMEBOOK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl StorageConfig {
    pub fn expenses_path(&self) -> PathBuf {
        self.data_dir.join(&self.expenses_file)
    }

    pub fn categories_path(&self) -> PathBuf {
        self.data_dir.join(&self.categories_file)
    }

    pub fn books_path(&self) -> PathBuf {
        self.data_dir.join(&self.books_file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            expenses_file: "expenses.json".to_string(),
            categories_file: "categories.json".to_string(),
            books_file: "books.json".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults() {
        let config = AppConfig::load().unwrap();
        assert_eq!(config.expense.port, 12000);
        assert_eq!(config.library.port, 11000);
        assert_eq!(config.storage.books_file, "books.json");
    }

    #[test]
    fn test_storage_paths() {
        let storage = StorageConfig {
            data_dir: PathBuf::from("/var/lib/homebook"),
            ..Default::default()
        };
        assert_eq!(
            storage.expenses_path(),
            PathBuf::from("/var/lib/homebook/expenses.json")
        );
        assert_eq!(
            storage.categories_path(),
            PathBuf::from("/var/lib/homebook/categories.json")
        );
        assert_eq!(storage.books_path(), PathBuf::from("/var/lib/homebook/books.json"));
    }
}
