//! Local storage configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Where the key-value file lives
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the store file
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Store file name inside `data_dir`
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl StorageConfig {
    /// Full path of the store file
    pub fn file_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDataDir);
        }

        let name = Path::new(&self.file_name);
        if self.file_name.trim().is_empty() || name.file_name() != Some(name.as_os_str()) {
            return Err(ValidationError::InvalidFileName);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            file_name: default_file_name(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_file_name() -> String {
    "bioclave.yaml".to_string()
}
