//! File-based Key-Value Store Adapter
//!
//! Keeps the whole key space as a single YAML mapping on disk. Every write
//! rewrites the file through a temporary sibling and a rename, so a crash
//! mid-write leaves the previous contents intact.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::ports::{KeyValueStore, StoreError};

type Entries = BTreeMap<String, String>;

/// File-backed key-value store
#[derive(Debug)]
pub struct FileKeyValueStore {
    file_path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Create a store persisted at `file_path`
    ///
    /// The file and its parent directory are created on first write.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileKeyValueStore::new("./data/bioclave.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .file_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.file_path.with_file_name(name)
    }

    async fn load(&self) -> Result<Entries, StoreError> {
        let yaml = match fs::read_to_string(&self.file_path).await {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(StoreError::IoError(e.to_string())),
        };

        if yaml.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_yaml::from_str(&yaml).map_err(|e| StoreError::DeserializationFailed(e.to_string()))
    }

    async fn persist(&self, entries: &Entries) -> Result<(), StoreError> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StoreError::IoError(e.to_string()))?;
            }
        }

        let yaml = serde_yaml::to_string(entries)
            .map_err(|e| StoreError::SerializationFailed(e.to_string()))?;

        let temp = self.temp_path();
        fs::write(&temp, yaml)
            .await
            .map_err(|e| StoreError::IoError(e.to_string()))?;
        fs::rename(&temp, &self.file_path)
            .await
            .map_err(|e| StoreError::IoError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.load().await?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.persist(&entries).await
    }
}
