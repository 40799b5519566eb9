use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// One `<key>.json` file per key under `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        Path::new(&self.base_path).join(format!("{}.json", key))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let full_path = self.key_path(key);
        match fs::read_to_string(&full_path) {
            Ok(data) => {
                tracing::debug!("Read {} bytes from {}", data.len(), full_path.display());
                Ok(Some(data))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let full_path = self.key_path(key);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, value)?;
        tracing::debug!("Wrote {} bytes to {}", value.len(), full_path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_local_storage_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").to_str().unwrap().to_string();
        let mut storage = LocalStorage::new(base);

        assert_eq!(storage.get("stations").unwrap(), None);
        storage.set("stations", "{}").unwrap();
        assert_eq!(storage.get("stations").unwrap().as_deref(), Some("{}"));
        assert!(temp_dir.path().join("nested/stations.json").exists());

        storage.set("stations", "{\"A\":1}").unwrap();
        assert_eq!(storage.get("stations").unwrap().as_deref(), Some("{\"A\":1}"));

        storage.remove("stations").unwrap();
        storage.remove("stations").unwrap();
        assert_eq!(storage.get("stations").unwrap(), None);
    }

    #[test]
    fn test_memory_storage() {
        let mut storage = MemoryStorage::new();
        storage.set("loggedIn", "true").unwrap();
        assert_eq!(storage.get("loggedIn").unwrap().as_deref(), Some("true"));
        storage.remove("loggedIn").unwrap();
        assert_eq!(storage.get("loggedIn").unwrap(), None);
    }
}
