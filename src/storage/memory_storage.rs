use crate::storage::{validate_key, Storage, StorageError};
use dashmap::DashMap;
use std::sync::Arc;

/// Process-local storage, shared by cloning the handle.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<DashMap<String, String>>
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new())
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;

        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;

        self.entries.insert(key.to_string(), value.to_string());

        Ok(())
    }
}
