mod errors;
mod file_storage;
mod memory_storage;
#[cfg(test)]
mod tests;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

pub use errors::StorageError;
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

/// Key-value persistence of serialized blobs.
pub trait Storage: Send + Sync + 'static {
    /// Returns the blob stored under `key`, or `None` if nothing was ever saved.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Replaces whatever is stored under `key`.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Reads the JSON array under `key` one record at a time.
///
/// Missing, unreadable or corrupted data yields an empty list so callers always
/// start in a usable state. Records that fail to deserialize are skipped with a
/// warning and the rest are kept in stored order.
pub fn load_records_or_default<S, T>(storage: &S, key: &str) -> Vec<T>
where
    S: Storage + ?Sized,
    T: DeserializeOwned,
{
    let Some(blob) = load_blob(storage, key) else {
        return Vec::new();
    };

    let records: Vec<Value> = match serde_json::from_str(&blob) {
        Ok(records) => records,
        Err(error) => {
            warn!("Stored value for [{key}] is corrupted, starting empty: {error}");
            return Vec::new();
        }
    };

    records.into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(record) => Some(record),
            Err(error) => {
                warn!("Skipping unreadable record {index} in [{key}]: {error}");
                None
            }
        })
        .collect()
}

fn load_blob<S: Storage + ?Sized>(storage: &S, key: &str) -> Option<String> {
    match storage.load(key) {
        Ok(blob) => blob,
        Err(error) => {
            warn!("Could not read [{key}] from storage, starting empty: {error}");
            None
        }
    }
}

/// Serializes `value` as JSON and saves it under `key`.
pub fn save_value<S, T>(storage: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    S: Storage + ?Sized,
    T: Serialize + ?Sized,
{
    let blob = serde_json::to_string(value)?;
    storage.save(key, &blob)
}

pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let is_valid = !key.is_empty()
        && key.chars().all(|character| character.is_ascii_alphanumeric() || character == '-' || character == '_');

    if !is_valid {
        return Err(StorageError::InvalidKey(key.to_string()));
    }

    Ok(())
}
