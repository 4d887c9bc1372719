use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage key [{0}] may only contain ASCII letters, digits, '-' and '_'")]
    InvalidKey(String),
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error)
}
