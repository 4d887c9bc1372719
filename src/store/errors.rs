use crate::storage::StorageError;
use crate::types::TransactionId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Transaction [{transaction_id}] was not found")]
    NotFound {
        transaction_id: TransactionId
    },
    #[error("Transactions could not be persisted: {0}")]
    Persistence(#[from] StorageError)
}

impl StoreError {
    pub fn not_found(transaction_id: &TransactionId) -> Self {
        Self::NotFound { transaction_id: transaction_id.clone() }
    }
}
