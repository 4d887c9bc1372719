use std::sync::Arc;

use tracing::{debug, info};

use crate::models::{Transaction, TransactionDraft};
use crate::storage::{load_records_or_default, save_value, Storage};
use crate::store::StoreError;
use crate::types::TransactionId;

/// Storage key the transaction list is persisted under.
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Ordered, persisted collection of transactions, newest first.
///
/// Every mutation writes the whole collection back to storage before it becomes
/// visible through [`TransactionStore::list`]; a failed write leaves the store as
/// it was.
pub struct TransactionStore<S: Storage> {
    storage: Arc<S>,
    key: String,
    transactions: Vec<Transaction>
}

impl<S: Storage> TransactionStore<S> {
    /// Loads the collection from `storage`, starting empty if nothing usable is stored.
    ///
    /// Individual records that cannot be read are dropped; the others are kept.
    pub fn open(storage: Arc<S>) -> Self {
        Self::open_with_key(storage, TRANSACTIONS_KEY)
    }

    pub fn open_with_key(storage: Arc<S>, key: impl Into<String>) -> Self {
        let key = key.into();
        let transactions: Vec<Transaction> = load_records_or_default(storage.as_ref(), &key);

        info!("Loaded {} transactions from [{key}]", transactions.len());

        Self {
            storage,
            key,
            transactions
        }
    }

    /// All transactions, most recently created first.
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, transaction_id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|transaction| &transaction.id == transaction_id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Records a new transaction with a fresh id and creation time, ahead of all
    /// existing ones.
    ///
    /// # Errors
    /// Returns `StoreError::Persistence` if the updated list cannot be saved.
    pub fn create(&mut self, draft: TransactionDraft) -> Result<Transaction, StoreError> {
        let mut transaction = Transaction::create(draft);

        while self.get(&transaction.id).is_some() {
            transaction.id = TransactionId::generate();
        }

        let mut updated = Vec::with_capacity(self.transactions.len() + 1);
        updated.push(transaction.clone());
        updated.extend(self.transactions.iter().cloned());

        self.commit(updated)?;

        debug!("Transaction [{}]:[{}] created", transaction.id, transaction.transaction_type);

        Ok(transaction)
    }

    /// Replaces every field of the transaction except its id and creation time.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if no transaction has `transaction_id`, or
    /// `StoreError::Persistence` if the updated list cannot be saved.
    pub fn update(&mut self, transaction_id: &TransactionId, draft: TransactionDraft) -> Result<Transaction, StoreError> {
        let position = self.position(transaction_id)?;
        let revised = self.transactions[position].revised(draft);

        let mut updated = self.transactions.clone();
        updated[position] = revised.clone();

        self.commit(updated)?;

        debug!("Transaction [{}]:[{}] updated", revised.id, revised.transaction_type);

        Ok(revised)
    }

    /// Removes the transaction with `transaction_id`.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if no transaction has `transaction_id`, or
    /// `StoreError::Persistence` if the updated list cannot be saved.
    pub fn delete(&mut self, transaction_id: &TransactionId) -> Result<(), StoreError> {
        let position = self.position(transaction_id)?;

        let mut updated = self.transactions.clone();
        updated.remove(position);

        self.commit(updated)?;

        debug!("Transaction [{transaction_id}] deleted");

        Ok(())
    }

    fn position(&self, transaction_id: &TransactionId) -> Result<usize, StoreError> {
        self.transactions.iter()
            .position(|transaction| &transaction.id == transaction_id)
            .ok_or_else(|| StoreError::not_found(transaction_id))
    }

    fn commit(&mut self, updated: Vec<Transaction>) -> Result<(), StoreError> {
        save_value(self.storage.as_ref(), &self.key, &updated)?;
        self.transactions = updated;

        Ok(())
    }
}
