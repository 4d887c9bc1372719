use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::TransactionType;
use crate::types::{Amount, TransactionId};

/// A single recorded money movement.
///
/// `id` and `created_at` are assigned once, when the transaction is created, and
/// survive every later edit. The remaining fields are replaced together from a
/// [`TransactionDraft`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    /// Income or expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Amount,
    pub description: String,
    /// Free-text category name, normally one of the registry names for `transaction_type`.
    pub category: String,
    /// The day the money moved, chosen by the user and independent of `created_at`.
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>
}

/// The caller-editable fields of a [`Transaction`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Amount,
    pub description: String,
    pub category: String,
    pub date: NaiveDate
}

impl Transaction {
    /// Creates a transaction with a freshly generated id, stamped with the current instant.
    pub fn create(draft: TransactionDraft) -> Self {
        Self::from_draft(TransactionId::generate(), Utc::now(), draft)
    }

    pub fn from_draft(id: TransactionId, created_at: DateTime<Utc>, draft: TransactionDraft) -> Self {
        let TransactionDraft { transaction_type, amount, description, category, date } = draft;

        Self {
            id,
            transaction_type,
            amount,
            description,
            category,
            date,
            created_at
        }
    }

    /// Returns a copy with every editable field taken from `draft`.
    pub fn revised(&self, draft: TransactionDraft) -> Self {
        Self::from_draft(self.id.clone(), self.created_at, draft)
    }

    /// The editable fields, as an edit form would be prefilled with.
    pub fn draft(&self) -> TransactionDraft {
        TransactionDraft {
            transaction_type: self.transaction_type,
            amount: self.amount,
            description: self.description.clone(),
            category: self.category.clone(),
            date: self.date
        }
    }
}
