use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unknown transaction type [{0}], expected 'income' or 'expense'")]
    UnknownTransactionType(String)
}
