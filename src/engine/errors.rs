use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    #[error("Unknown filter [{0}], expected 'all', 'income' or 'expense'")]
    UnknownFilter(String),
    #[error("Unknown sort order [{0}], expected 'date' or 'amount'")]
    UnknownSortOrder(String)
}
