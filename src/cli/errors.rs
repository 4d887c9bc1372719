use finance_tracker::engine::ListingError;
use finance_tracker::models::ModelError;
use finance_tracker::types::{AmountError, MonthError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Missing argument <{0}>")]
    MissingArgument(&'static str),
    #[error("Unknown command [{0}]")]
    UnknownCommand(String),
    #[error("Unexpected argument [{0}]")]
    UnexpectedArgument(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,
    #[error("Invalid date [{0}], expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Description must not be empty")]
    EmptyDescription,
    #[error("Category must not be empty")]
    EmptyCategory,
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Listing(#[from] ListingError),
    #[error(transparent)]
    Month(#[from] MonthError)
}
