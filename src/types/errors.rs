use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount error: {0}")]
    InvalidFormat(String),
    #[error("Amount error: [{0}] is negative")]
    Negative(String),
    #[error("Amount error: Overflow")]
    Overflow
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonthError {
    #[error("Month error: [{0}] is not in YYYY-MM format")]
    InvalidFormat(String),
    #[error("Month error: [{0}] is not a month between 1 and 12")]
    OutOfRange(u32)
}
