mod amount;
mod errors;
mod identifier;
mod month;
#[cfg(test)]
mod tests;

pub use amount::Amount;
pub use errors::{AmountError, MonthError};
pub use identifier::TransactionId;
pub use month::Month;
