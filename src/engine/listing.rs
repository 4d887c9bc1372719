use std::cmp::Reverse;
use std::str::FromStr;

use crate::engine::ListingError;
use crate::models::{Transaction, TransactionType};

/// Which transactions the list view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransactionFilter {
    #[default]
    All,
    Only(TransactionType)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Latest `date` first.
    #[default]
    Date,
    /// Largest `amount` first.
    Amount
}

impl TransactionFilter {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            TransactionFilter::All => true,
            TransactionFilter::Only(transaction_type) => transaction.transaction_type == *transaction_type
        }
    }
}

impl FromStr for TransactionFilter {
    type Err = ListingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "all" => Ok(TransactionFilter::All),
            "income" => Ok(TransactionFilter::Only(TransactionType::Income)),
            "expense" => Ok(TransactionFilter::Only(TransactionType::Expense)),
            _ => Err(ListingError::UnknownFilter(value.to_string()))
        }
    }
}

impl FromStr for SortOrder {
    type Err = ListingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "date" => Ok(SortOrder::Date),
            "amount" => Ok(SortOrder::Amount),
            _ => Err(ListingError::UnknownSortOrder(value.to_string()))
        }
    }
}

/// The list view: filtered by type, then sorted descending. Ties keep the
/// store's newest-first order.
pub fn filter_and_sort(transactions: &[Transaction], filter: TransactionFilter, order: SortOrder) -> Vec<&Transaction> {
    let mut selected: Vec<&Transaction> = transactions.iter()
        .filter(|transaction| filter.matches(transaction))
        .collect();

    match order {
        SortOrder::Date => selected.sort_by_key(|transaction| Reverse(transaction.date)),
        SortOrder::Amount => selected.sort_by_key(|transaction| Reverse(transaction.amount))
    }

    selected
}
