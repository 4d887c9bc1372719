use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{Transaction, TransactionType};
use crate::types::{Amount, Month};

const SAVINGS_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);
const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Income and expense sums for one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthlyTotals {
    pub income: Amount,
    pub expense: Amount,
    /// `income - expense`; negative when the month overspent.
    pub balance: Decimal
}

/// One category's slice of a month's income or expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Amount,
    /// Share of the type's total, from 0 to 100, unrounded.
    pub percentage: Decimal
}

/// Everything the dashboard shows for a month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySummary {
    pub month: Month,
    pub totals: MonthlyTotals,
    pub savings_goal: Decimal,
    pub expense_breakdown: Vec<CategoryShare>,
    pub income_breakdown: Vec<CategoryShare>
}

fn in_month(transactions: &[Transaction], month: Month) -> impl Iterator<Item = &Transaction> {
    transactions.iter().filter(move |transaction| month.contains(transaction.date))
}

pub fn monthly_totals(transactions: &[Transaction], month: Month) -> MonthlyTotals {
    let mut totals = MonthlyTotals::default();

    for transaction in in_month(transactions, month) {
        match transaction.transaction_type {
            TransactionType::Income => totals.income += transaction.amount,
            TransactionType::Expense => totals.expense += transaction.amount
        }
    }

    totals.balance = totals.income.value() - totals.expense.value();
    totals
}

/// Suggested amount to put aside: a fifth of income, never below zero.
pub fn savings_goal(income: Decimal) -> Decimal {
    (income * SAVINGS_RATE).max(Decimal::ZERO)
}

/// Groups a month's transactions of one type by their literal category name.
///
/// Entries are sorted by amount, largest first; equal amounts keep the order in
/// which their categories were first encountered. Returns an empty list when the
/// type has no total for the month, so there is never a division by zero.
pub fn category_breakdown(transactions: &[Transaction], month: Month, transaction_type: TransactionType) -> Vec<CategoryShare> {
    let mut shares: Vec<CategoryShare> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut total = Amount::ZERO;

    let matching = in_month(transactions, month)
        .filter(|transaction| transaction.transaction_type == transaction_type);

    for transaction in matching {
        total += transaction.amount;

        match positions.get(transaction.category.as_str()) {
            Some(&position) => shares[position].amount += transaction.amount,
            None => {
                positions.insert(transaction.category.as_str(), shares.len());
                shares.push(CategoryShare {
                    category: transaction.category.clone(),
                    amount: transaction.amount,
                    percentage: Decimal::ZERO
                });
            }
        }
    }

    if total.is_zero() {
        return Vec::new();
    }

    for share in &mut shares {
        share.percentage = share.amount.value() / total.value() * ONE_HUNDRED;
    }

    shares.sort_by(|left, right| right.amount.cmp(&left.amount));
    shares
}

pub fn summarize(transactions: &[Transaction], month: Month) -> MonthlySummary {
    let totals = monthly_totals(transactions, month);

    MonthlySummary {
        month,
        totals,
        savings_goal: savings_goal(totals.income.value()),
        expense_breakdown: category_breakdown(transactions, month, TransactionType::Expense),
        income_breakdown: category_breakdown(transactions, month, TransactionType::Income)
    }
}
