use std::io::Write;

use chrono::SecondsFormat;
use csv::WriterBuilder;
use finance_tracker::engine::{CategoryShare, MonthlySummary};
use finance_tracker::models::{Category, CategoryRegistry, Transaction, TransactionType};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

const TRANSACTION_HEADER: [&str; 8] = ["id", "type", "amount", "description", "category", "date", "created_at", "color"];
const TOTALS_HEADER: [&str; 5] = ["month", "income", "expense", "balance", "savings_goal"];
const BREAKDOWN_HEADER: [&str; 5] = ["type", "category", "amount", "percentage", "color"];
const CATEGORY_HEADER: [&str; 5] = ["id", "name", "type", "color", "icon"];

fn two_places(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

#[derive(Serialize)]
struct TransactionRow<'a> {
    id: &'a str,
    transaction_type: TransactionType,
    amount: String,
    description: &'a str,
    category: &'a str,
    date: String,
    created_at: String,
    color: &'static str
}

#[derive(Serialize)]
struct BreakdownRow<'a> {
    transaction_type: TransactionType,
    category: &'a str,
    amount: String,
    percentage: String,
    color: &'static str
}

/// Writes transactions in the given order, header first even when there are none.
pub fn write_transactions<W: Write>(output: W, transactions: &[&Transaction], registry: &CategoryRegistry) -> csv::Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);
    writer.write_record(TRANSACTION_HEADER)?;

    for transaction in transactions {
        writer.serialize(TransactionRow {
            id: transaction.id.as_str(),
            transaction_type: transaction.transaction_type,
            amount: transaction.amount.to_string(),
            description: &transaction.description,
            category: &transaction.category,
            date: transaction.date.to_string(),
            created_at: transaction.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            color: registry.color_for(&transaction.category, transaction.transaction_type)
        })?;
    }

    writer.flush()?;

    Ok(())
}

/// Writes the month's totals, a blank line, then the expense and income breakdowns.
pub fn write_summary<W: Write>(mut output: W, summary: &MonthlySummary, registry: &CategoryRegistry) -> csv::Result<()> {
    {
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(&mut output);
        writer.write_record(TOTALS_HEADER)?;
        writer.write_record([
            summary.month.to_string(),
            two_places(summary.totals.income.value()),
            two_places(summary.totals.expense.value()),
            two_places(summary.totals.balance),
            two_places(summary.savings_goal),
        ])?;
        writer.flush()?;
    }

    writeln!(output)?;

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(&mut output);
    writer.write_record(BREAKDOWN_HEADER)?;

    let sections = [
        (TransactionType::Expense, &summary.expense_breakdown),
        (TransactionType::Income, &summary.income_breakdown),
    ];

    for (transaction_type, shares) in sections {
        for CategoryShare { category, amount, percentage } in shares.iter() {
            writer.serialize(BreakdownRow {
                transaction_type,
                category,
                amount: two_places(amount.value()),
                percentage: two_places(*percentage),
                color: registry.color_for(category, transaction_type)
            })?;
        }
    }

    writer.flush()?;

    Ok(())
}

pub fn write_categories<'a, W, I>(output: W, categories: I) -> csv::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Category>,
{
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);
    writer.write_record(CATEGORY_HEADER)?;

    for category in categories {
        writer.serialize(category)?;
    }

    writer.flush()?;

    Ok(())
}
