use chrono::NaiveDate;
use finance_tracker::models::{CategoryRegistry, TransactionDraft, TransactionType};
use finance_tracker::types::Amount;
use tracing::warn;

use crate::cli::CliError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Builds a draft from `<type> <amount> <category> <date> <description...>`,
/// rejecting what the transaction form would not submit.
///
/// A category missing from the registry is accepted with a warning.
pub fn parse_draft(args: &[String], registry: &CategoryRegistry) -> Result<TransactionDraft, CliError> {
    let mut args = args.iter();

    let transaction_type: TransactionType = args.next()
        .ok_or(CliError::MissingArgument("type"))?
        .parse()?;

    let amount: Amount = args.next()
        .ok_or(CliError::MissingArgument("amount"))?
        .parse()?;

    if amount.is_zero() {
        return Err(CliError::NonPositiveAmount);
    }

    let category = args.next()
        .ok_or(CliError::MissingArgument("category"))?
        .trim()
        .to_string();

    if category.is_empty() {
        return Err(CliError::EmptyCategory);
    }

    let date_argument = args.next().ok_or(CliError::MissingArgument("date"))?;
    let date = NaiveDate::parse_from_str(date_argument.trim(), DATE_FORMAT)
        .map_err(|_| CliError::InvalidDate(date_argument.clone()))?;

    let description = args.map(|word| word.trim())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if description.is_empty() {
        return Err(CliError::EmptyDescription);
    }

    if registry.find(&category, transaction_type).is_none() {
        warn!("Category [{category}] is not a known {transaction_type} category");
    }

    Ok(TransactionDraft {
        transaction_type,
        amount,
        description,
        category,
        date
    })
}
