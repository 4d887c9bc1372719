mod errors;
mod form;
mod report;

use std::io::Write;

use anyhow::Result;
use finance_tracker::engine::{filter_and_sort, summarize, SortOrder, TransactionFilter};
use finance_tracker::models::{CategoryRegistry, TransactionDraft};
use finance_tracker::storage::Storage;
use finance_tracker::store::TransactionStore;
use finance_tracker::types::{Month, TransactionId};
use tracing::info;

pub use errors::CliError;

pub const USAGE: &str = "\
Usage: finance-tracker <store_dir> <command> [args...]
Commands:
  list [all|income|expense] [date|amount]
  add <income|expense> <amount> <category> <YYYY-MM-DD> <description...>
  edit <id> <income|expense> <amount> <category> <YYYY-MM-DD> <description...>
  delete <id>
  summary [YYYY-MM]
  categories [all|income|expense]
Log level: FINANCE_TRACKER_LOG=error|warn|info|debug|trace (default: error)";

/// One user action, parsed from the arguments after the store directory.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List {
        filter: TransactionFilter,
        order: SortOrder
    },
    Add(TransactionDraft),
    Edit {
        transaction_id: TransactionId,
        draft: TransactionDraft
    },
    Delete {
        transaction_id: TransactionId
    },
    Summary {
        month: Month
    },
    Categories {
        filter: TransactionFilter
    }
}

impl Command {
    /// `current_month` is what `summary` reports on when no month is given.
    pub fn parse(args: &[String], current_month: Month, registry: &CategoryRegistry) -> Result<Self, CliError> {
        let (name, rest) = args.split_first().ok_or(CliError::MissingArgument("command"))?;

        match name.as_str() {
            "list" => {
                reject_extra(rest, 2)?;

                Ok(Command::List {
                    filter: rest.first().map(|value| value.parse::<TransactionFilter>()).transpose()?.unwrap_or_default(),
                    order: rest.get(1).map(|value| value.parse::<SortOrder>()).transpose()?.unwrap_or_default()
                })
            }
            "add" => Ok(Command::Add(form::parse_draft(rest, registry)?)),
            "edit" => {
                let (transaction_id, rest) = rest.split_first().ok_or(CliError::MissingArgument("id"))?;

                Ok(Command::Edit {
                    transaction_id: TransactionId::from(transaction_id.as_str()),
                    draft: form::parse_draft(rest, registry)?
                })
            }
            "delete" => {
                reject_extra(rest, 1)?;
                let transaction_id = rest.first().ok_or(CliError::MissingArgument("id"))?;

                Ok(Command::Delete {
                    transaction_id: TransactionId::from(transaction_id.as_str())
                })
            }
            "summary" => {
                reject_extra(rest, 1)?;

                Ok(Command::Summary {
                    month: rest.first().map(|value| value.parse::<Month>()).transpose()?.unwrap_or(current_month)
                })
            }
            "categories" => {
                reject_extra(rest, 1)?;

                Ok(Command::Categories {
                    filter: rest.first().map(|value| value.parse::<TransactionFilter>()).transpose()?.unwrap_or_default()
                })
            }
            _ => Err(CliError::UnknownCommand(name.clone()))
        }
    }
}

fn reject_extra(args: &[String], allowed: usize) -> Result<(), CliError> {
    match args.get(allowed) {
        Some(extra) => Err(CliError::UnexpectedArgument(extra.clone())),
        None => Ok(())
    }
}

/// Applies `command` to the store and renders its result as CSV into `output`.
pub fn run<S: Storage, W: Write>(command: Command, store: &mut TransactionStore<S>, registry: &CategoryRegistry, output: W) -> Result<()> {
    match command {
        Command::List { filter, order } => {
            let transactions = filter_and_sort(store.list(), filter, order);
            report::write_transactions(output, &transactions, registry)?;
        }
        Command::Add(draft) => {
            let transaction = store.create(draft)?;
            info!("Added transaction [{}]", transaction.id);
            report::write_transactions(output, &[&transaction], registry)?;
        }
        Command::Edit { transaction_id, draft } => {
            let transaction = store.update(&transaction_id, draft)?;
            info!("Updated transaction [{}]", transaction.id);
            report::write_transactions(output, &[&transaction], registry)?;
        }
        Command::Delete { transaction_id } => {
            store.delete(&transaction_id)?;
            info!("Deleted transaction [{transaction_id}]");
        }
        Command::Summary { month } => {
            let summary = summarize(store.list(), month);

            if summary.expense_breakdown.is_empty() && summary.income_breakdown.is_empty() {
                info!("No transactions in [{month}]");
            }

            report::write_summary(output, &summary, registry)?;
        }
        Command::Categories { filter } => {
            let categories = registry.all().iter().filter(|category| match filter {
                TransactionFilter::All => true,
                TransactionFilter::Only(transaction_type) => category.transaction_type == transaction_type
            });

            report::write_categories(output, categories)?;
        }
    }

    Ok(())
}
