//! Transaction CLI commands
//!
//! Adding or importing transactions changes the income available to save, so
//! these handlers trigger a goal recalculation after every mutation.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_totals, format_transaction_list};
use crate::error::{GoalflowError, GoalflowResult};
use crate::models::{Money, TransactionKind};
use crate::services::{ColumnMapping, GoalService, ImportService, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a transaction (expense by default)
    Add {
        /// Amount (e.g., "42.50")
        amount: String,
        /// Spending category
        category: String,
        /// Record as income instead of expense
        #[arg(short, long)]
        income: bool,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List transactions, most recent first
    List {
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Import transactions from a CSV file (date, signed amount, category)
    Import {
        /// Path to CSV file
        file: String,
        /// Replace the stored transactions instead of appending
        #[arg(short, long)]
        replace: bool,
        /// Date format in the file (strftime)
        #[arg(long, default_value = "%Y-%m-%d")]
        date_format: String,
        /// Treat the first row as data, not a header
        #[arg(long)]
        no_header: bool,
    },

    /// Show income and expense totals
    Summary,
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> GoalflowResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            amount,
            category,
            income,
            date,
            note,
        } => {
            let amount = Money::parse(&amount)
                .map_err(|e| GoalflowError::Validation(e.to_string()))?;

            let date = match date {
                Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                    .map_err(|e| GoalflowError::Validation(format!("Invalid date: {}", e)))?,
                None => Local::now().date_naive(),
            };

            let kind = if income {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            };

            let txn = service.add(kind, amount, category, date, note)?;
            println!(
                "Recorded {} of {} in '{}'",
                txn.kind,
                txn.amount.format_with_symbol(&settings.currency_symbol),
                txn.category
            );

            GoalService::new(storage).recalculate()?;
        }

        TransactionCommands::List { limit } => {
            let transactions = service.list(Some(limit))?;
            println!("{}", format_transaction_list(&transactions, settings));
        }

        TransactionCommands::Import {
            file,
            replace,
            date_format,
            no_header,
        } => {
            let mapping = ColumnMapping {
                date_format,
                has_header: !no_header,
                ..ColumnMapping::default()
            };

            let result = ImportService::new(storage).import_file(&file, &mapping, replace)?;
            println!(
                "Imported {} transaction(s), skipped {}",
                result.imported, result.skipped
            );

            GoalService::new(storage).recalculate()?;
        }

        TransactionCommands::Summary => {
            let totals = service.totals()?;
            println!("{}", format_totals(&totals, settings));
        }
    }

    Ok(())
}
