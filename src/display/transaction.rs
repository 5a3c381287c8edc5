//! Transaction display formatting

use crate::config::Settings;
use crate::models::{Transaction, TransactionKind};
use crate::storage::TransactionTotals;

/// Format a transaction list, most recent first
pub fn format_transaction_list(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.".to_string();
    }

    let category_width = transactions
        .iter()
        .map(|t| t.category.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:<7}  {:>12}  {:<width$}  {}\n",
        "Date",
        "Kind",
        "Amount",
        "Category",
        "Note",
        width = category_width
    ));

    for txn in transactions {
        let date = txn.date.format(&settings.date_format).to_string();
        let signed = match txn.kind {
            TransactionKind::Income => format!(
                "+{}",
                txn.amount.format_with_symbol(&settings.currency_symbol)
            ),
            TransactionKind::Expense => format!(
                "-{}",
                txn.amount.format_with_symbol(&settings.currency_symbol)
            ),
        };

        output.push_str(&format!(
            "{:<10}  {:<7}  {:>12}  {:<width$}  {}\n",
            date,
            txn.kind.to_string(),
            signed,
            txn.category,
            txn.note,
            width = category_width
        ));
    }

    output
}

/// Format the income/expense summary
pub fn format_totals(totals: &TransactionTotals, settings: &Settings) -> String {
    let net = totals.income - totals.expenses;
    format!(
        "Income:   {}\nExpenses: {}\nNet:      {}\n",
        totals.income.format_with_symbol(&settings.currency_symbol),
        totals.expenses.format_with_symbol(&settings.currency_symbol),
        net.format_with_symbol(&settings.currency_symbol)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_list() {
        let output = format_transaction_list(&[], &Settings::default());
        assert!(output.contains("No transactions"));
    }

    #[test]
    fn test_list_shows_signed_amounts() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let transactions = vec![
            Transaction::new(
                TransactionKind::Income,
                Money::from_dollars(1000),
                "salary",
                date,
            ),
            Transaction::new(TransactionKind::Expense, Money::from_cents(4250), "food", date),
        ];

        let output = format_transaction_list(&transactions, &Settings::default());
        assert!(output.contains("+$1000.00"));
        assert!(output.contains("-$42.50"));
    }

    #[test]
    fn test_totals() {
        let totals = TransactionTotals {
            income: Money::from_dollars(1000),
            expenses: Money::from_dollars(300),
        };

        let output = format_totals(&totals, &Settings::default());
        assert!(output.contains("Net:      $700.00"));
    }
}
