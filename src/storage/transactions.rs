//! Transaction repository for JSON storage
//!
//! Transactions are append-only within a session, but the whole set can be
//! replaced at once by a CSV import (refetch semantics: no incremental merge,
//! no deduplication).

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::GoalflowError;
use crate::models::{Money, Transaction, TransactionKind};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    #[serde(default)]
    transactions: Vec<Transaction>,
}

/// Income and expense totals over the stored transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransactionTotals {
    pub income: Money,
    pub expenses: Money,
}

pub struct TransactionRepository {
    path: PathBuf,
    transactions: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            transactions: RwLock::new(Vec::new()),
        }
    }

    pub fn load(&self) -> Result<(), GoalflowError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut transactions = self
            .transactions
            .write()
            .map_err(|e| GoalflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *transactions = file_data.transactions;
        Ok(())
    }

    pub fn save(&self) -> Result<(), GoalflowError> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| GoalflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = TransactionData {
            transactions: transactions.clone(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    pub fn add(&self, transaction: Transaction) -> Result<(), GoalflowError> {
        let mut transactions = self
            .transactions
            .write()
            .map_err(|e| GoalflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        transactions.push(transaction);
        Ok(())
    }

    /// Replace the entire transaction set, e.g. after a full re-import
    pub fn replace_all(&self, new_transactions: Vec<Transaction>) -> Result<(), GoalflowError> {
        let mut transactions = self
            .transactions
            .write()
            .map_err(|e| GoalflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *transactions = new_transactions;
        Ok(())
    }

    /// All transactions, most recent date first
    pub fn get_all(&self) -> Result<Vec<Transaction>, GoalflowError> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| GoalflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list = transactions.clone();
        list.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(list)
    }

    /// Expense transactions only, in storage order
    pub fn get_expenses(&self) -> Result<Vec<Transaction>, GoalflowError> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| GoalflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
            .cloned()
            .collect())
    }

    /// Sum income and expense amounts across all stored transactions
    pub fn totals(&self) -> Result<TransactionTotals, GoalflowError> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| GoalflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut totals = TransactionTotals::default();
        for txn in transactions.iter() {
            match txn.kind {
                TransactionKind::Income => totals.income += txn.amount,
                TransactionKind::Expense => totals.expenses += txn.amount,
            }
        }
        Ok(totals)
    }

    pub fn count(&self) -> Result<usize, GoalflowError> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| GoalflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(transactions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn txn(kind: TransactionKind, cents: i64, category: &str, day: u32) -> Transaction {
        Transaction::new(
            kind,
            Money::from_cents(cents),
            category,
            NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
        )
    }

    fn repo_in(temp_dir: &TempDir) -> TransactionRepository {
        TransactionRepository::new(temp_dir.path().join("transactions.json"))
    }

    #[test]
    fn test_add_and_count() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        repo.add(txn(TransactionKind::Income, 100000, "salary", 1))
            .unwrap();
        repo.add(txn(TransactionKind::Expense, 4200, "food", 2))
            .unwrap();

        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        repo.add(txn(TransactionKind::Expense, 4200, "food", 2))
            .unwrap();
        repo.save().unwrap();

        let reloaded = repo_in(&temp_dir);
        reloaded.load().unwrap();
        assert_eq!(reloaded.count().unwrap(), 1);
        assert_eq!(reloaded.get_all().unwrap()[0].category, "food");
    }

    #[test]
    fn test_get_all_sorted_most_recent_first() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        repo.add(txn(TransactionKind::Expense, 100, "food", 5))
            .unwrap();
        repo.add(txn(TransactionKind::Expense, 200, "food", 20))
            .unwrap();
        repo.add(txn(TransactionKind::Expense, 300, "food", 10))
            .unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all[0].date.to_string(), "2025-03-20");
        assert_eq!(all[2].date.to_string(), "2025-03-05");
    }

    #[test]
    fn test_replace_all_discards_previous_set() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        repo.add(txn(TransactionKind::Expense, 100, "food", 1))
            .unwrap();
        repo.replace_all(vec![
            txn(TransactionKind::Income, 500, "salary", 2),
            txn(TransactionKind::Expense, 200, "transport", 3),
        ])
        .unwrap();

        assert_eq!(repo.count().unwrap(), 2);
        let totals = repo.totals().unwrap();
        assert_eq!(totals.income, Money::from_cents(500));
        assert_eq!(totals.expenses, Money::from_cents(200));
    }

    #[test]
    fn test_totals_split_by_kind() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        repo.add(txn(TransactionKind::Income, 100000, "salary", 1))
            .unwrap();
        repo.add(txn(TransactionKind::Income, 20000, "freelance", 5))
            .unwrap();
        repo.add(txn(TransactionKind::Expense, 4200, "food", 2))
            .unwrap();

        let totals = repo.totals().unwrap();
        assert_eq!(totals.income, Money::from_cents(120000));
        assert_eq!(totals.expenses, Money::from_cents(4200));
    }

    #[test]
    fn test_get_expenses_filters_income() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        repo.add(txn(TransactionKind::Income, 100000, "salary", 1))
            .unwrap();
        repo.add(txn(TransactionKind::Expense, 4200, "food", 2))
            .unwrap();

        let expenses = repo.get_expenses().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].category, "food");
    }
}
