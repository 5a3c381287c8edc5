//! Transaction service
//!
//! Validated writes to the transaction store. This is the boundary described
//! by the validation policy: malformed input (non-positive amounts, empty
//! categories) is rejected here so the pure computations downstream can
//! assume well-formed data.

use chrono::NaiveDate;

use crate::error::{GoalflowError, GoalflowResult};
use crate::models::{Money, Transaction, TransactionKind};
use crate::storage::{Storage, TransactionTotals};

/// Service for recording and listing transactions
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction
    pub fn add(
        &self,
        kind: TransactionKind,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
        note: Option<String>,
    ) -> GoalflowResult<Transaction> {
        let mut transaction = Transaction::new(kind, amount, category, date);
        if let Some(n) = note {
            transaction = transaction.with_note(n);
        }

        transaction
            .validate()
            .map_err(|e| GoalflowError::Validation(e.to_string()))?;

        self.storage.transactions.add(transaction.clone())?;
        self.storage.transactions.save()?;

        Ok(transaction)
    }

    /// List transactions, most recent first, optionally limited
    pub fn list(&self, limit: Option<usize>) -> GoalflowResult<Vec<Transaction>> {
        let mut transactions = self.storage.transactions.get_all()?;
        if let Some(limit) = limit {
            transactions.truncate(limit);
        }
        Ok(transactions)
    }

    /// Income and expense totals over all stored transactions
    pub fn totals(&self) -> GoalflowResult<TransactionTotals> {
        self.storage.transactions.totals()
    }

    /// Income available to save: total income minus total expenses,
    /// clamped at zero.
    ///
    /// This deliberately does NOT use all-time income alone: money already
    /// spent is not available to allocate to goals.
    pub fn available_income(&self) -> GoalflowResult<Money> {
        let totals = self.totals()?;
        Ok(totals.income.saturating_sub_at_zero(totals.expenses))
    }
}
