//! Budget service
//!
//! Per-category limit management and the spending overview. Spending is
//! never stored: every overview re-aggregates the expense transactions
//! against the configured categories, with unrecognized categories routed to
//! the fallback bucket.

use crate::allocator::aggregate_spend;
use crate::config::Settings;
use crate::error::{GoalflowError, GoalflowResult};
use crate::models::{Budget, BudgetStatus, Money};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set (or update) the spending limit for a category
    pub fn set_limit(&self, category: &str, limit: Money) -> GoalflowResult<Budget> {
        let candidate = Budget::new(category, limit);
        candidate
            .validate()
            .map_err(|e| GoalflowError::Validation(e.to_string()))?;

        let budget = self.storage.budgets.upsert(category.trim(), limit)?;
        self.storage.budgets.save()?;
        Ok(budget)
    }

    /// List configured budgets sorted by category
    pub fn list(&self) -> GoalflowResult<Vec<Budget>> {
        self.storage.budgets.get_all()
    }

    /// Remove the budget for a category
    pub fn remove(&self, category: &str) -> GoalflowResult<()> {
        if !self.storage.budgets.delete_by_category(category)? {
            return Err(GoalflowError::budget_not_found(category));
        }
        self.storage.budgets.save()?;
        Ok(())
    }

    /// Compute the current spending status of every budget
    ///
    /// Returns one status per configured category plus the fallback bucket,
    /// which absorbs expenses whose category matches no budget. The bucket
    /// totals always account for every expense transaction.
    pub fn overview(&self, settings: &Settings) -> GoalflowResult<Vec<BudgetStatus>> {
        let budgets = self.storage.budgets.get_all()?;
        let known: Vec<String> = budgets.iter().map(|b| b.category.clone()).collect();
        let expenses = self.storage.transactions.get_expenses()?;

        let buckets = aggregate_spend(&expenses, &known, &settings.fallback_category);

        let mut statuses: Vec<BudgetStatus> = budgets
            .iter()
            .map(|budget| BudgetStatus {
                category: budget.category.clone(),
                limit: Some(budget.limit),
                spent: buckets
                    .get(&budget.category)
                    .copied()
                    .unwrap_or_else(Money::zero),
            })
            .collect();

        // Fallback bucket, unless a budget already claims that category
        if !known.contains(&settings.fallback_category) {
            statuses.push(BudgetStatus {
                category: settings.fallback_category.clone(),
                limit: None,
                spent: buckets
                    .get(&settings.fallback_category)
                    .copied()
                    .unwrap_or_else(Money::zero),
            });
        }

        Ok(statuses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::GoalflowPaths;
    use crate::models::TransactionKind;
    use crate::services::TransactionService;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = GoalflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn add_expense(storage: &Storage, cents: i64, category: &str) {
        TransactionService::new(storage)
            .add(
                TransactionKind::Expense,
                Money::from_cents(cents),
                category,
                NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                None,
            )
            .unwrap();
    }

    #[test]
    fn test_set_limit_creates_and_updates() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set_limit("food", Money::from_dollars(400)).unwrap();
        service.set_limit("food", Money::from_dollars(450)).unwrap();

        let budgets = service.list().unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].limit, Money::from_dollars(450));
    }

    #[test]
    fn test_set_limit_rejects_non_positive() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let result = service.set_limit("food", Money::zero());
        assert!(matches!(result, Err(GoalflowError::Validation(_))));
    }

    #[test]
    fn test_remove_missing_is_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let result = service.remove("food");
        assert!(matches!(result, Err(e) if e.is_not_found()));
    }

    #[test]
    fn test_overview_attributes_spending_per_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        let settings = Settings::default();

        service.set_limit("food", Money::from_dollars(400)).unwrap();
        service
            .set_limit("transport", Money::from_dollars(150))
            .unwrap();

        add_expense(&storage, 3000, "food");
        add_expense(&storage, 2500, "food");
        add_expense(&storage, 1000, "transport");

        let overview = service.overview(&settings).unwrap();

        let food = overview.iter().find(|s| s.category == "food").unwrap();
        assert_eq!(food.spent, Money::from_cents(5500));
        assert!(!food.is_overspent());

        let transport = overview.iter().find(|s| s.category == "transport").unwrap();
        assert_eq!(transport.spent, Money::from_cents(1000));
    }

    #[test]
    fn test_overview_routes_unknown_to_fallback() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        let settings = Settings::default();

        service.set_limit("food", Money::from_dollars(400)).unwrap();
        add_expense(&storage, 3000, "mystery");

        let overview = service.overview(&settings).unwrap();

        let food = overview.iter().find(|s| s.category == "food").unwrap();
        assert_eq!(food.spent, Money::zero());

        let other = overview.iter().find(|s| s.category == "other").unwrap();
        assert_eq!(other.spent, Money::from_cents(3000));
        assert_eq!(other.limit, None);
    }

    #[test]
    fn test_overview_conserves_every_expense() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        let settings = Settings::default();

        service.set_limit("food", Money::from_dollars(400)).unwrap();
        add_expense(&storage, 3000, "food");
        add_expense(&storage, 700, "mystery");
        add_expense(&storage, 1200, "also-unknown");

        let overview = service.overview(&settings).unwrap();
        let total: Money = overview.iter().map(|s| s.spent).sum();
        assert_eq!(total, Money::from_cents(4900));
    }

    #[test]
    fn test_overview_empty_transactions_all_zero() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        let settings = Settings::default();

        service.set_limit("food", Money::from_dollars(400)).unwrap();

        let overview = service.overview(&settings).unwrap();
        assert!(overview.iter().all(|s| s.spent.is_zero()));
    }

    #[test]
    fn test_overview_ignores_income_transactions() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        let settings = Settings::default();

        service.set_limit("food", Money::from_dollars(400)).unwrap();
        TransactionService::new(&storage)
            .add(
                TransactionKind::Income,
                Money::from_dollars(1000),
                "salary",
                NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                None,
            )
            .unwrap();

        let overview = service.overview(&settings).unwrap();
        let total: Money = overview.iter().map(|s| s.spent).sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_overview_budget_on_fallback_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        let settings = Settings::default();

        service.set_limit("other", Money::from_dollars(100)).unwrap();
        add_expense(&storage, 2000, "mystery");

        let overview = service.overview(&settings).unwrap();
        // Single bucket: the budgeted "other" absorbs the unknown spend
        let others: Vec<_> = overview.iter().filter(|s| s.category == "other").collect();
        assert_eq!(others.len(), 1);
        assert_eq!(others[0].spent, Money::from_cents(2000));
        assert_eq!(others[0].limit, Some(Money::from_dollars(100)));
    }
}
