//! Budget repository for JSON storage
//!
//! One budget per category; the category string is the natural key.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::GoalflowError;
use crate::models::{Budget, Money};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<Budget>,
}

pub struct BudgetRepository {
    path: PathBuf,
    budgets: RwLock<Vec<Budget>>,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(Vec::new()),
        }
    }

    pub fn load(&self) -> Result<(), GoalflowError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| GoalflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *budgets = file_data.budgets;
        Ok(())
    }

    pub fn save(&self) -> Result<(), GoalflowError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| GoalflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut budget_list = budgets.clone();
        budget_list.sort_by(|a, b| a.category.cmp(&b.category));

        let file_data = BudgetData {
            budgets: budget_list,
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// All budgets sorted by category name
    pub fn get_all(&self) -> Result<Vec<Budget>, GoalflowError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| GoalflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list = budgets.clone();
        list.sort_by(|a, b| a.category.cmp(&b.category));
        Ok(list)
    }

    pub fn get_by_category(&self, category: &str) -> Result<Option<Budget>, GoalflowError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| GoalflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.iter().find(|b| b.category == category).cloned())
    }

    /// Insert a budget for a new category, or update the limit of an existing one
    pub fn upsert(&self, category: &str, limit: Money) -> Result<Budget, GoalflowError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| GoalflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(existing) = budgets.iter_mut().find(|b| b.category == category) {
            existing.set_limit(limit);
            Ok(existing.clone())
        } else {
            let budget = Budget::new(category, limit);
            budgets.push(budget.clone());
            Ok(budget)
        }
    }

    pub fn delete_by_category(&self, category: &str) -> Result<bool, GoalflowError> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| GoalflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = budgets.len();
        budgets.retain(|b| b.category != category);
        Ok(budgets.len() < before)
    }

    /// The category names of all configured budgets
    pub fn categories(&self) -> Result<Vec<String>, GoalflowError> {
        Ok(self.get_all()?.into_iter().map(|b| b.category).collect())
    }
}
