//! Storage layer for GoalFlow
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Each entity type has its own repository; `Storage` coordinates
//! them.

pub mod budgets;
pub mod file_io;
pub mod goals;
pub mod transactions;

pub use budgets::BudgetRepository;
pub use file_io::{read_json, write_json_atomic};
pub use goals::GoalRepository;
pub use transactions::{TransactionRepository, TransactionTotals};

use crate::config::paths::GoalflowPaths;
use crate::error::GoalflowError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: GoalflowPaths,
    pub goals: GoalRepository,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: GoalflowPaths) -> Result<Self, GoalflowError> {
        paths.ensure_directories()?;

        Ok(Self {
            goals: GoalRepository::new(paths.goals_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &GoalflowPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), GoalflowError> {
        self.goals.load()?;
        self.transactions.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), GoalflowError> {
        self.goals.save()?;
        self.transactions.save()?;
        self.budgets.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GoalflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        storage.load_all().unwrap();
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }

    #[test]
    fn test_save_all_writes_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GoalflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage.save_all().unwrap();

        assert!(storage.paths().goals_file().exists());
        assert!(storage.paths().transactions_file().exists());
        assert!(storage.paths().budgets_file().exists());
    }
}
