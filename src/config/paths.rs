//! Path management for GoalFlow
//!
//! Provides platform-appropriate path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `GOALFLOW_DATA_DIR` environment variable (if set)
//! 2. Platform config directory via `directories` (e.g.
//!    `~/.config/goalflow` on Linux, `%APPDATA%\goalflow` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::GoalflowError;

/// Manages all paths used by GoalFlow
#[derive(Debug, Clone)]
pub struct GoalflowPaths {
    /// Base directory for all GoalFlow data
    base_dir: PathBuf,
}

impl GoalflowPaths {
    /// Create a new GoalflowPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, GoalflowError> {
        let base_dir = if let Ok(custom) = std::env::var("GOALFLOW_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "goalflow").ok_or_else(|| {
                GoalflowError::Config("Could not determine a home directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create GoalflowPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to goals.json
    pub fn goals_file(&self) -> PathBuf {
        self.data_dir().join("goals.json")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Get the path to budgets.json
    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), GoalflowError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| GoalflowError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| GoalflowError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if GoalFlow has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
