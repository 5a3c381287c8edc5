//! Goal repository for JSON storage
//!
//! Goals are kept in a Vec, not a map: their position in the list is their
//! allocation priority, so insertion order must survive save/load.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::allocator::Allocation;
use crate::error::GoalflowError;
use crate::models::{Goal, GoalId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct GoalData {
    #[serde(default)]
    goals: Vec<Goal>,
}

pub struct GoalRepository {
    path: PathBuf,
    goals: RwLock<Vec<Goal>>,
}

impl GoalRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            goals: RwLock::new(Vec::new()),
        }
    }

    pub fn load(&self) -> Result<(), GoalflowError> {
        let file_data: GoalData = read_json(&self.path)?;

        let mut goals = self
            .goals
            .write()
            .map_err(|e| GoalflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *goals = file_data.goals;
        Ok(())
    }

    pub fn save(&self) -> Result<(), GoalflowError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| GoalflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = GoalData {
            goals: goals.clone(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// All goals in priority order (earliest created first)
    pub fn get_all(&self) -> Result<Vec<Goal>, GoalflowError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| GoalflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(goals.clone())
    }

    pub fn get(&self, id: GoalId) -> Result<Option<Goal>, GoalflowError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| GoalflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(goals.iter().find(|g| g.id == id).cloned())
    }

    /// Look up a goal by exact name (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> Result<Option<Goal>, GoalflowError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| GoalflowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(goals
            .iter()
            .find(|g| g.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    /// Append a goal at the end of the priority order
    pub fn add(&self, goal: Goal) -> Result<(), GoalflowError> {
        let mut goals = self
            .goals
            .write()
            .map_err(|e| GoalflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        goals.push(goal);
        Ok(())
    }

    /// Write allocator output back onto the stored goals
    pub fn apply_allocations(&self, allocations: &[Allocation]) -> Result<(), GoalflowError> {
        let mut goals = self
            .goals
            .write()
            .map_err(|e| GoalflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        for allocation in allocations {
            if let Some(goal) = goals.iter_mut().find(|g| g.id == allocation.goal_id) {
                goal.set_allocated(allocation.amount);
            }
        }
        Ok(())
    }

    pub fn delete(&self, id: GoalId) -> Result<bool, GoalflowError> {
        let mut goals = self
            .goals
            .write()
            .map_err(|e| GoalflowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = goals.len();
        goals.retain(|g| g.id != id);
        Ok(goals.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn repo_in(temp_dir: &TempDir) -> GoalRepository {
        GoalRepository::new(temp_dir.path().join("goals.json"))
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        repo.add(Goal::new("Emergency Fund", Money::from_dollars(1000)))
            .unwrap();
        repo.add(Goal::new("Vacation", Money::from_dollars(500)))
            .unwrap();
        repo.add(Goal::new("Laptop", Money::from_dollars(1500)))
            .unwrap();

        let names: Vec<String> = repo.get_all().unwrap().into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Emergency Fund", "Vacation", "Laptop"]);
    }

    #[test]
    fn test_order_survives_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        repo.add(Goal::new("First", Money::from_dollars(100))).unwrap();
        repo.add(Goal::new("Second", Money::from_dollars(200))).unwrap();
        repo.save().unwrap();

        let reloaded = repo_in(&temp_dir);
        reloaded.load().unwrap();

        let names: Vec<String> = reloaded
            .get_all()
            .unwrap()
            .into_iter()
            .map(|g| g.name)
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        repo.add(Goal::new("Emergency Fund", Money::from_dollars(1000)))
            .unwrap();

        assert!(repo.find_by_name("emergency fund").unwrap().is_some());
        assert!(repo.find_by_name("EMERGENCY FUND").unwrap().is_some());
        assert!(repo.find_by_name("vacation").unwrap().is_none());
    }

    #[test]
    fn test_apply_allocations() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        let goal_a = Goal::new("A", Money::from_dollars(100));
        let goal_b = Goal::new("B", Money::from_dollars(200));
        let id_a = goal_a.id;
        let id_b = goal_b.id;
        repo.add(goal_a).unwrap();
        repo.add(goal_b).unwrap();

        repo.apply_allocations(&[
            Allocation {
                goal_id: id_a,
                amount: Money::from_dollars(100),
            },
            Allocation {
                goal_id: id_b,
                amount: Money::from_dollars(50),
            },
        ])
        .unwrap();

        assert_eq!(
            repo.get(id_a).unwrap().unwrap().allocated_amount,
            Money::from_dollars(100)
        );
        assert_eq!(
            repo.get(id_b).unwrap().unwrap().allocated_amount,
            Money::from_dollars(50)
        );
    }

    #[test]
    fn test_delete() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        let goal = Goal::new("Gone", Money::from_dollars(100));
        let id = goal.id;
        repo.add(goal).unwrap();

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
        assert!(repo.get(id).unwrap().is_none());
    }
}
