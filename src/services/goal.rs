//! Goal service
//!
//! Goal CRUD plus the recalculation flow: derive available income from the
//! transaction store, run the waterfall allocator, and persist the resulting
//! allocations back onto the goals. The allocator itself stays pure; this
//! service owns all the I/O around it.

use crate::allocator::{allocate, Allocation};
use crate::error::{GoalflowError, GoalflowResult};
use crate::models::{Goal, Money};
use crate::services::TransactionService;
use crate::storage::Storage;

/// Service for savings goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new goal at the end of the priority order
    ///
    /// Goal names must be unique (case-insensitive) so they can be used as
    /// CLI identifiers. Creating a goal triggers a recalculation.
    pub fn create(
        &self,
        name: &str,
        target_amount: Money,
        icon: Option<String>,
    ) -> GoalflowResult<Goal> {
        if self.storage.goals.find_by_name(name)?.is_some() {
            return Err(GoalflowError::Duplicate {
                entity_type: "Goal",
                identifier: name.to_string(),
            });
        }

        let goal = match icon {
            Some(icon) => Goal::with_icon(name, target_amount, icon),
            None => Goal::new(name, target_amount),
        };

        goal.validate()
            .map_err(|e| GoalflowError::Validation(e.to_string()))?;

        self.storage.goals.add(goal.clone())?;
        self.recalculate()?;

        // Re-read so the returned goal carries its fresh allocation
        self.storage
            .goals
            .get(goal.id)?
            .ok_or_else(|| GoalflowError::goal_not_found(name))
    }

    /// List all goals in priority order
    pub fn list(&self) -> GoalflowResult<Vec<Goal>> {
        self.storage.goals.get_all()
    }

    /// Find a goal by name or ID string
    pub fn find(&self, identifier: &str) -> GoalflowResult<Goal> {
        if let Some(goal) = self.storage.goals.find_by_name(identifier)? {
            return Ok(goal);
        }

        if let Ok(id) = identifier.parse() {
            if let Some(goal) = self.storage.goals.get(id)? {
                return Ok(goal);
            }
        }

        Err(GoalflowError::goal_not_found(identifier))
    }

    /// Delete a goal by name or ID, then rebalance the remaining goals
    pub fn delete(&self, identifier: &str) -> GoalflowResult<Goal> {
        let goal = self.find(identifier)?;
        self.storage.goals.delete(goal.id)?;
        self.recalculate()?;
        Ok(goal)
    }

    /// Recompute every goal's allocation from the current transaction store
    ///
    /// Allocations are rebuilt from scratch each time: available income is
    /// derived, poured through the waterfall, and the results written back
    /// and saved. Returns the allocation set.
    pub fn recalculate(&self) -> GoalflowResult<Vec<Allocation>> {
        let available = TransactionService::new(self.storage).available_income()?;
        let goals = self.storage.goals.get_all()?;

        let allocations = allocate(available, &goals);

        self.storage.goals.apply_allocations(&allocations)?;
        self.storage.goals.save()?;

        Ok(allocations)
    }
}
