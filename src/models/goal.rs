//! Savings goal model
//!
//! A goal is a named savings target. Goals are funded in waterfall order:
//! the position of a goal in the stored list is its priority, and earlier
//! goals are funded in full before later ones receive anything. The
//! `allocated_amount` field is the allocator's output, written back after
//! each recalculation; it is never edited directly by the user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// A user-defined savings target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier, stable across recalculations
    pub id: GoalId,

    /// Goal name (e.g., "Emergency Fund")
    pub name: String,

    /// Display icon (emoji or short label)
    #[serde(default)]
    pub icon: String,

    /// Amount needed to consider the goal fulfilled
    pub target_amount: Money,

    /// Amount currently allocated toward the goal; always <= `target_amount`
    #[serde(default)]
    pub allocated_amount: Money,

    /// When the goal was created
    pub created_at: DateTime<Utc>,

    /// When the goal was last modified
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    /// Create a new goal with nothing allocated yet
    pub fn new(name: impl Into<String>, target_amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id: GoalId::new(),
            name: name.into(),
            icon: String::new(),
            target_amount,
            allocated_amount: Money::zero(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new goal with an icon
    pub fn with_icon(name: impl Into<String>, target_amount: Money, icon: impl Into<String>) -> Self {
        let mut goal = Self::new(name, target_amount);
        goal.icon = icon.into();
        goal
    }

    /// Record a new allocation (done by the goal service after recalculation)
    pub fn set_allocated(&mut self, amount: Money) {
        self.allocated_amount = amount;
        self.updated_at = Utc::now();
    }

    /// Amount still needed to reach the target
    pub fn remaining(&self) -> Money {
        self.target_amount.saturating_sub_at_zero(self.allocated_amount)
    }

    /// Check whether the goal is fully funded
    pub fn is_funded(&self) -> bool {
        self.allocated_amount >= self.target_amount
    }

    /// Allocation progress as a percentage (0.0 - 100.0)
    ///
    /// A zero-target goal counts as fully funded.
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount.is_zero() {
            return 100.0;
        }
        (self.allocated_amount.cents() as f64 / self.target_amount.cents() as f64) * 100.0
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }

        if self.name.len() > 60 {
            return Err(GoalValidationError::NameTooLong(self.name.len()));
        }

        if self.target_amount.is_negative() {
            return Err(GoalValidationError::NegativeTarget(self.target_amount));
        }

        if self.allocated_amount.is_negative() {
            return Err(GoalValidationError::NegativeAllocation(
                self.allocated_amount,
            ));
        }

        if self.allocated_amount > self.target_amount {
            return Err(GoalValidationError::AllocationExceedsTarget {
                allocated: self.allocated_amount,
                target: self.target_amount,
            });
        }

        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} / {}",
            self.name, self.allocated_amount, self.target_amount
        )
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeTarget(Money),
    NegativeAllocation(Money),
    AllocationExceedsTarget { allocated: Money, target: Money },
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Goal name too long ({} chars, max 60)", len)
            }
            Self::NegativeTarget(amount) => {
                write!(f, "Goal target cannot be negative, got {}", amount)
            }
            Self::NegativeAllocation(amount) => {
                write!(f, "Goal allocation cannot be negative, got {}", amount)
            }
            Self::AllocationExceedsTarget { allocated, target } => {
                write!(
                    f,
                    "Allocation {} exceeds goal target {}",
                    allocated, target
                )
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}
