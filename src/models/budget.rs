//! Budget model
//!
//! A budget is a per-category spending ceiling. The amount spent against it
//! is derived, never stored: it is recomputed from scratch from the expense
//! transactions on every overview.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;

/// A spending limit for a single category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// The category this budget limits (unique across budgets)
    pub category: String,

    /// Spending ceiling for the category
    pub limit: Money,

    /// When the budget was created
    pub created_at: DateTime<Utc>,

    /// When the budget was last modified
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new budget for a category
    pub fn new(category: impl Into<String>, limit: Money) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetId::new(),
            category: category.into(),
            limit,
            created_at: now,
            updated_at: now,
        }
    }

    /// Change the spending limit
    pub fn set_limit(&mut self, limit: Money) {
        self.limit = limit;
        self.updated_at = Utc::now();
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }

        if !self.limit.is_positive() {
            return Err(BudgetValidationError::NonPositiveLimit(self.limit));
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: limit {}", self.category, self.limit)
    }
}

/// A budget with its derived spending, produced by the budget service
#[derive(Debug, Clone)]
pub struct BudgetStatus {
    /// The category (or the fallback bucket name)
    pub category: String,

    /// Spending ceiling; `None` for the fallback bucket, which has no limit
    pub limit: Option<Money>,

    /// Total expense amount attributed to this category
    pub spent: Money,
}

impl BudgetStatus {
    /// Amount left under the limit (zero-clamped); `None` for the fallback bucket
    pub fn remaining(&self) -> Option<Money> {
        self.limit.map(|limit| limit.saturating_sub_at_zero(self.spent))
    }

    /// Fraction of the limit consumed, as a percentage
    pub fn percent_used(&self) -> Option<f64> {
        self.limit.map(|limit| {
            if limit.is_zero() {
                0.0
            } else {
                (self.spent.cents() as f64 / limit.cents() as f64) * 100.0
            }
        })
    }

    /// Check whether spending has exceeded the limit
    pub fn is_overspent(&self) -> bool {
        matches!(self.limit, Some(limit) if self.spent > limit)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyCategory,
    NonPositiveLimit(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Budget category cannot be empty"),
            Self::NonPositiveLimit(limit) => {
                write!(f, "Budget limit must be positive, got {}", limit)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_budget() {
        let budget = Budget::new("food", Money::from_dollars(400));
        assert_eq!(budget.category, "food");
        assert_eq!(budget.limit, Money::from_dollars(400));
        assert!(budget.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_category() {
        let budget = Budget::new("", Money::from_dollars(400));
        assert_eq!(budget.validate(), Err(BudgetValidationError::EmptyCategory));
    }

    #[test]
    fn test_validate_non_positive_limit() {
        let zero = Budget::new("food", Money::zero());
        assert!(matches!(
            zero.validate(),
            Err(BudgetValidationError::NonPositiveLimit(_))
        ));

        let negative = Budget::new("food", Money::from_cents(-100));
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_status_remaining_and_overspent() {
        let status = BudgetStatus {
            category: "food".to_string(),
            limit: Some(Money::from_dollars(400)),
            spent: Money::from_dollars(250),
        };

        assert_eq!(status.remaining(), Some(Money::from_dollars(150)));
        assert!(!status.is_overspent());

        let overspent = BudgetStatus {
            category: "food".to_string(),
            limit: Some(Money::from_dollars(400)),
            spent: Money::from_dollars(450),
        };

        assert_eq!(overspent.remaining(), Some(Money::zero()));
        assert!(overspent.is_overspent());
    }

    #[test]
    fn test_status_percent_used() {
        let status = BudgetStatus {
            category: "food".to_string(),
            limit: Some(Money::from_dollars(400)),
            spent: Money::from_dollars(100),
        };
        assert_eq!(status.percent_used(), Some(25.0));
    }

    #[test]
    fn test_fallback_bucket_has_no_limit() {
        let status = BudgetStatus {
            category: "other".to_string(),
            limit: None,
            spent: Money::from_dollars(30),
        };

        assert_eq!(status.remaining(), None);
        assert_eq!(status.percent_used(), None);
        assert!(!status.is_overspent());
    }
}
