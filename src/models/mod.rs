//! Core data models for GoalFlow
//!
//! This module contains the data structures that represent the tracking
//! domain: transactions, savings goals, and per-category budgets.

pub mod budget;
pub mod goal;
pub mod ids;
pub mod money;
pub mod transaction;

pub use budget::{Budget, BudgetStatus};
pub use goal::Goal;
pub use ids::{BudgetId, GoalId, TransactionId};
pub use money::Money;
pub use transaction::{Transaction, TransactionKind};
