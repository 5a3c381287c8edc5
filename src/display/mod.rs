//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.

pub mod budget;
pub mod goal;
pub mod transaction;

pub use budget::{format_budget_list, format_budget_overview};
pub use goal::{format_goal_details, format_goal_list};
pub use transaction::{format_totals, format_transaction_list};
