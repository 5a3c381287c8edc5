//! Service layer for GoalFlow
//!
//! The service layer provides business logic on top of the storage layer:
//! validation at the boundary, derived values, and the recalculation flow
//! that keeps goal allocations in sync with the transaction store.

pub mod budget;
pub mod goal;
pub mod import;
pub mod transaction;

pub use budget::BudgetService;
pub use goal::GoalService;
pub use import::{ColumnMapping, ImportResult, ImportService};
pub use transaction::TransactionService;
