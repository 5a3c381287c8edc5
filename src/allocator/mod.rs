//! Waterfall allocation and spend aggregation
//!
//! The two pure computations at the center of GoalFlow. Both are plain
//! functions of their inputs: no storage access, no clock, no side effects.
//! The services layer is responsible for deriving their inputs from the
//! repositories and persisting their outputs.
//!
//! Allocation uses strict waterfall priority: goals earlier in the list are
//! funded in full before later goals receive any surplus. This matches the
//! "emergency fund first, then discretionary goals" ordering implied by goal
//! creation order, and is deliberately NOT a proportional split.

use std::collections::HashMap;

use crate::models::{Goal, GoalId, Money, Transaction};

/// The outcome of allocating income to a single goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    /// The goal this allocation belongs to
    pub goal_id: GoalId,

    /// Amount allocated; always <= the goal's target and never more than
    /// the income remaining when the goal's turn came
    pub amount: Money,
}

/// Allocate available income across goals in waterfall priority order.
///
/// Each goal receives `min(remaining, target_amount)`, where `remaining`
/// starts at `total_income` and is decremented by each allocation in list
/// order. Consequences:
///
/// - the sum of allocations never exceeds `total_income`;
/// - no goal receives more than its target;
/// - if income covers the sum of all targets, every goal is fully funded;
/// - a zero-target goal receives nothing and consumes nothing.
///
/// Callers must pass non-negative amounts; validation happens at the model
/// boundary, not here.
pub fn allocate(total_income: Money, goals: &[Goal]) -> Vec<Allocation> {
    let mut remaining = total_income;

    goals
        .iter()
        .map(|goal| {
            let amount = remaining.min(goal.target_amount);
            remaining -= amount;
            Allocation {
                goal_id: goal.id,
                amount,
            }
        })
        .collect()
}

/// Partition expense amounts into per-category buckets.
///
/// Every category in `known_categories` gets a bucket, zero-valued if
/// unused. Transactions whose category matches no known category are added
/// to the `fallback` bucket, so the bucket totals always sum to the total of
/// the input amounts (no transaction is dropped).
///
/// Callers pass expense transactions only; the computation is rebuilt from
/// scratch on every call.
pub fn aggregate_spend(
    expenses: &[Transaction],
    known_categories: &[String],
    fallback: &str,
) -> HashMap<String, Money> {
    let mut buckets: HashMap<String, Money> = known_categories
        .iter()
        .map(|c| (c.clone(), Money::zero()))
        .collect();
    buckets.entry(fallback.to_string()).or_insert(Money::zero());

    for txn in expenses {
        let key = if known_categories.contains(&txn.category) {
            txn.category.as_str()
        } else {
            fallback
        };
        // Bucket exists: seeded above for known categories and the fallback
        if let Some(bucket) = buckets.get_mut(key) {
            *bucket += txn.amount;
        }
    }

    buckets
}
