//! Budget display formatting
//!
//! Formats the per-category budget overview for terminal output.

use crate::config::Settings;
use crate::models::{Budget, BudgetStatus};

/// Format the budget overview with spending against limits
pub fn format_budget_overview(statuses: &[BudgetStatus], settings: &Settings) -> String {
    if statuses.is_empty() {
        return "No budgets configured.\n\nAdd one with 'goalflow budget set <category> <limit>'."
            .to_string();
    }

    let name_width = statuses
        .iter()
        .map(|s| s.category.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>10}  {:>10}  {:>10}  {}\n",
        "Category",
        "Spent",
        "Limit",
        "Left",
        "",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->10}  {:->10}  {:->10}\n",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for status in statuses {
        let spent = status.spent.format_with_symbol(&settings.currency_symbol);

        let (limit, left) = match status.limit {
            Some(limit) => (
                limit.format_with_symbol(&settings.currency_symbol),
                status
                    .remaining()
                    .map(|m| m.format_with_symbol(&settings.currency_symbol))
                    .unwrap_or_default(),
            ),
            None => ("-".to_string(), "-".to_string()),
        };

        let flag = if status.is_overspent() { "OVER" } else { "" };

        output.push_str(&format!(
            "{:<width$}  {:>10}  {:>10}  {:>10}  {}\n",
            status.category,
            spent,
            limit,
            left,
            flag,
            width = name_width
        ));
    }

    output
}

/// Format the configured budget list (limits only, no spending)
pub fn format_budget_list(budgets: &[Budget], settings: &Settings) -> String {
    if budgets.is_empty() {
        return "No budgets configured.".to_string();
    }

    let mut output = String::new();
    output.push_str("Budgets:\n");

    for budget in budgets {
        output.push_str(&format!(
            "  {} - {}\n",
            budget.category,
            budget.limit.format_with_symbol(&settings.currency_symbol)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_empty_overview() {
        let output = format_budget_overview(&[], &Settings::default());
        assert!(output.contains("No budgets configured"));
    }

    #[test]
    fn test_overview_marks_overspent() {
        let statuses = vec![BudgetStatus {
            category: "food".to_string(),
            limit: Some(Money::from_dollars(400)),
            spent: Money::from_dollars(450),
        }];

        let output = format_budget_overview(&statuses, &Settings::default());
        assert!(output.contains("OVER"));
        assert!(output.contains("$450.00"));
    }

    #[test]
    fn test_overview_fallback_has_no_limit() {
        let statuses = vec![BudgetStatus {
            category: "other".to_string(),
            limit: None,
            spent: Money::from_dollars(30),
        }];

        let output = format_budget_overview(&statuses, &Settings::default());
        assert!(output.contains("other"));
        assert!(output.contains('-'));
        assert!(!output.contains("OVER"));
    }

    #[test]
    fn test_budget_list() {
        let budgets = vec![Budget::new("food", Money::from_dollars(400))];
        let output = format_budget_list(&budgets, &Settings::default());
        assert!(output.contains("food - $400.00"));
    }
}
