//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_budget_list, format_budget_overview};
use crate::error::{GoalflowError, GoalflowResult};
use crate::models::Money;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set (or update) the spending limit for a category
    Set {
        /// Category name
        category: String,
        /// Limit amount (e.g., "400" or "400.00")
        limit: String,
    },

    /// Show spending against every budget
    Overview,

    /// List configured limits
    List,

    /// Remove the budget for a category
    Remove {
        /// Category name
        category: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> GoalflowResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Set { category, limit } => {
            let limit = Money::parse(&limit)
                .map_err(|e| GoalflowError::Validation(e.to_string()))?;

            let budget = service.set_limit(&category, limit)?;
            println!(
                "Budget for '{}' set to {}",
                budget.category,
                budget.limit.format_with_symbol(&settings.currency_symbol)
            );
        }

        BudgetCommands::Overview => {
            let overview = service.overview(settings)?;
            println!("{}", format_budget_overview(&overview, settings));
        }

        BudgetCommands::List => {
            let budgets = service.list()?;
            println!("{}", format_budget_list(&budgets, settings));
        }

        BudgetCommands::Remove { category } => {
            service.remove(&category)?;
            println!("Removed budget for '{}'", category);
        }
    }

    Ok(())
}
