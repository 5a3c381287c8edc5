//! Goal CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_goal_details, format_goal_list};
use crate::error::{GoalflowError, GoalflowResult};
use crate::models::Money;
use crate::services::GoalService;
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Add a new goal at the end of the priority order
    Add {
        /// Goal name
        name: String,
        /// Target amount (e.g., "1000" or "1000.00")
        target: String,
        /// Display icon (emoji or short label)
        #[arg(short, long)]
        icon: Option<String>,
    },

    /// List goals with allocation progress
    List,

    /// Show details for a single goal
    Show {
        /// Goal name or ID
        goal: String,
    },

    /// Remove a goal
    Remove {
        /// Goal name or ID
        goal: String,
    },

    /// Recompute allocations from the current transactions
    Recalc,
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> GoalflowResult<()> {
    let service = GoalService::new(storage);

    match cmd {
        GoalCommands::Add { name, target, icon } => {
            let target = Money::parse(&target)
                .map_err(|e| GoalflowError::Validation(e.to_string()))?;

            let goal = service.create(&name, target, icon)?;
            println!(
                "Added goal '{}' with target {}",
                goal.name,
                goal.target_amount
                    .format_with_symbol(&settings.currency_symbol)
            );
        }

        GoalCommands::List => {
            let goals = service.list()?;
            println!("{}", format_goal_list(&goals, settings));
        }

        GoalCommands::Show { goal } => {
            let goal = service.find(&goal)?;
            println!("{}", format_goal_details(&goal, settings));
        }

        GoalCommands::Remove { goal } => {
            let removed = service.delete(&goal)?;
            println!("Removed goal '{}'", removed.name);
        }

        GoalCommands::Recalc => {
            let allocations = service.recalculate()?;
            let total: Money = allocations.iter().map(|a| a.amount).sum();
            println!(
                "Recalculated {} goal(s); {} allocated in total",
                allocations.len(),
                total.format_with_symbol(&settings.currency_symbol)
            );
        }
    }

    Ok(())
}
