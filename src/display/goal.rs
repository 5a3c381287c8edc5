//! Goal display formatting
//!
//! Formats savings goals for terminal output with progress bars.

use crate::config::Settings;
use crate::models::Goal;

const BAR_WIDTH: usize = 20;

/// Render a progress bar like `[########------------]`
fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}

/// Format the goal list in priority order with allocation progress
pub fn format_goal_list(goals: &[Goal], settings: &Settings) -> String {
    if goals.is_empty() {
        return "No goals yet.\n\nAdd one with 'goalflow goal add <name> <target>'.".to_string();
    }

    let name_width = goals
        .iter()
        .map(|g| g.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str("Goals (waterfall priority order):\n\n");

    for (position, goal) in goals.iter().enumerate() {
        let icon = if goal.icon.is_empty() {
            String::new()
        } else {
            format!("{} ", goal.icon)
        };

        let marker = if goal.is_funded() { "✓" } else { " " };

        output.push_str(&format!(
            "{:>2}. {}{:<width$}  {} {:>5.1}%  {} / {} {}\n",
            position + 1,
            icon,
            goal.name,
            progress_bar(goal.progress_percent()),
            goal.progress_percent(),
            goal.allocated_amount
                .format_with_symbol(&settings.currency_symbol),
            goal.target_amount
                .format_with_symbol(&settings.currency_symbol),
            marker,
            width = name_width
        ));
    }

    output
}

/// Format a single goal's details
pub fn format_goal_details(goal: &Goal, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Goal: {}\n", goal.name));
    if !goal.icon.is_empty() {
        output.push_str(&format!("Icon: {}\n", goal.icon));
    }
    output.push_str(&format!("ID: {}\n", goal.id));
    output.push_str(&format!(
        "Target: {}\n",
        goal.target_amount
            .format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!(
        "Allocated: {} ({:.1}%)\n",
        goal.allocated_amount
            .format_with_symbol(&settings.currency_symbol),
        goal.progress_percent()
    ));
    output.push_str(&format!(
        "Remaining: {}\n",
        goal.remaining().format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!(
        "Status: {}\n",
        if goal.is_funded() { "funded" } else { "saving" }
    ));

    output
}
