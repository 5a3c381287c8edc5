use anyhow::Result;
use clap::{Parser, Subcommand};

use goalflow::cli::{
    handle_budget_command, handle_goal_command, handle_transaction_command, BudgetCommands,
    GoalCommands, TransactionCommands,
};
use goalflow::config::{GoalflowPaths, Settings};
use goalflow::storage::Storage;

#[derive(Parser)]
#[command(
    name = "goalflow",
    version,
    about = "Terminal savings-goal and budget tracker",
    long_about = "GoalFlow tracks income, expenses, and per-category budgets, and \
                  funds your savings goals by waterfall priority: the first goal \
                  you create is filled completely before the next one sees a cent."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Goal management commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Initialize the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = GoalflowPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Commands::Goal(cmd) => {
            handle_goal_command(&storage, &settings, cmd)?;
        }
        Commands::Budget(cmd) => {
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Commands::Transaction(cmd) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Commands::Init => {
            if paths.is_initialized() {
                println!("Already initialized at {}", paths.base_dir().display());
            } else {
                let mut settings = Settings::default();
                settings.setup_completed = true;
                settings.save(&paths)?;
                storage.save_all()?;
                println!("Initialized GoalFlow at {}", paths.base_dir().display());
            }
        }
        Commands::Config => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Currency:       {}", settings.currency_symbol);
            println!("Date format:    {}", settings.date_format);
            println!("Fallback:       {}", settings.fallback_category);
        }
    }

    Ok(())
}
