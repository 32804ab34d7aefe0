use anyhow::Result;
use clap::{Parser, Subcommand};

use moneytrack::cli::{
    authenticate, handle_audit_command, handle_budget_command, handle_expense_command,
    handle_expenses_command, handle_history_command, handle_income_command,
    handle_register_command, handle_summary_command, handle_transfer_command, BudgetCommands,
};
use moneytrack::config::{paths::MoneyTrackPaths, settings::Settings};
use moneytrack::logging::init_tracing;
use moneytrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "moneytrack",
    version,
    about = "Personal income, expense and budget tracker",
    long_about = "MoneyTrack keeps a wallet per user: record income and expenses, \
                  set category budgets, transfer money between users and \
                  produce summary reports from the command line."
)]
struct Cli {
    /// Login of the acting user
    #[arg(long, global = true, env = "MONEYTRACK_LOGIN")]
    login: Option<String>,

    /// Password (prompted for when omitted)
    #[arg(long, global = true, env = "MONEYTRACK_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new user
    Register {
        /// Login for the new user (letters, digits, '_', '.', '-')
        #[arg(value_name = "LOGIN")]
        new_login: String,
    },

    /// Record income
    Income {
        /// Amount (e.g., "100" or "100.00")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: Option<String>,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Record an expense
    Expense {
        /// Amount (e.g., "100" or "100.00")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Category name
        category: String,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Transfer money to another user
    Transfer {
        /// Recipient login
        to: String,
        /// Amount
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },

    /// Show income, expenses and budget summary
    Summary {
        /// Write the report to this file in the reports directory
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show expense totals for the given categories
    Expenses {
        /// Category names
        #[arg(required = true)]
        categories: Vec<String>,
        /// Write the report to this file in the reports directory
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List recent transactions
    #[command(alias = "txn")]
    History {
        /// Number of transactions to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Show recent audit log entries for the current user
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = MoneyTrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_filter);

    let storage = Storage::new(paths.clone())?.with_audit(settings.audit_enabled);

    let Some(command) = cli.command else {
        println!("MoneyTrack - personal finance tracker");
        println!();
        println!("Run 'moneytrack --help' for usage information.");
        println!("Run 'moneytrack register <login>' to get started.");
        return Ok(());
    };

    let session = || authenticate(&storage, cli.login.as_deref(), cli.password.clone());

    match command {
        Commands::Register { new_login } => {
            handle_register_command(&storage, &new_login, cli.password.clone())?;
        }
        Commands::Income {
            amount,
            category,
            description,
        } => handle_income_command(
            &storage,
            &settings,
            &session()?,
            &amount,
            category,
            description,
        )?,
        Commands::Expense {
            amount,
            category,
            description,
        } => handle_expense_command(
            &storage,
            &settings,
            &session()?,
            &amount,
            &category,
            description,
        )?,
        Commands::Budget(cmd) => handle_budget_command(&storage, &settings, &session()?, cmd)?,
        Commands::Transfer { to, amount } => {
            handle_transfer_command(&storage, &settings, &session()?, &to, &amount)?
        }
        Commands::Summary { output } => {
            handle_summary_command(&storage, &settings, &session()?, output.as_deref())?
        }
        Commands::Expenses { categories, output } => handle_expenses_command(
            &storage,
            &settings,
            &session()?,
            &categories,
            output.as_deref(),
        )?,
        Commands::History { limit } => {
            handle_history_command(&storage, &settings, &session()?, limit)?
        }
        Commands::Audit { limit } => handle_audit_command(&storage, &session()?, limit)?,
        Commands::Config => {
            println!("MoneyTrack Configuration");
            println!("========================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Data directory:    {}", paths.data_dir().display());
            println!("Reports directory: {}", paths.reports_dir().display());
            println!(
                "Audit log:         {} ({} entries)",
                storage.audit().path().display(),
                storage.audit().entry_count()?
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Log filter:      {}", settings.log_filter);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
    }

    Ok(())
}
