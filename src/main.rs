use anyhow::Result;
use clap::{Parser, Subcommand};

use teller::cli::{
    handle_account_command, handle_customer_command, AccountCommands, CustomerCommands,
};
use teller::config::{paths::TellerPaths, settings::Settings};
use teller::services::Bank;

#[derive(Parser)]
#[command(
    name = "teller",
    version,
    about = "Terminal-based banking ledger with flat-file persistence",
    long_about = "teller is a small banking ledger for the terminal. Customers \
                  own checking, savings, and loan accounts; every balance change \
                  is journaled, and state is kept in plain text files between \
                  sessions."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Customer management commands
    #[command(subcommand)]
    Customer(CustomerCommands),

    /// Account management commands
    #[command(subcommand, alias = "acct")]
    Account(AccountCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TellerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Load the ledger; malformed records are skipped, not fatal
    let mut bank = Bank::new(paths.clone());
    let skipped = bank.load()?;
    if skipped > 0 {
        eprintln!(
            "Warning: skipped {} malformed record(s) while loading",
            skipped
        );
    }

    match cli.command {
        Some(Commands::Customer(cmd)) => {
            handle_customer_command(&mut bank, cmd)?;
        }
        Some(Commands::Account(cmd)) => {
            handle_account_command(&mut bank, cmd)?;
        }
        Some(Commands::Config) => {
            println!("teller Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Roster file:    {}", paths.roster_file().display());
            println!();
            println!("Settings:");
            println!("  Bank name:       {}", settings.bank_name);
            println!("  Currency symbol: {}", settings.currency_symbol);
        }
        None => {
            println!("Welcome to {}!", settings.bank_name);
            println!();
            println!("Run 'teller --help' for usage information.");
        }
    }

    Ok(())
}
