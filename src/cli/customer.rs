//! Customer CLI commands
//!
//! Implements CLI commands for registration and customer views.

use clap::Subcommand;

use crate::display::{format_customer_details, format_customer_list};
use crate::error::{TellerError, TellerResult};
use crate::services::Bank;

/// Customer subcommands
#[derive(Subcommand)]
pub enum CustomerCommands {
    /// Register a new customer
    Register {
        /// Login name (unique)
        username: String,
        /// Password
        #[arg(short, long)]
        password: String,
        /// First name
        #[arg(short, long)]
        first_name: String,
        /// Last name
        #[arg(short, long)]
        last_name: String,
        /// Street address
        #[arg(short, long)]
        address: String,
    },
    /// List all registered customers
    List,
    /// Show one customer's details, accounts, and transaction history
    Show {
        /// Customer username
        username: String,
    },
}

/// Handle a customer command
pub fn handle_customer_command(bank: &mut Bank, cmd: CustomerCommands) -> TellerResult<()> {
    match cmd {
        CustomerCommands::Register {
            username,
            password,
            first_name,
            last_name,
            address,
        } => {
            let customer =
                bank.register(&username, &password, &first_name, &last_name, &address)?;
            println!("Registered customer: {}", customer.full_name());
            println!("  Username: {}", customer.username);
            bank.save()?;
        }

        CustomerCommands::List => {
            print!("{}", format_customer_list(bank.customers()));
        }

        CustomerCommands::Show { username } => {
            let customer = bank
                .find_by_username(&username)
                .ok_or_else(|| TellerError::customer_not_found(&username))?;
            print!("{}", format_customer_details(customer));
        }
    }

    Ok(())
}
