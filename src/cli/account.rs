//! Account CLI commands
//!
//! Implements CLI commands for opening accounts and applying balance
//! operations. Domain rejections (insufficient funds, operations a kind does
//! not support) are reported to the user and leave state untouched; they are
//! not process failures.

use clap::Subcommand;

use crate::display::format_account_details;
use crate::error::{TellerError, TellerResult};
use crate::models::Account;
use crate::services::Bank;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Open a new account for a customer
    Open {
        /// Customer username
        customer: String,
        /// Account number (unique per customer)
        number: String,
        /// Account kind (checking, savings, loan)
        #[arg(short = 't', long)]
        kind: String,
        /// Initial balance (checking and savings)
        #[arg(short, long, default_value_t = 0.0)]
        balance: f64,
        /// Credit limit (checking)
        #[arg(long, default_value_t = 0.0)]
        credit_limit: f64,
        /// Flat overdraft fee (checking)
        #[arg(long, default_value_t = 0.0)]
        overdraft_fee: f64,
        /// Annual interest rate in percent (savings and loan)
        #[arg(short, long, default_value_t = 10.0)]
        interest_rate: f64,
        /// Principal amount (loan)
        #[arg(short, long, default_value_t = 0.0)]
        principal: f64,
        /// Loan duration in months (loan)
        #[arg(short, long, default_value_t = 12)]
        duration: u32,
    },
    /// Deposit into an account
    Deposit {
        /// Customer username
        customer: String,
        /// Account number
        number: String,
        /// Amount to deposit
        amount: f64,
    },
    /// Withdraw from an account
    Withdraw {
        /// Customer username
        customer: String,
        /// Account number
        number: String,
        /// Amount to withdraw
        amount: f64,
    },
    /// Show an account's balance
    Balance {
        /// Customer username
        customer: String,
        /// Account number
        number: String,
    },
    /// Credit one month of interest to a savings account
    Interest {
        /// Customer username
        customer: String,
        /// Account number
        number: String,
    },
    /// Pay one installment on a loan account
    Pay {
        /// Customer username
        customer: String,
        /// Account number
        number: String,
    },
    /// Show an account's details and transaction history
    History {
        /// Customer username
        customer: String,
        /// Account number
        number: String,
    },
}

/// Handle an account command
pub fn handle_account_command(bank: &mut Bank, cmd: AccountCommands) -> TellerResult<()> {
    match cmd {
        AccountCommands::Open {
            customer,
            number,
            kind,
            balance,
            credit_limit,
            overdraft_fee,
            interest_rate,
            principal,
            duration,
        } => {
            let account = match kind.to_lowercase().as_str() {
                "checking" => Account::checking(&number, balance, credit_limit, overdraft_fee),
                "savings" => Account::savings(&number, balance, interest_rate),
                "loan" => Account::loan(&number, principal, interest_rate, duration),
                other => return Err(TellerError::InvalidAccountKind(other.to_string())),
            };

            let (label, balance) = {
                let owner = bank.customer_mut(&customer)?;
                owner.add_account(account)?;
                let opened = owner.account(&number).unwrap();
                (opened.to_string(), opened.balance_enquiry())
            };
            println!("Opened {}", label);
            println!("  Balance: {}", balance);
            bank.save()?;
        }

        AccountCommands::Deposit {
            customer,
            number,
            amount,
        } => {
            let result = lookup_account(bank, &customer, &number)?.deposit(amount);
            match result {
                Ok(balance) => {
                    println!("Deposit successful!");
                    println!("Updated balance: {}", balance);
                    bank.save()?;
                }
                Err(err) if err.is_rejection() => println!("{}", err),
                Err(err) => return Err(err),
            }
        }

        AccountCommands::Withdraw {
            customer,
            number,
            amount,
        } => {
            let result = lookup_account(bank, &customer, &number)?.withdraw(amount);
            match result {
                Ok(balance) => {
                    println!("Withdrawal successful!");
                    println!("Updated balance: {}", balance);
                    bank.save()?;
                }
                Err(err) if err.is_rejection() => println!("{}", err),
                Err(err) => return Err(err),
            }
        }

        AccountCommands::Balance { customer, number } => {
            let account = lookup_account(bank, &customer, &number)?;
            println!("Account Balance: {}", account.balance_enquiry());
        }

        AccountCommands::Interest { customer, number } => {
            let result = lookup_account(bank, &customer, &number)?.credit_interest();
            match result {
                Ok(balance) => {
                    println!("Interest credited.");
                    println!("Updated balance: {}", balance);
                    bank.save()?;
                }
                Err(err) if err.is_rejection() => println!("{}", err),
                Err(err) => return Err(err),
            }
        }

        AccountCommands::Pay { customer, number } => {
            let result = lookup_account(bank, &customer, &number)?.pay_installment();
            match result {
                Ok(principal_paid) => {
                    println!("Installment paid (principal portion: {})", principal_paid);
                    bank.save()?;
                }
                Err(err) if err.is_rejection() => println!("{}", err),
                Err(err) => return Err(err),
            }
        }

        AccountCommands::History { customer, number } => {
            let account = lookup_account(bank, &customer, &number)?;
            print!("{}", format_account_details(account));
        }
    }

    Ok(())
}

fn lookup_account<'a>(
    bank: &'a mut Bank,
    customer: &str,
    number: &str,
) -> TellerResult<&'a mut Account> {
    bank.customer_mut(customer)?
        .account_mut(number)
        .ok_or_else(|| TellerError::account_not_found(number))
}
