//! Customer display formatting
//!
//! Formats customers, their accounts, and transaction histories for
//! terminal output.

use crate::models::{Account, Customer};

/// Format a roster of customers as a table
pub fn format_customer_list(customers: &[Customer]) -> String {
    if customers.is_empty() {
        return "No customers registered.\n".to_string();
    }

    let username_width = customers
        .iter()
        .map(|c| c.username.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let name_width = customers
        .iter()
        .map(|c| c.full_name().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<username_width$}  {:<name_width$}  {:>8}\n",
        "Username",
        "Name",
        "Accounts",
        username_width = username_width,
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<username_width$}  {:-<name_width$}  {:->8}\n",
        "",
        "",
        "",
        username_width = username_width,
        name_width = name_width,
    ));

    for customer in customers {
        output.push_str(&format!(
            "{:<username_width$}  {:<name_width$}  {:>8}\n",
            customer.username,
            customer.full_name(),
            customer.accounts.len(),
            username_width = username_width,
            name_width = name_width,
        ));
    }

    output
}

/// Format full details for one customer: identity, every account, and each
/// account's transaction history.
pub fn format_customer_details(customer: &Customer) -> String {
    let mut output = String::new();
    output.push_str("--- Customer Details ---\n");
    output.push_str(&format!("Username: {}\n", customer.username));
    output.push_str(&format!("Name: {}\n", customer.full_name()));
    output.push_str(&format!("Address: {}\n", customer.address));
    output.push('\n');
    output.push_str("--- Account Details ---\n");

    if customer.accounts.is_empty() {
        output.push_str("No accounts.\n");
        return output;
    }

    for account in &customer.accounts {
        output.push_str(&format_account_details(account));
        output.push('\n');
    }
    output
}

/// Format one account's header and history
pub fn format_account_details(account: &Account) -> String {
    let mut output = String::new();
    output.push_str(&format!("Account Type: {}\n", account.kind));
    output.push_str(&format!("Account Number: {}\n", account.number));
    output.push_str(&format!("Balance: {}\n", account.balance_enquiry()));
    output.push_str("Transaction History:\n");
    if account.log().is_empty() {
        output.push_str("  (none)\n");
    }
    for entry in account.log().history() {
        output.push_str(&format!("  {}\n", entry));
    }
    output
}
