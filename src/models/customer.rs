//! Customer model
//!
//! A customer is identified by username and owns an ordered collection of
//! accounts, each with a number unique within that customer.

use std::fmt;

use crate::error::{TellerError, TellerResult};
use crate::models::account::Account;

/// A bank customer and their accounts
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    /// Unique login name, the key for roster and statement files
    pub username: String,
    /// Stored in the clear; credential strength is out of scope here
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    /// Accounts in creation order
    pub accounts: Vec<Account>,
}

impl Customer {
    /// Create a customer with no accounts
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            accounts: Vec::new(),
        }
    }

    /// The customer's display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Attach a new account; the account number must not already be in use
    /// by this customer.
    pub fn add_account(&mut self, account: Account) -> TellerResult<()> {
        if self.account(&account.number).is_some() {
            return Err(TellerError::Duplicate {
                entity_type: "Account",
                identifier: account.number.clone(),
            });
        }
        self.accounts.push(account);
        Ok(())
    }

    /// Look up an account by number (case-sensitive exact match)
    pub fn account(&self, number: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.number == number)
    }

    /// Mutable account lookup by number
    pub fn account_mut(&mut self, number: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.number == number)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer: {}", self.full_name())
    }
}
