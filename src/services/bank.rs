//! The bank ledger store
//!
//! Holds the in-memory customer list with an explicit load/save lifecycle:
//! loaded once at startup from the roster and statement files, mutated
//! during the session, and written back in full on save. One session at a
//! time is assumed; if two processes write the same files concurrently the
//! last writer wins, with no merge.

use crate::config::TellerPaths;
use crate::error::{TellerError, TellerResult};
use crate::models::Customer;
use crate::storage::{load_roster, load_statement, save_roster, save_statement};

/// The in-memory ledger: every customer and their accounts
pub struct Bank {
    paths: TellerPaths,
    customers: Vec<Customer>,
}

impl Bank {
    /// Create an empty bank backed by the given paths
    pub fn new(paths: TellerPaths) -> Self {
        Self {
            paths,
            customers: Vec::new(),
        }
    }

    /// Load the roster and every customer's statement file.
    ///
    /// Missing files mean no data. Malformed roster lines and statement
    /// records are skipped; the total skip count is returned so the caller
    /// can report it.
    pub fn load(&mut self) -> TellerResult<usize> {
        let roster = load_roster(self.paths.roster_file())?;
        let mut skipped = roster.skipped;
        self.customers = roster.customers;

        for customer in &mut self.customers {
            let path = self.paths.statement_file(&customer.username);
            skipped += load_statement(path, customer)?;
        }
        Ok(skipped)
    }

    /// Write the roster and every customer's statement file back to disk.
    ///
    /// Any write failure is surfaced as a hard error; a save that silently
    /// loses data is worse than one that fails loudly.
    pub fn save(&self) -> TellerResult<()> {
        self.paths.ensure_directories()?;
        save_roster(self.paths.roster_file(), &self.customers)?;
        for customer in &self.customers {
            save_statement(self.paths.statement_file(&customer.username), customer)?;
        }
        Ok(())
    }

    /// All customers, in roster order
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Look up a customer by username
    pub fn find_by_username(&self, username: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.username == username)
    }

    /// Mutable lookup by username
    pub fn find_by_username_mut(&mut self, username: &str) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|c| c.username == username)
    }

    /// Like `find_by_username_mut` but failing with `NotFound`
    pub fn customer_mut(&mut self, username: &str) -> TellerResult<&mut Customer> {
        self.customers
            .iter_mut()
            .find(|c| c.username == username)
            .ok_or_else(|| TellerError::customer_not_found(username))
    }

    /// Register a new customer. Usernames must be unique.
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
        address: &str,
    ) -> TellerResult<&Customer> {
        if username.trim().is_empty() {
            return Err(TellerError::Validation("Username cannot be empty".into()));
        }
        if self.find_by_username(username).is_some() {
            return Err(TellerError::Duplicate {
                entity_type: "Customer",
                identifier: username.to_string(),
            });
        }
        self.customers.push(Customer::new(
            username, password, first_name, last_name, address,
        ));
        Ok(self.customers.last().unwrap())
    }

    /// Check a customer's credentials (plain equality; credential strength
    /// is out of scope)
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.find_by_username(username)
            .map(|c| c.password == password)
            .unwrap_or(false)
    }
}
