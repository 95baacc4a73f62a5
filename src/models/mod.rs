//! Core data models
//!
//! Contains the domain types for the ledger: transaction entries and logs,
//! accounts with their kind-specific rules, and customers.

pub mod account;
pub mod customer;
pub mod transaction;

pub use account::{Account, AccountKind};
pub use customer::Customer;
pub use transaction::{TransactionEntry, TransactionLog, TIMESTAMP_FORMAT};
