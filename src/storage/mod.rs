//! Flat-file storage layer
//!
//! Two text formats make up the ledger on disk: the comma-separated customer
//! roster, and one free-text statement file per customer holding accounts and
//! transaction histories.

pub mod file_io;
pub mod roster;
pub mod statement;

pub use roster::{load_roster, save_roster, RosterLoad};
pub use statement::{load_statement, parse_statement, render_statement, save_statement};
