//! Per-customer statement files
//!
//! A statement file is a human-readable dump of every account a customer
//! owns, each account a block of labelled header lines followed by its
//! transaction history and a terminating blank line:
//!
//! ```text
//! Customer: Alice Miller
//! Account Type: CheckingAccount
//! Account Number: C-1
//! Balance: -25
//! Transaction History:
//! 2023-05-01 09:30:00 - Withdrawal (Overdraft): -120
//!
//! ```
//!
//! Parsing is a single-pass, line-oriented state machine. Serialization and
//! parsing are inverses: saving, reloading, and saving again reproduces the
//! file byte for byte, which the load → mutate → save session cycle relies on.

use std::path::Path;

use crate::error::{TellerError, TellerResult};
use crate::models::{Account, Customer, TransactionEntry};

use super::file_io::{read_text_optional, write_text_atomic};

const KEY_TYPE: &str = "Account Type: ";
const KEY_NUMBER: &str = "Account Number: ";
const KEY_BALANCE: &str = "Balance: ";
const KEY_HISTORY: &str = "Transaction History:";

/// Parser position within the statement file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Between blocks, looking for the next account
    Scanning,
    /// Collecting header fields of a pending account
    InHeader,
    /// Reading transaction history lines until a blank line
    InHistory,
}

/// Header fields collected for an account before it is constructed
#[derive(Debug, Default)]
struct AccountDescriptor {
    kind: Option<String>,
    number: Option<String>,
    balance: Option<f64>,
}

impl AccountDescriptor {
    /// Finalize the descriptor into an account, if all fields were present
    /// and the kind label is known.
    fn build(&self) -> TellerResult<Account> {
        let kind = self
            .kind
            .as_deref()
            .ok_or_else(|| TellerError::MalformedRecord("account block missing type".into()))?;
        let number = self
            .number
            .as_deref()
            .ok_or_else(|| TellerError::MalformedRecord("account block missing number".into()))?;
        let balance = self
            .balance
            .ok_or_else(|| TellerError::MalformedRecord("account block missing balance".into()))?;
        Account::from_statement(kind, number, balance)
    }
}

/// Serialize a customer's accounts and histories to statement-file text
pub fn render_statement(customer: &Customer) -> String {
    let mut out = String::new();
    out.push_str("Customer: ");
    out.push_str(&customer.full_name());
    out.push('\n');

    for account in &customer.accounts {
        out.push_str(KEY_TYPE);
        out.push_str(account.kind.name());
        out.push('\n');
        out.push_str(KEY_NUMBER);
        out.push_str(&account.number);
        out.push('\n');
        // f64 Display is the shortest form that parses back exactly, so the
        // balance and amounts survive the round trip unchanged.
        out.push_str(&format!("{}{}\n", KEY_BALANCE, account.balance));
        out.push_str(KEY_HISTORY);
        out.push('\n');
        for entry in account.log().history() {
            out.push_str(&entry.to_string());
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// Parse statement text, appending the reconstructed accounts to `customer`.
///
/// Malformed records are skipped, not fatal: an unknown kind or incomplete
/// header drops that whole block, an unparseable history line drops just that
/// line, and a duplicate account number drops the later account. Returns the
/// number of records skipped.
pub fn parse_statement(contents: &str, customer: &mut Customer) -> usize {
    let mut state = ParseState::Scanning;
    let mut descriptor = AccountDescriptor::default();
    // The account whose history block was last opened; appended to the
    // customer when the next block starts, or at end of input.
    let mut current: Option<Account> = None;
    let mut skipped = 0;

    for raw in contents.lines() {
        let line = raw.trim_end();

        if let Some(kind) = line.strip_prefix(KEY_TYPE) {
            descriptor = AccountDescriptor {
                kind: Some(kind.to_string()),
                ..AccountDescriptor::default()
            };
            state = ParseState::InHeader;
        } else if let Some(number) = line.strip_prefix(KEY_NUMBER) {
            descriptor.number = Some(number.to_string());
        } else if let Some(balance) = line.strip_prefix(KEY_BALANCE) {
            // An unparseable balance leaves the field unset, so the block is
            // rejected as a whole when it is finalized below.
            descriptor.balance = balance.trim().parse().ok();
        } else if line == KEY_HISTORY {
            if let Some(done) = current.take() {
                append_account(customer, done, &mut skipped);
            }
            current = match descriptor.build() {
                Ok(account) => Some(account),
                Err(_) => {
                    skipped += 1;
                    None
                }
            };
            state = ParseState::InHistory;
        } else if line.is_empty() {
            state = ParseState::Scanning;
        } else if state == ParseState::InHistory {
            match TransactionEntry::parse_line(line) {
                // History lines keep their stored timestamps; they are
                // restored directly, never re-stamped with load time.
                Some(entry) => {
                    if let Some(account) = current.as_mut() {
                        account.restore_entry(entry);
                    }
                }
                None => skipped += 1,
            }
        }
        // Anything else (the "Customer:" heading, stray text between blocks)
        // is ignored.
    }

    if let Some(done) = current.take() {
        append_account(customer, done, &mut skipped);
    }
    skipped
}

fn append_account(customer: &mut Customer, account: Account, skipped: &mut usize) {
    if customer.add_account(account).is_err() {
        *skipped += 1;
    }
}

/// Load a customer's statement file, appending its accounts to `customer`.
///
/// A missing file means the customer has no saved accounts yet. Returns the
/// number of skipped records.
pub fn load_statement<P: AsRef<Path>>(path: P, customer: &mut Customer) -> TellerResult<usize> {
    match read_text_optional(path)? {
        Some(contents) => Ok(parse_statement(&contents, customer)),
        None => Ok(0),
    }
}

/// Save a customer's statement file, replacing its contents.
///
/// Write failures are surfaced to the caller; silent data loss on save is
/// never acceptable.
pub fn save_statement<P: AsRef<Path>>(path: P, customer: &Customer) -> TellerResult<()> {
    write_text_atomic(path, &render_statement(customer))
}
