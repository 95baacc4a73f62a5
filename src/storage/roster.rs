//! Customer roster file
//!
//! One customer per line, comma-joined:
//! `username,password,first_name,last_name,address`. The format has no
//! escaping, so saving fails if any field contains a comma, and loading
//! skips (and counts) any line that does not split into exactly five fields.

use std::path::Path;

use crate::error::{TellerError, TellerResult};
use crate::models::Customer;

use super::file_io::{read_text_optional, write_text_atomic};

/// Number of comma-separated fields in a roster line
const ROSTER_FIELDS: usize = 5;

/// Outcome of loading the roster file
#[derive(Debug, Default)]
pub struct RosterLoad {
    /// Customers parsed from well-formed lines, in file order
    pub customers: Vec<Customer>,
    /// Number of malformed lines that were skipped
    pub skipped: usize,
}

/// Load the customer roster.
///
/// A missing file is an empty roster, not an error. Malformed lines are
/// skipped rather than failing the whole load; the caller decides how to
/// report the skip count.
pub fn load_roster<P: AsRef<Path>>(path: P) -> TellerResult<RosterLoad> {
    let Some(contents) = read_text_optional(path)? else {
        return Ok(RosterLoad::default());
    };

    let mut load = RosterLoad::default();
    for line in contents.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != ROSTER_FIELDS {
            load.skipped += 1;
            continue;
        }
        load.customers.push(Customer::new(
            fields[0], fields[1], fields[2], fields[3], fields[4],
        ));
    }
    Ok(load)
}

/// Save the customer roster, replacing the file contents.
///
/// Fails with `MalformedRecord` before writing anything if a field contains
/// a comma, since the format cannot represent it.
pub fn save_roster<P: AsRef<Path>>(path: P, customers: &[Customer]) -> TellerResult<()> {
    let mut contents = String::new();
    for customer in customers {
        let fields = [
            customer.username.as_str(),
            customer.password.as_str(),
            customer.first_name.as_str(),
            customer.last_name.as_str(),
            customer.address.as_str(),
        ];
        for field in fields {
            if field.contains(',') {
                return Err(TellerError::MalformedRecord(format!(
                    "roster field contains a comma: {:?} (customer {})",
                    field, customer.username
                )));
            }
        }
        contents.push_str(&fields.join(","));
        contents.push('\n');
    }
    write_text_atomic(path, &contents)
}
