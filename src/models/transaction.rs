//! Transaction log model
//!
//! Every balance-affecting event on an account is journaled as a timestamped
//! entry. The log is append-only and chronological; entries are immutable
//! once recorded.

use chrono::{Local, NaiveDateTime};
use std::fmt;

/// Timestamp format used in statement files (second precision)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single journaled event on an account
///
/// The amount is signed: deposits and interest credits are positive,
/// withdrawals and loan installments are negative.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionEntry {
    /// When the event happened (second precision)
    pub timestamp: NaiveDateTime,
    /// Free-form label, e.g. "Deposit", "Withdrawal (Overdraft)"
    pub kind: String,
    /// Signed amount: positive for credits, negative for debits
    pub amount: f64,
}

impl TransactionEntry {
    /// Parse a statement history line of the form
    /// `YYYY-MM-DD HH:MM:SS - <kind>: <amount>`
    ///
    /// Splits on the first `" - "` and the first `": "`, so the kind label may
    /// itself contain neither separator but the amount parse is strict.
    pub fn parse_line(line: &str) -> Option<Self> {
        let (ts_part, rest) = line.split_once(" - ")?;
        let (kind, amount_part) = rest.split_once(": ")?;
        let timestamp = NaiveDateTime::parse_from_str(ts_part, TIMESTAMP_FORMAT).ok()?;
        let amount: f64 = amount_part.trim().parse().ok()?;
        Some(Self {
            timestamp,
            kind: kind.to_string(),
            amount,
        })
    }
}

impl fmt::Display for TransactionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.kind,
            self.amount
        )
    }
}

/// Append-only, chronological journal for one account
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionLog {
    entries: Vec<TransactionEntry>,
}

impl TransactionLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event stamped with the current wall-clock time
    pub fn add(&mut self, kind: impl Into<String>, amount: f64) {
        self.entries.push(TransactionEntry {
            timestamp: Local::now().naive_local(),
            kind: kind.into(),
            amount,
        });
    }

    /// Append a previously recorded entry, preserving its stored timestamp.
    ///
    /// Used when reconstructing a log from a statement file; the stored
    /// timestamp must survive the round trip, not be replaced with load time.
    pub fn restore(&mut self, entry: TransactionEntry) {
        self.entries.push(entry);
    }

    /// The full ordered history
    pub fn history(&self) -> &[TransactionEntry] {
        &self.entries
    }

    /// Number of entries in the log
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).unwrap()
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut log = TransactionLog::new();
        log.add("Deposit", 100.0);
        log.add("Withdrawal", -40.0);

        let history = log.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].kind, "Deposit");
        assert_eq!(history[0].amount, 100.0);
        assert_eq!(history[1].kind, "Withdrawal");
        assert_eq!(history[1].amount, -40.0);
        assert!(history[0].timestamp <= history[1].timestamp);
    }

    #[test]
    fn test_restore_preserves_timestamp() {
        let mut log = TransactionLog::new();
        let entry = TransactionEntry {
            timestamp: ts("2023-05-01 09:30:00"),
            kind: "Deposit".into(),
            amount: 25.5,
        };
        log.restore(entry.clone());
        assert_eq!(log.history(), &[entry]);
    }

    #[test]
    fn test_parse_line() {
        let entry = TransactionEntry::parse_line("2023-05-01 09:30:00 - Deposit: 25.5").unwrap();
        assert_eq!(entry.timestamp, ts("2023-05-01 09:30:00"));
        assert_eq!(entry.kind, "Deposit");
        assert_eq!(entry.amount, 25.5);
    }

    #[test]
    fn test_parse_line_overdraft_kind() {
        let entry =
            TransactionEntry::parse_line("2023-05-01 09:30:00 - Withdrawal (Overdraft): -120")
                .unwrap();
        assert_eq!(entry.kind, "Withdrawal (Overdraft)");
        assert_eq!(entry.amount, -120.0);
    }

    #[test]
    fn test_parse_line_rejects_malformed() {
        assert!(TransactionEntry::parse_line("no separators here").is_none());
        assert!(TransactionEntry::parse_line("2023-05-01 09:30:00 - missing colon").is_none());
        assert!(TransactionEntry::parse_line("not-a-date - Deposit: 10").is_none());
        assert!(TransactionEntry::parse_line("2023-05-01 09:30:00 - Deposit: abc").is_none());
    }

    #[test]
    fn test_display_round_trips() {
        let entry = TransactionEntry {
            timestamp: NaiveDate::from_ymd_opt(2023, 5, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
            kind: "Interest Credit".into(),
            amount: 12.0,
        };
        let line = entry.to_string();
        assert_eq!(line, "2023-05-01 09:30:00 - Interest Credit: 12");
        assert_eq!(TransactionEntry::parse_line(&line).unwrap(), entry);
    }
}
