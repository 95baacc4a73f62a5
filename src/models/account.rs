//! Account model
//!
//! A customer account is a balance plus an append-only transaction log,
//! with mutation rules that depend on the account kind. Checking accounts
//! may overdraw into a credit limit for a flat fee, savings accounts earn
//! monthly interest and never go negative, and loan accounts only shrink
//! through installments.

use std::fmt;

use crate::error::{TellerError, TellerResult};
use crate::models::transaction::{TransactionEntry, TransactionLog};

/// Kind label written to statement files for checking accounts
pub const KIND_CHECKING: &str = "CheckingAccount";
/// Kind label written to statement files for savings accounts
pub const KIND_SAVINGS: &str = "SavingAccount";
/// Kind label written to statement files for loan accounts
pub const KIND_LOAN: &str = "LoanAccount";

/// Kind-specific account state
///
/// Same capability surface (deposit / withdraw / balance enquiry), different
/// rules per kind.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountKind {
    /// Checking account with overdraft protection up to a credit limit
    Checking {
        /// How far below zero the balance may go (before the fee)
        credit_limit: f64,
        /// Flat fee charged on each overdraft withdrawal
        overdraft_fee: f64,
    },
    /// Savings account earning monthly interest
    Savings {
        /// Annual interest rate in percent
        interest_rate: f64,
    },
    /// Loan account; the balance is the outstanding principal
    Loan {
        /// Amount originally lent
        principal: f64,
        /// Annual interest rate in percent
        interest_rate: f64,
        /// Loan term in months
        duration_months: u32,
        /// Fixed installment, computed once at construction
        monthly_payment: f64,
    },
}

impl AccountKind {
    /// The kind label used in statement files
    pub fn name(&self) -> &'static str {
        match self {
            Self::Checking { .. } => KIND_CHECKING,
            Self::Savings { .. } => KIND_SAVINGS,
            Self::Loan { .. } => KIND_LOAN,
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking { .. } => write!(f, "Checking"),
            Self::Savings { .. } => write!(f, "Savings"),
            Self::Loan { .. } => write!(f, "Loan"),
        }
    }
}

/// A single customer account
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Account number, unique within the owning customer (exact-match lookup)
    pub number: String,
    /// Current balance; negative means overdrawn (checking) or overpaid (loan)
    pub balance: f64,
    /// Kind-specific state and parameters
    pub kind: AccountKind,
    log: TransactionLog,
}

impl Account {
    /// Create a checking account
    pub fn checking(
        number: impl Into<String>,
        balance: f64,
        credit_limit: f64,
        overdraft_fee: f64,
    ) -> Self {
        Self {
            number: number.into(),
            balance,
            kind: AccountKind::Checking {
                credit_limit,
                overdraft_fee,
            },
            log: TransactionLog::new(),
        }
    }

    /// Create a savings account
    pub fn savings(number: impl Into<String>, balance: f64, interest_rate: f64) -> Self {
        Self {
            number: number.into(),
            balance,
            kind: AccountKind::Savings { interest_rate },
            log: TransactionLog::new(),
        }
    }

    /// Create a loan account
    ///
    /// The balance starts at the full principal and the fixed monthly payment
    /// is derived here, once; it is never recomputed from the balance.
    pub fn loan(
        number: impl Into<String>,
        principal: f64,
        interest_rate: f64,
        duration_months: u32,
    ) -> Self {
        let monthly_payment = annuity_payment(principal, interest_rate, duration_months);
        Self {
            number: number.into(),
            balance: principal,
            kind: AccountKind::Loan {
                principal,
                interest_rate,
                duration_months,
                monthly_payment,
            },
            log: TransactionLog::new(),
        }
    }

    /// Reconstruct an account from statement-file fields.
    ///
    /// The statement format carries only the kind label, number, and balance;
    /// kind-specific parameters take their construction defaults. The stored
    /// balance is always restored so a reloaded statement re-serializes
    /// byte-for-byte.
    pub fn from_statement(kind: &str, number: &str, balance: f64) -> TellerResult<Self> {
        match kind {
            KIND_CHECKING => Ok(Self::checking(number, balance, 0.0, 0.0)),
            KIND_SAVINGS => Ok(Self::savings(number, balance, 10.0)),
            KIND_LOAN => Ok(Self::loan(number, balance, 0.0, 12)),
            other => Err(TellerError::InvalidAccountKind(other.to_string())),
        }
    }

    /// Current balance
    pub fn balance_enquiry(&self) -> f64 {
        self.balance
    }

    /// The account's transaction history
    pub fn log(&self) -> &TransactionLog {
        &self.log
    }

    /// Append a previously recorded entry with its stored timestamp
    pub fn restore_entry(&mut self, entry: TransactionEntry) {
        self.log.restore(entry);
    }

    /// Add funds to the account
    ///
    /// Checking and savings accounts accept any amount (no upper bound).
    /// Loan accounts reject the operation without touching state.
    /// Returns the updated balance.
    pub fn deposit(&mut self, amount: f64) -> TellerResult<f64> {
        if let AccountKind::Loan { .. } = self.kind {
            return Err(TellerError::UnsupportedOperation(
                "deposits are not allowed on a loan account".into(),
            ));
        }
        self.balance += amount;
        self.log.add("Deposit", amount);
        Ok(self.balance)
    }

    /// Take funds out of the account
    ///
    /// Savings withdrawals must be covered by the balance. Checking
    /// withdrawals may additionally draw on the credit limit; an overdraft
    /// leaves the balance negative by the drawn amount plus the flat fee.
    /// The fee is absorbed into the balance, not journaled separately.
    /// Returns the updated balance.
    pub fn withdraw(&mut self, amount: f64) -> TellerResult<f64> {
        match self.kind {
            AccountKind::Checking {
                credit_limit,
                overdraft_fee,
            } => {
                if self.balance + credit_limit < amount {
                    return Err(TellerError::InsufficientFunds {
                        requested: amount,
                        available: self.balance + credit_limit,
                    });
                }
                if self.balance >= amount {
                    self.balance -= amount;
                    self.log.add("Withdrawal", -amount);
                } else {
                    let overdraft = amount - self.balance;
                    self.balance = 0.0 - overdraft - overdraft_fee;
                    self.log.add("Withdrawal (Overdraft)", -amount);
                }
                Ok(self.balance)
            }
            AccountKind::Savings { .. } => {
                if self.balance < amount {
                    return Err(TellerError::InsufficientFunds {
                        requested: amount,
                        available: self.balance,
                    });
                }
                self.balance -= amount;
                self.log.add("Withdrawal", -amount);
                Ok(self.balance)
            }
            AccountKind::Loan { .. } => Err(TellerError::UnsupportedOperation(
                "withdrawals are not allowed from a loan account".into(),
            )),
        }
    }

    /// One month of interest on the current balance, unrounded
    /// (savings accounts only)
    pub fn monthly_interest(&self) -> TellerResult<f64> {
        match self.kind {
            AccountKind::Savings { interest_rate } => {
                Ok(self.balance * (interest_rate / 100.0) / 12.0)
            }
            _ => Err(TellerError::UnsupportedOperation(
                "interest is only earned on savings accounts".into(),
            )),
        }
    }

    /// Credit one month of interest to the balance and journal it
    /// (savings accounts only). Returns the new balance.
    ///
    /// Never triggered automatically; a scheduler or the CLI must call it.
    pub fn credit_interest(&mut self) -> TellerResult<f64> {
        let interest = self.monthly_interest()?;
        self.balance += interest;
        self.log.add("Interest Credit", interest);
        Ok(self.balance)
    }

    /// Apply one fixed installment to the loan (loan accounts only).
    ///
    /// The interest portion is taken from the current balance; the rest of
    /// the fixed payment reduces the principal. Returns the principal portion.
    /// Overshooting below zero is not guarded.
    pub fn pay_installment(&mut self) -> TellerResult<f64> {
        match self.kind {
            AccountKind::Loan {
                interest_rate,
                monthly_payment,
                ..
            } => {
                let interest_payment = self.balance * (interest_rate / 100.0) / 12.0;
                let principal_payment = monthly_payment - interest_payment;
                self.balance -= principal_payment;
                self.log.add("Loan Installment", -principal_payment);
                Ok(principal_payment)
            }
            _ => Err(TellerError::UnsupportedOperation(
                "installments can only be paid on a loan account".into(),
            )),
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Account #{}", self.kind, self.number)
    }
}

/// Fixed monthly payment for a loan, via the annuity factor.
///
/// The (1+r)^n terms in the numerator and denominator cancel, so the factor
/// reduces to the monthly rate r for any duration. That matches the behavior
/// of the system this one replaces, and existing statements were produced
/// with it, so the formula is kept verbatim rather than corrected to the
/// standard amortization form.
fn annuity_payment(principal: f64, interest_rate: f64, duration_months: u32) -> f64 {
    let r = interest_rate / 100.0 / 12.0;
    let n = duration_months as i32;
    let factor = (r * (1.0 + r).powi(n)) / (1.0 + r).powi(n);
    principal * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checking_deposit() {
        let mut account = Account::checking("C-1", 100.0, 50.0, 5.0);
        let balance = account.deposit(25.0).unwrap();
        assert_eq!(balance, 125.0);
        let entry = &account.log().history()[0];
        assert_eq!(entry.kind, "Deposit");
        assert_eq!(entry.amount, 25.0);
    }

    #[test]
    fn test_checking_withdraw_covered() {
        let mut account = Account::checking("C-1", 100.0, 50.0, 5.0);
        let balance = account.withdraw(40.0).unwrap();
        assert_eq!(balance, 60.0);
        let entry = &account.log().history()[0];
        assert_eq!(entry.kind, "Withdrawal");
        assert_eq!(entry.amount, -40.0);
    }

    #[test]
    fn test_checking_overdraft() {
        // balance 100, limit 50, fee 5: withdrawing 120 overdraws by 20
        // and the fee lands on top, for a balance of -25.
        let mut account = Account::checking("C-1", 100.0, 50.0, 5.0);
        let balance = account.withdraw(120.0).unwrap();
        assert_eq!(balance, -25.0);
        let entry = &account.log().history()[0];
        assert_eq!(entry.kind, "Withdrawal (Overdraft)");
        assert_eq!(entry.amount, -120.0);
    }

    #[test]
    fn test_checking_withdraw_beyond_credit_limit() {
        let mut account = Account::checking("C-1", 100.0, 50.0, 5.0);
        let err = account.withdraw(151.0).unwrap_err();
        assert!(matches!(err, TellerError::InsufficientFunds { .. }));
        // state unchanged
        assert_eq!(account.balance_enquiry(), 100.0);
        assert!(account.log().is_empty());
    }

    #[test]
    fn test_checking_withdraw_exactly_at_limit_succeeds() {
        let mut account = Account::checking("C-1", 100.0, 50.0, 5.0);
        let balance = account.withdraw(150.0).unwrap();
        assert_eq!(balance, -55.0);
    }

    #[test]
    fn test_savings_withdraw_never_negative() {
        let mut account = Account::savings("S-1", 100.0, 10.0);
        let err = account.withdraw(100.01).unwrap_err();
        assert!(matches!(err, TellerError::InsufficientFunds { .. }));
        assert_eq!(account.balance_enquiry(), 100.0);

        let balance = account.withdraw(100.0).unwrap();
        assert_eq!(balance, 0.0);
    }

    #[test]
    fn test_savings_monthly_interest() {
        let account = Account::savings("S-1", 1200.0, 12.0);
        assert_eq!(account.monthly_interest().unwrap(), 12.0);
    }

    #[test]
    fn test_savings_credit_interest() {
        let mut account = Account::savings("S-1", 1200.0, 12.0);
        let balance = account.credit_interest().unwrap();
        assert_eq!(balance, 1212.0);
        let entry = &account.log().history()[0];
        assert_eq!(entry.kind, "Interest Credit");
        assert_eq!(entry.amount, 12.0);
    }

    #[test]
    fn test_interest_on_checking_rejected() {
        let mut account = Account::checking("C-1", 100.0, 50.0, 5.0);
        assert!(matches!(
            account.credit_interest(),
            Err(TellerError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn test_loan_monthly_payment_uses_literal_formula() {
        // principal 1000, 12% annual, 12 months: the exponent terms cancel,
        // so the payment is 1000 * 0.01 = 10 regardless of duration.
        let account = Account::loan("L-1", 1000.0, 12.0, 12);
        match account.kind {
            AccountKind::Loan {
                monthly_payment, ..
            } => assert!((monthly_payment - 10.0).abs() < 1e-9),
            _ => unreachable!(),
        }

        // Same payment with a wildly different duration.
        let account = Account::loan("L-2", 1000.0, 12.0, 360);
        match account.kind {
            AccountKind::Loan {
                monthly_payment, ..
            } => assert!((monthly_payment - 10.0).abs() < 1e-9),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_loan_deposit_and_withdraw_rejected_without_mutation() {
        let mut account = Account::loan("L-1", 1000.0, 12.0, 12);
        assert!(matches!(
            account.deposit(50.0),
            Err(TellerError::UnsupportedOperation(_))
        ));
        assert!(matches!(
            account.withdraw(50.0),
            Err(TellerError::UnsupportedOperation(_))
        ));
        assert_eq!(account.balance_enquiry(), 1000.0);
        assert!(account.log().is_empty());
    }

    #[test]
    fn test_loan_pay_installment() {
        let mut account = Account::loan("L-1", 1000.0, 12.0, 12);
        // interest = 1000 * 0.01 = 10, payment = 10, principal portion = 0
        let principal_paid = account.pay_installment().unwrap();
        assert!((principal_paid - 0.0).abs() < 1e-9);
        let entry = &account.log().history()[0];
        assert_eq!(entry.kind, "Loan Installment");
    }

    #[test]
    fn test_loan_installment_reduces_balance_by_payment_minus_interest() {
        let mut account = Account::loan("L-1", 1000.0, 6.0, 12);
        let monthly_payment = match account.kind {
            AccountKind::Loan {
                monthly_payment, ..
            } => monthly_payment,
            _ => unreachable!(),
        };
        let interest = 1000.0 * 6.0 / 100.0 / 12.0;
        let principal_paid = account.pay_installment().unwrap();
        assert!((principal_paid - (monthly_payment - interest)).abs() < 1e-9);
        assert!((account.balance_enquiry() - (1000.0 - principal_paid)).abs() < 1e-9);
    }

    #[test]
    fn test_from_statement_dispatch() {
        let checking = Account::from_statement(KIND_CHECKING, "C-1", 42.5).unwrap();
        assert!(matches!(checking.kind, AccountKind::Checking { .. }));
        assert_eq!(checking.balance, 42.5);

        let savings = Account::from_statement(KIND_SAVINGS, "S-1", -3.0).unwrap();
        assert!(matches!(savings.kind, AccountKind::Savings { .. }));
        assert_eq!(savings.balance, -3.0);

        let loan = Account::from_statement(KIND_LOAN, "L-1", 900.0).unwrap();
        assert!(matches!(loan.kind, AccountKind::Loan { .. }));
        assert_eq!(loan.balance, 900.0);

        assert!(matches!(
            Account::from_statement("CryptoAccount", "X-1", 0.0),
            Err(TellerError::InvalidAccountKind(_))
        ));
    }

    #[test]
    fn test_display() {
        let account = Account::savings("S-9", 0.0, 10.0);
        assert_eq!(account.to_string(), "Savings Account #S-9");
    }
}
