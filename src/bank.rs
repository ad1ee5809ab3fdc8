// Account store module: the in-memory service layer the UI drives. It is
// intentionally small and synchronous; there is no persistence and no I/O
// here, so the store can be exercised directly in tests.

use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// Ways an account operation or lookup can fail. All of these are
/// recoverable: the UI reports them and returns to the menu.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankError {
    /// A deposit or withdrawal amount was zero or negative.
    #[error("amount must be positive")]
    InvalidAmount,
    /// A withdrawal would take the balance below zero.
    #[error("amount exceeds the available balance")]
    InsufficientFunds,
    /// No account matched the requested name.
    #[error("no account with that name")]
    AccountNotFound,
}

/// A named account holding a non-negative balance. The name is fixed at
/// creation; the balance changes only through `deposit` and `withdraw`,
/// both of which refuse amounts that would break the invariant.
#[derive(Debug, Clone)]
pub struct Account {
    name: String,
    balance: Decimal,
}

impl Account {
    /// Create an account with `starting_balance` already in it. Callers
    /// are expected to have validated that the balance is not negative
    /// (the create flow in `ui` re-prompts until it is).
    pub fn new(name: impl Into<String>, starting_balance: Decimal) -> Self {
        Account {
            name: name.into(),
            balance: starting_balance,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Add `amount` to the balance. Fails for zero or negative amounts,
    /// leaving the balance untouched.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::InvalidAmount);
        }
        self.balance += amount;
        Ok(())
    }

    /// Take `amount` out of the balance. Fails for zero or negative
    /// amounts and for amounts above the current balance, leaving the
    /// balance untouched. Withdrawing the exact balance is allowed.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::InvalidAmount);
        }
        if amount > self.balance {
            return Err(BankError::InsufficientFunds);
        }
        self.balance -= amount;
        Ok(())
    }
}

impl fmt::Display for Account {
    // One line per account, balance always shown with two decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account: {} - (${:.2})", self.name, self.balance)
    }
}

/// The ordered collection of accounts for the lifetime of the process.
/// Append-only; listing preserves creation order.
#[derive(Debug, Default)]
pub struct Bank {
    accounts: Vec<Account>,
}

impl Bank {
    /// Create an empty store.
    pub fn new() -> Self {
        Bank::default()
    }

    /// Append an account. Duplicate names are allowed; `find` resolves to
    /// whichever was added first.
    pub fn add(&mut self, account: Account) {
        self.accounts.push(account);
    }

    /// The first account whose name matches `query`, ignoring case.
    /// Reporting a miss to the user is the caller's job.
    pub fn find(&mut self, query: &str) -> Result<&mut Account, BankError> {
        let query = query.to_lowercase();
        self.accounts
            .iter_mut()
            .find(|account| account.name.to_lowercase() == query)
            .ok_or(BankError::AccountNotFound)
    }

    /// All accounts in creation order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bob(balance: Decimal) -> Account {
        Account::new("Bob", balance)
    }

    #[test]
    fn deposit_adds_positive_amounts() {
        let mut account = bob(dec!(100));
        assert_eq!(account.deposit(dec!(50)), Ok(()));
        assert_eq!(account.balance(), dec!(150));
    }

    #[test]
    fn deposit_rejects_zero_and_negative_amounts() {
        let mut account = bob(dec!(100));
        assert_eq!(account.deposit(dec!(0)), Err(BankError::InvalidAmount));
        assert_eq!(account.deposit(dec!(-5)), Err(BankError::InvalidAmount));
        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn withdraw_takes_up_to_the_full_balance() {
        let mut account = bob(dec!(100));
        assert_eq!(account.withdraw(dec!(40)), Ok(()));
        assert_eq!(account.balance(), dec!(60));
        assert_eq!(account.withdraw(dec!(60)), Ok(()));
        assert_eq!(account.balance(), dec!(0));
    }

    #[test]
    fn withdraw_rejects_overdraws() {
        let mut account = bob(dec!(100));
        assert_eq!(account.withdraw(dec!(150)), Err(BankError::InsufficientFunds));
        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn withdraw_rejects_zero_and_negative_amounts() {
        let mut account = bob(dec!(100));
        assert_eq!(account.withdraw(dec!(0)), Err(BankError::InvalidAmount));
        assert_eq!(account.withdraw(dec!(-1)), Err(BankError::InvalidAmount));
        assert_eq!(account.balance(), dec!(100));
    }

    #[test]
    fn display_always_shows_two_decimal_places() {
        assert_eq!(bob(dec!(150)).to_string(), "Account: Bob - ($150.00)");
        assert_eq!(
            Account::new("Alice", dec!(0.5)).to_string(),
            "Account: Alice - ($0.50)"
        );
    }

    #[test]
    fn find_ignores_case() {
        let mut bank = Bank::new();
        bank.add(Account::new("Alice", dec!(10)));
        assert!(bank.find("Alice").is_ok());
        assert!(bank.find("alice").is_ok());
        assert!(bank.find("ALICE").is_ok());
    }

    #[test]
    fn find_reports_missing_accounts() {
        let mut bank = Bank::new();
        bank.add(Account::new("Alice", dec!(10)));
        assert_eq!(bank.find("Ghost").err(), Some(BankError::AccountNotFound));
    }

    #[test]
    fn listing_preserves_creation_order() {
        let mut bank = Bank::new();
        bank.add(Account::new("Carol", dec!(1)));
        bank.add(Account::new("Alice", dec!(2)));
        bank.add(Account::new("Bob", dec!(3)));
        let names: Vec<&str> = bank.accounts().iter().map(Account::name).collect();
        assert_eq!(names, ["Carol", "Alice", "Bob"]);
    }

    #[test]
    fn duplicate_names_resolve_to_the_first_account() {
        let mut bank = Bank::new();
        bank.add(Account::new("Bob", dec!(100)));
        bank.add(Account::new("bob", dec!(999)));
        // Both entries exist; lookup always lands on the earlier one.
        assert_eq!(bank.accounts().len(), 2);
        assert_eq!(bank.find("BOB").unwrap().balance(), dec!(100));
    }
}
