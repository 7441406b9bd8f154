//! Account traits and structs
use rust_decimal::Decimal;

pub(crate) mod balance;
pub(crate) mod bank_account;
pub(crate) mod kind;
pub(crate) mod movement;

pub use bank_account::BankAccount;
pub use kind::{AccountKind, Floor, MIN_SAVINGS_BALANCE};
pub use movement::Movement;

/// Represent basic account information and balance
pub trait Account {
    /// identifier of account
    fn id(&self) -> &str;
    /// name of account holder
    fn holder(&self) -> &str;
    /// current balance, negative when current account is overdrawn
    fn balance(&self) -> Decimal;
    /// variant of account with its own parameters
    fn kind(&self) -> &AccountKind;

    /// amount of money that can be withdrawn without crossing the floor
    fn available(&self) -> Decimal {
        self.balance()
            .saturating_sub(self.kind().floor().min)
            .max(Decimal::ZERO)
    }
}
