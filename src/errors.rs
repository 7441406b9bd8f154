//! Possible errors

use crate::amount::InvalidAmountErr;
use thiserror::Error;

/// Withdraw rejected by the account floor. The amount itself may also be the
/// reason, so messages cover both cases.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum WithdrawErr {
    #[error("Invalid withdrawal amount or insufficient balance.")]
    InsufficientFunds,
    #[error("Invalid withdrawal amount or insufficient balance to maintain the minimum balance.")]
    MinimumBalance,
    #[error("Invalid withdrawal amount or exceeding overdraft limit.")]
    OverdraftLimit,
}

/// Group all errors that can occurs within account module
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountErr {
    #[error("Invalid deposit amount.")]
    InvalidDeposit(#[source] InvalidAmountErr),
    #[error(transparent)]
    Withdraw(#[from] WithdrawErr),
}

/// Transfer could not be applied, both accounts are unchanged
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TransferErr {
    #[error("Transfer amount does not fit into account balance.")]
    Overflow,
}
