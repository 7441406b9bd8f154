//! Moving money between two accounts

use crate::account::{Account, BankAccount};
use crate::errors::TransferErr;
use rust_decimal::Decimal;
use std::fmt;
use tracing::{debug, info};

/// Result of [`transfer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    /// how much was moved, negative when the smaller balance was negative
    pub amount: Decimal,
    /// receiving account after the transfer, as plain account
    pub snapshot: BankAccount,
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transferred ${} from one account to another.",
            self.amount.normalize()
        )
    }
}

/// Move the smaller of both balances from `from` to `to`.
///
/// Floors of the variants are not checked, balances are changed as is. Returned
/// snapshot of `to` drops variant parameters, so assigning it back to a savings
/// or current account only copies identity and balance.
///
/// If either balance would overflow, error is returned and both accounts are
/// unchanged.
pub fn transfer(from: &mut BankAccount, to: &mut BankAccount) -> Result<Transfer, TransferErr> {
    let amount = from.balance().min(to.balance());

    let (from_balance, to_balance) = match (
        from.balance().checked_sub(amount),
        to.balance().checked_add(amount),
    ) {
        (Some(from_balance), Some(to_balance)) => (from_balance, to_balance),
        _ => {
            info!(from = from.id(), to = to.id(), %amount, "transfer rejected");
            return Err(TransferErr::Overflow);
        }
    };

    from.set_balance(from_balance);
    to.set_balance(to_balance);
    debug!(from = from.id(), to = to.id(), %amount, "transfer applied");

    Ok(Transfer {
        amount,
        snapshot: to.base_snapshot(),
    })
}
