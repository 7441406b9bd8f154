use super::balance::Balance;
use super::kind::AccountKind;
use super::movement::Movement;
use super::Account;
use crate::{amount::Amount, errors::AccountErr, AccountID};
use rust_decimal::Decimal;
use std::fmt;
use tracing::{debug, info};

/// Account identity, current balance and variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankAccount {
    id: AccountID,
    holder: String,
    balance: Balance,
    kind: AccountKind,
}

impl BankAccount {
    /// Create plain account that can not be overdrawn
    pub fn new(id: impl Into<AccountID>, holder: impl Into<String>, initial: Decimal) -> Self {
        Self::with_kind(id, holder, initial, AccountKind::Base)
    }

    /// Create savings account, `interest_rate` is a fraction (`0.02` is 2%)
    pub fn savings(
        id: impl Into<AccountID>,
        holder: impl Into<String>,
        initial: Decimal,
        interest_rate: Decimal,
    ) -> Self {
        Self::with_kind(id, holder, initial, AccountKind::Savings { interest_rate })
    }

    /// Create current account. Negative `overdraft_limit` is treated as zero.
    pub fn current(
        id: impl Into<AccountID>,
        holder: impl Into<String>,
        initial: Decimal,
        overdraft_limit: Decimal,
    ) -> Self {
        let overdraft_limit = overdraft_limit.max(Decimal::ZERO);
        Self::with_kind(id, holder, initial, AccountKind::Current { overdraft_limit })
    }

    fn with_kind(
        id: impl Into<AccountID>,
        holder: impl Into<String>,
        initial: Decimal,
        kind: AccountKind,
    ) -> Self {
        Self {
            id: id.into(),
            holder: holder.into(),
            balance: Balance::new(initial),
            kind,
        }
    }

    /// increase balance by `amount`.
    ///
    /// Zero or negative `amount`, or one that would overflow the balance, is
    /// rejected and balance is not changed.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Movement, AccountErr> {
        let checked = Amount::try_from(amount)
            .and_then(|amount| self.balance.deposit(&amount).map(|_| amount));

        match checked {
            Ok(amount) => {
                debug!(account = %self.id, %amount, balance = %self.balance.current(), "deposit applied");
                Ok(Movement::Deposited(amount))
            }
            Err(e) => {
                info!(account = %self.id, %amount, reason = %e, "deposit rejected");
                Err(AccountErr::InvalidDeposit(e))
            }
        }
    }

    /// decrease balance by `amount` if it stays at or above floor of the variant.
    ///
    /// If this function return error balance was not changed.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Movement, AccountErr> {
        let floor = self.kind.floor();
        let checked = Amount::try_from(amount)
            .map_err(|_| floor.violation)
            .and_then(|amount| self.balance.try_withdraw(&amount, &floor).map(|_| amount));

        match checked {
            Ok(amount) => {
                debug!(account = %self.id, %amount, balance = %self.balance.current(), "withdraw applied");
                Ok(Movement::Withdrawn {
                    amount,
                    from: self.kind.label(),
                })
            }
            Err(e) => {
                info!(
                    account = %self.id,
                    %amount,
                    available = %self.available(),
                    "withdraw rejected"
                );
                Err(e.into())
            }
        }
    }

    /// Human readable multi-line description, same as [`fmt::Display`]
    pub fn display_details(&self) -> String {
        self.to_string()
    }

    /// Assign identity and balance of `other` to this account.
    ///
    /// Variant parameters are copied only when both accounts are current accounts,
    /// otherwise this account keeps its own variant. Assignment across variants
    /// is therefore partial.
    pub fn assign_from(&mut self, other: &BankAccount) {
        if let (
            AccountKind::Current { overdraft_limit },
            AccountKind::Current {
                overdraft_limit: other_limit,
            },
        ) = (&mut self.kind, &other.kind)
        {
            *overdraft_limit = *other_limit;
        }

        self.id = other.id.clone();
        self.holder = other.holder.clone();
        self.balance = other.balance.clone();
        debug!(account = %self.id, balance = %self.balance.current(), "account assigned");
    }

    /// Copy of identity and balance as plain account, variant parameters are dropped
    pub(crate) fn base_snapshot(&self) -> BankAccount {
        Self {
            id: self.id.clone(),
            holder: self.holder.clone(),
            balance: self.balance.clone(),
            kind: AccountKind::Base,
        }
    }

    pub(crate) fn set_balance(&mut self, balance: Decimal) {
        self.balance = Balance::new(balance);
    }
}

impl Account for BankAccount {
    fn id(&self) -> &str {
        &self.id
    }

    fn holder(&self) -> &str {
        &self.holder
    }

    fn balance(&self) -> Decimal {
        self.balance.current()
    }

    fn kind(&self) -> &AccountKind {
        &self.kind
    }
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account Details for Account (ID: {}):", self.id)?;
        writeln!(f, "   Holder: {}", self.holder)?;
        writeln!(f, "   Balance: ${}", self.balance.current().normalize())?;
        match &self.kind {
            AccountKind::Base => Ok(()),
            AccountKind::Savings { interest_rate } => {
                match interest_rate.checked_mul(Decimal::ONE_HUNDRED) {
                    Some(percent) => writeln!(f, "   Interest Rate: {}%", percent.normalize()),
                    None => writeln!(f, "   Interest Rate: {}", interest_rate.normalize()),
                }
            }
            AccountKind::Current { overdraft_limit } => {
                writeln!(f, "   Overdraft Limit: ${}", overdraft_limit.normalize())
            }
        }
    }
}
