//! Closed set of account variants and their withdrawal floors
use crate::errors::WithdrawErr;
use rust_decimal::Decimal;

/// Savings account balance can never go below this after a withdraw
pub const MIN_SAVINGS_BALANCE: Decimal = Decimal::ONE_HUNDRED;

/// Variant of account together with variant specific parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountKind {
    /// plain account, balance can not go below zero
    Base,
    /// account that must keep [`MIN_SAVINGS_BALANCE`]
    Savings {
        /// fraction, `0.02` is 2%
        interest_rate: Decimal,
    },
    /// account that can be overdrawn down to `-overdraft_limit`
    Current {
        /// never negative
        overdraft_limit: Decimal,
    },
}

/// Lowest balance allowed after withdraw and error reported when it would be crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Floor {
    /// lowest allowed balance
    pub min: Decimal,
    /// error reported on violation
    pub violation: WithdrawErr,
}

impl AccountKind {
    /// Floor of this variant
    pub fn floor(&self) -> Floor {
        match self {
            AccountKind::Base => Floor {
                min: Decimal::ZERO,
                violation: WithdrawErr::InsufficientFunds,
            },
            AccountKind::Savings { .. } => Floor {
                min: MIN_SAVINGS_BALANCE,
                violation: WithdrawErr::MinimumBalance,
            },
            AccountKind::Current { overdraft_limit } => Floor {
                min: -*overdraft_limit,
                violation: WithdrawErr::OverdraftLimit,
            },
        }
    }

    /// How the variant is called in operation messages
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Base => "account",
            AccountKind::Savings { .. } => "savings account",
            AccountKind::Current { .. } => "current account",
        }
    }
}

#[cfg(test)]
mod test {
    use super::{AccountKind, MIN_SAVINGS_BALANCE};
    use crate::errors::WithdrawErr;
    use rust_decimal::Decimal;

    #[test]
    fn floors_per_variant() {
        assert_eq!(AccountKind::Base.floor().min, Decimal::ZERO);

        let savings = AccountKind::Savings {
            interest_rate: Decimal::new(2, 2),
        };
        assert_eq!(savings.floor().min, MIN_SAVINGS_BALANCE);
        assert_eq!(savings.floor().violation, WithdrawErr::MinimumBalance);

        let current = AccountKind::Current {
            overdraft_limit: Decimal::new(500, 0),
        };
        assert_eq!(current.floor().min, Decimal::new(-500, 0));
        assert_eq!(current.floor().violation, WithdrawErr::OverdraftLimit);
    }
}
