//! Represents successful money movements
use crate::amount::Amount;
use std::fmt;

/// Money movement applied to an account
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Movement {
    /// increased balance
    Deposited(Amount),
    /// decreased balance
    Withdrawn {
        /// how much was taken
        amount: Amount,
        /// label of the account variant, see [`super::AccountKind::label`]
        from: &'static str,
    },
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Movement::Deposited(amount) => write!(f, "Deposited ${amount} into the account."),
            Movement::Withdrawn { amount, from } => write!(f, "Withdrawn ${amount} from the {from}."),
        }
    }
}
