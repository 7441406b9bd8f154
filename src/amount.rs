//! Money moved by a single deposit or withdraw.
//!
//! Every [`crate::account::BankAccount`] operation first turns the raw
//! `Decimal` it was given into an [`Amount`]; a rejected conversion is the
//! invalid-amount outcome of that operation and the balance is not touched.

use std::{borrow::Borrow, fmt, ops::Deref};

use rust_decimal::Decimal;
use thiserror::Error;

/// Deposit or withdraw amount, always greater than zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(Decimal);

/// Why an amount can not be applied to a balance
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InvalidAmountErr {
    /// zero or negative amount
    #[error("amount must be greater than zero")]
    NotPositive,
    /// balance would leave the range representable by `Decimal`
    #[error("amount does not fit into account balance")]
    Overflow,
}

impl TryFrom<Decimal> for Amount {
    type Error = InvalidAmountErr;
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(InvalidAmountErr::NotPositive)
        }
    }
}

// balances are plain `Decimal`, arithmetic on them goes through these
impl Borrow<Decimal> for Amount {
    fn borrow(&self) -> &Decimal {
        &self.0
    }
}

impl Deref for Amount {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        self.borrow()
    }
}

/// Printed without trailing zeros, `500.00` shows as `500`
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

#[cfg(test)]
mod test {
    use super::{Amount, InvalidAmountErr};
    use rust_decimal::Decimal;

    #[test]
    fn zero_and_negative_are_rejected() {
        assert_eq!(
            Amount::try_from(Decimal::ZERO),
            Err(InvalidAmountErr::NotPositive)
        );
        assert_eq!(
            Amount::try_from(Decimal::new(-1, 2)),
            Err(InvalidAmountErr::NotPositive)
        );
        assert_eq!(
            Amount::try_from(Decimal::MIN),
            Err(InvalidAmountErr::NotPositive)
        );
    }

    #[test]
    fn positive_amount_keeps_value() {
        let a = Amount::try_from(Decimal::new(1505, 1)).unwrap();
        assert_eq!(*a, Decimal::new(1505, 1));
        assert_eq!(a.to_string(), "150.5");
        assert_eq!(Amount::try_from(Decimal::new(50000, 2)).unwrap().to_string(), "500");
    }
}
