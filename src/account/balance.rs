use super::kind::Floor;
use crate::{amount::InvalidAmountErr, errors::WithdrawErr};
use rust_decimal::Decimal;

/// Represents current account balance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Balance {
    current: Decimal,
}

impl Balance {
    pub fn new(initial: Decimal) -> Self {
        Self { current: initial }
    }

    pub fn deposit(&mut self, amount: &Decimal) -> Result<(), InvalidAmountErr> {
        self.current = self
            .current
            .checked_add(*amount)
            .ok_or(InvalidAmountErr::Overflow)?;
        Ok(())
    }

    pub fn try_withdraw(&mut self, amount: &Decimal, floor: &Floor) -> Result<(), WithdrawErr> {
        match self.current.checked_sub(*amount) {
            Some(next) if next >= floor.min => {
                self.current = next;
                Ok(())
            }
            _ => Err(floor.violation),
        }
    }

    pub fn current(&self) -> Decimal {
        self.current
    }
}

#[cfg(test)]
mod test {
    use super::Balance;
    use crate::account::AccountKind;
    use crate::amount::InvalidAmountErr;
    use crate::errors::WithdrawErr;
    use rust_decimal::Decimal;

    #[test]
    fn withdraw_down_to_floor() {
        let floor = AccountKind::Base.floor();
        let mut b = Balance::new(Decimal::new(100, 0));

        b.try_withdraw(&Decimal::new(100, 0), &floor).unwrap();
        assert_eq!(b.current(), Decimal::ZERO);

        let e = b.try_withdraw(&Decimal::new(1, 2), &floor).unwrap_err();
        assert_eq!(e, WithdrawErr::InsufficientFunds);
        assert_eq!(b.current(), Decimal::ZERO);
    }

    #[test]
    fn overflow_keeps_balance() {
        let mut b = Balance::new(Decimal::ONE);
        assert_eq!(b.deposit(&Decimal::MAX), Err(InvalidAmountErr::Overflow));
        assert_eq!(b.current(), Decimal::ONE);

        let floor = AccountKind::Current {
            overdraft_limit: Decimal::MAX,
        }
        .floor();
        let mut b = Balance::new(Decimal::MIN);
        let e = b.try_withdraw(&Decimal::ONE, &floor).unwrap_err();
        assert_eq!(e, WithdrawErr::OverdraftLimit);
        assert_eq!(b.current(), Decimal::MIN);
    }
}
