//! Representacion del dinero en centavos, para no operar con punto flotante
use std::fmt;

use crate::{constants::CURRENCY, errors::CoffeeMachineError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const fn from_cents(cents: i64) -> Money {
        Money(cents)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Suma sin desbordar. Si el resultado no entra en un `i64` devuelve error.
    pub fn checked_add(self, other: Money) -> Result<Money, CoffeeMachineError> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or(CoffeeMachineError::MoneyOverflow)
    }
}


impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}{}{}.{:02}", sign, CURRENCY, abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_dollars_and_cents() {
        assert_eq!("$1.50", Money::from_cents(150).to_string());
        assert_eq!("$0.05", Money::from_cents(5).to_string());
        assert_eq!("-$2.01", Money::from_cents(-201).to_string());
    }

    #[test]
    fn should_add_amounts() {
        let total = Money::from_cents(25)
            .checked_add(Money::from_cents(10))
            .and_then(|total| total.checked_add(Money::from_cents(1)))
            .unwrap();
        assert_eq!(36, total.cents());
    }

    #[test]
    fn should_fail_instead_of_overflowing() {
        assert_eq!(
            Err(CoffeeMachineError::MoneyOverflow),
            Money::from_cents(i64::MAX).checked_add(Money::from_cents(1))
        );
    }
}
