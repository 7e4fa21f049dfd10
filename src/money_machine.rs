//! Manejo de monedas. Solo acumula lo ingresado; no da vuelto.
use std::str::FromStr;

use log::debug;

use crate::{
    constants::{
        DIME_VALUE_IN_CENTS, NICKEL_VALUE_IN_CENTS, PENNY_VALUE_IN_CENTS, QUARTER_VALUE_IN_CENTS,
    },
    errors::CoffeeMachineError,
    money::Money,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coin {
    Quarter,
    Dime,
    Nickel,
    Penny,
}

impl Coin {
    pub fn values() -> [Coin; 4] {
        [Coin::Quarter, Coin::Dime, Coin::Nickel, Coin::Penny]
    }

    pub fn value(&self) -> Money {
        match self {
            Coin::Quarter => Money::from_cents(QUARTER_VALUE_IN_CENTS),
            Coin::Dime => Money::from_cents(DIME_VALUE_IN_CENTS),
            Coin::Nickel => Money::from_cents(NICKEL_VALUE_IN_CENTS),
            Coin::Penny => Money::from_cents(PENNY_VALUE_IN_CENTS),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Coin::Quarter => "quarter",
            Coin::Dime => "dime",
            Coin::Nickel => "nickel",
            Coin::Penny => "penny",
        }
    }

    fn plural(&self) -> &'static str {
        match self {
            Coin::Quarter => "quarters",
            Coin::Dime => "dimes",
            Coin::Nickel => "nickels",
            Coin::Penny => "pennies",
        }
    }

    /// Moneda segun su numero en el selector, empezando en 1
    pub fn from_selection(selection: usize) -> Option<Coin> {
        selection
            .checked_sub(1)
            .and_then(|index| Coin::values().get(index).copied())
    }
}

impl FromStr for Coin {
    type Err = CoffeeMachineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        if let Ok(selection) = input.parse::<usize>() {
            return Coin::from_selection(selection)
                .ok_or_else(|| CoffeeMachineError::InvalidCoin(s.to_string()));
        }
        Coin::values()
            .into_iter()
            .find(|coin| coin.name() == input || coin.plural() == input)
            .ok_or_else(|| CoffeeMachineError::InvalidCoin(s.to_string()))
    }
}

/// Totales de dinero de la maquina
#[derive(Debug, Default)]
pub struct MoneyMachine {
    money_inserted: Money,
    cost_accumulated: Money,
}

impl MoneyMachine {
    pub fn new() -> MoneyMachine {
        MoneyMachine::default()
    }

    /// Suma el valor de la moneda a lo ingresado y devuelve el nuevo total.
    /// Si el total desborda no se modifica.
    pub fn process_coin(&mut self, value: Money) -> Result<Money, CoffeeMachineError> {
        self.money_inserted = self.money_inserted.checked_add(value)?;
        debug!("[MONEY] Inserted {}, total {}", value, self.money_inserted);
        Ok(self.money_inserted)
    }

    pub fn record_sale(&mut self, cost: Money) -> Result<(), CoffeeMachineError> {
        self.cost_accumulated = self.cost_accumulated.checked_add(cost)?;
        debug!("[MONEY] Sold for {}, accumulated {}", cost, self.cost_accumulated);
        Ok(())
    }

    pub fn money_inserted(&self) -> Money {
        self.money_inserted
    }

    pub fn cost_accumulated(&self) -> Money {
        self.cost_accumulated
    }
}
