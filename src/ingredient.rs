//! Ingredientes que usa la maquina
use std::{fmt, str::FromStr};

use crate::errors::CoffeeMachineError;

pub const TOTAL_INGREDIENTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ingredient {
    Water,
    Milk,
    Coffee,
}

impl Ingredient {
    /// Todos los ingredientes, en el orden en que se muestran
    pub fn values() -> [Ingredient; TOTAL_INGREDIENTS] {
        [Ingredient::Water, Ingredient::Milk, Ingredient::Coffee]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Ingredient::Water => "water",
            Ingredient::Milk => "milk",
            Ingredient::Coffee => "coffee",
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Ingredient {
    type Err = CoffeeMachineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ingredient::values()
            .into_iter()
            .find(|ingredient| ingredient.name() == s)
            .ok_or_else(|| CoffeeMachineError::InvalidIngredient(s.to_string()))
    }
}
