//! Producto del menu: una bebida con sus ingredientes y su precio
use std::collections::BTreeMap;

use crate::{errors::CoffeeMachineError, ingredient::Ingredient, money::Money};

/// Cada ingrediente aparece una sola vez
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    name: String,
    ingredients: BTreeMap<Ingredient, u64>,
    cost: Money,
}

impl MenuItem {
    /// Falla si se repite un ingrediente
    pub fn new(
        name: &str,
        ingredients: Vec<(Ingredient, u64)>,
        cost: Money,
    ) -> Result<MenuItem, CoffeeMachineError> {
        let mut quantities = BTreeMap::new();
        for (ingredient, quantity) in ingredients {
            if quantities.insert(ingredient, quantity).is_some() {
                return Err(CoffeeMachineError::DuplicatedIngredient(ingredient));
            }
        }
        Ok(MenuItem {
            name: name.to_string(),
            ingredients: quantities,
            cost,
        })
    }

    /// Crea una bebida que usa agua, leche y cafe en las cantidades indicadas
    pub fn with_quantities(name: &str, water: u64, milk: u64, coffee: u64, cost: Money) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            ingredients: BTreeMap::from([
                (Ingredient::Water, water),
                (Ingredient::Milk, milk),
                (Ingredient::Coffee, coffee),
            ]),
            cost,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &BTreeMap<Ingredient, u64> {
        &self.ingredients
    }

    pub fn cost(&self) -> Money {
        self.cost
    }

    /// Cantidad requerida de un ingrediente, 0 si la bebida no lo usa
    pub fn quantity_of(&self, ingredient: Ingredient) -> u64 {
        self.ingredients.get(&ingredient).copied().unwrap_or(0)
    }
}
