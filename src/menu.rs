//! Catalogo de bebidas de la maquina
use std::collections::HashSet;

use log::{debug, warn};

use crate::{
    constants::MENU_DELIMITER, errors::CoffeeMachineError, menu_item::MenuItem, money::Money,
};

/// Lista ordenada de bebidas. No se modifica una vez creada.
#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Crea el menu validando que no haya dos bebidas con el mismo nombre
    pub fn from_items(items: Vec<MenuItem>) -> Result<Menu, CoffeeMachineError> {
        let mut names = HashSet::new();
        for item in &items {
            if !names.insert(item.name()) {
                return Err(CoffeeMachineError::DuplicatedItem(item.name().to_string()));
            }
        }
        debug!("[MENU] Created menu with {} items", items.len());
        Ok(Menu { items })
    }

    /// Nombres de las bebidas en el orden del menu, cada uno seguido del separador
    pub fn get_items(&self) -> String {
        self.items
            .iter()
            .map(|item| format!("{}{}", item.name(), MENU_DELIMITER))
            .collect()
    }

    pub fn find_item(&self, name: &str) -> Result<&MenuItem, CoffeeMachineError> {
        match self.items.iter().find(|item| item.name() == name) {
            Some(item) => Ok(item),
            None => {
                warn!("[MENU] Item {} not found", name);
                Err(CoffeeMachineError::ItemNotFound(name.to_string()))
            }
        }
    }

    /// Busca por posicion, empezando en 1
    pub fn item_at(&self, position: usize) -> Result<&MenuItem, CoffeeMachineError> {
        position
            .checked_sub(1)
            .and_then(|index| self.items.get(index))
            .ok_or_else(|| CoffeeMachineError::ItemNotFound(position.to_string()))
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

impl Default for Menu {
    fn default() -> Menu {
        Menu {
            items: vec![
                MenuItem::with_quantities("espresso", 50, 0, 20, Money::from_cents(150)),
                MenuItem::with_quantities("latte", 200, 150, 25, Money::from_cents(250)),
                MenuItem::with_quantities("cappuccino", 250, 50, 25, Money::from_cents(300)),
            ],
        }
    }
}
