//! Errores de la maquina de cafe
use std::fmt;

use crate::ingredient::Ingredient;

#[derive(Debug, PartialEq, Eq)]
pub enum CoffeeMachineError {
    ItemNotFound(String),
    InsufficientResources(Ingredient),
    InvalidIngredient(String),
    DuplicatedIngredient(Ingredient),
    DuplicatedItem(String),
    InvalidCoin(String),
    ConfigurationError(String),
    MoneyOverflow,
    InvalidInput(String),
    IoError(String),
}

impl fmt::Display for CoffeeMachineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoffeeMachineError::ItemNotFound(name) => write!(f, "Sorry, item {} not found.", name),
            CoffeeMachineError::InsufficientResources(ingredient) => {
                write!(f, "Sorry there is not enough {}.", ingredient)
            }
            CoffeeMachineError::InvalidIngredient(name) => {
                write!(f, "Invalid ingredient {}", name)
            }
            CoffeeMachineError::DuplicatedIngredient(ingredient) => {
                write!(f, "Ingredient {} is used twice in the same item", ingredient)
            }
            CoffeeMachineError::DuplicatedItem(name) => {
                write!(f, "Item {} is duplicated in the menu", name)
            }
            CoffeeMachineError::InvalidCoin(coin) => write!(f, "Sorry, {} is not a coin.", coin),
            CoffeeMachineError::ConfigurationError(cause) => {
                write!(f, "Error reading configuration: {}", cause)
            }
            CoffeeMachineError::MoneyOverflow => write!(f, "Sorry, the amount is too large."),
            CoffeeMachineError::InvalidInput(cause) => {
                write!(f, "Sorry, that input could not be read: {}", cause)
            }
            CoffeeMachineError::IoError(cause) => write!(f, "I/O error: {}", cause),
        }
    }
}

impl std::error::Error for CoffeeMachineError {}

impl From<std::io::Error> for CoffeeMachineError {
    fn from(error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::InvalidData => CoffeeMachineError::InvalidInput(error.to_string()),
            _ => CoffeeMachineError::IoError(error.to_string()),
        }
    }
}

impl From<serde_json::Error> for CoffeeMachineError {
    fn from(error: serde_json::Error) -> Self {
        CoffeeMachineError::ConfigurationError(error.to_string())
    }
}
