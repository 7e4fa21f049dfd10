//! Inventario de ingredientes de la maquina. Decide si una bebida se puede preparar y
//! descuenta los ingredientes cuando se prepara.
use std::collections::BTreeMap;

use log::{debug, info};
use serde::Deserialize;

use crate::{
    constants::{
        COFFEE_MACHINE_COFFEE_STORAGE, COFFEE_MACHINE_MILK_STORAGE, COFFEE_MACHINE_WATER_STORAGE,
        COFFEE_MAKER_COFFEE_STORAGE, COFFEE_MAKER_MILK_STORAGE, COFFEE_MAKER_WATER_STORAGE,
    },
    container::Container,
    errors::CoffeeMachineError,
    ingredient::Ingredient,
    menu_item::MenuItem,
};

/// Inventarios iniciales conocidos
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryPreset {
    /// 300 de agua, 200 de leche, 100 de cafe
    #[default]
    CoffeeMaker,
    /// 1000 de agua, 500 de leche, 500 de cafe
    CoffeeMachine,
}

impl InventoryPreset {
    pub fn quantities(&self) -> Vec<(Ingredient, u64)> {
        match self {
            InventoryPreset::CoffeeMaker => vec![
                (Ingredient::Water, COFFEE_MAKER_WATER_STORAGE),
                (Ingredient::Milk, COFFEE_MAKER_MILK_STORAGE),
                (Ingredient::Coffee, COFFEE_MAKER_COFFEE_STORAGE),
            ],
            InventoryPreset::CoffeeMachine => vec![
                (Ingredient::Water, COFFEE_MACHINE_WATER_STORAGE),
                (Ingredient::Milk, COFFEE_MACHINE_MILK_STORAGE),
                (Ingredient::Coffee, COFFEE_MACHINE_COFFEE_STORAGE),
            ],
        }
    }
}

/// Contenedores de la maquina, uno por ingrediente.
///
/// No tiene sincronizacion interna: si se comparte entre hilos hay que protegerlo con un
/// `Mutex` tomado durante todo el `try_fulfill`.
#[derive(Debug, Clone)]
pub struct ResourceLedger {
    resources: BTreeMap<Ingredient, Container>,
}

impl ResourceLedger {
    pub fn new(quantities: Vec<(Ingredient, u64)>) -> ResourceLedger {
        let resources = quantities
            .into_iter()
            .map(|(ingredient, quantity)| (ingredient, Container::new(quantity)))
            .collect();
        ResourceLedger { resources }
    }

    pub fn from_preset(preset: InventoryPreset) -> ResourceLedger {
        info!("[LEDGER] Starting with preset {:?}", preset);
        ResourceLedger::new(preset.quantities())
    }

    /// Verifica que alcancen todos los ingredientes de la bebida. No modifica nada.
    pub fn resources_are_sufficient(&self, order: &MenuItem) -> Result<bool, CoffeeMachineError> {
        Ok(self.missing_ingredient(order)?.is_none())
    }

    /// Descuenta los ingredientes de la bebida.
    ///
    /// No verifica antes que alcancen: hay que llamar a `resources_are_sufficient` primero.
    /// Si algun ingrediente no alcanza devuelve error sin tocar el inventario.
    pub fn make_coffee(&mut self, order: &MenuItem) -> Result<(), CoffeeMachineError> {
        let mut updated = self.resources.clone();
        for (ingredient, quantity_required) in order.ingredients() {
            let container = updated
                .get_mut(ingredient)
                .ok_or_else(|| CoffeeMachineError::InvalidIngredient(ingredient.to_string()))?;
            let remaining = container
                .consume(*quantity_required)
                .ok_or(CoffeeMachineError::InsufficientResources(*ingredient))?;
            debug!(
                "[LEDGER] Uses {} of {} for {}, remains {}",
                quantity_required,
                ingredient,
                order.name(),
                remaining
            );
        }
        self.resources = updated;
        Ok(())
    }

    /// Verifica y descuenta en una sola operacion
    pub fn try_fulfill(&mut self, order: &MenuItem) -> Result<(), CoffeeMachineError> {
        if let Some(ingredient) = self.missing_ingredient(order)? {
            info!("[LEDGER] Skipped {}, not enough {}", order.name(), ingredient);
            return Err(CoffeeMachineError::InsufficientResources(ingredient));
        }
        self.make_coffee(order)
    }

    /// Primer ingrediente de la bebida que no alcanza, si hay alguno
    pub fn missing_ingredient(
        &self,
        order: &MenuItem,
    ) -> Result<Option<Ingredient>, CoffeeMachineError> {
        let mut missing = None;
        for (ingredient, quantity_required) in order.ingredients() {
            let container = self.get_container(ingredient)?;
            if missing.is_none() && !container.has_at_least(*quantity_required) {
                missing = Some(*ingredient);
            }
        }
        Ok(missing)
    }

    pub fn remaining(&self, ingredient: Ingredient) -> Option<u64> {
        self.resources.get(&ingredient).map(|container| container.remaining)
    }

    pub fn consumed(&self, ingredient: Ingredient) -> Option<u64> {
        self.resources.get(&ingredient).map(|container| container.consumed)
    }

    pub fn containers(&self) -> impl Iterator<Item = (&Ingredient, &Container)> {
        self.resources.iter()
    }

    fn get_container(&self, ingredient: &Ingredient) -> Result<&Container, CoffeeMachineError> {
        self.resources
            .get(ingredient)
            .ok_or_else(|| CoffeeMachineError::InvalidIngredient(ingredient.to_string()))
    }
}

impl Default for ResourceLedger {
    fn default() -> ResourceLedger {
        ResourceLedger::from_preset(InventoryPreset::default())
    }
}
