//! Lectura del archivo de configuracion (menu e inventario inicial)
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use crate::{
    constants::MAX_ITEM_COST_IN_CENTS,
    errors::CoffeeMachineError,
    ingredient::Ingredient,
    menu::Menu,
    menu_item::MenuItem,
    money::Money,
    resource_ledger::{InventoryPreset, ResourceLedger},
};

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct JsonMenuItem {
    name: String,
    ingredients: BTreeMap<String, u64>,
    cost_cents: i64,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct JsonResources {
    water: u64,
    milk: u64,
    coffee: u64,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct MachineConfiguration {
    #[serde(default)]
    preset: InventoryPreset,
    resources: Option<JsonResources>,
    menu: Option<Vec<JsonMenuItem>>,
}

impl MachineConfiguration {
    pub fn from_json(json: &str) -> Result<MachineConfiguration, CoffeeMachineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn build_menu(&self) -> Result<Menu, CoffeeMachineError> {
        match &self.menu {
            Some(items) => Menu::from_items(
                items
                    .iter()
                    .map(build_menu_item)
                    .collect::<Result<Vec<MenuItem>, CoffeeMachineError>>()?,
            ),
            None => Ok(Menu::default()),
        }
    }

    /// Los recursos explicitos tienen prioridad sobre el preset
    pub fn build_ledger(&self) -> ResourceLedger {
        match &self.resources {
            Some(resources) => ResourceLedger::new(vec![
                (Ingredient::Water, resources.water),
                (Ingredient::Milk, resources.milk),
                (Ingredient::Coffee, resources.coffee),
            ]),
            None => ResourceLedger::from_preset(self.preset),
        }
    }
}

fn build_menu_item(item: &JsonMenuItem) -> Result<MenuItem, CoffeeMachineError> {
    if !(0..=MAX_ITEM_COST_IN_CENTS).contains(&item.cost_cents) {
        return Err(CoffeeMachineError::ConfigurationError(format!(
            "cost of {} must be between 0 and {} cents",
            item.name, MAX_ITEM_COST_IN_CENTS
        )));
    }
    let ingredients = item
        .ingredients
        .iter()
        .map(|(name, quantity)| {
            name.parse::<Ingredient>()
                .map(|ingredient| (ingredient, *quantity))
        })
        .collect::<Result<Vec<(Ingredient, u64)>, CoffeeMachineError>>()?;
    MenuItem::new(&item.name, ingredients, Money::from_cents(item.cost_cents))
}

/// Lee la configuracion del archivo. Si no existe se usan los valores por defecto.
pub fn read_configuration<P: AsRef<Path>>(
    path: P,
) -> Result<MachineConfiguration, CoffeeMachineError> {
    let path = path.as_ref();
    if !path.exists() {
        info!(
            "[CONFIG] No configuration at {}, using defaults",
            path.display()
        );
        return Ok(MachineConfiguration::default());
    }
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let configuration: MachineConfiguration = serde_json::from_reader(reader).map_err(|e| {
        warn!("[CONFIG] Invalid configuration at {}", path.display());
        CoffeeMachineError::from(e)
    })?;
    info!("[CONFIG] Read configuration from {}", path.display());
    Ok(configuration)
}
