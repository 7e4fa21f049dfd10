pub mod coffee_machine;
pub mod configuration;
pub mod constants;
pub mod container;
pub mod errors;
pub mod ingredient;
pub mod menu;
pub mod menu_item;
pub mod money;
pub mod money_machine;
pub mod resource_ledger;
pub mod statistics;

use std::{env, io, process};

use log::{error, LevelFilter};
use simple_logger::SimpleLogger;

use coffee_machine::CoffeeMachine;
use configuration::read_configuration;
use constants::DEFAULT_CONFIGURATION_PATH;
use errors::CoffeeMachineError;
use money_machine::MoneyMachine;

fn main() {
    if let Err(e) = SimpleLogger::new().with_level(LevelFilter::Warn).env().init() {
        eprintln!("Could not start the logger: {}", e);
    }

    if let Err(e) = start() {
        error!("[MACHINE] {}", e);
        process::exit(1);
    }
}

fn start() -> Result<(), CoffeeMachineError> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIGURATION_PATH.to_string());
    let configuration = read_configuration(path)?;
    let menu = configuration.build_menu()?;
    let ledger = configuration.build_ledger();

    let mut coffee_machine = CoffeeMachine::new(menu, ledger, MoneyMachine::new());
    let stdin = io::stdin();
    coffee_machine.run(stdin.lock(), io::stdout())
}
