//! Maquina de cafe interactiva. Lee pedidos y monedas, y prepara las bebidas.
use std::io::{BufRead, Write};

use log::{debug, error, info, warn};

use crate::{
    constants::REPORT_COMMAND,
    errors::CoffeeMachineError,
    menu::Menu,
    menu_item::MenuItem,
    money_machine::{Coin, MoneyMachine},
    resource_ledger::ResourceLedger,
    statistics::build_report,
};

/// Tiene el menu, el inventario y el manejo de monedas. Se procesa un pedido a la vez.
pub struct CoffeeMachine {
    menu: Menu,
    ledger: ResourceLedger,
    money_machine: MoneyMachine,
}

impl CoffeeMachine {
    pub fn new(menu: Menu, ledger: ResourceLedger, money_machine: MoneyMachine) -> CoffeeMachine {
        CoffeeMachine {
            menu,
            ledger,
            money_machine,
        }
    }

    /// Atiende pedidos hasta que se termina la entrada.
    /// Solo un error de entrada/salida corta el ciclo; el resto, incluida una linea que no es
    /// UTF-8 valido, se informa y se vuelve a preguntar.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<(), CoffeeMachineError> {
        loop {
            write!(output, "What would you like? ({}): ", self.menu.get_items())?;
            output.flush()?;

            let line = match read_line(&mut input) {
                Ok(Some(line)) => line,
                Ok(None) => {
                    info!("[MACHINE] No more input");
                    return Ok(());
                }
                Err(error @ CoffeeMachineError::InvalidInput(_)) => {
                    warn!("[MACHINE] Unreadable selection: {:?}", error);
                    writeln!(output, "{}", error)?;
                    continue;
                }
                Err(error) => return Err(error),
            };
            let selection = line.trim();
            if selection.is_empty() {
                continue;
            }
            if selection == REPORT_COMMAND {
                writeln!(output, "{}", build_report(&self.ledger, &self.money_machine))?;
                continue;
            }

            match self.handle_selection(selection, &mut input, &mut output) {
                Ok(()) => {}
                Err(CoffeeMachineError::IoError(cause)) => {
                    error!("[MACHINE] Error while serving {}: {}", selection, cause);
                    return Err(CoffeeMachineError::IoError(cause));
                }
                Err(error) => {
                    info!("[MACHINE] Could not serve {}: {:?}", selection, error);
                    writeln!(output, "{}", error)?;
                }
            }
        }
    }

    pub fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    pub fn money_machine(&self) -> &MoneyMachine {
        &self.money_machine
    }

    fn handle_selection<R: BufRead, W: Write>(
        &mut self,
        selection: &str,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), CoffeeMachineError> {
        let item = self.select_item(selection)?.clone();
        if !self.ledger.resources_are_sufficient(&item)? {
            if let Some(ingredient) = self.ledger.missing_ingredient(&item)? {
                return Err(CoffeeMachineError::InsufficientResources(ingredient));
            }
        }

        writeln!(output, "A {} costs {}.", item.name(), item.cost())?;
        self.insert_coins(input, output)?;

        self.ledger.try_fulfill(&item)?;
        self.money_machine.record_sale(item.cost())?;
        debug!("[MACHINE] Served {}", item.name());

        writeln!(output, "Here is your {}. Enjoy!", item.name())?;
        writeln!(
            output,
            "Cost accumulated: {} | Money inserted: {}",
            self.money_machine.cost_accumulated(),
            self.money_machine.money_inserted()
        )?;
        Ok(())
    }

    fn select_item(&self, selection: &str) -> Result<&MenuItem, CoffeeMachineError> {
        match selection.parse::<usize>() {
            Ok(position) => self.menu.item_at(position),
            Err(_) => self.menu.find_item(selection),
        }
    }

    fn insert_coins<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), CoffeeMachineError> {
        writeln!(
            output,
            "Insert coins (quarter/dime/nickel/penny or 1-4), empty line to finish:"
        )?;
        output.flush()?;
        loop {
            let line = match read_line(input) {
                Ok(Some(line)) => line,
                Ok(None) => return Ok(()),
                Err(error @ CoffeeMachineError::InvalidInput(_)) => {
                    writeln!(output, "{}", error)?;
                    continue;
                }
                Err(error) => return Err(error),
            };
            let coin_input = line.trim();
            if coin_input.is_empty() {
                return Ok(());
            }
            match coin_input.parse::<Coin>() {
                Ok(coin) => match self.money_machine.process_coin(coin.value()) {
                    Ok(total) => writeln!(output, "Inserted a {}. Total {}", coin.name(), total)?,
                    Err(error) => writeln!(output, "{}", error)?,
                },
                Err(error) => writeln!(output, "{}", error)?,
            }
            output.flush()?;
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, CoffeeMachineError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{ingredient::Ingredient, money::Money};

    fn run_with_input(input: &str) -> (CoffeeMachine, String) {
        let mut machine =
            CoffeeMachine::new(Menu::default(), ResourceLedger::default(), MoneyMachine::new());
        let mut output = Vec::new();
        machine.run(Cursor::new(input), &mut output).unwrap();
        (machine, String::from_utf8(output).unwrap())
    }

    #[test]
    fn should_finish_when_there_is_no_input() {
        let (machine, output) = run_with_input("");
        assert_eq!(
            "What would you like? (espresso/latte/cappuccino/): ",
            output
        );
        assert_eq!(Some(300), machine.ledger().remaining(Ingredient::Water));
    }

    #[test]
    fn should_serve_a_latte_and_take_the_coins() {
        let (machine, output) = run_with_input("latte\nquarter\nquarters\n1\ndime\n\n");
        assert!(output.contains("A latte costs $2.50."));
        assert!(output.contains("Inserted a dime. Total $0.85"));
        assert!(output.contains("Here is your latte. Enjoy!"));
        assert!(output.contains("Cost accumulated: $2.50 | Money inserted: $0.85"));
        assert_eq!(Some(100), machine.ledger().remaining(Ingredient::Water));
        assert_eq!(Some(50), machine.ledger().remaining(Ingredient::Milk));
        assert_eq!(Some(75), machine.ledger().remaining(Ingredient::Coffee));
    }

    #[test]
    fn should_refuse_a_second_latte() {
        let (machine, output) = run_with_input("latte\n\nlatte\n");
        assert!(output.contains("Sorry there is not enough water."));
        assert_eq!(1, output.matches("Here is your latte").count());
        assert_eq!(Some(100), machine.ledger().remaining(Ingredient::Water));
        assert_eq!(
            Money::from_cents(250),
            machine.money_machine().cost_accumulated()
        );
    }

    #[test]
    fn should_select_items_by_number() {
        let (machine, output) = run_with_input("1\n\n");
        assert!(output.contains("Here is your espresso. Enjoy!"));
        assert_eq!(Some(80), machine.ledger().remaining(Ingredient::Coffee));
    }

    #[test]
    fn should_report_an_item_not_in_the_menu() {
        let (machine, output) = run_with_input("mocha\n4\n");
        assert!(output.contains("Sorry, item mocha not found."));
        assert!(output.contains("Sorry, item 4 not found."));
        assert_eq!(Some(300), machine.ledger().remaining(Ingredient::Water));
        assert_eq!(Money::default(), machine.money_machine().cost_accumulated());
    }

    #[test]
    fn should_ignore_invalid_coins() {
        let (machine, output) = run_with_input("espresso\npeso\npenny\n");
        assert!(output.contains("Sorry, peso is not a coin."));
        assert!(output.contains("Here is your espresso. Enjoy!"));
        assert_eq!(Money::from_cents(1), machine.money_machine().money_inserted());
    }

    #[test]
    fn should_ask_again_after_an_unreadable_line() {
        let mut machine =
            CoffeeMachine::new(Menu::default(), ResourceLedger::default(), MoneyMachine::new());
        let mut output = Vec::new();
        let input: &[u8] = b"\xff\xfe\nespresso\n\xc3\x28\ndime\n\n";
        assert_eq!(Ok(()), machine.run(Cursor::new(input), &mut output));
        let output = String::from_utf8(output).unwrap();
        assert_eq!(2, output.matches("Sorry, that input could not be read").count());
        assert!(output.contains("Here is your espresso. Enjoy!"));
        assert_eq!(Money::from_cents(10), machine.money_machine().money_inserted());
        assert_eq!(Some(80), machine.ledger().remaining(Ingredient::Coffee));
    }

    #[test]
    fn should_print_the_report() {
        let (_, output) = run_with_input("report\n");
        assert!(output.contains("water=(300,0)"));
        assert!(output.contains("Money inserted=$0.00"));
    }

    #[test]
    fn should_report_an_ingredient_missing_from_the_ledger() {
        let mut machine = CoffeeMachine::new(
            Menu::default(),
            ResourceLedger::new(vec![(Ingredient::Water, 500), (Ingredient::Coffee, 500)]),
            MoneyMachine::new(),
        );
        let mut output = Vec::new();
        machine
            .run(Cursor::new("espresso\n"), &mut output)
            .unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Invalid ingredient milk"));
        assert_eq!(Some(500), machine.ledger().remaining(Ingredient::Water));
    }
}
