use crate::{money_machine::MoneyMachine, resource_ledger::ResourceLedger};

/// Reporte del estado de la maquina: (restante, consumido) de cada ingrediente y los totales de dinero
pub fn build_report(ledger: &ResourceLedger, money_machine: &MoneyMachine) -> String {
    let mut statistics = String::from("[REPORT] Ingredient=(remaining, consumed) |");
    for (ingredient, container) in ledger.containers() {
        statistics.push_str(&format!(
            " {}=({},{}) ",
            ingredient, container.remaining, container.consumed
        ));
    }
    statistics.push_str(&format!(
        "| Cost accumulated={} | Money inserted={}",
        money_machine.cost_accumulated(),
        money_machine.money_inserted()
    ));
    statistics
}
