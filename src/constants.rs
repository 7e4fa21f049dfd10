//! Parametros de configuracion de la maquina de cafe

/// Simbolo de la moneda con la que se muestran los precios
pub const CURRENCY: &str = "$";

/// Separador usado al listar los productos del menu
pub const MENU_DELIMITER: &str = "/";

/// Archivo de configuracion que se lee si no se indica otro por linea de comandos
pub const DEFAULT_CONFIGURATION_PATH: &str = "coffee_machine.json";

/// Inventario inicial de agua de la cafetera chica
pub const COFFEE_MAKER_WATER_STORAGE: u64 = 300;

/// Inventario inicial de leche de la cafetera chica
pub const COFFEE_MAKER_MILK_STORAGE: u64 = 200;

/// Inventario inicial de cafe de la cafetera chica
pub const COFFEE_MAKER_COFFEE_STORAGE: u64 = 100;

/// Inventario inicial de agua de la maquina grande
pub const COFFEE_MACHINE_WATER_STORAGE: u64 = 1000;

/// Inventario inicial de leche de la maquina grande
pub const COFFEE_MACHINE_MILK_STORAGE: u64 = 500;

/// Inventario inicial de cafe de la maquina grande
pub const COFFEE_MACHINE_COFFEE_STORAGE: u64 = 500;

/// Valor de las monedas aceptadas, en centavos
pub const QUARTER_VALUE_IN_CENTS: i64 = 25;
pub const DIME_VALUE_IN_CENTS: i64 = 10;
pub const NICKEL_VALUE_IN_CENTS: i64 = 5;
pub const PENNY_VALUE_IN_CENTS: i64 = 1;

/// Precio maximo que puede tener una bebida del menu, en centavos
pub const MAX_ITEM_COST_IN_CENTS: i64 = 100_000;

/// Comando que imprime el estado de la maquina
pub const REPORT_COMMAND: &str = "report";
