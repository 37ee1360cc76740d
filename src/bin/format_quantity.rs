//! Format ingredient quantities for display
//! Usage: cargo run --bin format_quantity -- <amount> <unit>
//!        echo '[{"amount": 750, "unit": "GRAMS"}]' | cargo run --bin format_quantity

use std::io::{self, Read};

use tracing_subscriber::EnvFilter;

use menu_units::tools::{format_quantities, QuantityRequest};
use menu_units::units::format_unit_code;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("menu_units=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if let (Some(amount), Some(unit)) = (args.get(1), args.get(2)) {
        let amount: f64 = amount.parse()?;
        println!("{}", format_unit_code(amount, unit));
        return Ok(());
    }

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let requests: Vec<QuantityRequest> = serde_json::from_str(&input)?;

    for shown in format_quantities(&requests) {
        println!("{}", shown.display);
    }

    Ok(())
}
