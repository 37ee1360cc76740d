//! Menu Units
//!
//! Reads a menu plan as JSON and prints its shopping report.

use std::fs;
use std::io::{self, Read};

use tracing_subscriber::EnvFilter;

use menu_units::build_info;
use menu_units::config::Config;
use menu_units::tools::{build_shopping_report, PlanRequest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("menu_units=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = Config::load();

    let input = match &config.input_path {
        Some(path) => {
            eprintln!("Reading plan from {}", path.display());
            fs::read_to_string(path)?
        }
        None => {
            eprintln!("Reading plan from stdin...");
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let plan: PlanRequest = serde_json::from_str(&input)?;
    let report = build_shopping_report(&plan, config.mode)?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
