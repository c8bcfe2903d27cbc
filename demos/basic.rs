//! Basic example of using the `ExchangeEngine`.
//!
//! Run with: `cargo run --example basic`

use exchange_engine::ExchangeEngine;
use std::io::Cursor;

fn main() {
    // Initialize logger (optional, but shows what's happening)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Sample instructions as CSV
    let instructions = r"type,currency,counter,limit,amount
open,eur,,,100
open,pln,,,0
open,usd,,,25.50
rate,eur,pln,,4.15
rate,usd,pln,,3.95
exchange,eur,pln,source,50
exchange,usd,pln,,
exchange,eur,pln,target,100
";

    // Create engine and process instructions
    let mut engine = ExchangeEngine::new();
    engine
        .process_instructions(Cursor::new(instructions))
        .expect("Failed to process instructions");

    // Export results to stdout
    println!("\n=== Final Balances ===");
    engine
        .export_balances(std::io::stdout())
        .expect("Failed to export balances");
}
