//! # Seed Data Writer
//!
//! Populates a data directory with the fixed bakery dataset for
//! development.
//!
//! ## Usage
//! ```bash
//! # Seed the default directory (./padaria_data)
//! cargo run -p padaria-store --bin seed
//!
//! # Specify a data directory
//! cargo run -p padaria-store --bin seed -- --data-dir ./my_data
//! ```
//!
//! Collections that already hold data are left untouched; delete the
//! directory to regenerate from scratch.

use std::env;

use padaria_store::seed::seed_if_empty;
use padaria_store::Storage;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut data_dir = String::from("./padaria_data");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data-dir" | "-d" => {
                if i + 1 < args.len() {
                    data_dir = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Padaria SA Seed Data Writer");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --data-dir <PATH>  Data directory (default: ./padaria_data)");
                println!("  -h, --help             Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Padaria SA Seed Data Writer");
    println!("==============================");
    println!("Data directory: {}", data_dir);
    println!();

    let storage = Storage::open(&data_dir).await?;
    println!("✓ Opened data directory");

    let summary = seed_if_empty(&storage).await?;

    for key in &summary.written {
        println!("✓ Seeded '{}'", key);
    }
    for key in &summary.existing {
        println!("⚠ '{}' already has data, skipped", key);
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
