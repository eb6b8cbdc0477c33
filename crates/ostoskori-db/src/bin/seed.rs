//! # Seed Data Generator
//!
//! Populates `localization_strings` with development override rows so the
//! database tier of the fallback chain has something to serve.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p ostoskori-db --bin seed
//!
//! # Specify database path
//! cargo run -p ostoskori-db --bin seed -- --db ./data/ostoskori.db
//! ```
//!
//! The overrides deliberately differ from the bundled catalog text, so it
//! is visible in the UI which tier served a key.

use std::env;

use ostoskori_db::{Database, DbConfig};

/// Development overrides: (language, key, value).
const OVERRIDES: &[(&str, &str, &str)] = &[
    ("en", "title", "Shopping Cart (store edition)"),
    ("en", "savedToDb", "Cart saved. Thank you!"),
    ("fr", "title", "Panier (édition boutique)"),
    ("fr", "savedToDb", "Panier enregistré. Merci !"),
    ("vi", "title", "Giỏ hàng (bản cửa hàng)"),
    ("ur", "title", "خریداری کی ٹوکری (اسٹور ایڈیشن)"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let db_path = parse_db_path().unwrap_or_else(|| "ostoskori.db".to_string());

    println!("Seeding localization overrides into {}", db_path);

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let repo = db.localization();

    for (language, key, value) in OVERRIDES {
        repo.upsert(language, key, value).await?;
        println!("  {} / {} = {}", language, key, value);
    }

    println!("Done: {} override rows", OVERRIDES.len());
    db.close().await;

    Ok(())
}

/// Parses `--db <path>` from the command line.
fn parse_db_path() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    args.iter()
        .position(|a| a == "--db")
        .and_then(|i| args.get(i + 1))
        .cloned()
}
