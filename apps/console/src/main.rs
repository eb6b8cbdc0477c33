//! # Ostoskori Console Application Entry Point
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ──────────────────────────────────────────────►  │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Load Configuration ──────────────────────────────────────────────►  │
//! │     • process env > .env file > defaults                                │
//! │     • database path, default language                                   │
//! │                                                                         │
//! │  3. Connect to Database ─────────────────────────────────────────────►  │
//! │     • SQLite with WAL mode                                              │
//! │     • Run pending migrations                                            │
//! │                                                                         │
//! │  4. Run the Session ─────────────────────────────────────────────────►  │
//! │     • language → count → prices → total → optional save                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod flow;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use ostoskori_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Ostoskori console application");

    let config = AppConfig::load();
    info!(
        db_path = %config.database_path.display(),
        default_language = %config.default_language,
        "Configuration loaded"
    );

    let db = Database::new(DbConfig::new(&config.database_path)).await?;
    info!("Database connected and migrations applied");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    flow::run_session(&mut input, &mut output, &db, config.default_language).await?;

    db.close().await;
    info!("Session finished");

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=ostoskori_db=trace` - Per-crate override
/// - Default: INFO level, sqlx noise suppressed
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,ostoskori=debug,ostoskori_core=debug,ostoskori_db=debug,sqlx=warn")
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
