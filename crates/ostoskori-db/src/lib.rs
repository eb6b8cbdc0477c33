//! # ostoskori-db: Database Layer for Ostoskori
//!
//! This crate provides database access for the shopping-cart demo.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Ostoskori Data Flow                               │
//! │                                                                         │
//! │  Console flow (save cart, load overrides)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   ostoskori-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌────────────────────┐   ┌────────────┐  │   │
//! │  │   │   Database    │   │    Repositories    │   │ Migrations │  │   │
//! │  │   │   (pool.rs)   │   │ cart_result.rs     │   │ (embedded) │  │   │
//! │  │   │               │◄──│ localization.rs    │   │ 001_...sql │  │   │
//! │  │   └───────────────┘   └────────────────────┘   └────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (WAL mode, foreign keys on)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (cart results, localization)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ostoskori_db::{Database, DbConfig};
//! use ostoskori_core::Language;
//!
//! let db = Database::new(DbConfig::new("ostoskori.db")).await?;
//!
//! // Persist a finalized cart
//! let saved = db
//!     .cart_results()
//!     .save_cart_result(&[1.99, 2.49], Language::En, None)
//!     .await?;
//!
//! // Load localization overrides (degrades to an empty map on failure)
//! let overrides = db.localization().overrides_or_empty("fr").await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::cart_result::{CartItemRow, CartResultRepository, CartResultRow, SavedCart};
pub use repository::localization::LocalizationRepository;
