//! # ostoskori-core: Pure Business Logic for Ostoskori
//!
//! This crate is the heart of the shopping-cart demo. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Ostoskori Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/console                                 │   │
//! │  │    language menu ──► count prompt ──► price prompts ──► total   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ ostoskori-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐        ┌───────────┐        ┌───────────┐      │   │
//! │  │   │   cart    │        │   i18n    │        │   error   │      │   │
//! │  │   │  totals   │        │ catalogs  │        │ validation│      │   │
//! │  │   │ parsing   │        │ fallback  │        │  errors   │      │   │
//! │  │   └───────────┘        └───────────┘        └───────────┘      │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO TERMINAL • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 ostoskori-db (Database Layer)                   │   │
//! │  │         SQLite queries, migrations, repositories                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - Cart arithmetic, input parsing, the [`cart::CartResult`] snapshot
//! - [`i18n`] - Languages, bundled message catalogs, the fallback chain
//! - [`error`] - Typed validation errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Explicit Errors**: Parse failures are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod i18n;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use ostoskori_core::CartResult` instead of
// `use ostoskori_core::cart::CartResult`

pub use cart::{calculate_total, is_valid_count, parse_count, parse_price, CartResult};
pub use error::ValidationError;
pub use i18n::{Language, Translator};
