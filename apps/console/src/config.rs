//! # Application Configuration
//!
//! Configuration resolved once at startup into an explicit struct that is
//! passed by reference to whoever needs it. No collaborator reads the
//! environment on its own.
//!
//! ## Resolution Precedence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              Resolving one configuration value                          │
//! │                                                                         │
//! │  1. Real process environment variable        (highest)                  │
//! │  2. .env file entry                                                     │
//! │  3. Hard-coded default                       (lowest)                   │
//! │                                                                         │
//! │  dotenv::dotenv() loads the .env file into the process environment      │
//! │  WITHOUT overriding variables that are already set, so a single         │
//! │  env::var lookup after loading observes exactly this precedence.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::env;
use std::path::PathBuf;

use ostoskori_core::Language;

/// Application configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the SQLite database file.
    /// Key: `OSTOSKORI_DB_PATH`, default `ostoskori.db`.
    pub database_path: PathBuf,

    /// Language preselected in the language menu.
    /// Key: `OSTOSKORI_LANG`, default `en`; unknown codes fall back to
    /// English.
    pub default_language: Language,
}

impl AppConfig {
    /// Loads configuration from the environment and an optional `.env`
    /// file.
    ///
    /// A missing `.env` file is fine; `.ok()` mirrors the original's
    /// ignore-if-missing behavior.
    pub fn load() -> Self {
        dotenv::dotenv().ok();

        AppConfig {
            database_path: PathBuf::from(resolve("OSTOSKORI_DB_PATH", "ostoskori.db")),
            default_language: Language::from_code(&resolve("OSTOSKORI_LANG", "en")),
        }
    }
}

/// Resolves one configuration value: process env (already merged with the
/// `.env` file by the time this runs) or the hard-coded default.
///
/// Empty values count as unset, matching the original's treatment of
/// blank environment variables.
fn resolve(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses a unique variable name: the process environment is
    // shared across the test binary's threads.

    #[test]
    fn test_resolve_prefers_env_value() {
        env::set_var("OSTOSKORI_TEST_RESOLVE_SET", "from-env");
        assert_eq!(resolve("OSTOSKORI_TEST_RESOLVE_SET", "fallback"), "from-env");
        env::remove_var("OSTOSKORI_TEST_RESOLVE_SET");
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(resolve("OSTOSKORI_TEST_RESOLVE_UNSET", "fallback"), "fallback");
    }

    #[test]
    fn test_resolve_treats_blank_as_unset() {
        env::set_var("OSTOSKORI_TEST_RESOLVE_BLANK", "   ");
        assert_eq!(resolve("OSTOSKORI_TEST_RESOLVE_BLANK", "fallback"), "fallback");
        env::remove_var("OSTOSKORI_TEST_RESOLVE_BLANK");
    }
}
