//! # Localization Repository
//!
//! Database-sourced message overrides, the first tier of the localization
//! fallback chain (see `ostoskori_core::i18n`).
//!
//! ## Degradation Contract
//! Loading overrides must never fail the caller: a missing table, closed
//! pool, or empty result all resolve to an empty map, and the bundled
//! catalogs take over. The UI never learns the database was unreachable;
//! it only logs.

use std::collections::HashMap;

use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::error::DbResult;

/// Repository for localization override operations.
#[derive(Debug, Clone)]
pub struct LocalizationRepository {
    pool: SqlitePool,
}

impl LocalizationRepository {
    /// Creates a new LocalizationRepository.
    pub fn new(pool: SqlitePool) -> Self {
        LocalizationRepository { pool }
    }

    /// Loads all override rows for one language as a key → text map.
    ///
    /// No matching rows is not an error: the result is simply empty.
    pub async fn strings_for_language(&self, language: &str) -> DbResult<HashMap<String, String>> {
        let rows = sqlx::query_as::<_, (String, String)>(
            r#"
            SELECT key, value
            FROM localization_strings
            WHERE language = ?1
            "#,
        )
        .bind(language)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().collect())
    }

    /// Loads overrides for one language, degrading to an empty map on any
    /// failure.
    ///
    /// This is the method the UI flow calls on a language switch: the
    /// fallback chain guarantees bundled text still renders, so a broken
    /// store costs nothing but the overrides.
    pub async fn overrides_or_empty(&self, language: &str) -> HashMap<String, String> {
        match self.strings_for_language(language).await {
            Ok(strings) => {
                debug!(
                    language,
                    count = strings.len(),
                    "Loaded localization overrides"
                );
                strings
            }
            Err(e) => {
                warn!(language, error = %e, "Failed to load localization overrides, using bundled text");
                HashMap::new()
            }
        }
    }

    /// Inserts or replaces one override row.
    ///
    /// Used by the seed binary and tests; the console app itself never
    /// writes overrides.
    pub async fn upsert(&self, language: &str, key: &str, value: &str) -> DbResult<()> {
        sqlx::query(
            r#"
            INSERT INTO localization_strings (language, key, value)
            VALUES (?1, ?2, ?3)
            ON CONFLICT (language, key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(language)
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_no_rows_yields_empty_map() {
        let db = test_db().await;
        let repo = db.localization();

        let strings = repo.strings_for_language("fr").await.unwrap();
        assert!(strings.is_empty());
    }

    #[tokio::test]
    async fn test_seeded_rows_round_trip() {
        let db = test_db().await;
        let repo = db.localization();

        repo.upsert("en", "title", "My Cart").await.unwrap();
        repo.upsert("en", "ok", "Yep").await.unwrap();
        repo.upsert("fr", "title", "Mon panier").await.unwrap();

        let en = repo.strings_for_language("en").await.unwrap();
        assert_eq!(en.len(), 2);
        assert_eq!(en.get("title").map(String::as_str), Some("My Cart"));

        // Rows are scoped per language
        let fr = repo.strings_for_language("fr").await.unwrap();
        assert_eq!(fr.len(), 1);
        assert_eq!(fr.get("title").map(String::as_str), Some("Mon panier"));
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing_value() {
        let db = test_db().await;
        let repo = db.localization();

        repo.upsert("en", "title", "First").await.unwrap();
        repo.upsert("en", "title", "Second").await.unwrap();

        let en = repo.strings_for_language("en").await.unwrap();
        assert_eq!(en.get("title").map(String::as_str), Some("Second"));
    }

    #[tokio::test]
    async fn test_overrides_or_empty_swallows_broken_store() {
        let db = test_db().await;
        let repo = db.localization();
        db.close().await;

        // Closed pool: must degrade to empty, never error
        let strings = repo.overrides_or_empty("en").await;
        assert!(strings.is_empty());
    }
}
