//! # Cart Result Repository
//!
//! Database operations for saved carts and their line items.
//!
//! ## Parent/Child Insert
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  save_cart_result transaction                           │
//! │                                                                         │
//! │  BEGIN                                                                  │
//! │    │                                                                    │
//! │    ├── INSERT INTO cart_results (...)  ──► generated id (e.g. 42)       │
//! │    │                                                                    │
//! │    ├── INSERT INTO cart_items (42, 1, 1.99)                             │
//! │    ├── INSERT INTO cart_items (42, 2, 2.49)                             │
//! │    └── INSERT INTO cart_items (42, 3, 3.50)   (index 1..N, input order) │
//! │    │                                                                    │
//! │  COMMIT                                                                 │
//! │                                                                         │
//! │  Any failure rolls back the whole cart: there is never a parent row     │
//! │  with a partial set of children.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Observable Outcome
//! The original implementation swallowed persistence failures, which left
//! callers unable to tell "saved" from "silently lost". Here the outcome is
//! an explicit [`DbResult`]; the caller decides whether to treat a failure
//! as best-effort.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use ostoskori_core::{CartResult, Language};

// =============================================================================
// Row Types
// =============================================================================

/// A persisted cart result (parent row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CartResultRow {
    pub id: i64,
    pub customer_id: Option<i64>,
    pub total_price: f64,
    pub language: String,
    pub item_count: i64,
    pub created_at: DateTime<Utc>,
}

/// A persisted line item (child row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CartItemRow {
    pub id: i64,
    pub cart_result_id: i64,
    /// 1-based position within the cart, in input order.
    pub item_index: i64,
    pub price: f64,
}

/// Outcome of a successful [`CartResultRepository::save_cart_result`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedCart {
    /// Generated id of the parent row.
    pub cart_result_id: i64,
    /// Number of child rows written.
    pub item_rows: u32,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for cart result database operations.
#[derive(Debug, Clone)]
pub struct CartResultRepository {
    pool: SqlitePool,
}

impl CartResultRepository {
    /// Creates a new CartResultRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CartResultRepository { pool }
    }

    /// Persists a finalized cart: one parent row plus one child row per
    /// price, inside a single transaction.
    ///
    /// ## Arguments
    /// * `prices` - Line prices in input order
    /// * `language` - Language active when the cart was finalized
    /// * `customer_id` - Optional customer; `None` for anonymous carts
    ///
    /// The total and item count are derived from `prices` via
    /// [`CartResult::from_prices`], so the parent row can never disagree
    /// with its children.
    ///
    /// An empty price list is valid: it writes a parent row with
    /// `item_count = 0` and no children.
    pub async fn save_cart_result(
        &self,
        prices: &[f64],
        language: Language,
        customer_id: Option<i64>,
    ) -> DbResult<SavedCart> {
        let result = CartResult::from_prices(prices, language, customer_id);
        let now = Utc::now();

        debug!(
            item_count = result.item_count,
            total = result.total,
            language = %result.language,
            "Saving cart result"
        );

        let mut tx = self.pool.begin().await?;

        // Parent first: the generated id keys the children.
        let parent = sqlx::query(
            r#"
            INSERT INTO cart_results (customer_id, total_price, language, item_count, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(result.customer_id)
        .bind(result.total)
        .bind(&result.language)
        .bind(result.item_count as i64)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        let cart_result_id = parent.last_insert_rowid();

        // Children with a 1-based index, preserving input order.
        for (i, price) in prices.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO cart_items (cart_result_id, item_index, price)
                VALUES (?1, ?2, ?3)
                "#,
            )
            .bind(cart_result_id)
            .bind((i + 1) as i64)
            .bind(price)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        debug!(cart_result_id, "Cart result saved");

        Ok(SavedCart {
            cart_result_id,
            item_rows: prices.len() as u32,
        })
    }

    /// Gets a saved cart result by id.
    pub async fn get_result(&self, id: i64) -> DbResult<Option<CartResultRow>> {
        let row = sqlx::query_as::<_, CartResultRow>(
            r#"
            SELECT id, customer_id, total_price, language, item_count, created_at
            FROM cart_results
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Gets all line items for a saved cart, ordered by item index.
    pub async fn get_items(&self, cart_result_id: i64) -> DbResult<Vec<CartItemRow>> {
        let rows = sqlx::query_as::<_, CartItemRow>(
            r#"
            SELECT id, cart_result_id, item_index, price
            FROM cart_items
            WHERE cart_result_id = ?1
            ORDER BY item_index
            "#,
        )
        .bind(cart_result_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Counts saved cart results.
    pub async fn count_results(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cart_results")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_save_empty_cart() {
        let db = test_db().await;
        let repo = db.cart_results();

        let saved = repo
            .save_cart_result(&[], Language::En, None)
            .await
            .unwrap();

        assert_eq!(saved.item_rows, 0);

        let parent = repo.get_result(saved.cart_result_id).await.unwrap().unwrap();
        assert_eq!(parent.item_count, 0);
        assert_eq!(parent.total_price, 0.0);
        assert_eq!(parent.customer_id, None);

        let items = repo.get_items(saved.cart_result_id).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_save_writes_parent_and_children() {
        let db = test_db().await;
        let repo = db.cart_results();

        let prices = [1.99, 2.49, 3.50];
        let saved = repo
            .save_cart_result(&prices, Language::Fr, None)
            .await
            .unwrap();

        assert_eq!(saved.item_rows, 3);
        assert_eq!(repo.count_results().await.unwrap(), 1);

        let parent = repo.get_result(saved.cart_result_id).await.unwrap().unwrap();
        assert_eq!(parent.item_count, 3);
        assert_eq!(parent.language, "fr");
        assert!((parent.total_price - 7.98).abs() < 1e-4);

        // Children carry a 1-based index in input order
        let items = repo.get_items(saved.cart_result_id).await.unwrap();
        assert_eq!(items.len(), 3);
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.item_index, (i + 1) as i64);
            assert_eq!(item.cart_result_id, saved.cart_result_id);
            assert_eq!(item.price, prices[i]);
        }
    }

    #[tokio::test]
    async fn test_save_with_customer_id() {
        let db = test_db().await;
        let repo = db.cart_results();

        let saved = repo
            .save_cart_result(&[10.0, 20.0], Language::En, Some(123))
            .await
            .unwrap();

        let parent = repo.get_result(saved.cart_result_id).await.unwrap().unwrap();
        assert_eq!(parent.customer_id, Some(123));
    }

    #[tokio::test]
    async fn test_each_save_gets_a_fresh_id() {
        let db = test_db().await;
        let repo = db.cart_results();

        let first = repo
            .save_cart_result(&[1.0], Language::En, None)
            .await
            .unwrap();
        let second = repo
            .save_cart_result(&[2.0], Language::Ur, None)
            .await
            .unwrap();

        assert_ne!(first.cart_result_id, second.cart_result_id);
        assert_eq!(repo.count_results().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_get_result_missing_id() {
        let db = test_db().await;
        let repo = db.cart_results();

        assert!(repo.get_result(9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_failure_is_observable() {
        let db = test_db().await;
        let repo = db.cart_results();
        db.close().await;

        // A broken store must surface as an Err, not vanish silently
        let result = repo.save_cart_result(&[1.0], Language::En, None).await;
        assert!(result.is_err());
    }
}
