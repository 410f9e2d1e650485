use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use std::str::FromStr;
use tracing::info;

use crate::reviews::SignalTally;

/// Stored review signals for one restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StoredSignals {
    pub restaurant_id: String,
    /// Unix timestamp of the last analysis.
    pub analyzed_at: i64,
    pub keto_mentions: i64,
    pub customization_mentions: i64,
    pub accommodating_mentions: i64,
    pub keto_food_mentions: i64,
    pub healthy_cooking_mentions: i64,
    pub dietary_mentions: i64,
    pub portion_mentions: i64,
    pub hidden_carb_mentions: i64,
    pub high_carb_mentions: i64,
    pub keto_confidence: Option<f64>,
    pub reasons: Option<String>,
}

impl StoredSignals {
    pub fn tally(&self) -> SignalTally {
        let count = |v: i64| u32::try_from(v).unwrap_or(0);
        SignalTally {
            keto_mentions: count(self.keto_mentions),
            customization_mentions: count(self.customization_mentions),
            accommodating_mentions: count(self.accommodating_mentions),
            keto_food_mentions: count(self.keto_food_mentions),
            healthy_cooking_mentions: count(self.healthy_cooking_mentions),
            dietary_mentions: count(self.dietary_mentions),
            portion_mentions: count(self.portion_mentions),
            hidden_carb_mentions: count(self.hidden_carb_mentions),
            high_carb_mentions: count(self.high_carb_mentions),
        }
    }
}

pub async fn init_db(db_url: &str) -> Result<SqlitePool, sqlx::Error> {
    info!("Initializing signal store at: {}", db_url);

    let options = SqliteConnectOptions::from_str(db_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS restaurant_signals (
            restaurant_id TEXT PRIMARY KEY,
            analyzed_at INTEGER NOT NULL,
            keto_mentions INTEGER NOT NULL DEFAULT 0,
            customization_mentions INTEGER NOT NULL DEFAULT 0,
            accommodating_mentions INTEGER NOT NULL DEFAULT 0,
            keto_food_mentions INTEGER NOT NULL DEFAULT 0,
            healthy_cooking_mentions INTEGER NOT NULL DEFAULT 0,
            dietary_mentions INTEGER NOT NULL DEFAULT 0,
            portion_mentions INTEGER NOT NULL DEFAULT 0,
            hidden_carb_mentions INTEGER NOT NULL DEFAULT 0,
            high_carb_mentions INTEGER NOT NULL DEFAULT 0,
            keto_confidence REAL,
            reasons TEXT
        );
        "#,
    )
    .execute(&pool)
    .await?;

    info!("Signal store ready.");

    Ok(pool)
}

/// Insert or replace the signals for a restaurant, stamping the analysis time.
pub async fn upsert_restaurant_signals(
    pool: &SqlitePool,
    restaurant_id: &str,
    tally: &SignalTally,
    keto_confidence: Option<f64>,
    reasons: Option<&str>,
) -> Result<StoredSignals, sqlx::Error> {
    let analyzed_at = Utc::now().timestamp();

    sqlx::query_as::<_, StoredSignals>(
        r#"
        INSERT INTO restaurant_signals (
            restaurant_id, analyzed_at,
            keto_mentions, customization_mentions, accommodating_mentions,
            keto_food_mentions, healthy_cooking_mentions, dietary_mentions,
            portion_mentions, hidden_carb_mentions, high_carb_mentions,
            keto_confidence, reasons
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(restaurant_id) DO UPDATE SET
            analyzed_at = excluded.analyzed_at,
            keto_mentions = excluded.keto_mentions,
            customization_mentions = excluded.customization_mentions,
            accommodating_mentions = excluded.accommodating_mentions,
            keto_food_mentions = excluded.keto_food_mentions,
            healthy_cooking_mentions = excluded.healthy_cooking_mentions,
            dietary_mentions = excluded.dietary_mentions,
            portion_mentions = excluded.portion_mentions,
            hidden_carb_mentions = excluded.hidden_carb_mentions,
            high_carb_mentions = excluded.high_carb_mentions,
            keto_confidence = excluded.keto_confidence,
            reasons = excluded.reasons
        RETURNING *
        "#,
    )
    .bind(restaurant_id)
    .bind(analyzed_at)
    .bind(i64::from(tally.keto_mentions))
    .bind(i64::from(tally.customization_mentions))
    .bind(i64::from(tally.accommodating_mentions))
    .bind(i64::from(tally.keto_food_mentions))
    .bind(i64::from(tally.healthy_cooking_mentions))
    .bind(i64::from(tally.dietary_mentions))
    .bind(i64::from(tally.portion_mentions))
    .bind(i64::from(tally.hidden_carb_mentions))
    .bind(i64::from(tally.high_carb_mentions))
    .bind(keto_confidence)
    .bind(reasons)
    .fetch_one(pool)
    .await
}

/// Stored signals for a restaurant, or `None` if it was never analyzed.
pub async fn get_restaurant_signals(
    pool: &SqlitePool,
    restaurant_id: &str,
) -> Result<Option<StoredSignals>, sqlx::Error> {
    sqlx::query_as::<_, StoredSignals>(
        r#"
        SELECT * FROM restaurant_signals
        WHERE restaurant_id = ?
        "#,
    )
    .bind(restaurant_id)
    .fetch_optional(pool)
    .await
}
