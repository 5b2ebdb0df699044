use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use business::domain::cart::model::CartLine;
use business::domain::cart::store::{CartStore, StorageKey};
use business::domain::errors::StorageError;

use super::entity::CartRecord;

pub struct CartStoreSqlite {
    pool: SqlitePool,
}

impl CartStoreSqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartStore for CartStoreSqlite {
    async fn load(&self, key: &StorageKey) -> Result<Option<Vec<CartLine>>, StorageError> {
        let record = sqlx::query_as::<_, CartRecord>(
            "SELECT storage_key, payload, updated_at FROM cart_store WHERE storage_key = ?1",
        )
        .bind(key.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| StorageError::Backend)?;

        Ok(record.and_then(|r| r.into_lines()))
    }

    async fn save(&self, key: &StorageKey, lines: &[CartLine]) -> Result<(), StorageError> {
        let payload =
            serde_json::to_string(lines).map_err(|_| StorageError::Serialization)?;

        sqlx::query(
            r#"INSERT INTO cart_store (storage_key, payload, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT (storage_key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at"#,
        )
        .bind(key.as_str())
        .bind(payload)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|_| StorageError::Backend)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DatabaseConfig, create_sqlite_pool, ensure_schema};
    use business::domain::shared::value_objects::ProductId;
    use rust_decimal::Decimal;

    async fn memory_store() -> CartStoreSqlite {
        let config = DatabaseConfig {
            connection_string: "sqlite::memory:".to_string(),
            max_connections: 1,
            acquire_timeout: std::time::Duration::from_secs(5),
        };
        let pool = create_sqlite_pool(&config).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        CartStoreSqlite::new(pool)
    }

    fn sample_lines() -> Vec<CartLine> {
        vec![
            CartLine {
                product_id: ProductId::from(2),
                name: "Widget".to_string(),
                unit_price: Decimal::new(1000, 2),
                quantity: 1,
            },
            CartLine {
                product_id: ProductId::from(7),
                name: "Gadget".to_string(),
                unit_price: Decimal::new(550, 2),
                quantity: 4,
            },
        ]
    }

    #[tokio::test]
    async fn should_report_absent_for_unknown_key() {
        let store = memory_store().await;

        let loaded = store
            .load(&StorageKey::for_user(None))
            .await
            .unwrap();

        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn should_round_trip_line_sequence() {
        let store = memory_store().await;
        let key = StorageKey::for_user(Some(&"u1".into()));
        let lines = sample_lines();

        store.save(&key, &lines).await.unwrap();
        let loaded = store.load(&key).await.unwrap();

        assert_eq!(loaded, Some(lines));
    }

    #[tokio::test]
    async fn should_overwrite_previous_mirror_on_save() {
        let store = memory_store().await;
        let key = StorageKey::for_user(Some(&"u1".into()));

        store.save(&key, &sample_lines()).await.unwrap();
        store.save(&key, &[]).await.unwrap();
        let loaded = store.load(&key).await.unwrap();

        assert_eq!(loaded, Some(Vec::new()));
    }

    #[tokio::test]
    async fn should_treat_malformed_payload_as_absent() {
        let store = memory_store().await;
        let key = StorageKey::for_user(Some(&"u1".into()));

        sqlx::query(
            "INSERT INTO cart_store (storage_key, payload, updated_at) VALUES (?1, ?2, ?3)",
        )
        .bind(key.as_str())
        .bind("not json {")
        .bind(Utc::now())
        .execute(&store.pool)
        .await
        .unwrap();

        let loaded = store.load(&key).await.unwrap();

        assert!(loaded.is_none());
    }
}
