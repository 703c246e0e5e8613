use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use crate::repository::{PreferenceStore, StorageError};

use super::SqliteRepository;

#[async_trait]
impl PreferenceStore for SqliteRepository {
    async fn get_bool(&self, key: &str) -> Result<Option<bool>, StorageError> {
        let row = sqlx::query("SELECT value FROM preferences WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let value: i64 = row
            .try_get("value")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        match value {
            0 => Ok(Some(false)),
            1 => Ok(Some(true)),
            other => Err(StorageError::Serialization(format!(
                "preference {key} holds non-boolean value {other}"
            ))),
        }
    }

    async fn set_bool(&self, key: &str, value: bool) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO preferences (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(key)
        .bind(i64::from(value))
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
