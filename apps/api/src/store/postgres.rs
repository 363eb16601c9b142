use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::{debug, info};

use super::{DocumentStore, Filter, StoreError};

/// JSONB-backed store. All collections share the `documents` table;
/// filters compile to `body @> <containment doc>`.
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PostgresStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn insert(&self, collection: &str, doc: Value) -> Result<(), StoreError> {
        if !doc.is_object() {
            return Err(StoreError::NotAnObject {
                collection: collection.to_string(),
            });
        }
        sqlx::query("INSERT INTO documents (collection, body) VALUES ($1, $2)")
            .bind(collection)
            .bind(Json(doc))
            .execute(&self.pool)
            .await?;
        debug!("postgres: inserted into {collection}");
        Ok(())
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let rows: Vec<Json<Value>> =
            sqlx::query_scalar("SELECT body FROM documents WHERE collection = $1 ORDER BY seq")
                .bind(collection)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(|Json(v)| v).collect())
    }

    async fn find(&self, collection: &str, filter: &Filter) -> Result<Vec<Value>, StoreError> {
        let rows: Vec<Json<Value>> = sqlx::query_scalar(
            "SELECT body FROM documents WHERE collection = $1 AND body @> $2 ORDER BY seq",
        )
        .bind(collection)
        .bind(Json(filter.to_containment()))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|Json(v)| v).collect())
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Option<Value>, StoreError> {
        let row: Option<Json<Value>> = sqlx::query_scalar(
            "SELECT body FROM documents WHERE collection = $1 AND body @> $2 ORDER BY seq LIMIT 1",
        )
        .bind(collection)
        .bind(Json(filter.to_containment()))
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|Json(v)| v))
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        fields: Value,
    ) -> Result<bool, StoreError> {
        if !fields.is_object() {
            return Err(StoreError::NotAnObject {
                collection: collection.to_string(),
            });
        }
        let result = sqlx::query(
            r#"
            UPDATE documents
            SET body = body || $3
            WHERE seq = (
                SELECT seq FROM documents
                WHERE collection = $1 AND body @> $2
                ORDER BY seq
                LIMIT 1
            )
            "#,
        )
        .bind(collection)
        .bind(Json(filter.to_containment()))
        .bind(Json(fields))
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_one(&self, collection: &str, filter: &Filter) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM documents
            WHERE seq = (
                SELECT seq FROM documents
                WHERE collection = $1 AND body @> $2
                ORDER BY seq
                LIMIT 1
            )
            "#,
        )
        .bind(collection)
        .bind(Json(filter.to_containment()))
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self, collection: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1")
            .bind(collection)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn close(&self) {
        info!("Closing PostgreSQL connection pool");
        self.pool.close().await;
    }
}
