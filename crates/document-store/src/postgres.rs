use async_trait::async_trait;
use futures_util::{StreamExt, TryStreamExt};
use sqlx::{
    PgPool, Row,
    postgres::{PgPoolOptions, PgRow},
};

use crate::{
    Document, DocumentId, Result, StoreError,
    document::{apply_set, ensure_id, into_document},
    store::{DeleteOutcome, DocumentStore, InsertOneOutcome, UpdateOutcome},
};

/// PostgreSQL-backed document store.
///
/// Every collection shares the single `documents` table; each row holds one
/// JSONB document together with its collection name and identity.
#[derive(Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
}

impl PostgresDocumentStore {
    /// Creates a new PostgreSQL document store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool to `database_url` and wraps it.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    fn row_to_document(row: PgRow) -> Result<Document> {
        let body: serde_json::Value = row.try_get("body")?;
        into_document(body)
    }
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    #[tracing::instrument(skip(self, document))]
    async fn insert_one(&self, collection: &str, document: Document) -> Result<InsertOneOutcome> {
        let mut document = document;
        let id = ensure_id(&mut document)?;

        sqlx::query("INSERT INTO documents (collection, doc_id, body) VALUES ($1, $2, $3)")
            .bind(collection)
            .bind(id.as_str())
            .bind(serde_json::Value::Object(document))
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e
                    && db_err.constraint() == Some("documents_pkey")
                {
                    return StoreError::DuplicateKey {
                        collection: collection.to_string(),
                        id: id.clone(),
                    };
                }
                StoreError::Database(e)
            })?;

        Ok(InsertOneOutcome { inserted_id: id })
    }

    async fn find_one(&self, collection: &str, id: &DocumentId) -> Result<Option<Document>> {
        let row: Option<PgRow> =
            sqlx::query("SELECT body FROM documents WHERE collection = $1 AND doc_id = $2")
                .bind(collection)
                .bind(id.as_str())
                .fetch_optional(&self.pool)
                .await?;

        row.map(Self::row_to_document).transpose()
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>> {
        sqlx::query("SELECT body FROM documents WHERE collection = $1 ORDER BY seq ASC")
            .bind(collection)
            .fetch(&self.pool)
            .map(|result| match result {
                Ok(row) => Self::row_to_document(row),
                Err(e) => Err(StoreError::Database(e)),
            })
            .try_collect()
            .await
    }

    #[tracing::instrument(skip(self, set))]
    async fn update_one(
        &self,
        collection: &str,
        id: &DocumentId,
        set: Document,
    ) -> Result<UpdateOutcome> {
        let mut tx = self.pool.begin().await?;

        // Lock the row so the merge below sees a stable document
        let row: Option<PgRow> = sqlx::query(
            "SELECT body FROM documents WHERE collection = $1 AND doc_id = $2 FOR UPDATE",
        )
        .bind(collection)
        .bind(id.as_str())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            return Ok(UpdateOutcome::default());
        };

        let mut document = Self::row_to_document(row)?;
        let modified = apply_set(&mut document, &set)?;

        if modified {
            sqlx::query("UPDATE documents SET body = $3 WHERE collection = $1 AND doc_id = $2")
                .bind(collection)
                .bind(id.as_str())
                .bind(serde_json::Value::Object(document))
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(UpdateOutcome {
            matched_count: 1,
            modified_count: u64::from(modified),
        })
    }

    async fn delete_one(&self, collection: &str, id: &DocumentId) -> Result<DeleteOutcome> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND doc_id = $2")
            .bind(collection)
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(DeleteOutcome {
            deleted_count: result.rows_affected(),
        })
    }

    async fn count(&self, collection: &str) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE collection = $1")
            .bind(collection)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }
}
