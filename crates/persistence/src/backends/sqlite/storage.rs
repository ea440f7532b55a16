//! DocumentStore implementation for SQLite.

use async_trait::async_trait;
use rusqlite::params_from_iter;
use rusqlite::types::Value as SqlValue;
use serde_json::Value;

use crate::core::{DocumentStore, TextMatcher};
use crate::error::{BackendError, DocumentError, StorageError, StorageResult};
use crate::types::{Filter, FindOptions, Projection, SURROGATE_KEY};

use super::SqliteStore;
use super::query::{build_where, to_sql_int};

fn internal_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: "sqlite".to_string(),
        message,
        source: None,
    })
}

fn query_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::QueryError { message })
}

fn serialization_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::SerializationError { message })
}

impl SqliteStore {
    /// Runs a `SELECT data` query and decodes each row.
    fn select_documents(
        &self,
        sql: &str,
        params: Vec<SqlValue>,
        projection: &Projection,
    ) -> StorageResult<Vec<Value>> {
        let conn = self.get_connection()?;

        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| query_error(format!("Failed to prepare query: {}", e)))?;

        let rows = stmt
            .query_map(params_from_iter(params), |row| row.get::<_, String>(0))
            .map_err(|e| query_error(format!("Failed to execute query: {}", e)))?;

        let mut documents = Vec::new();
        for row in rows {
            let data = row.map_err(|e| query_error(format!("Failed to read row: {}", e)))?;
            let document: Value = serde_json::from_str(&data)
                .map_err(|e| serialization_error(format!("Failed to parse document: {}", e)))?;
            documents.push(projection.apply(document));
        }

        Ok(documents)
    }
}

#[async_trait]
impl DocumentStore for SqliteStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    fn text_matcher(&self) -> &dyn TextMatcher {
        self.matcher()
    }

    async fn insert_many(&self, collection: &str, documents: Vec<Value>) -> StorageResult<usize> {
        let mut conn = self.get_connection()?;

        let tx = conn
            .transaction()
            .map_err(|e| internal_error(format!("Failed to begin transaction: {}", e)))?;

        let mut inserted = 0;
        for mut document in documents {
            let Some(obj) = document.as_object_mut() else {
                // Dropping the transaction rolls back earlier rows.
                return Err(DocumentError::NotAnObject {
                    collection: collection.to_string(),
                }
                .into());
            };

            let surrogate_id = uuid::Uuid::new_v4().to_string();
            obj.insert(
                SURROGATE_KEY.to_string(),
                Value::String(surrogate_id.clone()),
            );

            let data = serde_json::to_string(&document)
                .map_err(|e| serialization_error(format!("Failed to serialize document: {}", e)))?;

            tx.execute(
                "INSERT INTO documents (collection, surrogate_id, data) VALUES (?1, ?2, ?3)",
                rusqlite::params![collection, surrogate_id, data],
            )
            .map_err(|e| internal_error(format!("Failed to insert document: {}", e)))?;

            inserted += 1;
        }

        tx.commit()
            .map_err(|e| internal_error(format!("Failed to commit transaction: {}", e)))?;

        tracing::debug!(collection, inserted, "Inserted documents");
        Ok(inserted)
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        options: &FindOptions,
    ) -> StorageResult<Vec<Value>> {
        let clause = build_where(collection, filter);
        let mut params = clause.params;

        // SQLite treats a negative LIMIT as "no limit".
        let limit = options.limit.map(to_sql_int).unwrap_or(-1);
        params.push(SqlValue::Integer(limit));
        params.push(SqlValue::Integer(to_sql_int(options.skip)));

        let sql = format!(
            "SELECT data FROM documents WHERE {} ORDER BY seq LIMIT ? OFFSET ?",
            clause.sql
        );

        self.select_documents(&sql, params, &options.projection)
    }

    async fn count(&self, collection: &str, filter: &Filter) -> StorageResult<u64> {
        let conn = self.get_connection()?;
        let clause = build_where(collection, filter);
        let sql = format!("SELECT COUNT(*) FROM documents WHERE {}", clause.sql);

        let count: i64 = conn
            .query_row(&sql, params_from_iter(clause.params), |row| row.get(0))
            .map_err(|e| query_error(format!("Failed to count documents: {}", e)))?;

        Ok(count.max(0) as u64)
    }

    async fn sample(
        &self,
        collection: &str,
        size: usize,
        projection: &Projection,
    ) -> StorageResult<Vec<Value>> {
        let params = vec![
            SqlValue::Text(collection.to_string()),
            SqlValue::Integer(to_sql_int(size)),
        ];

        self.select_documents(
            "SELECT data FROM documents WHERE collection = ? ORDER BY RANDOM() LIMIT ?",
            params,
            projection,
        )
    }

    async fn health_check(&self) -> StorageResult<()> {
        let conn = self.get_connection()?;
        conn.query_row("SELECT 1", [], |_| Ok(()))
            .map_err(|e| StorageError::Backend(BackendError::Unavailable {
                backend_name: "sqlite".to_string(),
                message: e.to_string(),
            }))
    }
}
