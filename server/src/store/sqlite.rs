//! SQLite-backed todo store.
//!
//! Each todo is one row keyed by a UUID generated at insert time. Complete and
//! delete issue blind single-statement writes: a well-formed id that matches
//! nothing is not an error.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::{StoreError, StoreResult, TodoStore};
use crate::types::{Completion, Todo};

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id BLOB PRIMARY KEY NOT NULL,
    completed INTEGER NOT NULL DEFAULT 0,
    body TEXT NOT NULL CHECK (body <> '')
)
"#;

/// Durable todo store on an SQLite connection pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connects to `database_url` and creates the todos table if needed.
    ///
    /// `sqlite::memory:` gets a single long-lived connection, since every
    /// new connection to an in-memory database starts empty.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        tracing::info!(url = %database_url, "Connecting to SQLite");

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(options)
                .await?
        };

        Self::from_pool(pool).await
    }

    /// Wraps an existing pool, creating the todos table if needed.
    pub async fn from_pool(pool: SqlitePool) -> StoreResult<Self> {
        sqlx::query(SCHEMA_SQL).execute(&pool).await?;
        tracing::info!("SQLite todo store ready");
        Ok(Self { pool })
    }
}

#[async_trait]
impl TodoStore for SqliteStore {
    type Id = Uuid;

    fn parse_id(raw: &str) -> StoreResult<Uuid> {
        Uuid::parse_str(raw).map_err(|_| StoreError::InvalidId(raw.to_string()))
    }

    async fn list(&self) -> StoreResult<Vec<Todo<Uuid>>> {
        let rows: Vec<(Uuid, bool, String)> =
            sqlx::query_as("SELECT id, completed, body FROM todos ORDER BY rowid")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, completed, body)| Todo {
                id,
                completed,
                body,
            })
            .collect())
    }

    async fn create(&self, body: String) -> StoreResult<Todo<Uuid>> {
        let todo = Todo::new(Uuid::new_v4(), body);
        sqlx::query("INSERT INTO todos (id, completed, body) VALUES (?, ?, ?)")
            .bind(todo.id)
            .bind(todo.completed)
            .bind(&todo.body)
            .execute(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn complete(&self, id: &Uuid) -> StoreResult<Completion<Uuid>> {
        let result = sqlx::query("UPDATE todos SET completed = 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        tracing::debug!(id = %id, matched = result.rows_affected(), "Complete issued");
        Ok(Completion::Acknowledged)
    }

    async fn delete(&self, id: &Uuid) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        tracing::debug!(id = %id, matched = result.rows_affected(), "Delete issued");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> SqliteStore {
        SqliteStore::connect("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn create_then_list() {
        let store = store().await;
        let created = store.create("buy milk".to_string()).await.unwrap();
        assert!(!created.completed);

        let todos = store.list().await.unwrap();
        assert_eq!(todos, vec![created]);
    }

    #[tokio::test]
    async fn list_returns_insertion_order() {
        let store = store().await;
        for body in ["one", "two", "three"] {
            store.create(body.to_string()).await.unwrap();
        }
        let bodies: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|todo| todo.body)
            .collect();
        assert_eq!(bodies, vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn complete_marks_only_the_matching_row() {
        let store = store().await;
        let a = store.create("a".to_string()).await.unwrap();
        let b = store.create("b".to_string()).await.unwrap();

        let outcome = store.complete(&a.id).await.unwrap();
        assert_eq!(outcome, Completion::Acknowledged);

        let todos = store.list().await.unwrap();
        let find = |id: Uuid| todos.iter().find(|todo| todo.id == id).unwrap();
        assert!(find(a.id).completed);
        assert!(!find(b.id).completed);
    }

    #[tokio::test]
    async fn writes_to_unknown_ids_succeed() {
        let store = store().await;
        let id = Uuid::new_v4();
        assert_eq!(store.complete(&id).await.unwrap(), Completion::Acknowledged);
        store.delete(&id).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let store = store().await;
        let todo = store.create("gone".to_string()).await.unwrap();
        store.delete(&todo.id).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_body_is_rejected_by_schema() {
        let store = store().await;
        let result = store.create(String::new()).await;
        assert!(matches!(result, Err(StoreError::Database(_))));
    }

    #[test]
    fn malformed_id_is_invalid() {
        assert!(matches!(
            SqliteStore::parse_id("not-a-uuid"),
            Err(StoreError::InvalidId(_))
        ));
        assert_eq!(SqliteStore::parse_id(&Uuid::nil().to_string()).unwrap(), Uuid::nil());
    }
}
