//! Storage backends for todos.
//!
//! Both backends implement [`TodoStore`]. The router is generic over the
//! store and receives it as state, so the choice of backend is made once at
//! startup.

mod memory;
mod sqlite;

use std::fmt::{Debug, Display};

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::types::{Completion, Todo};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No todo with the given id exists.
    #[error("todo not found: {0}")]
    NotFound(String),

    /// The id could not be parsed into the store's identifier format.
    #[error("invalid todo id: {0}")]
    InvalidId(String),

    /// Database error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage operations backing the four todo routes.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// Identifier assigned to todos by this store.
    type Id: Clone + Debug + Display + Serialize + Send + Sync + 'static;

    /// Parses an identifier taken from a request path.
    fn parse_id(raw: &str) -> StoreResult<Self::Id>;

    /// Returns every todo in insertion order.
    async fn list(&self) -> StoreResult<Vec<Todo<Self::Id>>>;

    /// Stores a new incomplete todo and returns it with its assigned id.
    ///
    /// Callers must reject empty bodies before calling this.
    async fn create(&self, body: String) -> StoreResult<Todo<Self::Id>>;

    /// Sets `completed` on the todo.
    async fn complete(&self, id: &Self::Id) -> StoreResult<Completion<Self::Id>>;

    /// Removes the todo.
    async fn delete(&self, id: &Self::Id) -> StoreResult<()>;
}
