//! Todo API endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::error::{ServerError, ServerResult};
use crate::store::TodoStore;
use crate::types::{CompleteResponse, CreateTodo, GreetingResponse, MessageResponse, Todo};

pub async fn greet() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        msg: "Hello, World!".to_string(),
    })
}

/// Lists all todos.
pub async fn list_todos<S: TodoStore>(
    State(store): State<Arc<S>>,
) -> ServerResult<Json<Vec<Todo<S::Id>>>> {
    Ok(Json(store.list().await?))
}

/// Creates a todo. The stored record always starts incomplete.
pub async fn create_todo<S: TodoStore>(
    State(store): State<Arc<S>>,
    payload: Result<Json<CreateTodo>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<Todo<S::Id>>)> {
    let Json(input) = payload?;
    if input.body.is_empty() {
        return Err(ServerError::InvalidRequest(
            "Todo body is required".to_string(),
        ));
    }

    let todo = store.create(input.body).await?;
    tracing::info!(id = %todo.id, "Todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// Marks a todo complete.
pub async fn complete_todo<S: TodoStore>(
    State(store): State<Arc<S>>,
    Path(raw_id): Path<String>,
) -> ServerResult<Json<CompleteResponse<S::Id>>> {
    let id = S::parse_id(&raw_id)?;
    let completion = store.complete(&id).await?;
    tracing::info!(id = %id, "Todo completed");

    Ok(Json(completion.into()))
}

/// Deletes a todo.
pub async fn delete_todo<S: TodoStore>(
    State(store): State<Arc<S>>,
    Path(raw_id): Path<String>,
) -> ServerResult<Json<MessageResponse>> {
    let id = S::parse_id(&raw_id)?;
    store.delete(&id).await?;
    tracing::info!(id = %id, "Todo deleted");

    Ok(Json(MessageResponse::new("Todo deleted")))
}
