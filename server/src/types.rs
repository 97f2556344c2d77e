//! Wire types for the todo API.
//!
//! `Todo` is generic over its identifier so the in-memory store can hand out
//! integer ids while the SQLite store hands out UUIDs, with both serializing
//! to the same `{"id", "completed", "body"}` shape.

use serde::{Deserialize, Serialize};

/// A single todo record as stored and returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo<Id> {
    pub id: Id,
    pub completed: bool,
    pub body: String,
}

impl<Id> Todo<Id> {
    pub fn new(id: Id, body: String) -> Self {
        Self {
            id,
            completed: false,
            body,
        }
    }
}

/// Request payload for creating a todo.
///
/// `completed` is accepted for compatibility with clients that echo the full
/// record back, but new todos always start incomplete.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub msg: String,
}

/// Result of marking a todo complete.
///
/// Stores that look the record up return it; stores that issue a blind
/// update only acknowledge the request.
#[derive(Debug, PartialEq, Eq)]
pub enum Completion<Id> {
    Updated(Todo<Id>),
    Acknowledged,
}

/// Body of a successful `PATCH /api/todos/{id}`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CompleteResponse<Id> {
    Todo(Todo<Id>),
    Message(MessageResponse),
}

impl<Id> From<Completion<Id>> for CompleteResponse<Id> {
    fn from(completion: Completion<Id>) -> Self {
        match completion {
            Completion::Updated(todo) => CompleteResponse::Todo(todo),
            Completion::Acknowledged => CompleteResponse::Message(MessageResponse::new("Todo updated")),
        }
    }
}
