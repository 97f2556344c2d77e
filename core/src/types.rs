//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently.
//! The server hands out integer ids from its in-memory store and UUID strings
//! from its SQLite store, so `TodoId` accepts either.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a todo, as assigned by whichever store the server runs on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Number(u64),
    Text(String),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Number(n) => write!(f, "{n}"),
            TodoId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for TodoId {
    fn from(id: u64) -> Self {
        TodoId::Number(id)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        TodoId::Text(id.to_string())
    }
}

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub completed: bool,
    pub body: String,
}

/// Request payload for creating a new todo. New todos always start
/// incomplete, so there is no `completed` field to send.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub body: String,
}

/// What the server returned for a successful complete request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CompleteOutcome {
    /// The server looked the todo up and returned it.
    Updated(Todo),
    /// The server only acknowledged the update.
    Acknowledged { message: String },
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Message {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

/// Completion filter offered by the todo list UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TodoFilter {
    #[default]
    All,
    Completed,
    InProgress,
}

impl TodoFilter {
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Completed => todo.completed,
            TodoFilter::InProgress => !todo.completed,
        }
    }

    /// Returns the todos passing the filter, in their original order.
    pub fn apply<'a>(self, todos: &'a [Todo]) -> Vec<&'a Todo> {
        todos.iter().filter(|todo| self.matches(todo)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: u64, completed: bool) -> Todo {
        Todo {
            id: TodoId::Number(id),
            completed,
            body: format!("todo {id}"),
        }
    }

    #[test]
    fn id_accepts_numbers_and_strings() {
        let numeric: Todo =
            serde_json::from_str(r#"{"id":1,"completed":false,"body":"a"}"#).unwrap();
        assert_eq!(numeric.id, TodoId::Number(1));

        let text: Todo = serde_json::from_str(
            r#"{"id":"9f2c1a4e-0000-4000-8000-000000000000","completed":true,"body":"b"}"#,
        )
        .unwrap();
        assert_eq!(text.id.to_string(), "9f2c1a4e-0000-4000-8000-000000000000");
    }

    #[test]
    fn complete_outcome_distinguishes_shapes() {
        let updated: CompleteOutcome =
            serde_json::from_str(r#"{"id":2,"completed":true,"body":"x"}"#).unwrap();
        assert!(matches!(updated, CompleteOutcome::Updated(ref t) if t.completed));

        let acked: CompleteOutcome = serde_json::from_str(r#"{"message":"Todo updated"}"#).unwrap();
        assert_eq!(
            acked,
            CompleteOutcome::Acknowledged {
                message: "Todo updated".to_string()
            }
        );
    }

    #[test]
    fn filter_by_completion() {
        let todos = vec![todo(1, false), todo(2, true), todo(3, false)];

        assert_eq!(TodoFilter::All.apply(&todos).len(), 3);

        let done: Vec<&TodoId> = TodoFilter::Completed
            .apply(&todos)
            .into_iter()
            .map(|t| &t.id)
            .collect();
        assert_eq!(done, vec![&TodoId::Number(2)]);

        let open: Vec<&TodoId> = TodoFilter::InProgress
            .apply(&todos)
            .into_iter()
            .map(|t| &t.id)
            .collect();
        assert_eq!(open, vec![&TodoId::Number(1), &TodoId::Number(3)]);
    }
}
