//! In-memory todo store. Contents are lost on restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreError, StoreResult, TodoStore};
use crate::types::{Completion, Todo};

#[derive(Debug)]
struct State {
    todos: Vec<Todo<u64>>,
    next_id: u64,
}

/// Ordered in-memory todo list with integer ids.
///
/// Ids start at 1 and are never reused within a process, even after the todo
/// holding them is deleted.
#[derive(Debug)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                todos: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    type Id = u64;

    // Ids match by their canonical text, so "01" or "+1" name nothing.
    fn parse_id(raw: &str) -> StoreResult<u64> {
        raw.parse::<u64>()
            .ok()
            .filter(|id| id.to_string() == raw)
            .ok_or_else(|| StoreError::NotFound(raw.to_string()))
    }

    async fn list(&self) -> StoreResult<Vec<Todo<u64>>> {
        Ok(self.state.read().await.todos.clone())
    }

    async fn create(&self, body: String) -> StoreResult<Todo<u64>> {
        let mut state = self.state.write().await;
        let todo = Todo::new(state.next_id, body);
        state.next_id += 1;
        state.todos.push(todo.clone());
        Ok(todo)
    }

    async fn complete(&self, id: &u64) -> StoreResult<Completion<u64>> {
        let mut state = self.state.write().await;
        let todo = state
            .todos
            .iter_mut()
            .find(|todo| todo.id == *id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        todo.completed = true;
        Ok(Completion::Updated(todo.clone()))
    }

    async fn delete(&self, id: &u64) -> StoreResult<()> {
        let mut state = self.state.write().await;
        let index = state
            .todos
            .iter()
            .position(|todo| todo.id == *id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        state.todos.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_start_at_one_and_increase() {
        let store = MemoryStore::new();
        let first = store.create("a".to_string()).await.unwrap();
        let second = store.create("b".to_string()).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(!first.completed);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        store.create("a".to_string()).await.unwrap();
        let second = store.create("b".to_string()).await.unwrap();
        store.delete(&second.id).await.unwrap();

        let third = store.create("c".to_string()).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = MemoryStore::new();
        for body in ["one", "two", "three"] {
            store.create(body.to_string()).await.unwrap();
        }
        store.delete(&2).await.unwrap();

        let bodies: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|todo| todo.body)
            .collect();
        assert_eq!(bodies, vec!["one", "three"]);
    }

    #[tokio::test]
    async fn complete_is_idempotent_and_leaves_others_alone() {
        let store = MemoryStore::new();
        store.create("a".to_string()).await.unwrap();
        store.create("b".to_string()).await.unwrap();

        let first = store.complete(&1).await.unwrap();
        let second = store.complete(&1).await.unwrap();
        assert_eq!(first, second);

        let todos = store.list().await.unwrap();
        assert!(todos[0].completed);
        assert!(!todos[1].completed);
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(store.complete(&7).await, Err(StoreError::NotFound(_))));
        assert!(matches!(store.delete(&7).await, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn non_integer_id_is_not_found() {
        assert_eq!(MemoryStore::parse_id("12").unwrap(), 12);
        assert!(matches!(
            MemoryStore::parse_id("abc"),
            Err(StoreError::NotFound(id)) if id == "abc"
        ));
    }

    #[test]
    fn non_canonical_id_is_not_found() {
        for raw in ["01", "+1", " 1"] {
            assert!(
                matches!(MemoryStore::parse_id(raw), Err(StoreError::NotFound(_))),
                "{raw:?} should not resolve"
            );
        }
        assert_eq!(MemoryStore::parse_id("0").unwrap(), 0);
    }
}
