use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{
    priority_collection::PriorityCollection,
    repository::TodoRepository,
    todo::{CreateTodo, Todo, TodoId},
};

/// In-memory store: the priority collection behind a single mutex.
///
/// Handlers run concurrently on the tokio runtime, so every operation takes
/// the lock for its full read-modify-write span. No await happens while the
/// guard is held.
#[derive(Clone, Default)]
pub struct InMemoryTodoRepository {
    collection: Arc<Mutex<PriorityCollection>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self { collection: Arc::new(Mutex::new(PriorityCollection::new())) }
    }

    fn lock(&self) -> Result<MutexGuard<'_, PriorityCollection>> {
        self.collection.lock().map_err(|_| anyhow::anyhow!("todo collection lock poisoned"))
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, input: CreateTodo) -> Result<Todo> {
        Ok(self.lock()?.add(input))
    }

    async fn get(&self, id: TodoId) -> Result<Option<Todo>> {
        Ok(self.lock()?.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Todo>> {
        Ok(self.lock()?.list_all())
    }

    async fn delete(&self, id: TodoId) -> Result<bool> {
        Ok(self.lock()?.delete(id))
    }

    async fn missing_priorities(&self) -> Result<Vec<i64>> {
        Ok(self.lock()?.missing_priorities())
    }

    async fn clear(&self) -> Result<()> {
        self.lock()?.clear();
        Ok(())
    }
}
