use async_trait::async_trait;
use super::todo::{CreateTodo, Todo, TodoId};

#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn create(&self, input: CreateTodo) -> anyhow::Result<Todo>;
    async fn get(&self, id: TodoId) -> anyhow::Result<Option<Todo>>;
    async fn list(&self) -> anyhow::Result<Vec<Todo>>;
    async fn delete(&self, id: TodoId) -> anyhow::Result<bool>;
    async fn missing_priorities(&self) -> anyhow::Result<Vec<i64>>;
    async fn clear(&self) -> anyhow::Result<()>;
}
