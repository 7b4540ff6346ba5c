use crate::domain::repository::TodoRepository;
use crate::domain::todo::{CreateTodo, Todo, TodoId};
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn create(&self, input: CreateTodo) -> Result<Todo>;
    async fn get(&self, id: TodoId) -> Result<Option<Todo>>;
    async fn list(&self) -> Result<Vec<Todo>>;
    async fn delete(&self, id: TodoId) -> Result<bool>;
    async fn missing_priorities(&self) -> Result<Vec<i64>>;
    async fn clear(&self) -> Result<()>;
}

#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn create(&self, input: CreateTodo) -> Result<Todo> { self.repo.create(input).await }
    async fn get(&self, id: TodoId) -> Result<Option<Todo>> { self.repo.get(id).await }
    async fn list(&self) -> Result<Vec<Todo>> { self.repo.list().await }
    async fn delete(&self, id: TodoId) -> Result<bool> { self.repo.delete(id).await }
    async fn missing_priorities(&self) -> Result<Vec<i64>> { self.repo.missing_priorities().await }
    async fn clear(&self) -> Result<()> { self.repo.clear().await }
}
