use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::application::todo_service::TodoService;
use crate::domain::todo::{CreateTodo, Todo, TodoId};
use crate::http::types::ApiError;

#[derive(Clone)]
pub struct AppState<S: TodoService> {
    pub service: S,
}

pub fn router<S: TodoService + Clone + Send + Sync + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/todos/", post(create_todo::<S>).get(list_todos::<S>))
        .route("/todos/missing-priorities/", get(missing_priorities::<S>))
        .route("/todos/:id", get(get_todo::<S>).delete(delete_todo::<S>))
        .with_state(state)
}

async fn create_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Json(payload): Json<CreateTodo>,
) -> Result<Json<Todo>, ApiError> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::Validation("title must not be empty".into()));
    }
    let todo = state.service.create(payload).await?;
    Ok(Json(todo))
}

async fn list_todos<S: TodoService>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.service.list().await?;
    Ok(Json(todos))
}

async fn get_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.service.get(TodoId(id)).await?;
    todo.map(Json).ok_or(ApiError::NotFound)
}

async fn delete_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if state.service.delete(TodoId(id)).await? {
        Ok(Json(serde_json::json!({ "message": "TODO item deleted successfully" })))
    } else {
        Err(ApiError::NotFound)
    }
}

async fn missing_priorities<S: TodoService>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<i64>>, ApiError> {
    let missing = state.service.missing_priorities().await?;
    Ok(Json(missing))
}
