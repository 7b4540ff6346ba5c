use std::net::SocketAddr;

use anyhow::Context;
use todo_api::application::todo_service::TodoServiceImpl;
use todo_api::http::routing::{self, todos};
use todo_api::infrastructure::memory_repo::InMemoryTodoRepository;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let repo = InMemoryTodoRepository::new();
    let service = TodoServiceImpl::new(repo);
    let todos_router = todos::router(todos::AppState { service });
    let router = routing::app(todos_router);

    let addr = bind_addr()?;
    tracing::info!(%addr, "listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal::ctrl_c;
    let _ = ctrl_c().await;
    tracing::info!("shutdown");
}

fn bind_addr() -> anyhow::Result<SocketAddr> {
    let raw = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    raw.parse().with_context(|| format!("invalid BIND_ADDR '{raw}'"))
}
