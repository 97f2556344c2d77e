//! Todo list HTTP API.
//!
//! # Overview
//! Four routes under `/api/todos` (list, create, complete, delete) served by
//! axum over a pluggable [`TodoStore`]: an in-memory list with integer ids or
//! an SQLite table with UUID ids.
//!
//! # Design
//! - The store is built by the caller and handed to [`app`], which wraps it in
//!   an `Arc` as router state. Nothing is global.
//! - Handlers are generic over the store; behavior differences between the
//!   backends (id format, not-found reporting) live in the store impls.
//! - Every response body is an explicit type from [`types`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod store;
pub mod types;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, patch},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::{Config, StoreKind};
pub use error::{ServerError, ServerResult};
pub use store::{MemoryStore, SqliteStore, StoreError, TodoStore};
pub use types::Todo;

/// Creates the application router over `store`.
pub fn app<S: TodoStore>(store: S) -> Router {
    Router::new()
        .route("/", get(handlers::greet))
        .route(
            "/api/todos",
            get(handlers::list_todos::<S>).post(handlers::create_todo::<S>),
        )
        .route(
            "/api/todos/{id}",
            patch(handlers::complete_todo::<S>).delete(handlers::delete_todo::<S>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(store))
}

/// Allows cross-origin requests from a single `origin`.
pub fn cors_layer(origin: &str) -> anyhow::Result<CorsLayer> {
    let origin: HeaderValue = origin
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid CORS origin {origin:?}"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT]))
}

/// Builds the router for `config`, connecting to the database if needed.
pub async fn build_app(config: &Config) -> anyhow::Result<Router> {
    let router = match config.store {
        StoreKind::Memory => {
            tracing::info!("Using in-memory todo store");
            app(MemoryStore::new())
        }
        StoreKind::Sqlite => app(SqliteStore::connect(&config.database_url).await?),
    };

    match &config.cors_origin {
        Some(origin) => Ok(router.layer(cors_layer(origin)?)),
        None => Ok(router),
    }
}

pub async fn run(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

/// Initializes tracing with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
