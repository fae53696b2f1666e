/// Server setup and initialization
///
/// Wires together the activity store, the directory service and HTTP routes.
/// Provides the main application factory function for creating the Axum app.

use crate::{
    activity::{ActivityDirectoryService, SqliteActivityStorage},
    api::{create_activity_routes, AppState},
    config::Config,
};
use anyhow::Result;
use axum::{routing::get, Router};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::{path::Path, str::FromStr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

/// Open the process-wide SQLite pool for the activity store
///
/// Creates the parent directory of a file-backed database when needed.
pub async fn connect_pool(config: &Config) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database.url)
        .map_err(|e| anyhow::anyhow!("Invalid database URL '{}': {}", config.database.url, e))?
        .create_if_missing(true);

    if let Some(parent) = Path::new(options.get_filename()).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!("Failed to create database directory '{}': {}", parent.display(), e)
            })?;
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Build the router for a ready service
///
/// Split from `create_app` so tests can mount the routes over any repository
/// without opening a database or binding a listener.
pub fn build_router(service: ActivityDirectoryService, static_dir: impl AsRef<Path>) -> Router {
    let app_state = AppState { service };

    Router::new()
        // Health check endpoint
        .route("/healthz", get(health_check))
        // Activity listing and enrollment routes
        .merge(create_activity_routes().with_state(app_state))
        // Front-end assets
        .nest_service("/static", ServeDir::new(static_dir))
}

/// Create the main Axum application with all routes and middleware
///
/// Connects the store, seeds the built-in catalog, and returns the router.
pub async fn create_app(config: Config) -> Result<Router> {
    tracing::info!("🗄️ Connecting to activity store: {}", config.database.url);
    let pool = connect_pool(&config).await?;

    let storage = SqliteActivityStorage::new(pool);
    storage
        .init_schema()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize activity schema: {}", e))?;

    let service = ActivityDirectoryService::new(Arc::new(storage));

    // Startup reseed: previous enrollments do not survive a restart
    tracing::info!("🌱 Seeding activity catalog");
    service
        .seed()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to seed activities: {}", e))?;

    tracing::info!("📡 Creating HTTP router (static assets from '{}')", config.server.static_dir);
    let app = build_router(service, &config.server.static_dir);

    tracing::info!("✅ Application initialized successfully");

    Ok(app)
}

/// Start the HTTP server with the given configuration
///
/// Creates the application and starts the Axum server on the configured address and port.
pub async fn start_server(config: Config) -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .init();

    tracing::info!("Starting Mergington activities server...");

    let app = create_app(config.clone()).await?;

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Health check endpoint handler
async fn health_check() -> &'static str {
    "ok"
}
