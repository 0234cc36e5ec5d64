/// Ecoleta: a registry of recycling collection points
///
/// This library provides the data models, database access, and web API for
/// registering collection points and finding them by location and by the
/// kinds of material they accept.
///
/// ### Modules
///
/// - `config`: Layered configuration (defaults, TOML file, environment, CLI)
/// - `db`: Database connection management
/// - `dto`: Request and response bodies
/// - `errors`: API error type and its HTTP mapping
/// - `handlers`: Axum request handlers
/// - `models`: Data structures mapped to the database tables
/// - `repo`: Repository layer for database operations
/// - `schema`: Database schema definitions
///
/// ### Web API
///
/// - `POST /points`: Register a point with the items it collects
/// - `GET /points`: Search points by `city`, `uf` and comma-separated `items`
/// - `GET /points/{id}`: Get a point and the titles of its items
/// - `GET /items`: List every item

pub mod config;

/// Database connection module
pub mod db;

pub mod dto;

pub mod errors;

pub mod handlers;

/// Data models module
pub mod models;

/// Repository module for database operations
pub mod repo;

/// Database schema module
pub mod schema;

#[cfg(test)]
pub mod test_utils;

use axum::{
    extract::FromRef,
    routing::get,
    Router,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::config::Settings;
use crate::db::DbPool;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<DbPool>,
    pub settings: Arc<Settings>,
}

impl FromRef<AppState> for Arc<DbPool> {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Arc<Settings> {
    fn from_ref(state: &AppState) -> Self {
        state.settings.clone()
    }
}

/// Builds the application router
///
/// CORS is permissive so the browser registration form can be served from
/// another origin.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Search points, register a point
        .route("/points", get(handlers::search_points_handler).post(handlers::create_point_handler))
        // A single point with its item titles
        .route("/points/{id}", get(handlers::get_point_handler))
        // All items
        .route("/items", get(handlers::list_items_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs all pending embedded migrations
///
/// ### Errors
///
/// Returns an error if any migration fails to apply.
pub fn run_migrations(conn: &mut diesel::SqliteConnection) -> anyhow::Result<()> {
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;
    Ok(())
}
