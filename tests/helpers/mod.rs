//! Test helper functions for database and app setup

#![allow(dead_code)]

use axum::Router;
use contact_api::config::EmailConfig;
use contact_api::email::EmailService;
use contact_api::routes::{AppState, router};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Create an in-memory SQLite pool with migrations applied
///
/// A single connection keeps every query on the same in-memory database.
pub async fn setup_test_pool() -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// Build the app router around a pool and email service
pub fn app(pool: SqlitePool, email: EmailService) -> Router {
    router(AppState {
        pool,
        email,
        environment: "test".to_string(),
    })
}

/// App with a mock email service that reports itself configured
pub async fn test_app() -> anyhow::Result<(Router, SqlitePool)> {
    let pool = setup_test_pool().await?;
    let email = EmailService::new_mock(&EmailConfig::default());
    Ok((app(pool.clone(), email), pool))
}

/// App whose email service has no credentials configured
pub async fn test_app_without_credentials() -> anyhow::Result<(Router, SqlitePool)> {
    let pool = setup_test_pool().await?;
    let email = EmailService::new(&EmailConfig::default())?;
    Ok((app(pool.clone(), email), pool))
}
