//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! breadbox migrate
//! ```
//!
//! # Environment Variables
//!
//! - `BREADBOX_DATABASE_URL` - `PostgreSQL` connection string
//!   (falls back to `DATABASE_URL`)

use tracing::info;

use breadbox_server::db;

/// Errors from running migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    #[error("{0}")]
    MissingEnvVar(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run catalog database migrations.
///
/// # Errors
///
/// Returns `MigrateError` if the database is unreachable or a migration
/// fails.
pub async fn run() -> Result<(), MigrateError> {
    let database_url = super::database_url().map_err(MigrateError::MissingEnvVar)?;

    info!("Connecting to catalog database...");
    let pool = db::create_pool(&database_url).await?;

    info!("Running catalog migrations...");
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    info!("Catalog migrations complete!");
    Ok(())
}
