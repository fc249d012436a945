//! # Complaint Desk DB
//!
//! Persistence for the Complaint Desk application, backed by a single SQLite
//! database file.
//!
//! - [`init_db_pool`]: opens (and creates) the database file
//! - [`run_migrations`]: applies the embedded schema migrations
//! - [`repository`]: one repository trait per record kind
//! - [`sqlite`]: SQLite implementations of those traits
//! - [`seed`]: default admin seeding
//!
//! # Example
//!
//! ```ignore
//! use complaintdesk_config::{AdminSeedConfig, DatabaseConfig};
//! use complaintdesk_db::{init_db_pool, run_migrations, seed::ensure_default_admin};
//! use complaintdesk_db::sqlite::SqliteAdminRepository;
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//! run_migrations(&pool).await?;
//! ensure_default_admin(&SqliteAdminRepository::new(pool.clone()), &AdminSeedConfig::from_env()).await?;
//! ```

use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use complaintdesk_config::DatabaseConfig;
use complaintdesk_core::AppError;

pub mod repository;
pub mod seed;
pub mod sqlite;

pub use repository::{AdminRepository, ComplaintRepository, StudentRepository};
pub use sqlx::SqlitePool;

/// Opens a connection pool to the configured SQLite database.
///
/// The database file is created if missing, together with its parent
/// directory. Foreign key enforcement is on for every connection.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    ensure_parent_dir(options.get_filename()).await?;

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    info!(url = %config.url, "Connected to database");
    Ok(pool)
}

/// Applies the migrations embedded from `migrations/`.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

async fn ensure_parent_dir(db_file: &Path) -> Result<(), AppError> {
    match db_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| {
                AppError::internal(anyhow::anyhow!(
                    "Failed to create database directory {}: {}",
                    parent.display(),
                    e
                ))
            }),
        _ => Ok(()),
    }
}
