//! # Complaint Desk CLI
//!
//! Operator commands used by the `complaintdesk-cli` binary:
//!
//! - [`init_database`]: apply migrations and seed the default admin
//! - [`set_admin_password`]: replace the password of an existing admin
//!
//! No command creates further admins.
//!
//! ## Usage
//!
//! ```ignore
//! use complaintdesk_cli::{init_database, set_admin_password};
//!
//! init_database(&pool, &AdminSeedConfig::from_env()).await?;
//! set_admin_password(&pool, "admin", "new-password").await?;
//! ```

use sqlx::SqlitePool;

use complaintdesk_config::AdminSeedConfig;
use complaintdesk_core::{AppError, hash_password};
use complaintdesk_db::sqlite::SqliteAdminRepository;
use complaintdesk_db::{AdminRepository, run_migrations, seed::ensure_default_admin};

/// Migrates the database and seeds the default admin. Returns `true` when the
/// admin was created by this call.
pub async fn init_database(pool: &SqlitePool, seed: &AdminSeedConfig) -> Result<bool, AppError> {
    run_migrations(pool).await?;
    ensure_default_admin(&SqliteAdminRepository::new(pool.clone()), seed).await
}

pub async fn set_admin_password(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<(), AppError> {
    if password.is_empty() {
        return Err(AppError::Validation("password is required".to_string()));
    }

    let hashed_password = hash_password(password)?;
    let admins = SqliteAdminRepository::new(pool.clone());

    if !admins.update_password(username, &hashed_password).await? {
        return Err(AppError::NotFound("Admin"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use complaintdesk_core::verify_password;

    #[sqlx::test(migrations = false)]
    async fn test_init_database_seeds_once(pool: SqlitePool) {
        let seed = AdminSeedConfig::default();

        assert!(init_database(&pool, &seed).await.unwrap());
        assert!(!init_database(&pool, &seed).await.unwrap());

        let admin = SqliteAdminRepository::new(pool)
            .find_by_username("admin")
            .await
            .unwrap()
            .unwrap();
        assert!(verify_password("admin", &admin.password).unwrap());
    }

    #[sqlx::test(migrations = "../complaintdesk-db/migrations")]
    async fn test_set_admin_password(pool: SqlitePool) {
        init_database(&pool, &AdminSeedConfig::default())
            .await
            .unwrap();

        set_admin_password(&pool, "admin", "s3cret").await.unwrap();

        let admin = SqliteAdminRepository::new(pool)
            .find_by_username("admin")
            .await
            .unwrap()
            .unwrap();
        assert!(verify_password("s3cret", &admin.password).unwrap());
        assert!(!verify_password("admin", &admin.password).unwrap());
    }

    #[sqlx::test(migrations = "../complaintdesk-db/migrations")]
    async fn test_set_password_for_unknown_admin(pool: SqlitePool) {
        let err = set_admin_password(&pool, "ghost", "s3cret")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound("Admin")));
    }

    #[sqlx::test(migrations = "../complaintdesk-db/migrations")]
    async fn test_set_password_too_long(pool: SqlitePool) {
        init_database(&pool, &AdminSeedConfig::default())
            .await
            .unwrap();

        let err = set_admin_password(&pool, "admin", &"a".repeat(72))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let admin = SqliteAdminRepository::new(pool)
            .find_by_username("admin")
            .await
            .unwrap()
            .unwrap();
        assert!(verify_password("admin", &admin.password).unwrap());
    }

    #[sqlx::test(migrations = "../complaintdesk-db/migrations")]
    async fn test_set_empty_password_rejected(pool: SqlitePool) {
        init_database(&pool, &AdminSeedConfig::default())
            .await
            .unwrap();

        let err = set_admin_password(&pool, "admin", "").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
