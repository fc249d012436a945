use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use complaintdesk_core::AppError;
use complaintdesk_models::{Admin, AdminCredentials};

use crate::repository::AdminRepository;

#[derive(Debug, Clone)]
pub struct SqliteAdminRepository {
    pool: SqlitePool,
}

impl SqliteAdminRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for SqliteAdminRepository {
    #[instrument(skip(self))]
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminCredentials>, AppError> {
        let admin = sqlx::query_as::<_, AdminCredentials>(
            "SELECT id, username, password FROM admins WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin)
    }

    #[instrument(skip(self, password_hash))]
    async fn insert(&self, username: &str, password_hash: &str) -> Result<Admin, AppError> {
        let admin = sqlx::query_as::<_, Admin>(
            "INSERT INTO admins (username, password) VALUES (?, ?) RETURNING id, username",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(admin)
    }

    #[instrument(skip(self, password_hash))]
    async fn update_password(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE admins SET password = ? WHERE username = ?")
            .bind(password_hash)
            .bind(username)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
