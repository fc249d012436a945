use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use complaintdesk_core::AppError;
use complaintdesk_models::{Student, StudentCredentials, StudentId};

use crate::repository::StudentRepository;

#[derive(Debug, Clone)]
pub struct SqliteStudentRepository {
    pool: SqlitePool,
}

impl SqliteStudentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for SqliteStudentRepository {
    #[instrument(skip(self))]
    async fn find(&self, id: StudentId) -> Result<Option<Student>, AppError> {
        let student = sqlx::query_as::<_, Student>("SELECT id, email FROM students WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(student)
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<Option<StudentCredentials>, AppError> {
        let student = sqlx::query_as::<_, StudentCredentials>(
            "SELECT id, email, password FROM students WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    #[instrument(skip(self, password_hash))]
    async fn insert(&self, email: &str, password_hash: &str) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(
            "INSERT INTO students (email, password) VALUES (?, ?) RETURNING id, email",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::DuplicateUser;
                }
            }
            AppError::Database(e)
        })
    }
}
