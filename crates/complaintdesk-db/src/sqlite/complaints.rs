use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use complaintdesk_core::AppError;
use complaintdesk_models::{Complaint, ComplaintId, ComplaintStatus, NewComplaint, StudentId};

use crate::repository::ComplaintRepository;

const COMPLAINT_COLUMNS: &str = "id, student_id, issue_type, description, status";

#[derive(Debug, Clone)]
pub struct SqliteComplaintRepository {
    pool: SqlitePool,
}

impl SqliteComplaintRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ComplaintRepository for SqliteComplaintRepository {
    #[instrument(skip(self))]
    async fn find(&self, id: ComplaintId) -> Result<Option<Complaint>, AppError> {
        let complaint = sqlx::query_as::<_, Complaint>(&format!(
            "SELECT {COMPLAINT_COLUMNS} FROM complaints WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(complaint)
    }

    #[instrument(skip(self))]
    async fn list_by_student(&self, student_id: StudentId) -> Result<Vec<Complaint>, AppError> {
        let complaints = sqlx::query_as::<_, Complaint>(&format!(
            "SELECT {COMPLAINT_COLUMNS} FROM complaints WHERE student_id = ? ORDER BY id"
        ))
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(complaints)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Complaint>, AppError> {
        let complaints = sqlx::query_as::<_, Complaint>(&format!(
            "SELECT {COMPLAINT_COLUMNS} FROM complaints ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(complaints)
    }

    #[instrument(skip(self, complaint), fields(student_id = %complaint.student_id))]
    async fn insert(&self, complaint: &NewComplaint) -> Result<Complaint, AppError> {
        let complaint = sqlx::query_as::<_, Complaint>(&format!(
            "INSERT INTO complaints (student_id, issue_type, description, status) \
             VALUES (?, ?, ?, ?) RETURNING {COMPLAINT_COLUMNS}"
        ))
        .bind(complaint.student_id)
        .bind(&complaint.issue_type)
        .bind(&complaint.description)
        .bind(ComplaintStatus::default())
        .fetch_one(&self.pool)
        .await?;

        Ok(complaint)
    }

    #[instrument(skip(self))]
    async fn update_status(
        &self,
        id: ComplaintId,
        status: ComplaintStatus,
    ) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE complaints SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ComplaintId) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM complaints WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
