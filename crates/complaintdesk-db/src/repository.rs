//! Repository interfaces, one per record kind.
//!
//! Services only talk to these traits, so the SQLite implementations in
//! [`crate::sqlite`] can be swapped for another backend.

use async_trait::async_trait;

use complaintdesk_core::AppError;
use complaintdesk_models::{
    Admin, AdminCredentials, Complaint, ComplaintId, ComplaintStatus, NewComplaint, Student,
    StudentCredentials, StudentId,
};

#[async_trait]
pub trait StudentRepository: Send + Sync + 'static {
    async fn find(&self, id: StudentId) -> Result<Option<Student>, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<StudentCredentials>, AppError>;

    /// Inserts a student. Fails with [`AppError::DuplicateUser`] when the email is taken.
    async fn insert(&self, email: &str, password_hash: &str) -> Result<Student, AppError>;
}

#[async_trait]
pub trait AdminRepository: Send + Sync + 'static {
    async fn find_by_username(&self, username: &str)
    -> Result<Option<AdminCredentials>, AppError>;

    async fn insert(&self, username: &str, password_hash: &str) -> Result<Admin, AppError>;

    /// Replaces an admin's password hash. Returns `false` when no such admin exists.
    async fn update_password(&self, username: &str, password_hash: &str)
    -> Result<bool, AppError>;
}

#[async_trait]
pub trait ComplaintRepository: Send + Sync + 'static {
    async fn find(&self, id: ComplaintId) -> Result<Option<Complaint>, AppError>;

    /// Complaints filed by one student, in insertion order.
    async fn list_by_student(&self, student_id: StudentId) -> Result<Vec<Complaint>, AppError>;

    /// Every complaint, in insertion order.
    async fn list_all(&self) -> Result<Vec<Complaint>, AppError>;

    async fn insert(&self, complaint: &NewComplaint) -> Result<Complaint, AppError>;

    /// Sets the status of a complaint. Returns `false` when no row matched.
    async fn update_status(
        &self,
        id: ComplaintId,
        status: ComplaintStatus,
    ) -> Result<bool, AppError>;

    /// Deletes a complaint. Returns `false` when no row matched.
    async fn delete(&self, id: ComplaintId) -> Result<bool, AppError>;
}
