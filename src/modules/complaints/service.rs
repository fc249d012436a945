use tracing::{debug, info, instrument, warn};

use complaintdesk_core::AppError;
use complaintdesk_db::{ComplaintRepository, StudentRepository};
use complaintdesk_models::{Complaint, ComplaintId, ComplaintStatus, NewComplaintForm, StudentId};

pub struct ComplaintService;

impl ComplaintService {
    /// Files a complaint on behalf of `student_id` with status `Pending`.
    ///
    /// The student must still exist; a session pointing at a missing student
    /// is rejected with [`AppError::Unauthorized`].
    #[instrument(skip(students, complaints, form))]
    pub async fn file(
        students: &dyn StudentRepository,
        complaints: &dyn ComplaintRepository,
        student_id: StudentId,
        form: NewComplaintForm,
    ) -> Result<Complaint, AppError> {
        if students.find(student_id).await?.is_none() {
            warn!("Complaint rejected, student no longer exists");
            return Err(AppError::Unauthorized);
        }

        let complaint = complaints
            .insert(&form.into_new_complaint(student_id))
            .await?;

        info!(complaint_id = %complaint.id, "Complaint filed");
        Ok(complaint)
    }

    #[instrument(skip(complaints))]
    pub async fn list_own(
        complaints: &dyn ComplaintRepository,
        student_id: StudentId,
    ) -> Result<Vec<Complaint>, AppError> {
        complaints.list_by_student(student_id).await
    }

    #[instrument(skip(complaints))]
    pub async fn list_all(complaints: &dyn ComplaintRepository) -> Result<Vec<Complaint>, AppError> {
        complaints.list_all().await
    }

    /// Marks a complaint resolved. Unknown ids are ignored.
    #[instrument(skip(complaints))]
    pub async fn resolve(
        complaints: &dyn ComplaintRepository,
        complaint_id: ComplaintId,
    ) -> Result<(), AppError> {
        if complaints
            .update_status(complaint_id, ComplaintStatus::Resolved)
            .await?
        {
            info!("Complaint resolved");
        } else {
            debug!("Resolve ignored, complaint not found");
        }
        Ok(())
    }

    /// Deletes a complaint. Unknown ids are ignored.
    #[instrument(skip(complaints))]
    pub async fn delete(
        complaints: &dyn ComplaintRepository,
        complaint_id: ComplaintId,
    ) -> Result<(), AppError> {
        if complaints.delete(complaint_id).await? {
            info!("Complaint deleted");
        } else {
            debug!("Delete ignored, complaint not found");
        }
        Ok(())
    }
}
