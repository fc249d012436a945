use axum::{
    extract::State,
    response::{Html, Redirect},
};
use tracing::instrument;

use complaintdesk_core::AppError;
use complaintdesk_models::NewComplaintForm;

use crate::middleware::role::{StudentAction, StudentPage};
use crate::modules::complaints::service::ComplaintService;
use crate::router::paths;
use crate::state::AppState;
use crate::validator::ValidatedForm;
use crate::views;

#[instrument(skip(state))]
pub async fn dashboard(
    State(state): State<AppState>,
    StudentPage(student_id): StudentPage,
) -> Result<Html<String>, AppError> {
    let complaints = ComplaintService::list_own(state.complaints.as_ref(), student_id).await?;
    state
        .views
        .render_complaints(views::STUDENT_DASHBOARD, &complaints)
}

#[instrument(skip(state, form))]
pub async fn add_complaint(
    State(state): State<AppState>,
    StudentAction(student_id): StudentAction,
    ValidatedForm(form): ValidatedForm<NewComplaintForm>,
) -> Result<Redirect, AppError> {
    ComplaintService::file(
        state.students.as_ref(),
        state.complaints.as_ref(),
        student_id,
        form,
    )
    .await?;
    Ok(Redirect::to(paths::STUDENT_DASHBOARD))
}
