use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};
use tracing::instrument;

use complaintdesk_core::AppError;
use complaintdesk_models::ComplaintId;

use crate::middleware::role::{AdminAction, AdminPage};
use crate::modules::complaints::service::ComplaintService;
use crate::router::paths;
use crate::state::AppState;
use crate::views;

#[instrument(skip(state))]
pub async fn dashboard(
    State(state): State<AppState>,
    AdminPage(_): AdminPage,
) -> Result<Html<String>, AppError> {
    let complaints = ComplaintService::list_all(state.complaints.as_ref()).await?;
    state
        .views
        .render_complaints(views::ADMIN_DASHBOARD, &complaints)
}

#[instrument(skip(state))]
pub async fn update_status(
    State(state): State<AppState>,
    AdminAction(admin_id): AdminAction,
    Path(complaint_id): Path<ComplaintId>,
) -> Result<Redirect, AppError> {
    ComplaintService::resolve(state.complaints.as_ref(), complaint_id).await?;
    Ok(Redirect::to(paths::ADMIN_DASHBOARD))
}

#[instrument(skip(state))]
pub async fn delete_complaint(
    State(state): State<AppState>,
    AdminAction(admin_id): AdminAction,
    Path(complaint_id): Path<ComplaintId>,
) -> Result<Redirect, AppError> {
    ComplaintService::delete(state.complaints.as_ref(), complaint_id).await?;
    Ok(Redirect::to(paths::ADMIN_DASHBOARD))
}
