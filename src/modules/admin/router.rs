use axum::{Router, routing::get};

use crate::router::paths;
use crate::state::AppState;

use super::controller::{dashboard, delete_complaint, update_status};

pub fn init_admin_router() -> Router<AppState> {
    Router::new()
        .route(paths::ADMIN_DASHBOARD, get(dashboard))
        .route(paths::UPDATE_STATUS, get(update_status))
        .route(paths::DELETE_COMPLAINT, get(delete_complaint))
}
