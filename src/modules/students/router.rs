use axum::{
    Router,
    routing::{get, post},
};

use crate::router::paths;
use crate::state::AppState;

use super::controller::{add_complaint, dashboard};

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route(paths::STUDENT_DASHBOARD, get(dashboard))
        .route(paths::ADD_COMPLAINT, post(add_complaint))
}
