use axum::{
    Router,
    http::{HeaderValue, header},
    middleware,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::logging::logging_middleware;
use crate::modules::admin::router::init_admin_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::students::router::init_students_router;
use crate::state::AppState;

/// Route paths, shared by the routers, redirects and templates.
pub mod paths {
    pub const HOME: &str = "/";
    pub const STUDENT_SIGNUP: &str = "/student/signup";
    pub const STUDENT_LOGIN: &str = "/student/login";
    pub const STUDENT_DASHBOARD: &str = "/student/dashboard";
    pub const ADD_COMPLAINT: &str = "/add_complaint";
    pub const ADMIN_LOGIN: &str = "/admin/login";
    pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
    pub const UPDATE_STATUS: &str = "/update_status/{id}";
    pub const DELETE_COMPLAINT: &str = "/delete_complaint/{id}";
    pub const LOGOUT: &str = "/logout";
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(init_auth_router())
        .merge(init_students_router())
        .merge(init_admin_router())
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(middleware::from_fn(logging_middleware))
}
