use axum::{Router, routing::get};

use crate::router::paths;
use crate::state::AppState;

use super::controller::{
    admin_login, admin_login_page, home, login, login_page, logout, signup, signup_page,
};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route(paths::HOME, get(home))
        .route(paths::STUDENT_SIGNUP, get(signup_page).post(signup))
        .route(paths::STUDENT_LOGIN, get(login_page).post(login))
        .route(paths::ADMIN_LOGIN, get(admin_login_page).post(admin_login))
        .route(paths::LOGOUT, get(logout))
}
