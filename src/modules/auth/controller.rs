use axum::{
    extract::State,
    response::{Html, Redirect},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::instrument;

use complaintdesk_core::AppError;
use complaintdesk_models::{AdminLoginForm, LoginForm, SignupForm};

use crate::middleware::session::{end_session, start_session};
use crate::router::paths;
use crate::state::AppState;
use crate::validator::ValidatedForm;
use crate::views;

use super::service::AuthService;

pub async fn home() -> Redirect {
    Redirect::to(paths::STUDENT_LOGIN)
}

pub async fn signup_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    state.views.render_form(views::STUDENT_SIGNUP)
}

#[instrument(skip(state, form))]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<SignupForm>,
) -> Result<Redirect, AppError> {
    AuthService::signup(state.students.as_ref(), form).await?;
    Ok(Redirect::to(paths::STUDENT_LOGIN))
}

pub async fn login_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    state.views.render_form(views::STUDENT_LOGIN)
}

#[instrument(skip(state, jar, form))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedForm(form): ValidatedForm<LoginForm>,
) -> Result<(CookieJar, Redirect), AppError> {
    let identity = AuthService::login(state.students.as_ref(), form).await?;
    let jar = start_session(jar, identity, &state.session_config)?;
    Ok((jar, Redirect::to(paths::STUDENT_DASHBOARD)))
}

pub async fn admin_login_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    state.views.render_form(views::ADMIN_LOGIN)
}

#[instrument(skip(state, jar, form))]
pub async fn admin_login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedForm(form): ValidatedForm<AdminLoginForm>,
) -> Result<(CookieJar, Redirect), AppError> {
    let identity = AuthService::admin_login(state.admins.as_ref(), form).await?;
    let jar = start_session(jar, identity, &state.session_config)?;
    Ok((jar, Redirect::to(paths::ADMIN_DASHBOARD)))
}

/// Drops the session cookie. Tokens are stateless, so this is all logout does.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    (
        end_session(jar, &state.session_config),
        Redirect::to(paths::HOME),
    )
}
