#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use complaintdesk::router::init_router;
use complaintdesk::state::AppState;
use complaintdesk_config::{AdminSeedConfig, SessionConfig};
use complaintdesk_db::seed::ensure_default_admin;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin";

/// Builds the router over a migrated pool, seeding the default admin the way
/// startup does.
pub async fn setup_test_app(pool: SqlitePool) -> Router {
    let state = AppState::new(pool, SessionConfig::default()).unwrap();
    ensure_default_admin(state.admins.as_ref(), &AdminSeedConfig::default())
        .await
        .unwrap();
    init_router(state)
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

/// The `name=value` pair a browser would send back after this response, or
/// `None` when the response cleared the cookie or set none.
pub fn next_cookie(response: &Response<Body>) -> Option<String> {
    let set_cookie = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    let pair = set_cookie.split(';').next()?.trim();
    let (_, value) = pair.split_once('=')?;

    if value.is_empty() {
        None
    } else {
        Some(pair.to_string())
    }
}

pub fn assert_redirect(response: &Response<Body>, to: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(response), to);
}

pub async fn signup(app: &Router, email: &str, password: &str) -> Response<Body> {
    send(
        app,
        post_form(
            "/student/signup",
            &format!("email={}&password={}", email, password),
            None,
        ),
    )
    .await
}

/// Signs up and logs in a student, returning the session cookie.
pub async fn student_session(app: &Router, email: &str, password: &str) -> String {
    let response = signup(app, email, password).await;
    assert_redirect(&response, "/student/login");

    let response = send(
        app,
        post_form(
            "/student/login",
            &format!("email={}&password={}", email, password),
            None,
        ),
    )
    .await;
    assert_redirect(&response, "/student/dashboard");
    next_cookie(&response).expect("login sets a session cookie")
}

pub async fn admin_session(app: &Router) -> String {
    let response = send(
        app,
        post_form(
            "/admin/login",
            &format!("username={}&password={}", ADMIN_USERNAME, ADMIN_PASSWORD),
            None,
        ),
    )
    .await;
    assert_redirect(&response, "/admin/dashboard");
    next_cookie(&response).expect("admin login sets a session cookie")
}

pub async fn file_complaint(
    app: &Router,
    cookie: &str,
    issue_type: &str,
    description: &str,
) -> Response<Body> {
    send(
        app,
        post_form(
            "/add_complaint",
            &format!("issue_type={}&description={}", issue_type, description),
            Some(cookie),
        ),
    )
    .await
}

/// Number of complaint rows rendered on a dashboard page.
pub fn complaint_rows(page: &str) -> usize {
    page.matches("class=\"complaint\"").count()
}
