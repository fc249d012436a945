mod common;

use axum::http::{StatusCode, header};
use sqlx::SqlitePool;

use common::{
    admin_session, assert_redirect, body_text, get, next_cookie, post_form, send, setup_test_app,
    signup, student_session,
};

#[sqlx::test(migrations = "crates/complaintdesk-db/migrations")]
async fn test_home_redirects_to_student_login(pool: SqlitePool) {
    let app = setup_test_app(pool).await;

    let response = send(&app, get("/", None)).await;
    assert_redirect(&response, "/student/login");
}

#[sqlx::test(migrations = "crates/complaintdesk-db/migrations")]
async fn test_forms_render(pool: SqlitePool) {
    let app = setup_test_app(pool).await;

    for (uri, field) in [
        ("/student/signup", "name=\"email\""),
        ("/student/login", "name=\"email\""),
        ("/admin/login", "name=\"username\""),
    ] {
        let response = send(&app, get(uri, None)).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
        let page = body_text(response).await;
        assert!(page.contains(field), "{} is missing {}", uri, field);
    }
}

#[sqlx::test(migrations = "crates/complaintdesk-db/migrations")]
async fn test_signup_redirects_to_login(pool: SqlitePool) {
    let app = setup_test_app(pool).await;

    let response = signup(&app, "a@x.com", "p").await;
    assert_redirect(&response, "/student/login");
    assert!(next_cookie(&response).is_none());
}

#[sqlx::test(migrations = "crates/complaintdesk-db/migrations")]
async fn test_signup_twice_is_rejected(pool: SqlitePool) {
    let app = setup_test_app(pool.clone()).await;

    signup(&app, "a@x.com", "first").await;
    let response = signup(&app, "a@x.com", "second").await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_text(response).await, "Student already exists");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students WHERE email = ?")
        .bind("a@x.com")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);

    // The first account keeps its password.
    let response = send(
        &app,
        post_form("/student/login", "email=a@x.com&password=first", None),
    )
    .await;
    assert_redirect(&response, "/student/dashboard");
}

#[sqlx::test(migrations = "crates/complaintdesk-db/migrations")]
async fn test_signup_validation(pool: SqlitePool) {
    let app = setup_test_app(pool).await;

    let response = send(
        &app,
        post_form("/student/signup", "email=not-an-email&password=p", None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = send(&app, post_form("/student/signup", "email=a@x.com", None)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "password is required");
}

#[sqlx::test(migrations = "crates/complaintdesk-db/migrations")]
async fn test_student_login_sets_session_cookie(pool: SqlitePool) {
    let app = setup_test_app(pool).await;
    signup(&app, "a@x.com", "p").await;

    let response = send(
        &app,
        post_form("/student/login", "email=a@x.com&password=p", None),
    )
    .await;
    assert_redirect(&response, "/student/dashboard");

    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.starts_with("complaintdesk_session="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Path=/"));
}

#[sqlx::test(migrations = "crates/complaintdesk-db/migrations")]
async fn test_wrong_password_fails_every_time(pool: SqlitePool) {
    let app = setup_test_app(pool).await;
    signup(&app, "a@x.com", "p").await;

    for _ in 0..3 {
        let response = send(
            &app,
            post_form("/student/login", "email=a@x.com&password=wrong", None),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(next_cookie(&response).is_none());
        assert_eq!(body_text(response).await, "Invalid student credentials");
    }

    // A correct attempt still works after the failures.
    let response = send(
        &app,
        post_form("/student/login", "email=a@x.com&password=p", None),
    )
    .await;
    assert_redirect(&response, "/student/dashboard");
}

#[sqlx::test(migrations = "crates/complaintdesk-db/migrations")]
async fn test_unknown_student_fails(pool: SqlitePool) {
    let app = setup_test_app(pool).await;

    let response = send(
        &app,
        post_form("/student/login", "email=ghost@x.com&password=p", None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "crates/complaintdesk-db/migrations")]
async fn test_seeded_admin_logs_in(pool: SqlitePool) {
    let app = setup_test_app(pool).await;

    let cookie = admin_session(&app).await;
    assert!(cookie.starts_with("complaintdesk_session="));
}

#[sqlx::test(migrations = "crates/complaintdesk-db/migrations")]
async fn test_admin_wrong_password(pool: SqlitePool) {
    let app = setup_test_app(pool).await;

    let response = send(
        &app,
        post_form("/admin/login", "username=admin&password=nope", None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_text(response).await, "Invalid admin credentials");
}

#[sqlx::test(migrations = "crates/complaintdesk-db/migrations")]
async fn test_student_credentials_do_not_open_admin_login(pool: SqlitePool) {
    let app = setup_test_app(pool).await;
    student_session(&app, "a@x.com", "p").await;

    let response = send(
        &app,
        post_form("/admin/login", "username=a@x.com&password=p", None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "crates/complaintdesk-db/migrations")]
async fn test_session_role_matches_account_kind(pool: SqlitePool) {
    let app = setup_test_app(pool).await;
    let student = student_session(&app, "a@x.com", "p").await;
    let admin = admin_session(&app).await;

    let response = send(&app, get("/student/dashboard", Some(&student))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = send(&app, get("/admin/dashboard", Some(&student))).await;
    assert_redirect(&response, "/admin/login");

    let response = send(&app, get("/admin/dashboard", Some(&admin))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = send(&app, get("/student/dashboard", Some(&admin))).await;
    assert_redirect(&response, "/student/login");
}

#[sqlx::test(migrations = "crates/complaintdesk-db/migrations")]
async fn test_long_password_prefix_does_not_log_in(pool: SqlitePool) {
    let app = setup_test_app(pool.clone()).await;
    let password = "a".repeat(71);
    student_session(&app, "a@x.com", &password).await;

    let response = send(
        &app,
        post_form(
            "/student/login",
            &format!("email=a@x.com&password={}Y", password),
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(next_cookie(&response).is_none());

    let response = send(
        &app,
        post_form(
            "/admin/login",
            &format!("username=admin&password=admin{}", "a".repeat(80)),
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "crates/complaintdesk-db/migrations")]
async fn test_signup_rejects_password_bcrypt_would_truncate(pool: SqlitePool) {
    let app = setup_test_app(pool.clone()).await;
    let password = format!("{}X", "a".repeat(72));

    let response = signup(&app, "a@x.com", &password).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_text(response).await, "password must be at most 71 bytes");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);

    let response = send(
        &app,
        post_form(
            "/student/login",
            &format!("email=a@x.com&password={}Y", "a".repeat(72)),
            None,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
