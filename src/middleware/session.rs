use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::debug;

use complaintdesk_auth::{Identity, issue_session_token, verify_session_token};
use complaintdesk_config::SessionConfig;
use complaintdesk_core::AppError;

/// Resolves the session cookie into an [`Identity`].
///
/// Never fails: a missing, tampered or foreign cookie yields
/// [`Identity::Anonymous`]. The guards in [`crate::middleware::role`] build on
/// this to require a particular role.
pub fn identity_from_headers(headers: &HeaderMap, config: &SessionConfig) -> Identity {
    let jar = CookieJar::from_headers(headers);

    let Some(cookie) = jar.get(&config.cookie_name) else {
        return Identity::Anonymous;
    };

    match verify_session_token(cookie.value(), config) {
        Ok(identity) => identity,
        Err(_) => {
            debug!("Ignoring invalid session cookie");
            Identity::Anonymous
        }
    }
}

/// Issues a session token for `identity` and stores it in the jar.
pub fn start_session(
    jar: CookieJar,
    identity: Identity,
    config: &SessionConfig,
) -> Result<CookieJar, AppError> {
    let token = issue_session_token(identity, config)?;
    Ok(jar.add(session_cookie(token, config)))
}

/// Replaces the session cookie with an expired, empty one.
pub fn end_session(jar: CookieJar, config: &SessionConfig) -> CookieJar {
    jar.add(removal_cookie(config))
}

pub fn session_cookie(token: String, config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .build()
}

pub fn removal_cookie(config: &SessionConfig) -> Cookie<'static> {
    let mut cookie = session_cookie(String::new(), config);
    cookie.make_removal();
    cookie
}
