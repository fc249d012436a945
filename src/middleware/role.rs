//! Role guards for handlers.
//!
//! Page guards send visitors without the right session to the matching login
//! page. Action guards answer `403 Unauthorized` instead, so a state-changing
//! request never silently turns into a redirect.

use axum::response::Redirect;

use complaintdesk_auth::Identity;
use complaintdesk_core::AppError;
use complaintdesk_models::{AdminId, StudentId};

use crate::router::paths;

/// Defines an extractor that resolves the session and requires one role.
///
/// `$project` maps the [`Identity`] to the id the guard carries, and
/// `$reject` builds the rejection when it returns `None`.
macro_rules! require_role {
    ($name:ident, $id:ty, $project:expr, $rejection:ty, $reject:expr) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub $id);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = $rejection;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let identity = $crate::middleware::session::identity_from_headers(
                    &parts.headers,
                    &state.session_config,
                );

                match $project(&identity) {
                    Some(id) => Ok($name(id)),
                    None => {
                        tracing::warn!(
                            guard = stringify!($name),
                            path = %parts.uri.path(),
                            "Rejected request without required session"
                        );
                        Err($reject())
                    }
                }
            }
        }
    };
}

require_role!(
    StudentPage,
    StudentId,
    Identity::student_id,
    Redirect,
    || Redirect::to(paths::STUDENT_LOGIN)
);
require_role!(
    StudentAction,
    StudentId,
    Identity::student_id,
    AppError,
    || AppError::Unauthorized
);
require_role!(
    AdminPage,
    AdminId,
    Identity::admin_id,
    Redirect,
    || Redirect::to(paths::ADMIN_LOGIN)
);
require_role!(
    AdminAction,
    AdminId,
    Identity::admin_id,
    AppError,
    || AppError::Unauthorized
);
