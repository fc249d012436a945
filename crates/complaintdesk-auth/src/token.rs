//! Signed session tokens.
//!
//! A session token is an HS256 JWT whose claims map back to an [`Identity`].
//! The token is opaque to the client; how it travels (cookie or header) is
//! decided by the HTTP layer.
//!
//! # Example
//!
//! ```ignore
//! use complaintdesk_auth::{Identity, issue_session_token, verify_session_token};
//!
//! let token = issue_session_token(Identity::Student(student.id), &config)?;
//! let identity = verify_session_token(&token, &config)?;
//! assert_eq!(identity, Identity::Student(student.id));
//! ```

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use complaintdesk_config::SessionConfig;
use complaintdesk_core::AppError;

use crate::claims::SessionClaims;
use crate::identity::Identity;

/// Signs a session token for an authenticated identity.
///
/// # Errors
///
/// Fails for [`Identity::Anonymous`], which has nothing to sign, or when
/// encoding fails.
pub fn issue_session_token(identity: Identity, config: &SessionConfig) -> Result<String, AppError> {
    let (sub, role) = identity
        .subject()
        .ok_or_else(|| AppError::internal(anyhow!("Cannot issue a session for an anonymous caller")))?;

    let claims = SessionClaims {
        sub,
        role,
        iat: Utc::now().timestamp() as usize,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create session token: {}", e)))
}

/// Verifies a session token's signature and returns the identity it carries.
///
/// # Errors
///
/// Returns [`AppError::Unauthorized`] for a bad signature, a malformed token
/// or claims that do not describe a valid identity.
pub fn verify_session_token(token: &str, config: &SessionConfig) -> Result<Identity, AppError> {
    let claims = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &session_validation(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized)?;

    Identity::try_from(&claims)
}

fn session_validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    validation
}
