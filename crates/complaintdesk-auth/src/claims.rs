//! Role tag and the claims carried inside a session token.

use serde::{Deserialize, Serialize};

/// Coarse authorization tag attached to every authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
}

/// Claims signed into a session token.
///
/// No `exp` claim: sessions live until logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Id of the student or admin, depending on `role`
    pub sub: String,
    pub role: Role,
    /// Issued-at timestamp (Unix seconds)
    pub iat: usize,
    /// Token id, keeps two logins in the same second from producing the same token
    pub jti: String,
}
