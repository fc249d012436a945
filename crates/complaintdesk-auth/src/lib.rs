//! # Complaint Desk Auth
//!
//! Session identity for the Complaint Desk application.
//!
//! - [`claims`]: the [`Role`] tag and the [`SessionClaims`] signed into a token
//! - [`identity`]: the per-request [`Identity`] (anonymous, student or admin)
//! - [`token`]: issuing and verifying signed session tokens
//!
//! Sessions have no expiry; they end when the client drops the token on logout.

pub mod claims;
pub mod identity;
pub mod token;

pub use claims::{Role, SessionClaims};
pub use identity::Identity;
pub use token::{issue_session_token, verify_session_token};
