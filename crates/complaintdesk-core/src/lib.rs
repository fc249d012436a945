//! # Complaint Desk Core
//!
//! Foundational pieces shared by every other crate in the workspace:
//!
//! - [`errors`]: the [`AppError`] taxonomy and its plain-text HTTP mapping
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use complaintdesk_core::{AppError, hash_password, verify_password};
//!
//! let hash = hash_password("secret")?;
//! if !verify_password("secret", &hash)? {
//!     return Err(AppError::invalid_student_credentials());
//! }
//! ```

pub mod errors;
pub mod password;

pub use errors::AppError;
pub use password::{
    MAX_PASSWORD_BYTES, hash_password, verify_dummy_password, verify_password,
};
