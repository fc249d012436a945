//! Request extractors for sessions and role checks.
//!
//! - [`session`]: reads the session cookie into an [`Identity`](complaintdesk_auth::Identity)
//!   and builds the cookies that start and end a session
//! - [`role`]: guards requiring a student or admin session
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::role::{AdminAction, StudentPage};
//!
//! // Redirects to the student login page without a student session
//! async fn dashboard(StudentPage(student_id): StudentPage) -> impl IntoResponse { /* ... */ }
//!
//! // Answers 403 without an admin session
//! async fn resolve(AdminAction(_): AdminAction) -> impl IntoResponse { /* ... */ }
//! ```

pub mod role;
pub mod session;
