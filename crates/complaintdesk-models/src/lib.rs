//! # Complaint Desk Models
//!
//! Records stored by the application and the form DTOs that create them.
//!
//! - [`ids`]: typed ids for students, admins and complaints
//! - [`students`]: student record, signup and login forms
//! - [`admins`]: admin record and login form
//! - [`complaints`]: complaint record, status lifecycle and filing form

pub mod admins;
pub mod complaints;
pub mod ids;
pub mod students;

pub use admins::{Admin, AdminCredentials, AdminLoginForm};
pub use complaints::{Complaint, ComplaintStatus, NewComplaint, NewComplaintForm};
pub use ids::{AdminId, ComplaintId, StudentId};
pub use students::{LoginForm, SignupForm, Student, StudentCredentials};
