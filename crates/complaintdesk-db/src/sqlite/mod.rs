//! SQLite implementations of the repository traits.

mod admins;
mod complaints;
mod students;

pub use admins::SqliteAdminRepository;
pub use complaints::SqliteComplaintRepository;
pub use students::SqliteStudentRepository;
