//! # Complaint Desk
//!
//! A small complaint-tracking web application built with Axum and SQLite.
//! Students sign up, log in, file complaints and follow their status; admins
//! log in, review every complaint, mark complaints resolved or delete them.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/      # Session cookie extractor and role guards
//! ├── modules/         # Feature modules
//! │   ├── auth/        # Signup, student/admin login, logout
//! │   ├── students/    # Student dashboard and complaint filing
//! │   ├── admin/       # Admin dashboard, resolve, delete
//! │   └── complaints/  # Complaint service shared by both roles
//! ├── views.rs         # Handlebars pages
//! ├── validator.rs     # Validated form extractor
//! ├── logging.rs       # Tracing setup and request logging
//! ├── router.rs        # Route table
//! └── state.rs         # Repositories, session config, views
//! ```
//!
//! Feature modules follow the same split: `controller.rs` for handlers,
//! `service.rs` for business logic and `router.rs` for routes.
//!
//! ## Sessions
//!
//! A successful login stores a signed session token in an `HttpOnly`
//! cookie. Each request decodes it into an
//! [`Identity`](complaintdesk_auth::Identity): anonymous, a student or an
//! admin. Pages redirect visitors without the right role to the matching
//! login form; state-changing requests answer `403 Unauthorized`.
//!
//! ## Routes
//!
//! | Method | Path | Requires |
//! |--------|------|----------|
//! | GET | `/` | none (redirects to student login) |
//! | GET/POST | `/student/signup` | none |
//! | GET/POST | `/student/login` | none |
//! | GET | `/student/dashboard` | student |
//! | POST | `/add_complaint` | student |
//! | GET/POST | `/admin/login` | none |
//! | GET | `/admin/dashboard` | admin |
//! | GET | `/update_status/{id}` | admin |
//! | GET | `/delete_complaint/{id}` | admin |
//! | GET | `/logout` | none |
//!
//! ## Quick Start
//!
//! ```bash
//! DATABASE_URL=sqlite://instance/complaints.db
//! SESSION_SECRET=change-me
//! cargo run --bin complaintdesk
//! ```
//!
//! The database file is created and migrated on startup, and an `admin`
//! account (password `admin`) is seeded if missing. Change its password
//! with `complaintdesk-cli set-admin-password`.

pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;
pub mod views;

// Re-export workspace crates for convenience
pub use complaintdesk_auth;
pub use complaintdesk_config;
pub use complaintdesk_core;
pub use complaintdesk_db;
pub use complaintdesk_models;
