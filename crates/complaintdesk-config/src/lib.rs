//! # Complaint Desk Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`server`]: listener address
//! - [`database`]: SQLite connection string and pool size
//! - [`session`]: session token signing key and cookie settings
//! - [`admin`]: credentials of the admin seeded on first startup
//! - [`logging`]: log level and log file directory
//!
//! Every struct has a `from_env()` constructor and a `from_vars()` constructor
//! taking a key lookup, so defaults can be checked without touching the
//! process environment.
//!
//! # Example
//!
//! ```ignore
//! use complaintdesk_config::AppConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = AppConfig::from_env();
//! println!("listening on {}", config.server.bind_address());
//! ```

pub mod admin;
pub mod database;
pub mod logging;
pub mod server;
pub mod session;

pub use admin::AdminSeedConfig;
pub use database::DatabaseConfig;
pub use logging::LoggingConfig;
pub use server::ServerConfig;
pub use session::SessionConfig;

/// All configuration the server binary needs at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub admin_seed: AdminSeedConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            session: SessionConfig::from_env(),
            admin_seed: AdminSeedConfig::from_env(),
            logging: LoggingConfig::from_env(),
        }
    }
}
