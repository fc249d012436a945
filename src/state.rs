use std::sync::Arc;

use sqlx::SqlitePool;
use tracing::{info, warn};

use complaintdesk_config::{AppConfig, SessionConfig};
use complaintdesk_core::AppError;
use complaintdesk_db::sqlite::{
    SqliteAdminRepository, SqliteComplaintRepository, SqliteStudentRepository,
};
use complaintdesk_db::{
    AdminRepository, ComplaintRepository, StudentRepository, init_db_pool, run_migrations,
    seed::ensure_default_admin,
};

use crate::views::Views;

#[derive(Clone)]
pub struct AppState {
    pub students: Arc<dyn StudentRepository>,
    pub admins: Arc<dyn AdminRepository>,
    pub complaints: Arc<dyn ComplaintRepository>,
    pub session_config: SessionConfig,
    pub views: Views,
}

impl AppState {
    /// Builds the state over an already migrated pool.
    pub fn new(pool: SqlitePool, session_config: SessionConfig) -> Result<Self, AppError> {
        Ok(Self {
            students: Arc::new(SqliteStudentRepository::new(pool.clone())),
            admins: Arc::new(SqliteAdminRepository::new(pool.clone())),
            complaints: Arc::new(SqliteComplaintRepository::new(pool)),
            session_config,
            views: Views::new()?,
        })
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("session_cookie", &self.session_config.cookie_name)
            .field("views", &self.views)
            .finish_non_exhaustive()
    }
}

/// Opens the database, applies migrations and seeds the default admin.
pub async fn init_app_state(config: &AppConfig) -> Result<AppState, AppError> {
    let pool = init_db_pool(&config.database).await?;
    run_migrations(&pool).await?;

    let state = AppState::new(pool, config.session.clone())?;

    if ensure_default_admin(state.admins.as_ref(), &config.admin_seed).await? {
        if config.admin_seed.password == config.admin_seed.username {
            warn!(
                username = %config.admin_seed.username,
                "Default admin seeded with its username as password, change it with complaintdesk-cli set-admin-password"
            );
        }
    } else {
        info!(username = %config.admin_seed.username, "Default admin already present");
    }

    Ok(state)
}
