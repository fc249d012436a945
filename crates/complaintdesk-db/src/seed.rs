//! Seeding of the default admin account.

use tracing::{info, instrument};

use complaintdesk_config::AdminSeedConfig;
use complaintdesk_core::{AppError, hash_password};

use crate::repository::AdminRepository;

/// Creates the configured admin account unless one with that username exists.
///
/// Returns `true` when an admin was inserted. Safe to call on every startup.
#[instrument(skip(admins, seed), fields(username = %seed.username))]
pub async fn ensure_default_admin(
    admins: &dyn AdminRepository,
    seed: &AdminSeedConfig,
) -> Result<bool, AppError> {
    if admins.find_by_username(&seed.username).await?.is_some() {
        return Ok(false);
    }

    let hashed_password = hash_password(&seed.password)?;
    let admin = admins.insert(&seed.username, &hashed_password).await?;

    info!(admin_id = %admin.id, "Seeded default admin account");
    Ok(true)
}
