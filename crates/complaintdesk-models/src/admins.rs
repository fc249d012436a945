use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::ids::AdminId;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Admin {
    pub id: AdminId,
    pub username: String,
}

/// Admin row including the password hash.
#[derive(Clone, FromRow)]
pub struct AdminCredentials {
    pub id: AdminId,
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, Validate)]
pub struct AdminLoginForm {
    #[validate(length(min = 1, max = 100, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}
