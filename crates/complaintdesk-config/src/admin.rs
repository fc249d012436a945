use std::env;

/// Credentials for the admin account seeded on first startup.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminSeedConfig {
    pub username: String,
    pub password: String,
}

impl Default for AdminSeedConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin".to_string(),
        }
    }
}

// Keeps the seed password out of `{:?}` output.
impl std::fmt::Debug for AdminSeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSeedConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl AdminSeedConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            username: var("DEFAULT_ADMIN_USERNAME")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.username),
            password: var("DEFAULT_ADMIN_PASSWORD")
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.password),
        }
    }
}
