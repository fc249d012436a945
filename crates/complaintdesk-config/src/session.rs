//! Session token and cookie settings.
//!
//! # Environment Variables
//!
//! - `SESSION_SECRET`: HMAC key used to sign session tokens
//! - `SESSION_COOKIE_NAME`: cookie carrying the token (default: `complaintdesk_session`)
//! - `SESSION_COOKIE_SECURE`: mark the cookie `Secure` (default: false)

use std::env;

pub const DEFAULT_SESSION_SECRET: &str = "your-secret-key-change-in-production";
pub const DEFAULT_COOKIE_NAME: &str = "complaintdesk_session";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub secret: String,
    pub cookie_name: String,
    pub cookie_secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SESSION_SECRET.to_string(),
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            cookie_secure: false,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            secret: var("SESSION_SECRET")
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.secret),
            cookie_name: var("SESSION_COOKIE_NAME")
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.cookie_name),
            cookie_secure: var("SESSION_COOKIE_SECURE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.cookie_secure),
        }
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_SESSION_SECRET
    }
}
