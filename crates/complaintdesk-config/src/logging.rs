use std::env;
use std::path::PathBuf;

/// Log level and log file location.
///
/// `RUST_LOG` still takes precedence over `LOG_LEVEL` for the console output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub log_dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: PathBuf::from("storage/logs"),
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            level: var("LOG_LEVEL")
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.level),
            log_dir: var("LOG_DIR").map(PathBuf::from).unwrap_or(defaults.log_dir),
        }
    }
}
