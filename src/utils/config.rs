use std::env;

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub environment: String,
    /// A `LOG_LEVEL` value that failed to parse as a filter and was replaced
    /// by the default. Reported once logging is up.
    pub rejected_log_level: Option<String>,
}

impl Config {
    /// Reads `.env` and the process environment. Never fails: anything
    /// unusable falls back to its default.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::new(env::var("LOG_LEVEL").ok(), env::var("APP_ENV").ok())
    }

    pub fn new(log_level: Option<String>, environment: Option<String>) -> Self {
        let (log_level, rejected_log_level) = match log_level {
            Some(level) if EnvFilter::try_new(&level).is_ok() => (level, None),
            Some(level) => (DEFAULT_LOG_LEVEL.to_string(), Some(level)),
            None => (DEFAULT_LOG_LEVEL.to_string(), None),
        };

        Self {
            log_level,
            environment: environment.unwrap_or_else(|| "development".into()),
            rejected_log_level,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, None)
    }
}
