use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    /// Address the HTTP server binds to.
    pub bind_addr: String,

    /// Webhook URL notification events are POSTed to. When unset, events are
    /// logged and dropped.
    pub notify_webhook_url: Option<String>,

    /// When enabled, update and delete require the requester to be the
    /// prayer's creator, matching the close/participant operations.
    pub strict_ownership: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            notify_webhook_url: std::env::var("NOTIFY_WEBHOOK_URL").ok(),
            strict_ownership: std::env::var("STRICT_OWNERSHIP")
                .map(|value| matches!(value.as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }
}
