use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default = "default_environment")]
    pub environment: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    /// Sender mailbox; falls back to `smtp_username` when empty.
    #[serde(default)]
    pub from_address: String,
    /// Operator inbox that receives a copy of every submission.
    #[serde(default = "default_notify_address")]
    pub notify_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: String::new(),
            notify_address: default_notify_address(),
        }
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_notify_address() -> String {
    "owner@localhost".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CorsConfig {
    /// Allowed browser origin. No CORS headers are emitted when unset.
    #[serde(default)]
    pub client_origin: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy environment variables (EMAIL_USER, DATABASE_URL, ...)
    /// 2. Prefixed environment variables (CONTACT_API__SERVER__PORT, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Set defaults
        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("database.url", "sqlite:contacts.db")?
            .set_default("database.max_connections", 5)?;

        // Load config file if path provided or CONFIG_PATH env var set
        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Try to load config file (optional - ignore if not found)
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // Override with environment variables (CONTACT_API__DATABASE__URL, etc.)
        builder = builder.add_source(
            Environment::with_prefix("CONTACT_API")
                .separator("__")
                .try_parsing(true),
        );

        // Also support legacy environment variables without prefix
        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(email_user) = env::var("EMAIL_USER") {
            builder = builder.set_override("email.smtp_username", email_user)?;
        }
        if let Ok(email_pass) = env::var("EMAIL_PASS") {
            builder = builder.set_override("email.smtp_password", email_pass)?;
        }
        if let Ok(client_url) = env::var("CLIENT_URL") {
            builder = builder.set_override("cors.client_origin", client_url)?;
        }
        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(environment) = env::var("ENVIRONMENT") {
            builder = builder.set_override("environment", environment)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    ///
    /// Missing SMTP credentials are deliberately not checked here: they are a
    /// per-request precondition reported by the submission handler, not a
    /// startup failure.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        Ok(())
    }
}
