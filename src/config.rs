use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub imgur: ImgurConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_environment")]
    pub environment: String,
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:5173".to_string()]
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: i64,
    /// Marks the cookie `Secure`; enable behind HTTPS.
    #[serde(default)]
    pub secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            ttl_hours: default_ttl_hours(),
            secure: false,
        }
    }
}

impl SessionConfig {
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_hours * 3600
    }
}

fn default_cookie_name() -> String {
    "session_id".to_string()
}

fn default_ttl_hours() -> i64 {
    24
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImgurConfig {
    #[serde(default)]
    pub client_id: String,
    #[serde(default = "default_imgur_base_url")]
    pub base_url: String,
    #[serde(default = "default_imgur_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ImgurConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            base_url: default_imgur_base_url(),
            timeout_secs: default_imgur_timeout_secs(),
        }
    }
}

fn default_imgur_base_url() -> String {
    "https://api.imgur.com/3".to_string()
}

fn default_imgur_timeout_secs() -> u64 {
    10
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

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (PORT, DATABASE_URL, IMGUR_CLIENT_ID, ENV)
    /// 2. Environment variables (NUTRIMEAL__DATABASE__URL, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.request_timeout_secs", 10)?
            .set_default("server.environment", "development")?
            .set_default("database.url", "sqlite:nutrimeal.db")?
            .set_default("database.max_connections", 5)?
            .set_default("session.cookie_name", "session_id")?
            .set_default("session.ttl_hours", 24)?
            .set_default("session.secure", false)?
            .set_default("imgur.base_url", "https://api.imgur.com/3")?
            .set_default("imgur.timeout_secs", 10)?
            .set_default("observability.log_level", "info")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, missing file is not an error
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("NUTRIMEAL")
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("server.cors_origins")
                .try_parsing(true),
        );

        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(client_id) = env::var("IMGUR_CLIENT_ID") {
            builder = builder.set_override("imgur.client_id", client_id)?;
        }
        if let Ok(environment) = env::var("ENV") {
            builder = builder.set_override("server.environment", environment)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.server.request_timeout_secs == 0 {
            return Err("Server request_timeout_secs must be greater than 0".to_string());
        }
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.session.ttl_hours < 1 {
            return Err("Session ttl_hours must be at least 1".to_string());
        }
        if self.session.cookie_name.is_empty() {
            return Err("Session cookie_name must not be empty".to_string());
        }
        if self.imgur.timeout_secs == 0 {
            return Err("Imgur timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            request_timeout_secs: 10,
            environment: "development".to_string(),
            cors_origins: vec![],
        },
        database: DatabaseConfig {
            url: "sqlite:test.db".to_string(),
            max_connections: 5,
        },
        session: SessionConfig::default(),
        imgur: ImgurConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}
