use ::config::{Config, ConfigError, Environment, Map};
use serde::Deserialize;

const ENV_PREFIX: &str = "LEADGEN";

/// Service configuration.
///
/// Read from `LEADGEN_*` environment variables, with `__` separating nested
/// keys (`LEADGEN_PAGINATION__MAX_PAGE_SIZE=50`). Anything unset keeps the
/// default below.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub debug: bool,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub pagination: PaginationSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Falls back to `DATABASE_URL` when `LEADGEN_DATABASE__URL` is unset.
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Log every SQL statement at INFO.
    #[serde(default)]
    pub log_statements: bool,
}

/// Page size limits handed to the query layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaginationSettings {
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
    #[serde(default = "default_jobs_page_size")]
    pub default_jobs_page_size: u64,
    #[serde(default = "default_max_page_size")]
    pub max_jobs_page_size: u64,
}

impl Settings {
    /// Build settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(None)
    }

    /// Build settings from an explicit set of variables instead of the
    /// process environment. Keys use the same `LEADGEN_` names.
    pub fn from_vars(vars: Map<String, String>) -> Result<Self, ConfigError> {
        Self::from_source(Some(vars))
    }

    fn from_source(vars: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?
            .try_deserialize()
    }

    /// `host:port` the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            version: default_version(),
            debug: false,
            host: default_host(),
            port: default_port(),
            database: DatabaseSettings::default(),
            pagination: PaginationSettings::default(),
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout_secs(),
            log_statements: false,
        }
    }
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            default_jobs_page_size: default_jobs_page_size(),
            max_jobs_page_size: default_max_page_size(),
        }
    }
}

fn default_app_name() -> String {
    "Lead Generation API".to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_database_url() -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgres://localhost:5432/lead_generation".to_string())
}

// Pool of 10 plus 20 overflow.
fn default_max_connections() -> u32 {
    30
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout_secs() -> u64 {
    8
}

fn default_page_size() -> u64 {
    10
}

fn default_max_page_size() -> u64 {
    100
}

fn default_jobs_page_size() -> u64 {
    4
}
