//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use blog_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    /// Run pending schema migrations at startup.
    pub auto_migrate: bool,
    /// Directory holding the Tera view templates.
    pub template_dir: PathBuf,
    /// Deadline applied to every store call.
    pub store_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let store_timeout = Duration::from_secs(parse(lookup("STORE_TIMEOUT_SECS")).unwrap_or(5));

        let database = lookup("DATABASE_URL").map(|url| DatabaseConfig {
            url,
            max_connections: parse(lookup("DB_MAX_CONNECTIONS")).unwrap_or(20),
            min_connections: parse(lookup("DB_MIN_CONNECTIONS")).unwrap_or(2),
            connect_timeout: store_timeout,
        });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse(lookup("PORT")).unwrap_or(3000),
            database,
            auto_migrate: lookup("DB_AUTO_MIGRATE")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
            template_dir: lookup("TEMPLATE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_template_dir),
            store_timeout,
        }
    }
}

fn parse<T: FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|s| s.parse().ok())
}

/// The `templates/` directory shipped next to this crate's manifest.
pub fn default_template_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"))
}
