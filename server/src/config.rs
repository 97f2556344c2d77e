//! Server configuration.

use std::env;
use std::str::FromStr;

/// Which storage backend the server runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Process-local list, lost on restart.
    Memory,
    /// SQLite database at `Config::database_url`.
    Sqlite,
}

impl FromStr for StoreKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "sqlite" => Ok(StoreKind::Sqlite),
            other => anyhow::bail!("unknown TODO_STORE {other:?}, expected memory or sqlite"),
        }
    }
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Storage backend.
    pub store: StoreKind,
    /// Database URL, used by the sqlite backend.
    pub database_url: String,
    /// Origin allowed to make cross-origin requests. `None` disables CORS.
    pub cors_origin: Option<String>,
    /// Log level used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a port number, got {port:?}"))?,
            None => 5000,
        };

        let store = match lookup("TODO_STORE") {
            Some(store) => store.parse()?,
            None => StoreKind::Memory,
        };

        let cors_origin = match lookup("CORS_ORIGIN") {
            Some(origin) if origin.is_empty() => None,
            Some(origin) => Some(origin),
            None => Some("http://localhost:5173".to_string()),
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            store,
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| "sqlite:todos.db".to_string()),
            cors_origin,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Returns true unless `ENV` is `production`, where `.env` files are ignored.
pub fn should_load_dotenv() -> bool {
    env::var("ENV").map(|v| v != "production").unwrap_or(true)
}
