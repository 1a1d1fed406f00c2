use std::{env, fmt, path::PathBuf};

const DEFAULT_DATABASE_URL: &str = "sqlite://launches.db?mode=rwc";
const DEFAULT_LAUNCH_CATALOG_URL: &str = "https://api.spacexdata.com/v4";
const DEFAULT_KEPLER_DATA_PATH: &str = "data/kepler_data.csv";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Process configuration, resolved once at startup.
///
/// Every value has a default so the service starts without any environment set up.
/// A `.env` file in the working directory is honored by [`Config::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Connection string for the persistence context.
    database_url: String,
    /// Base URL of the external launch catalog API.
    launch_catalog_url: String,
    /// Path of the Kepler survey CSV.
    kepler_data_path: PathBuf,
    /// Interface the route layer binds to.
    host: String,
    /// Port the route layer binds to.
    port: u16,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidPort(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort(raw) => write!(f, "PORT is not a valid port number: {raw:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Loads `.env` (if present) and resolves the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        // a missing .env file is the normal case outside development
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where F: Fn(&str) -> Option<String> {
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        Ok(Self {
            database_url: or_default("DATABASE_URL", DEFAULT_DATABASE_URL),
            launch_catalog_url: or_default("LAUNCH_CATALOG_URL", DEFAULT_LAUNCH_CATALOG_URL),
            kepler_data_path: PathBuf::from(or_default("KEPLER_DATA_PATH", DEFAULT_KEPLER_DATA_PATH)),
            host: or_default("HOST", DEFAULT_HOST),
            port,
        })
    }

    pub fn database_url(&self) -> &str { &self.database_url }
    pub fn launch_catalog_url(&self) -> &str { &self.launch_catalog_url }
    pub fn kepler_data_path(&self) -> &PathBuf { &self.kepler_data_path }

    /// The `host:port` pair handed to the TCP listener.
    pub fn listen_addr(&self) -> String { format!("{}:{}", self.host, self.port) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.database_url(), DEFAULT_DATABASE_URL);
        assert_eq!(config.launch_catalog_url(), DEFAULT_LAUNCH_CATALOG_URL);
        assert_eq!(config.kepler_data_path(), &PathBuf::from(DEFAULT_KEPLER_DATA_PATH));
        assert_eq!(config.listen_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_overrides_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
        ]))
        .unwrap();
        assert_eq!(config.database_url(), "sqlite::memory:");
        assert_eq!(config.listen_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("PORT", "eighty")]));
        assert_eq!(result, Err(ConfigError::InvalidPort("eighty".to_string())));
    }
}
