use super::database_config::DatabaseSettings;
use super::error::ConfigError;
use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
}

impl AppConfig {
    /// Reads and validates every setting from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let lookup = |key: &str| std::env::var(key).ok();

        Ok(Self {
            server: ServerConfig::from_lookup(lookup)?,
            cors: cors_config::init_cors(lookup),
            database: DatabaseSettings::from_lookup(lookup)?,
        })
    }
}
