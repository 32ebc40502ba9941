use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use url::Url;

use super::error::ConfigError;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Database settings resolved from the environment
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string. When absent, the URL is
///   built from DBHOST, DBPORT, DBUSER, DBPASSWORD and DBNAME, all of which
///   must be defined (DBPASSWORD may be empty).
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - MIGRATIONS_PATH: directory of SQL migrations
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub migrations_path: String,
}

impl DatabaseSettings {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = match lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => url,
            None => url_from_parts(&lookup)?,
        };

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS"))?,
            None => 5,
        };

        let migrations_path =
            lookup("MIGRATIONS_PATH").unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string());

        Ok(Self {
            url,
            max_connections,
            migrations_path,
        })
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<String, ConfigError> {
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::MissingEnv(key))
}

fn url_from_parts(lookup: &impl Fn(&str) -> Option<String>) -> Result<String, ConfigError> {
    let host = required(lookup, "DBHOST")?;
    let user = required(lookup, "DBUSER")?;
    // Empty is a valid password; unset is not.
    let password = lookup("DBPASSWORD").ok_or(ConfigError::MissingEnv("DBPASSWORD"))?;
    let name = required(lookup, "DBNAME")?;
    let port: u16 = required(lookup, "DBPORT")?
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue("DBPORT"))?;

    let mut url = Url::parse(&format!("postgres://{}", host.trim()))
        .map_err(|_| ConfigError::InvalidValue("DBHOST"))?;
    url.set_port(Some(port))
        .map_err(|_| ConfigError::InvalidValue("DBPORT"))?;
    url.set_username(&user)
        .map_err(|_| ConfigError::InvalidValue("DBUSER"))?;
    if !password.is_empty() {
        url.set_password(Some(&password))
            .map_err(|_| ConfigError::InvalidValue("DBPASSWORD"))?;
    }
    url.set_path(&name);

    Ok(url.to_string())
}

/// Connects the pool and brings the schema up to date
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let config =
        DatabaseConfig::new(settings.url.clone()).with_max_connections(settings.max_connections);
    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, &settings.migrations_path).await?;
    Ok(pool)
}
