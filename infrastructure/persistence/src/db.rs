use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

use business::domain::errors::RepositoryError;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to connect to database");
            DatabaseError::ConnectionError
        })
}

/// Runs database migrations from the specified directory
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);

    if !path.exists() {
        tracing::error!(path = migrations_path, "Migrations directory not found");
        return Err(DatabaseError::MigrationError);
    }

    let migrator = sqlx::migrate::Migrator::new(path).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to load migrations");
        DatabaseError::MigrationError
    })?;

    migrator.run(pool).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to run migrations");
        DatabaseError::MigrationError
    })
}

/// Round-trips a trivial query to check the database is reachable.
pub async fn ping(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            tracing::warn!(error = %e, "Database ping failed");
            DatabaseError::ConnectionError
        })
}

/// Logs the driver error and replaces it with an opaque repository error.
pub(crate) fn repository_error(operation: &'static str, err: sqlx::Error) -> RepositoryError {
    let unique_violation = err
        .as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation());

    if unique_violation {
        tracing::warn!(operation, "Unique constraint violated");
        return RepositoryError::Duplicated;
    }

    tracing::error!(operation, error = %err, "Database operation failed");
    RepositoryError::DatabaseError
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_five_connections() {
        let config = DatabaseConfig::new("postgres://localhost/carts".to_string());

        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    fn should_override_max_connections() {
        let config =
            DatabaseConfig::new("postgres://localhost/carts".to_string()).with_max_connections(20);

        assert_eq!(config.max_connections, 20);
    }

    #[test]
    fn should_map_non_database_errors_to_database_error() {
        let err = repository_error("cart.find", sqlx::Error::RowNotFound);

        assert!(matches!(err, RepositoryError::DatabaseError));
    }

    #[tokio::test]
    async fn should_fail_when_migrations_directory_missing() {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .unwrap();

        let result = run_migrations(&pool, "/definitely/not/here").await;

        assert!(matches!(result, Err(DatabaseError::MigrationError)));
    }
}
