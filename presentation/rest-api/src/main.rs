use dotenvy::dotenv;

mod api {
    pub mod cart {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod error;
    pub mod health {
        pub mod routes;
    }
    pub mod tags;
}
mod config {
    pub mod app_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod error;
    pub mod server_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Cart service entry point
///
/// Loads configuration, connects and migrates the database, wires the
/// cart use cases to their adapters and serves the HTTP API.
/// - config/: environment-driven settings (server, CORS, database)
/// - setup/: dependency injection and server setup
/// - api/: route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load .env before anything reads the environment
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;

    // 4. Initialize database
    let pool = database_config::init_database(&config.database).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
