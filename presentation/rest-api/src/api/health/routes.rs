use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// "healthy" when the database answers, "degraded" otherwise
    pub status: String,
    /// "up" or "down"
    pub database: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

impl HealthCheckResponse {
    fn new(database_up: bool) -> Self {
        let (status, database) = if database_up {
            ("healthy", "up")
        } else {
            ("degraded", "down")
        };

        Self {
            status: status.to_string(),
            database: database.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Health API for liveness and database reachability checks
pub struct Api {
    pool: PgPool,
}

impl Api {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Reports whether the service is running and can reach its database.
    /// Answers 503 when the database does not respond.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> HealthResponse {
        match persistence::db::ping(&self.pool).await {
            Ok(()) => HealthResponse::Ok(Json(HealthCheckResponse::new(true))),
            Err(_) => HealthResponse::ServiceUnavailable(Json(HealthCheckResponse::new(false))),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum HealthResponse {
    #[oai(status = 200)]
    Ok(Json<HealthCheckResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<HealthCheckResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_degraded_when_database_down() {
        let response = HealthCheckResponse::new(false);

        assert_eq!(response.status, "degraded");
        assert_eq!(response.database, "down");
        assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn should_report_healthy_when_database_up() {
        let response = HealthCheckResponse::new(true);

        assert_eq!(response.status, "healthy");
        assert_eq!(response.database, "up");
    }
}
