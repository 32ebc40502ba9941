use poem::middleware::Cors;

const DEFAULT_ORIGINS: &str = "http://localhost:3000,http://localhost:5173,http://localhost:8080";

/// Initialize CORS middleware for cross-origin requests
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
pub fn init_cors(lookup: impl Fn(&str) -> Option<String>) -> Cors {
    let raw = lookup("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ORIGINS.to_string());

    Cors::new()
        .allow_origins(allowed_origins(&raw))
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_headers(vec!["content-type"])
}

fn allowed_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
