//! Server configuration and CORS policy.

use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use zyniq_core::defaults;

/// Origins permitted to call the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// Any origin; the request origin is mirrored back.
    Any,
    /// Only these origins.
    List(Vec<HeaderValue>),
}

/// Process-level configuration read at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub allowed_origins: AllowedOrigins,
    /// Apply pending migrations before serving.
    pub run_migrations: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: defaults::SERVER_PORT,
            database_url: defaults::DATABASE_URL.to_string(),
            allowed_origins: AllowedOrigins::Any,
            run_migrations: true,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `HOST` | `0.0.0.0` |
    /// | `PORT` | `8001` |
    /// | `DATABASE_URL` | `postgres://localhost/zyniq` |
    /// | `CORS_ORIGINS` | `*` |
    /// | `RUN_MIGRATIONS` | `true` |
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            database_url: std::env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            allowed_origins: parse_allowed_origins(
                &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()),
            ),
            run_migrations: std::env::var("RUN_MIGRATIONS")
                .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "no"))
                .unwrap_or(defaults.run_migrations),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a comma-separated origin list.
///
/// Blank input or a `*` entry allows any origin. Entries that are not valid
/// header values are skipped with a warning.
pub fn parse_allowed_origins(raw: &str) -> AllowedOrigins {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return AllowedOrigins::Any;
    }

    let origins = entries
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("Invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();
    AllowedOrigins::List(origins)
}

/// CORS layer allowing every method and header, with credentials.
///
/// Credentials rule out literal wildcards, so methods and headers are
/// mirrored from the preflight request.
pub fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    let allow_origin = match origins {
        AllowedOrigins::Any => AllowOrigin::mirror_request(),
        AllowedOrigins::List(list) => AllowOrigin::list(list.clone()),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(Duration::from_secs(defaults::CORS_MAX_AGE_SECS))
}
