use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Seconds to wait for in-flight requests after a shutdown signal.
    pub shutdown_timeout_secs: u64,
    /// Public URL of the site, used to build absolute share-image URLs.
    pub site_url: String,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Where page-cache revalidation requests go.
    pub revalidate: RevalidateConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3001`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    /// | `SITE_URL`             | `http://localhost:3001`    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3001".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let site_url = std::env::var("SITE_URL")
            .unwrap_or_else(|_| "http://localhost:3001".into())
            .trim_end_matches('/')
            .to_string();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            site_url,
            jwt: JwtConfig::from_env(),
            revalidate: RevalidateConfig::from_env(),
        }
    }
}

/// Frontend on-demand revalidation endpoint.
#[derive(Debug, Clone, Default)]
pub struct RevalidateConfig {
    /// Endpoint that accepts `{"tag": ..}` / `{"path": ..}`. When unset,
    /// revalidation is only logged.
    pub url: Option<String>,
    /// Shared secret sent as `x-revalidate-secret`.
    pub secret: Option<String>,
    /// Per-request timeout in seconds (default: `5`).
    pub timeout_secs: u64,
}

/// Default revalidation request timeout.
const DEFAULT_REVALIDATE_TIMEOUT_SECS: u64 = 5;

impl RevalidateConfig {
    /// | Env Var                     | Default |
    /// |-----------------------------|---------|
    /// | `REVALIDATE_URL`            | unset   |
    /// | `REVALIDATE_SECRET`         | unset   |
    /// | `REVALIDATE_TIMEOUT_SECS`   | `5`     |
    pub fn from_env() -> Self {
        let non_empty = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        let timeout_secs: u64 = std::env::var("REVALIDATE_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_REVALIDATE_TIMEOUT_SECS.to_string())
            .parse()
            .expect("REVALIDATE_TIMEOUT_SECS must be a valid u64");

        Self {
            url: non_empty("REVALIDATE_URL"),
            secret: non_empty("REVALIDATE_SECRET"),
            timeout_secs,
        }
    }
}
