use std::path::PathBuf;

/// Runtime configuration for the API server, sourced from the environment.
///
/// Every knob has a local-development default; deployments override through
/// environment variables (see [`ServerConfig::from_env`]).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Origins allowed by the CORS layer.
    pub cors_origins: Vec<String>,
    /// Per-request timeout in seconds, enforced by the timeout layer.
    pub request_timeout_secs: u64,
    /// Directory project image uploads are stored under.
    pub upload_root: PathBuf,
}

impl ServerConfig {
    /// Read the configuration from environment variables.
    ///
    /// | Variable               | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `UPLOAD_ROOT`          | `storage/projects`      |
    ///
    /// `CORS_ORIGINS` takes a comma-separated list. Unparseable numeric
    /// values abort startup.
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_or("PORT", "3000")
                .parse()
                .expect("PORT must be a valid u16"),
            cors_origins: env_or("CORS_ORIGINS", "http://localhost:5173")
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", "30")
                .parse()
                .expect("REQUEST_TIMEOUT_SECS must be a valid u64"),
            upload_root: PathBuf::from(env_or("UPLOAD_ROOT", "storage/projects")),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
