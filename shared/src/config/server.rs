//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{env_non_empty, env_parse};

/// Origin used when `FRONTEND_ORIGIN` is not configured (Vite dev server)
pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:5173";

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 5000,
            workers: 0, // Use all CPU cores
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Load from `SERVER_HOST`, `PORT` and `SERVER_WORKERS`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_non_empty("SERVER_HOST").unwrap_or(defaults.host),
            port: env_parse("PORT", defaults.port),
            workers: env_parse("SERVER_WORKERS", defaults.workers),
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins (frontend development and production URLs)
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Accept any origin; overrides `allowed_origins`
    #[serde(default)]
    pub allow_all: bool,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![DEFAULT_FRONTEND_ORIGIN.to_string()],
            allow_all: false,
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Load from `FRONTEND_ORIGIN`, `FRONTEND_PROD_ORIGIN`,
    /// `ALLOW_ALL_ORIGINS` and `CORS_MAX_AGE`
    pub fn from_env() -> Self {
        let allowed_origins = [
            Some(env_non_empty("FRONTEND_ORIGIN").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGIN.to_string())),
            env_non_empty("FRONTEND_PROD_ORIGIN"),
        ]
        .into_iter()
        .flatten()
        .collect();

        let allow_all = env_non_empty("ALLOW_ALL_ORIGINS")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            allowed_origins,
            allow_all,
            max_age: env_parse("CORS_MAX_AGE", default_max_age()),
        }
    }

    /// Check whether a browser origin is allowed by this configuration
    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        self.allow_all || self.allowed_origins.iter().any(|o| o == origin)
    }
}

fn default_max_age() -> usize {
    3600
}
