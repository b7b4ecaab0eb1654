use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:9090";
const DEFAULT_LOG_FILTER: &str = "info";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    /// `EnvFilter` directives used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a local `.env` file.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parsable
    /// - `Err(AppError::ConfigErr)` - `DATABASE_URL` missing or `BIND_ADDRESS` unparsable
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                value: bind_address.clone(),
            })?;

        let log_filter =
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            database_url,
            bind_address,
            log_filter,
        })
    }
}
