//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PRONTO_DATABASE_URL` - `PostgreSQL` connection string
//!
//! ## Optional
//! - `PRONTO_HOST` - Bind address (default: 127.0.0.1)
//! - `PRONTO_PORT` - Listen port (default: 3000)
//! - `PRONTO_BASE_URL` - Public URL (default: http://localhost:3000);
//!   session cookies are marked Secure when it is https

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the server
    pub base_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the missing or malformed
    /// variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("PRONTO_DATABASE_URL")
            .map(SecretString::from)
            .map_err(|_| ConfigError::MissingEnvVar("PRONTO_DATABASE_URL".to_owned()))?;

        let host = optional_var("PRONTO_HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_owned())
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("PRONTO_HOST".to_owned(), e.to_string()))?;

        let port = match optional_var("PRONTO_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvVar("PRONTO_PORT".to_owned(), e.to_string()))?,
            None => DEFAULT_PORT,
        };

        let base_url = optional_var("PRONTO_BASE_URL")
            .unwrap_or_else(|| format!("http://localhost:{port}"));

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
        })
    }

    /// Socket address to bind the listener to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the public URL is served over https.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

/// Read an optional environment variable, treating empty as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_secure() {
        let config = ServerConfig {
            database_url: SecretString::from("postgres://localhost/pronto"),
            host: DEFAULT_HOST.parse().expect("valid ip"),
            port: DEFAULT_PORT,
            base_url: "https://pedidos.prontopizza.mx".to_owned(),
        };
        assert!(config.is_secure());

        let config = ServerConfig {
            base_url: "http://localhost:3000".to_owned(),
            ..config
        };
        assert!(!config.is_secure());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            database_url: SecretString::from("postgres://localhost/pronto"),
            host: "0.0.0.0".parse().expect("valid ip"),
            port: 8080,
            base_url: "http://localhost:8080".to_owned(),
        };
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }
}
