//! Server settings loaded via OrthoConfig.
//!
//! Values come from command-line flags, then `USERS_API_*` environment
//! variables, then the defaults below. Seeding and the documentation routes
//! are on unless the matching variable is set to `false`.

use std::net::{SocketAddr, ToSocketAddrs};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 7000;

/// Failure to turn configured host and port into a socket address.
#[derive(Debug, thiserror::Error)]
pub enum BindAddrError {
    /// Host or port could not be resolved.
    #[error("failed to resolve {host}:{port}: {source}")]
    Resolve {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },
    /// Resolution succeeded but produced no addresses.
    #[error("no address found for {host}:{port}")]
    NoAddress { host: String, port: u16 },
}

/// Settings controlling the HTTP listener and startup behaviour.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS_API")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Populate the directory with the sample users on startup.
    pub seed_users: Option<bool>,
    /// Serve `/swagger-docs`, `/swagger-ui/` and `/redoc`.
    pub docs_enabled: Option<bool>,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to 7000.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Whether to load the sample users, falling back to `true`.
    ///
    /// Switch seeding off with `USERS_API_SEED_USERS=false`.
    pub fn seed_users(&self) -> bool {
        self.seed_users.unwrap_or(true)
    }

    /// Whether to serve the documentation routes, falling back to `true`.
    ///
    /// Switch them off with `USERS_API_DOCS_ENABLED=false`.
    pub fn docs_enabled(&self) -> bool {
        self.docs_enabled.unwrap_or(true)
    }

    /// Resolve host and port into the first matching socket address.
    ///
    /// # Errors
    /// Returns [`BindAddrError`] when the host cannot be resolved.
    pub fn bind_addr(&self) -> Result<SocketAddr, BindAddrError> {
        let (host, port) = (self.host(), self.port());
        let mut addrs = (host, port)
            .to_socket_addrs()
            .map_err(|source| BindAddrError::Resolve {
                host: host.to_owned(),
                port,
                source,
            })?;
        addrs.next().ok_or_else(|| BindAddrError::NoAddress {
            host: host.to_owned(),
            port,
        })
    }
}
