//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::domain::ports::UserDirectory;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) directory: Arc<dyn UserDirectory>,
    pub(crate) docs_enabled: bool,
}

impl ServerConfig {
    /// Construct a server configuration serving `directory` on `bind_addr`.
    ///
    /// Documentation routes are enabled by default.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, directory: Arc<dyn UserDirectory>) -> Self {
        Self {
            bind_addr,
            directory,
            docs_enabled: true,
        }
    }

    /// Toggle the OpenAPI document, Swagger UI and ReDoc routes.
    #[must_use]
    pub fn with_docs(mut self, enabled: bool) -> Self {
        self.docs_enabled = enabled;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Whether documentation routes will be served.
    #[must_use]
    pub fn docs_enabled(&self) -> bool {
        self.docs_enabled
    }
}
