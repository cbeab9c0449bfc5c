//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::path::PathBuf;

use zeroize::Zeroizing;

use roster::config::{AppConfig, ConfigError};

/// Resolved settings for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) data_dir: PathBuf,
    pub(crate) initial_admin_password: Zeroizing<String>,
    pub(crate) max_upload_bytes: usize,
    pub(crate) cors_allowed_origin: Option<String>,
}

impl ServerConfig {
    /// Resolve defaults and validate the loaded application configuration.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: config.socket_addr()?,
            data_dir: config.data_dir(),
            initial_admin_password: Zeroizing::new(config.initial_admin_password().to_owned()),
            max_upload_bytes: config.max_upload_bytes(),
            cors_allowed_origin: config.cors_allowed_origin().map(str::to_owned),
        })
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
