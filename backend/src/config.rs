//! Application configuration loaded via OrthoConfig.
//!
//! Values layer from defaults, a config file, `ROSTER_*` environment
//! variables and command-line flags, in increasing precedence.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::inbound::http::state::DEFAULT_MAX_UPLOAD_BYTES;

const DEFAULT_BIND_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATA_DIR: &str = "data";

/// Errors raised while interpreting configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The bind address is not an IP address.
    #[error("invalid bind address {value:?}: {source}")]
    BindAddress {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROSTER")]
pub struct AppConfig {
    /// IP address to listen on.
    pub bind_address: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// Directory holding `students.json` and `settings.json`.
    pub data_dir: Option<PathBuf>,
    /// Admin password used only when the roster document is first created.
    /// Login stays disabled while the stored password is empty.
    pub initial_admin_password: Option<String>,
    /// Largest accepted spreadsheet upload in bytes.
    pub max_upload_bytes: Option<usize>,
    /// Origin allowed to call the API cross-origin. Any origin when unset.
    pub cors_allowed_origin: Option<String>,
}

impl AppConfig {
    /// Socket address the server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = match self.bind_address.as_deref() {
            Some(value) => value.parse().map_err(|source| ConfigError::BindAddress {
                value: value.to_owned(),
                source,
            })?,
            None => DEFAULT_BIND_ADDRESS,
        };
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Data directory, defaulting to `./data`.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    /// Password for a new roster document, empty when unset.
    pub fn initial_admin_password(&self) -> &str {
        self.initial_admin_password.as_deref().unwrap_or_default()
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES)
    }

    pub fn cors_allowed_origin(&self) -> Option<&str> {
        self.cors_allowed_origin
            .as_deref()
            .filter(|origin| !origin.is_empty())
    }
}
