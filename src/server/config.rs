//! # Server Configuration
//!
//! TOML-backed configuration for the web server binary.
//!
//! # Example TOML
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//!
//! [frontend]
//! static_dir = "static"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

/// Complete server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listener address settings
    pub server: ServerInfo,
    /// Static frontend settings
    pub frontend: FrontendConfig,
}

/// Address the HTTP listener binds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Interface to bind (e.g. "127.0.0.1" or "0.0.0.0")
    pub host: String,
    /// TCP port; the `PORT` environment variable overrides this at startup
    pub port: u16,
}

/// Location of the static frontend assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Directory served as the router fallback (index page, script, styles)
    pub static_dir: String,
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// - `path`: Path to the TOML configuration file
    ///
    /// # Returns
    /// - `Ok(ServerConfig)`: Successfully parsed configuration
    /// - `Err`: File I/O or parsing error
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Apply a `PORT` environment override to the configured port.
    ///
    /// Hosting environments hand out the listening port through the `PORT`
    /// variable; when set, it replaces whatever the file or the defaults
    /// chose.
    ///
    /// # Arguments
    /// - `value`: The raw `PORT` value, or `None` when the variable is unset
    ///
    /// # Returns
    /// - `Ok(())`: Override applied, or nothing to apply
    /// - `Err`: The value does not parse as a TCP port
    pub fn apply_port_override(&mut self, value: Option<&str>) -> Result<()> {
        if let Some(raw) = value {
            self.server.port = raw
                .parse()
                .with_context(|| format!("invalid PORT value {:?}", raw))?;
        }
        Ok(())
    }

    /// The `host:port` string the listener binds.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: ServerInfo {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            frontend: FrontendConfig {
                static_dir: "static".to_string(),
            },
        }
    }
}
