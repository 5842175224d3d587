/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use twoflac_core::Latency;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_latency")]
    pub latency: LatencySettings,

    #[serde(default)]
    pub web: WebSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Artificial delay of each mock endpoint, in milliseconds
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LatencySettings {
    #[serde(default = "default_convert_ms")]
    pub convert_ms: u64,

    #[serde(default = "default_details_ms")]
    pub details_ms: u64,

    #[serde(default = "default_download_ms")]
    pub download_ms: u64,

    #[serde(default = "default_search_ms")]
    pub search_ms: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WebSettings {
    /// Directory served for paths outside `/api` (stylesheets, images)
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file, falling back to `config.toml`.
    ///
    /// Environment variables prefixed with `TWOFLAC_` override file values,
    /// with `__` between section and key (`TWOFLAC_SERVER__PORT=9000`).
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ServerError::Config(format!(
                        "Config file not found: {:?}",
                        path
                    )));
                }
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let default_path = PathBuf::from("config.toml");
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("TWOFLAC")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.parse::<IpAddr>().is_err() {
            return Err(ServerError::Config(format!(
                "Invalid host address: {}",
                self.server.host
            )));
        }

        if let Some(dir) = &self.web.static_dir {
            if !dir.is_dir() {
                return Err(ServerError::Config(format!(
                    "Static directory not found: {:?}",
                    dir
                )));
            }
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .server
            .host
            .parse::<IpAddr>()
            .map_err(|e| ServerError::Config(e.to_string()))?;
        Ok(SocketAddr::from((ip, self.server.port)))
    }

    pub fn latency(&self) -> Latency {
        Latency::from_millis(
            self.latency.convert_ms,
            self.latency.details_ms,
            self.latency.download_ms,
            self.latency.search_ms,
        )
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_latency() -> LatencySettings {
    LatencySettings {
        convert_ms: default_convert_ms(),
        details_ms: default_details_ms(),
        download_ms: default_download_ms(),
        search_ms: default_search_ms(),
    }
}

fn default_convert_ms() -> u64 {
    1000
}

fn default_details_ms() -> u64 {
    800
}

fn default_download_ms() -> u64 {
    1500
}

fn default_search_ms() -> u64 {
    800
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            latency: default_latency(),
            web: WebSettings::default(),
        }
    }
}
