/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_music_dir")]
    pub music_dir: PathBuf,

    #[serde(default = "default_play_counts_path")]
    pub play_counts_path: PathBuf,
}

impl ServerConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        let config_path = PathBuf::from("config.toml");
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        // Override with environment variables (prefixed with PHONO_)
        settings = settings.add_source(
            config::Environment::with_prefix("PHONO")
                .separator("_")
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
        self.server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|_| ServerError::Config(format!("invalid host: {}", self.server.host)))?;

        if self.storage.music_dir.as_os_str().is_empty() {
            return Err(ServerError::Config("music_dir is required".to_string()));
        }

        Ok(())
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
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3030
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        music_dir: default_music_dir(),
        play_counts_path: default_play_counts_path(),
    }
}

fn default_music_dir() -> PathBuf {
    PathBuf::from("./data/music")
}

fn default_play_counts_path() -> PathBuf {
    PathBuf::from("./data/play_counts.json")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 3030);
    }

    #[test]
    fn bad_host_fails_validation() {
        let mut config = ServerConfig::default();
        config.server.host = "not-an-ip".to_string();
        assert!(config.validate().is_err());
    }
}
