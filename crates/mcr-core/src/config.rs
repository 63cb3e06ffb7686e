use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Conventional config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Global configuration loaded from `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct McrConfig {
    /// Root directory scanned for video files.
    pub file_path: String,
    /// File suffixes treated as video files (e.g. ".mp4"), matched case-insensitively.
    pub video_types: Vec<String>,
    /// Proxy address. Reserved; nothing reads it yet.
    pub proxy_addr: String,
}

impl Default for McrConfig {
    fn default() -> Self {
        Self {
            file_path: "./".to_string(),
            video_types: vec![".mp4".to_string(), ".mkv".to_string(), ".avi".to_string()],
            proxy_addr: String::new(),
        }
    }
}

/// Whether the config came from disk or was just written with defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    Created,
    Loaded,
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: McrConfig,
    pub origin: ConfigOrigin,
    pub path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("error reading config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error parsing config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("error creating default config: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("error writing config file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE)
}

/// Serializes with 4-space indentation.
pub fn to_json_pretty(cfg: &McrConfig) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    cfg.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Load configuration from `path`, creating a default file if none exists.
///
/// Only a missing file triggers creation. A file that exists but cannot be
/// read or parsed is an error and is left untouched.
pub fn load_or_init(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let default_cfg = McrConfig::default();
            let json = to_json_pretty(&default_cfg).map_err(ConfigError::Serialize)?;
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
            fs::write(path, json).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!("created default config at {}", path.display());
            return Ok(LoadedConfig {
                config: default_cfg,
                origin: ConfigOrigin::Created,
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let cfg: McrConfig = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(LoadedConfig {
        config: cfg,
        origin: ConfigOrigin::Loaded,
        path: path.to_path_buf(),
    })
}
