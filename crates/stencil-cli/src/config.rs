//! Configuration file discovery for the CLI.
//!
//! The first existing file among the candidates wins:
//!
//! 1. the path given with `--config` (must exist)
//! 2. `stencil/config.toml` in the working directory
//! 3. `config.toml` in the platform config directory
//!
//! Without any file the defaults of [`AppConfig`] apply.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use stencil::{ImportError, config::AppConfig};

/// Relative path of the per-project configuration file.
const LOCAL_CONFIG: &str = "stencil/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for ImportError {
    fn from(err: ConfigError) -> Self {
        ImportError::Config(err.to_string())
    }
}

/// Loads the configuration, searching the usual locations when no
/// explicit path is given.
///
/// # Errors
///
/// Returns [`ImportError::Config`] if the explicit path does not exist or
/// the chosen file is not valid configuration, and [`ImportError::Io`] if
/// it cannot be read.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ImportError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_path_buf()).into());
        }
        return read_config(path);
    }

    match discovered_paths().into_iter().find(|path| path.exists()) {
        Some(path) => read_config(&path),
        None => {
            debug!("No configuration file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}

fn discovered_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
    match ProjectDirs::from("com", "stencil", "stencil") {
        Some(dirs) => paths.push(dirs.config_dir().join("config.toml")),
        None => debug!("Could not determine platform-specific config directory"),
    }
    paths
}

fn read_config(path: &Path) -> Result<AppConfig, ImportError> {
    info!(path = path.display().to_string(); "Loading configuration");
    let content = fs::read_to_string(path)?;
    Ok(parse_config(&content)?)
}

fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}
