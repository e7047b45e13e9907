//! TOML config loading: read from a path or the platform default location.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::ConfigError;
use crate::schema::ShellConfig;

/// Load config from a specific TOML file path.
///
/// Deserializes with serde defaults for any missing fields.
pub fn load_from_path(path: &Path) -> Result<ShellConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|_| {
        ConfigError::FileNotFound(path.to_path_buf())
    })?;

    let config: ShellConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/siteshell/config.toml`
/// On Linux: `~/.config/siteshell/config.toml`
///
/// If the file does not exist, a default config file is created and the
/// defaults are returned.
pub fn load_default() -> Result<ShellConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(ShellConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// The platform default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let dir = dirs::config_dir().ok_or_else(|| {
        ConfigError::ValidationError("no platform config directory".to_string())
    })?;
    Ok(dir.join("siteshell").join("config.toml"))
}

/// Write a default config file, creating parent directories as needed.
fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| ConfigError::ParseError(format!("failed to create config dir: {e}")))?;
    }

    let content = toml::to_string_pretty(&ShellConfig::default())
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize defaults: {e}")))?;

    std::fs::write(path, content)
        .map_err(|e| ConfigError::ParseError(format!("failed to write default config: {e}")))?;
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
