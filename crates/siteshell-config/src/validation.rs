//! Config validation: catch values the sync logic cannot work with.

use crate::errors::ConfigError;
use crate::schema::ShellConfig;

/// Validate a loaded config.
pub fn validate(config: &ShellConfig) -> Result<(), ConfigError> {
    validate_base_url(&config.site.base_url)?;
    validate_default_path(&config.site.default_path)?;

    if config.site.title.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "site.title must not be empty".to_string(),
        ));
    }
    if config.window.width <= 0.0 || config.window.height <= 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "window size must be positive, got {}x{}",
            config.window.width, config.window.height
        )));
    }
    Ok(())
}

/// `base_url` must be an http(s) origin: scheme+host only, nothing after.
fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let rest = base_url
        .strip_prefix("https://")
        .or_else(|| base_url.strip_prefix("http://"))
        .ok_or_else(|| {
            ConfigError::ValidationError(format!(
                "site.base_url must start with http:// or https://, got '{base_url}'"
            ))
        })?;

    if rest.is_empty() {
        return Err(ConfigError::ValidationError(
            "site.base_url has no host".to_string(),
        ));
    }
    if rest.contains(['/', '?', '#']) {
        return Err(ConfigError::ValidationError(format!(
            "site.base_url must be an origin without path, query, or trailing slash, got '{base_url}'"
        )));
    }
    Ok(())
}

fn validate_default_path(default_path: &str) -> Result<(), ConfigError> {
    if !default_path.starts_with('/') {
        return Err(ConfigError::ValidationError(format!(
            "site.default_path must start with '/', got '{default_path}'"
        )));
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
