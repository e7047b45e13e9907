//! Siteshell configuration.
//!
//! TOML-based configuration with full validation. All sections use serde
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let config = siteshell_config::load_config().expect("failed to load config");
//! println!("{}", config.site.base_url);
//! ```

pub mod errors;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use errors::ConfigError;
pub use schema::{LoggingConfig, ShellConfig, SiteConfig, WindowConfig};
pub use toml_loader::{default_config_path, load_from_path};

/// Load config from the platform default path and validate it.
///
/// Creates a default config file if none exists.
pub fn load_config() -> Result<ShellConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_at(path: &std::path::Path) -> Result<ShellConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
