//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults below.

use serde::{Deserialize, Serialize};

/// Root configuration for the shell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub site: SiteConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

/// The embedded site: which origin to show and what "home" means.
/// These are opaque constants to the synchronization logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scheme+host of the embedded content. All navigation is confined to
    /// this origin. No trailing slash, no path.
    pub base_url: String,
    /// The path considered home. When the current path equals it, the
    /// visible location shows nothing.
    pub default_path: String,
    /// Host window title.
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://example.com".to_string(),
            default_path: "/".to_string(),
            title: "Siteshell".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter directive; overridable with `--log-level`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "siteshell=info".to_string(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
