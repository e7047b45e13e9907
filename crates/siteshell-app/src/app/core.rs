//! ShellApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use siteshell_config::ShellConfig;
use siteshell_sync::PathSync;
use siteshell_webview::{FrameHandle, FrameManager};

/// Top-level application state.
pub struct ShellApp {
    pub(super) config: ShellConfig,

    /// Host-visible path supplied at startup, consumed by reconciliation.
    pub(super) deep_link: Option<String>,

    /// The navigation state and both synchronization channels.
    pub(super) sync: PathSync,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Embedded frame
    pub(super) manager: FrameManager,
    pub(super) frame: Option<FrameHandle>,

    pub(super) last_poll: Instant,
}

impl ShellApp {
    pub fn new(config: ShellConfig, deep_link: Option<String>) -> Self {
        // The frame target is valid from construction, before first render
        let sync = PathSync::new(
            config.site.base_url.as_str(),
            config.site.default_path.as_str(),
        );
        let manager = FrameManager::new(config.site.base_url.as_str());
        Self {
            config,
            deep_link,
            sync,
            window: None,
            manager,
            frame: None,
            last_poll: Instant::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_app_targets_the_home_page() {
        let mut config = ShellConfig::default();
        config.site.base_url = "https://notes.example.site".to_string();
        config.site.default_path = "/home".to_string();

        let shell = ShellApp::new(config, None);
        assert_eq!(
            shell.sync.frame_target().as_str(),
            "https://notes.example.site/home"
        );
        assert!(shell.window.is_none());
        assert!(shell.frame.is_none());
    }
}
