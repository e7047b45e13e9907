//! The host-visible location, shown in the window title.

use siteshell_sync::HostPath;

use super::core::ShellApp;

// =============================================================================
// VISIBLE LOCATION
// =============================================================================

/// Format the window title for a visible-location state.
///
/// `Blank` shows the bare site title (the default view carries no path
/// suffix); otherwise the path is appended verbatim.
pub(super) fn visible_title(site_title: &str, host: &HostPath) -> String {
    match host {
        HostPath::Blank => site_title.to_string(),
        HostPath::Visible(path) => format!("{site_title} — {path}"),
    }
}

impl ShellApp {
    /// Rewrite the visible location in place. One slot, overwritten:
    /// nothing is pushed, so this is replace semantics.
    pub(super) fn apply_host_path(&self, host: &HostPath) {
        let Some(ref window) = self.window else {
            return;
        };
        window.set_title(&visible_title(&self.config.site.title, host));
    }
}

// =============================================================================
// TESTS
// =============================================================================
