//! Graceful shutdown.

use super::core::ShellApp;

impl ShellApp {
    /// Tear the embedded frame down.
    ///
    /// Dropping the WebView deregisters every handler registered at
    /// creation; there are no other owned resources.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if self.frame.take().is_some() {
            tracing::info!("Frame destroyed");
        }

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use siteshell_config::ShellConfig;

    use crate::app::ShellApp;

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut shell = ShellApp::new(ShellConfig::default(), None);
        shell.shutdown();
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut shell = ShellApp::new(ShellConfig::default(), None);
        shell.shutdown();
        shell.shutdown(); // second call must not panic
    }
}
