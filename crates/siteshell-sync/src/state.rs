//! The single navigation state shared by both synchronization channels.

use crate::trusted::TrustedUrl;

/// Where the embedded frame is, and where it should be pointed.
///
/// `frame_target` is derived: it always equals `origin + current_path`.
/// Every write to `current_path` goes through [`set_current_path`], which
/// recomputes the target before the state is observable again, so the two
/// never drift.
///
/// [`set_current_path`]: NavigationState::set_current_path
#[derive(Debug, Clone)]
pub struct NavigationState {
    origin: String,
    default_path: String,
    current_path: String,
    frame_target: TrustedUrl,
}

impl NavigationState {
    /// Start at the default path. The frame target is computed here, at
    /// construction, so the frame has a valid target before first render.
    pub fn new(origin: impl Into<String>, default_path: impl Into<String>) -> Self {
        let origin = origin.into();
        let default_path = default_path.into();
        let frame_target = TrustedUrl::compose(&origin, &default_path);
        Self {
            origin,
            current_path: default_path.clone(),
            default_path,
            frame_target,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn default_path(&self) -> &str {
        &self.default_path
    }

    /// The path+query currently shown in the embedded frame.
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn frame_target(&self) -> &TrustedUrl {
        &self.frame_target
    }

    /// Whether the current path is the configured home path.
    pub fn is_at_default(&self) -> bool {
        self.current_path == self.default_path
    }

    /// The single mutation point: sets the path and recomputes the target.
    pub(crate) fn set_current_path(&mut self, path: &str) {
        self.current_path = path.to_string();
        self.frame_target = TrustedUrl::compose(&self.origin, &self.current_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://notes.example.site";

    #[test]
    fn new_state_targets_the_default_path() {
        let state = NavigationState::new(ORIGIN, "/home");
        assert_eq!(state.current_path(), "/home");
        assert!(state.is_at_default());
        assert_eq!(
            state.frame_target().as_str(),
            "https://notes.example.site/home"
        );
    }

    #[test]
    fn set_current_path_recomputes_the_target() {
        let mut state = NavigationState::new(ORIGIN, "/home");
        state.set_current_path("/docs/abc?tab=2");

        assert_eq!(state.current_path(), "/docs/abc?tab=2");
        assert!(!state.is_at_default());
        assert_eq!(
            state.frame_target().as_str(),
            "https://notes.example.site/docs/abc?tab=2"
        );
    }

    #[test]
    fn target_never_drifts_from_path() {
        let mut state = NavigationState::new(ORIGIN, "/home");
        for path in ["/a", "/b?x=1", "/home", "/c/d/e"] {
            state.set_current_path(path);
            assert_eq!(
                state.frame_target().as_str(),
                format!("{ORIGIN}{}", state.current_path())
            );
        }
    }

    #[test]
    fn returning_to_default_is_detected() {
        let mut state = NavigationState::new(ORIGIN, "/home");
        state.set_current_path("/elsewhere");
        assert!(!state.is_at_default());
        state.set_current_path("/home");
        assert!(state.is_at_default());
    }
}
