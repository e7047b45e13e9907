//! The synchronization engine: two inbound channels, one state, one policy.

use crate::frame_url::frame_path;
use crate::state::NavigationState;
use crate::trusted::TrustedUrl;

/// What the host-visible location should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostPath {
    /// The current path is the home path; show nothing. Deliberate branding:
    /// the default view carries no path suffix.
    Blank,
    /// Show this path verbatim.
    Visible(String),
}

/// Effects for the caller to apply after a detected navigation change.
///
/// `host` always replaces the single visible slot in place; nothing is ever
/// pushed, so host back/forward is unaffected by embedded navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncUpdate {
    /// Point the embedded frame here, if it is not already there.
    pub navigate: Option<TrustedUrl>,
    /// Rewrite the host-visible location.
    pub host: HostPath,
}

/// Owns the [`NavigationState`] and keeps the embedded frame and the
/// host-visible location bidirectionally synchronized.
///
/// Channel A ([`on_message`]) is a navigation message posted by the embedded
/// page; channel B ([`on_frame_load`]) is the URL observed when the frame
/// finishes a load. Both run on the host event loop in dispatch order, so
/// state mutation is inherently serialized.
///
/// [`on_message`]: PathSync::on_message
/// [`on_frame_load`]: PathSync::on_frame_load
#[derive(Debug)]
pub struct PathSync {
    state: NavigationState,
}

impl PathSync {
    pub fn new(origin: impl Into<String>, default_path: impl Into<String>) -> Self {
        Self {
            state: NavigationState::new(origin, default_path),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// The attested URL the frame should currently display.
    pub fn frame_target(&self) -> &TrustedUrl {
        self.state.frame_target()
    }

    /// Startup reconciliation, run once before the frame is first rendered.
    ///
    /// A present host path differing from the home path becomes the current
    /// path (a deep link; the caller renders the frame from
    /// [`frame_target`](PathSync::frame_target) afterwards, so it loads the
    /// right embedded page). Otherwise the visible location is blanked.
    pub fn startup(&mut self, host_path: Option<&str>) -> SyncUpdate {
        match host_path {
            Some(path) if !path.is_empty() && path != self.state.default_path() => {
                self.state.set_current_path(path);
                SyncUpdate {
                    navigate: None,
                    host: HostPath::Visible(path.to_string()),
                }
            }
            _ => SyncUpdate {
                navigate: None,
                host: HostPath::Blank,
            },
        }
    }

    /// Channel A: the embedded page declared a new path.
    ///
    /// Returns `None` when the path equals the current one, so a repeated
    /// message is a no-op. Otherwise the state moves, and the update asks
    /// the caller to navigate the frame to the recomputed target and rewrite
    /// the visible location.
    pub fn on_message(&mut self, path: &str) -> Option<SyncUpdate> {
        if path == self.state.current_path() {
            return None;
        }
        self.state.set_current_path(path);
        Some(SyncUpdate {
            navigate: Some(self.state.frame_target().clone()),
            host: self.host_path(),
        })
    }

    /// Channel B: the frame finished loading `url`.
    ///
    /// A foreign-origin URL carries no usable path; that case is swallowed
    /// here and the state is left untouched. On a same-origin URL with a new
    /// path, the state moves (the stored target is recomputed, keeping the
    /// invariant) but no navigate effect is emitted: the frame has already
    /// navigated itself, and pointing it there again would only re-trigger
    /// this channel.
    pub fn on_frame_load(&mut self, url: &str) -> Option<SyncUpdate> {
        let path = frame_path(url, self.state.origin()).ok()?;
        if path == self.state.current_path() {
            return None;
        }
        self.state.set_current_path(&path);
        Some(SyncUpdate {
            navigate: None,
            host: self.host_path(),
        })
    }

    /// Visible-URL policy, shared by both channels.
    fn host_path(&self) -> HostPath {
        if self.state.is_at_default() {
            HostPath::Blank
        } else {
            HostPath::Visible(self.state.current_path().to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://notes.example.site";
    const HOME: &str = "/home";

    fn sync() -> PathSync {
        PathSync::new(ORIGIN, HOME)
    }

    // -- Startup reconciliation --

    #[test]
    fn startup_at_default_blanks_the_host() {
        let mut s = sync();
        let update = s.startup(Some(HOME));

        assert_eq!(update.host, HostPath::Blank);
        assert_eq!(
            s.frame_target().as_str(),
            "https://notes.example.site/home"
        );
    }

    #[test]
    fn startup_without_host_path_blanks_the_host() {
        let mut s = sync();
        assert_eq!(s.startup(None).host, HostPath::Blank);
        assert_eq!(s.startup(Some("")).host, HostPath::Blank);
    }

    #[test]
    fn startup_deep_link_retargets_the_frame() {
        let mut s = sync();
        let update = s.startup(Some("/x/y"));

        assert_eq!(update.host, HostPath::Visible("/x/y".to_string()));
        assert_eq!(s.state().current_path(), "/x/y");
        assert_eq!(s.frame_target().as_str(), "https://notes.example.site/x/y");
    }

    // -- Channel A: messages --

    #[test]
    fn message_with_new_path_navigates_and_rewrites_host() {
        let mut s = sync();
        let update = s.on_message("/foo").expect("path changed");

        assert_eq!(
            update.navigate.as_ref().map(TrustedUrl::as_str),
            Some("https://notes.example.site/foo")
        );
        assert_eq!(update.host, HostPath::Visible("/foo".to_string()));
        assert_eq!(s.state().current_path(), "/foo");
    }

    #[test]
    fn message_returning_home_blanks_the_host() {
        let mut s = sync();
        s.on_message("/foo");
        let update = s.on_message(HOME).expect("path changed");

        assert_eq!(update.host, HostPath::Blank);
        assert_eq!(
            update.navigate.as_ref().map(TrustedUrl::as_str),
            Some("https://notes.example.site/home")
        );
    }

    #[test]
    fn repeated_message_is_a_no_op() {
        let mut s = sync();
        assert!(s.on_message("/foo").is_some());
        assert!(s.on_message("/foo").is_none());
        assert_eq!(s.state().current_path(), "/foo");
    }

    #[test]
    fn message_equal_to_current_default_is_a_no_op() {
        let mut s = sync();
        assert!(s.on_message(HOME).is_none());
    }

    // -- Channel B: frame loads --

    #[test]
    fn frame_load_updates_path_without_renavigating() {
        let mut s = sync();
        let update = s
            .on_frame_load("https://notes.example.site/docs/abc?tab=2")
            .expect("path changed");

        assert_eq!(update.navigate, None);
        assert_eq!(update.host, HostPath::Visible("/docs/abc?tab=2".to_string()));
        assert_eq!(s.state().current_path(), "/docs/abc?tab=2");
        // The stored target still tracks the path
        assert_eq!(
            s.frame_target().as_str(),
            "https://notes.example.site/docs/abc?tab=2"
        );
    }

    #[test]
    fn foreign_origin_load_is_swallowed() {
        let mut s = sync();
        s.on_message("/foo");

        assert!(s.on_frame_load("https://evil.example.com/bar").is_none());
        assert_eq!(s.state().current_path(), "/foo");
        assert_eq!(s.frame_target().as_str(), "https://notes.example.site/foo");
    }

    #[test]
    fn frame_load_of_current_path_is_a_no_op() {
        let mut s = sync();
        s.on_message("/foo");
        assert!(s.on_frame_load("https://notes.example.site/foo").is_none());
    }

    #[test]
    fn frame_load_back_home_blanks_the_host() {
        let mut s = sync();
        s.on_message("/foo");
        let update = s
            .on_frame_load("https://notes.example.site/home")
            .expect("path changed");

        assert_eq!(update.host, HostPath::Blank);
        assert_eq!(update.navigate, None);
    }

    #[test]
    fn query_differences_count_as_navigation() {
        let mut s = sync();
        s.on_message("/p");
        let update = s.on_frame_load("https://notes.example.site/p?q=1");
        assert!(update.is_some());
        assert_eq!(s.state().current_path(), "/p?q=1");
    }

    // -- Channel interplay --

    #[test]
    fn message_then_echoed_load_does_not_double_update() {
        // Channel A navigates the frame; the resulting load event echoes the
        // same path back through channel B and must be a no-op.
        let mut s = sync();
        let update = s.on_message("/foo").expect("path changed");
        let echoed = update.navigate.expect("channel A navigates");

        assert!(s.on_frame_load(echoed.as_str()).is_none());
    }
}
