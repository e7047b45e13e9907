//! Attested navigation targets.

use std::fmt;

/// A URL attested to point at the configured embedded-content origin.
///
/// The only constructor concatenates the origin with a rooted path, so a
/// `TrustedUrl` can never name a foreign origin. The WebView layer takes
/// this type, and nothing else, as a navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedUrl(String);

impl TrustedUrl {
    /// Compose `origin + path`. Only [`NavigationState`](crate::NavigationState)
    /// mints these, keeping the attestation scoped to the one known origin.
    pub(crate) fn compose(origin: &str, path: &str) -> Self {
        Self(format!("{origin}{path}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrustedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_concatenates_origin_and_path() {
        let url = TrustedUrl::compose("https://notes.example.site", "/docs/abc?x=1");
        assert_eq!(url.as_str(), "https://notes.example.site/docs/abc?x=1");
    }

    #[test]
    fn display_matches_as_str() {
        let url = TrustedUrl::compose("https://notes.example.site", "/");
        assert_eq!(url.to_string(), url.as_str());
    }
}
