use siteshell_sync::TrustedUrl;

/// Configuration for building the embedded frame.
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Initial attested URL to load.
    pub url: TrustedUrl,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether to enable clipboard access.
    pub clipboard: bool,
    /// Whether to enable autoplay for media.
    pub autoplay: bool,
    /// Private browsing. Off so the embedded site keeps its own session.
    pub incognito: bool,
}

impl FrameConfig {
    /// Config that loads `url` with the defaults.
    pub fn with_url(url: TrustedUrl) -> Self {
        Self {
            url,
            devtools: cfg!(debug_assertions),
            user_agent: Some("Siteshell/0.1".to_string()),
            clipboard: true,
            autoplay: true,
            incognito: false,
        }
    }
}
