//! Reading a path back out of a URL the embedded frame loaded.

/// The one recognized failure in the whole system: a loaded URL that does
/// not sit on the embedded-content origin carries no usable path. Callers
/// suppress this and treat it as "no new information this cycle".
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("url is not on the embedded-content origin")]
pub struct ForeignOrigin;

/// Extract path+query from a URL observed on a frame load.
///
/// The fragment is dropped, matching what a location read would report as
/// pathname + search. A bare origin normalizes to `/`.
pub fn frame_path(url: &str, origin: &str) -> Result<String, ForeignOrigin> {
    let rest = url.strip_prefix(origin).ok_or(ForeignOrigin)?;
    let rest = rest.split('#').next().unwrap_or("");

    match rest.as_bytes().first() {
        None => Ok("/".to_string()),
        Some(b'/') => Ok(rest.to_string()),
        Some(b'?') => Ok(format!("/{rest}")),
        // "https://a.site" prefixing "https://a.sites/..." is a different host
        Some(_) => Err(ForeignOrigin),
    }
}
