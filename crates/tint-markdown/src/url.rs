//! Link target sanitization.

use std::sync::LazyLock;

use regex::Regex;

static DANGEROUS_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:javascript|data|vbscript):").unwrap());

static SAFE_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:https?://|mailto:)").unwrap());

/// Make a link target safe to emit.
///
/// Script-capable schemes collapse to `#`. Fragments, absolute paths and
/// `http(s)`/`mailto` URLs pass through. Anything else is treated as a bare
/// host and gets `https://` prepended.
///
/// # Examples
///
/// ```
/// use tint_markdown::sanitize_url;
///
/// assert_eq!(sanitize_url("javascript:alert(1)"), "#");
/// assert_eq!(sanitize_url("example.com"), "https://example.com");
/// assert_eq!(sanitize_url("/local"), "/local");
/// ```
#[must_use]
pub fn sanitize_url(url: &str) -> String {
    if url.is_empty() || DANGEROUS_SCHEME.is_match(url) {
        return "#".to_owned();
    }
    if SAFE_SCHEME.is_match(url) || url.starts_with('#') || url.starts_with('/') {
        return url.to_owned();
    }
    format!("https://{url}")
}
