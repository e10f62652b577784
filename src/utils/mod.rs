//! Utility functions and helpers.

pub mod http;

use url::Url;

/// Resolve a potentially relative URL against a base URL.
///
/// Returns `None` when the href cannot be resolved at all; the caller
/// decides whether that is an error or just a candidate to drop.
pub fn resolve_url(base: &Url, href: &str) -> Option<Url> {
    base.join(href).ok()
}

/// Network location (`host[:port]`) of a URL.
///
/// The port is included only when it is explicit and non-default, matching
/// the `url` crate's canonical form. URLs without a host (e.g. `mailto:`)
/// have no authority.
pub fn authority(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

/// Whether a URL uses a crawlable scheme.
pub fn is_http_scheme(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}
