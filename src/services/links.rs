//! Link extraction and scoping.
//!
//! Turns the raw anchors of one fetched page into the canonical,
//! de-duplicated, in-domain candidate set the frontier admits from.

use std::collections::BTreeSet;

use url::Url;

use crate::services::PageDocument;
use crate::utils;

/// Extract the same-domain candidate link set of a fetched page.
///
/// Each href is resolved against `base` with standard URL-join semantics.
/// A candidate is silently dropped when resolution fails, the scheme is not
/// http(s), or the network location differs from `base_domain` (exact
/// match; no subdomain or case normalization). The returned set is
/// canonical-string de-duplicated; its iteration order (lexicographic) is a
/// property of the container, not a contract of this function.
pub fn extract_links(doc: &PageDocument, base: &Url, base_domain: &str) -> BTreeSet<String> {
    let mut links = BTreeSet::new();

    for href in doc.anchor_hrefs() {
        let Some(resolved) = utils::resolve_url(base, href) else {
            continue;
        };
        if !utils::is_http_scheme(&resolved) {
            continue;
        }
        match utils::authority(&resolved) {
            Some(authority) if authority == base_domain => {
                links.insert(resolved.to_string());
            }
            _ => {}
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links_of(html: &str, base: &str) -> BTreeSet<String> {
        let base = Url::parse(base).unwrap();
        let base_domain = utils::authority(&base).unwrap();
        extract_links(&PageDocument::parse(html), &base, &base_domain)
    }

    #[test]
    fn resolves_relative_hrefs_against_the_page() {
        let links = links_of(
            r#"<a href="child.html">1</a><a href="/root.html">2</a>"#,
            "https://example.com/dir/page.html",
        );

        assert!(links.contains("https://example.com/dir/child.html"));
        assert!(links.contains("https://example.com/root.html"));
        assert_eq!(links.len(), 2);
    }

    #[test]
    fn drops_cross_domain_links() {
        let links = links_of(
            r#"<a href="https://other.com/x">out</a><a href="/in">in</a>"#,
            "https://example.com/",
        );

        assert_eq!(links.len(), 1);
        assert!(links.contains("https://example.com/in"));
    }

    #[test]
    fn subdomains_are_not_the_same_domain() {
        let links = links_of(
            r#"<a href="https://www.example.com/x">www</a>"#,
            "https://example.com/",
        );
        assert!(links.is_empty());
    }

    #[test]
    fn port_is_part_of_the_domain() {
        let links = links_of(
            r#"<a href="https://example.com:8080/x">other port</a><a href="/same">same</a>"#,
            "https://example.com/",
        );

        assert_eq!(links.len(), 1);
        assert!(links.contains("https://example.com/same"));
    }

    #[test]
    fn drops_non_http_schemes() {
        let links = links_of(
            r#"<a href="mailto:a@example.com">m</a>
               <a href="javascript:void(0)">j</a>
               <a href="ftp://example.com/f">f</a>
               <a href="/ok">ok</a>"#,
            "https://example.com/",
        );

        assert_eq!(links.len(), 1);
        assert!(links.contains("https://example.com/ok"));
    }

    #[test]
    fn anchors_without_href_are_skipped() {
        let links = links_of(r#"<a name="top">top</a>"#, "https://example.com/");
        assert!(links.is_empty());
    }

    #[test]
    fn duplicates_collapse_to_one_canonical_url() {
        let links = links_of(
            r#"<a href="/a">1</a><a href="https://example.com/a">2</a>"#,
            "https://example.com/",
        );
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn fragment_only_href_resolves_to_a_distinct_url() {
        // Documented canonicalization gap: fragments are not stripped.
        let links = links_of(r##"<a href="#section">s</a>"##, "https://example.com/page");
        assert!(links.contains("https://example.com/page#section"));
    }
}
