//! Parsed-document collaborator.
//!
//! Wraps `scraper` behind the three views the engine needs: raw anchor
//! hrefs, anchor count, and visible text.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Node, Selector};

static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("anchor selector"));

/// A fetched page parsed into a DOM.
pub struct PageDocument {
    doc: Html,
}

impl PageDocument {
    /// Parse an HTML body. Malformed markup never fails; the parser
    /// recovers the way browsers do.
    pub fn parse(body: &str) -> Self {
        Self {
            doc: Html::parse_document(body),
        }
    }

    /// Raw `href` values of all anchors that carry one.
    ///
    /// Anchors without an href attribute are skipped, not an error.
    pub fn anchor_hrefs(&self) -> Vec<&str> {
        self.doc
            .select(&ANCHOR)
            .filter_map(|element| element.value().attr("href"))
            .collect()
    }

    /// Number of anchor tags in the document, href or not.
    pub fn anchor_count(&self) -> usize {
        self.doc.select(&ANCHOR).count()
    }

    /// Visible text of the document with whitespace collapsed.
    ///
    /// Script, style, and other non-rendered subtrees are excluded.
    pub fn visible_text(&self) -> String {
        let mut raw = String::new();
        collect_text(self.doc.root_element(), &mut raw);
        collapse_whitespace(&raw)
    }
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    if matches!(
        element.value().name(),
        "script" | "style" | "noscript" | "template"
    ) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                out.push_str(text);
                out.push(' ');
            }
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, out);
                }
            }
            _ => {}
        }
    }
}

fn collapse_whitespace(input: &str) -> String {
    let mut buf = String::with_capacity(input.len());
    let mut last_space = false;
    for ch in input.chars() {
        if ch.is_whitespace() {
            if !last_space && !buf.is_empty() {
                buf.push(' ');
            }
            last_space = true;
        } else {
            buf.push(ch);
            last_space = false;
        }
    }
    buf.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_hrefs_and_skips_bare_anchors() {
        let doc = PageDocument::parse(
            r#"<html><body>
                <a href="/a">A</a>
                <a name="no-href">B</a>
                <a href="/c">C</a>
            </body></html>"#,
        );

        assert_eq!(doc.anchor_hrefs(), vec!["/a", "/c"]);
        assert_eq!(doc.anchor_count(), 3);
    }

    #[test]
    fn visible_text_excludes_script_and_style() {
        let doc = PageDocument::parse(
            r#"<html><head><style>p { color: red; }</style></head>
            <body><p>Hello</p><script>var x = "hidden";</script><p>world</p></body></html>"#,
        );

        let text = doc.visible_text();
        assert_eq!(text, "Hello world");
    }

    #[test]
    fn visible_text_collapses_whitespace() {
        let doc = PageDocument::parse("<html><body><p>a\n\n  b\t c</p></body></html>");
        assert_eq!(doc.visible_text(), "a b c");
    }
}
