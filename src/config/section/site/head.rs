//! `[[site.head]]` entries: tags injected into every page's `<head>`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Tags the renderer knows how to place in `<head>`.
pub const RECOGNIZED_TAGS: &[&str] = &[
    "base", "link", "meta", "noscript", "script", "style", "template", "title",
];

/// Tags that never have a closing tag or inner content.
const VOID_TAGS: &[&str] = &["base", "link", "meta"];

/// One element injected into the generated page header.
///
/// ```toml
/// [[site.head]]
/// tag = "link"
/// attrs = { rel = "icon", type = "image/x-icon", href = "/favicon.ico" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadTag {
    /// Element name, e.g. `link` or `meta`.
    pub tag: String,

    /// Element attributes, kept in key order.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,

    /// Inner content for non-void elements (`script`, `style`, `title`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl HeadTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            content: None,
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn is_recognized(&self) -> bool {
        RECOGNIZED_TAGS
            .iter()
            .any(|t| t.eq_ignore_ascii_case(&self.tag))
    }

    pub fn is_void(&self) -> bool {
        VOID_TAGS.iter().any(|t| t.eq_ignore_ascii_case(&self.tag))
    }

    /// Render the element as HTML.
    ///
    /// Attribute values are escaped. `<title>` content is escaped too; other
    /// content is emitted as-is since it is script or style source.
    pub fn to_html(&self) -> String {
        let tag = self.tag.to_ascii_lowercase();
        let mut out = format!("<{tag}");
        for (name, value) in &self.attrs {
            out.push_str(&format!(" {name}=\"{}\"", escape_html(value)));
        }
        out.push('>');

        if !self.is_void() {
            if let Some(content) = &self.content {
                if tag == "title" {
                    out.push_str(&escape_html(content));
                } else {
                    out.push_str(content);
                }
            }
            out.push_str(&format!("</{tag}>"));
        }
        out
    }

    /// Validate this entry, reporting under `field` (e.g. `site.head[0]`).
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if !self.is_recognized() {
            diag.error_with_hint(
                field.field("tag"),
                format!("unrecognized head tag '{}'", self.tag),
                format!("use one of: {}", RECOGNIZED_TAGS.join(", ")),
            );
        }

        for name in self.attrs.keys() {
            if !is_valid_attr_name(name) {
                diag.error(
                    field.field("attrs"),
                    format!("invalid attribute name '{name}'"),
                );
            }
        }

        if self.is_void() && self.content.is_some() {
            diag.error_with_hint(
                field.field("content"),
                format!("<{}> cannot have content", self.tag),
                "remove `content` or move it into an attribute",
            );
        }
    }
}

fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '='))
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn favicon() -> HeadTag {
        HeadTag::new("link")
            .attr("rel", "icon")
            .attr("type", "image/x-icon")
            .attr("href", "/favicon.ico")
    }

    #[test]
    fn test_parse_head_entries() {
        let config = test_parse_config(
            r#"[[site.head]]
tag = "link"
attrs = { rel = "icon", type = "image/x-icon", href = "/favicon.ico" }

[[site.head]]
tag = "script"
content = "window.ready = true"
"#,
        );
        let head = config.head_tags();
        assert_eq!(head.len(), 2);
        assert_eq!(head[0], favicon());
        assert_eq!(head[1].content.as_deref(), Some("window.ready = true"));
        assert!(head[1].attrs.is_empty());
    }

    #[test]
    fn test_void_tag_html() {
        assert_eq!(
            favicon().to_html(),
            r#"<link href="/favicon.ico" rel="icon" type="image/x-icon">"#
        );
    }

    #[test]
    fn test_content_tag_html() {
        let script = HeadTag::new("Script")
            .attr("defer", "")
            .with_content("init()");
        assert_eq!(script.to_html(), r#"<script defer="">init()</script>"#);
    }

    #[test]
    fn test_title_content_escaped() {
        let title = HeadTag::new("title").with_content("Docs & <Guides>");
        assert_eq!(title.to_html(), "<title>Docs &amp; &lt;Guides&gt;</title>");

        let script = HeadTag::new("script").with_content("if (a < b && c) {}");
        assert_eq!(script.to_html(), "<script>if (a < b && c) {}</script>");
    }

    #[test]
    fn test_attr_escaping() {
        let meta = HeadTag::new("meta")
            .attr("name", "description")
            .attr("content", r#"Tom & "Jerry" <3"#);
        assert_eq!(
            meta.to_html(),
            r#"<meta content="Tom &amp; &quot;Jerry&quot; &lt;3" name="description">"#
        );
    }

    #[test]
    fn test_validate_rejects_unknown_tag() {
        let mut diag = ConfigDiagnostics::new();
        HeadTag::new("div").validate(&FieldPath::new("site.head").index(0), &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.head[0].tag");
    }

    #[test]
    fn test_validate_tag_case_insensitive() {
        let mut diag = ConfigDiagnostics::new();
        HeadTag::new("LINK")
            .attr("rel", "icon")
            .validate(&FieldPath::new("site.head").index(0), &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_validate_void_with_content() {
        let mut diag = ConfigDiagnostics::new();
        HeadTag::new("meta")
            .with_content("oops")
            .validate(&FieldPath::new("site.head").index(2), &mut diag);
        assert_eq!(diag.errors()[0].field.as_str(), "site.head[2].content");
    }

    #[test]
    fn test_validate_bad_attr_names() {
        let mut diag = ConfigDiagnostics::new();
        HeadTag::new("link")
            .attr("", "x")
            .attr("data value", "y")
            .validate(&FieldPath::new("site.head").index(0), &mut diag);
        assert_eq!(diag.len(), 2);
    }
}
