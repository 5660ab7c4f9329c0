//! Allow-list HTML filtering.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::url::sanitize_url;

/// Anything that looks like a tag, comment or declaration.
static TAG_LIKE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static TAG_PARTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^<(/?)([A-Za-z][A-Za-z0-9]*)(.*?)/?>$").unwrap());
static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s"'=/>]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#).unwrap()
});

/// Tags kept by [`AllowList::default`].
pub const DEFAULT_ALLOWED_TAGS: &[&str] = &[
    "p", "a", "strong", "em", "code", "pre", "ul", "ol", "li", "h1", "h2", "h3", "h4", "h5",
    "h6", "br",
];

/// Attributes kept by [`AllowList::default`].
pub const DEFAULT_ALLOWED_ATTRIBUTES: &[&str] = &["href", "target", "rel", "class"];

/// Approved tag and attribute names for generated HTML.
///
/// Names are compared case-insensitively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllowList {
    tags: Vec<String>,
    attributes: Vec<String>,
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(
            DEFAULT_ALLOWED_TAGS.iter().copied(),
            DEFAULT_ALLOWED_ATTRIBUTES.iter().copied(),
        )
    }
}

impl AllowList {
    /// Create an allow-list from tag and attribute names.
    pub fn new<T, A>(tags: T, attributes: A) -> Self
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        Self {
            tags: tags
                .into_iter()
                .map(|t| t.as_ref().to_ascii_lowercase())
                .collect(),
            attributes: attributes
                .into_iter()
                .map(|a| a.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Approved tag names, lowercased.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Approved attribute names, lowercased.
    #[must_use]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    #[must_use]
    pub fn allows_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn allows_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.eq_ignore_ascii_case(name))
    }

    /// Strip every tag and attribute not on the list.
    ///
    /// Kept tags are rebuilt from their parsed parts, so quoting is
    /// normalized and `href` values pass through [`sanitize_url`] again.
    /// Text between tags is left as is.
    ///
    /// ```
    /// use tint_markdown::AllowList;
    ///
    /// let html = r#"<p onclick="x()">Hi <iframe src="e"></iframe></p>"#;
    /// assert_eq!(AllowList::default().sanitize(html), "<p>Hi </p>");
    /// ```
    #[must_use]
    pub fn sanitize(&self, html: &str) -> String {
        TAG_LIKE
            .replace_all(html, |caps: &Captures<'_>| self.filter_tag(&caps[0]))
            .into_owned()
    }

    fn filter_tag(&self, tag: &str) -> String {
        let Some(parts) = TAG_PARTS.captures(tag) else {
            tracing::debug!(tag, "Dropped unparseable markup");
            return String::new();
        };
        let name = parts[2].to_ascii_lowercase();
        if !self.allows_tag(&name) {
            tracing::debug!(tag = %name, "Dropped disallowed tag");
            return String::new();
        }
        if !parts[1].is_empty() {
            return format!("</{name}>");
        }

        let mut rebuilt = format!("<{name}");
        for attr in ATTRIBUTE.captures_iter(&parts[3]) {
            let attr_name = attr[1].to_ascii_lowercase();
            if !self.allows_attribute(&attr_name) {
                tracing::debug!(tag = %name, attribute = %attr_name, "Dropped disallowed attribute");
                continue;
            }
            let value = attr.get(2).or(attr.get(3)).or(attr.get(4));
            match value {
                Some(value) => {
                    let value = if attr_name == "href" {
                        sanitize_url(value.as_str().trim())
                    } else {
                        value.as_str().to_owned()
                    };
                    rebuilt.push_str(&format!(r#" {attr_name}="{}""#, value.replace('"', "&quot;")));
                }
                None => {
                    rebuilt.push(' ');
                    rebuilt.push_str(&attr_name);
                }
            }
        }
        rebuilt.push('>');
        rebuilt
    }
}
