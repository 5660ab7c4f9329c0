//! Markdown to HTML conversion.
//!
//! Works on the output of [`sanitize`], so it only has to understand the
//! normalized shapes that pipeline produces: `#` headers, `•` and `N.` list
//! items, fenced code, inline code, `**`/`*` emphasis and `[text](url)`
//! links.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::allow_list::AllowList;
use crate::options::MarkdownOptions;
use crate::sanitize::sanitize;
use crate::segment::{CODE_SPAN, Segment, split_fences};

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})[ \t]+(.+)$").unwrap());
static BULLET_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*[•*+-][ \t]+(.+)$").unwrap());
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*\d+\.[ \t]+(.+)$").unwrap());
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*\n]+)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*\n]+)\*").unwrap());
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]\n]+)\]\(([^)\n]+)\)").unwrap());

/// Convert markdown to an HTML fragment using the default [`AllowList`].
///
/// # Examples
///
/// ```
/// use tint_markdown::{MarkdownOptions, to_html};
///
/// let html = to_html("# Title\n\nHello **world**", &MarkdownOptions::default());
/// assert_eq!(html, "<h1>Title</h1><p>Hello <strong>world</strong></p>");
/// ```
#[must_use]
pub fn to_html(content: &str, options: &MarkdownOptions) -> String {
    to_html_with(content, options, &AllowList::default())
}

/// Convert markdown to an HTML fragment, filtering with `allow_list` when
/// [`MarkdownOptions::sanitize_html`] is set.
#[must_use]
pub fn to_html_with(content: &str, options: &MarkdownOptions, allow_list: &AllowList) -> String {
    let markdown = sanitize(content, options);
    let markdown = if options.allow_html {
        markdown
    } else {
        escape_text(&markdown)
    };

    let writer = HtmlWriter {
        escape_code: options.allow_html,
    };
    let mut html = String::with_capacity(markdown.len() * 2);
    for segment in split_fences(&markdown) {
        match segment {
            Segment::Code { lang, body, .. } => writer.code_block(lang, body, &mut html),
            Segment::Text(text) => writer.blocks(text, &mut html),
        }
    }

    if options.sanitize_html {
        allow_list.sanitize(&html)
    } else {
        html
    }
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape markup characters in text content, leaving quotes alone.
fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

fn list_item(line: &str) -> Option<(ListKind, &str)> {
    if let Some(caps) = BULLET_ITEM.captures(line) {
        return caps.get(1).map(|m| (ListKind::Unordered, m.as_str()));
    }
    ORDERED_ITEM
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| (ListKind::Ordered, m.as_str()))
}

struct HtmlWriter {
    /// Escape code contents; false when the whole document is pre-escaped.
    escape_code: bool,
}

impl HtmlWriter {
    fn code_text(&self, s: &str) -> String {
        if self.escape_code {
            escape_html(s)
        } else {
            s.to_owned()
        }
    }

    fn code_block(&self, lang: Option<&str>, body: &str, out: &mut String) {
        let body = self.code_text(body.trim());
        match lang {
            Some(lang) => out.push_str(&format!(
                r#"<pre><code class="language-{}">{body}</code></pre>"#,
                self.code_text(lang).replace('"', "&quot;")
            )),
            None => out.push_str(&format!("<pre><code>{body}</code></pre>")),
        }
    }

    /// Render a text segment as headers, lists and paragraphs.
    fn blocks(&self, text: &str, out: &mut String) {
        let mut paragraph: Vec<String> = Vec::new();
        let mut list: Option<ListKind> = None;

        for line in text.split('\n') {
            if line.trim().is_empty() {
                flush_paragraph(&mut paragraph, out);
                close_list(&mut list, out);
            } else if let Some(caps) = HEADING.captures(line) {
                flush_paragraph(&mut paragraph, out);
                close_list(&mut list, out);
                let level = caps[1].len();
                out.push_str(&format!(
                    "<h{level}>{}</h{level}>",
                    self.inline(caps[2].trim())
                ));
            } else if let Some((kind, item)) = list_item(line) {
                flush_paragraph(&mut paragraph, out);
                if list != Some(kind) {
                    close_list(&mut list, out);
                    out.push_str(&format!("<{}>", kind.tag()));
                    list = Some(kind);
                }
                out.push_str(&format!("<li>{}</li>", self.inline(item.trim())));
            } else {
                close_list(&mut list, out);
                paragraph.push(self.inline(line.trim()));
            }
        }

        flush_paragraph(&mut paragraph, out);
        close_list(&mut list, out);
    }

    /// Render inline code, emphasis and links within one line.
    fn inline(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for span in CODE_SPAN.find_iter(text) {
            out.push_str(&phrases(&text[last..span.start()]));
            out.push_str("<code>");
            out.push_str(&self.code_text(span.as_str().trim_matches('`')));
            out.push_str("</code>");
            last = span.end();
        }
        out.push_str(&phrases(&text[last..]));
        out
    }
}

fn phrases(text: &str) -> String {
    let text = BOLD.replace_all(text, "<strong>${1}</strong>");
    let text = ITALIC.replace_all(&text, "<em>${1}</em>");
    LINK.replace_all(&text, |caps: &Captures<'_>| {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            caps[2].replace('"', "&quot;"),
            &caps[1]
        )
    })
    .into_owned()
}

fn flush_paragraph(paragraph: &mut Vec<String>, out: &mut String) {
    if paragraph.is_empty() {
        return;
    }
    out.push_str("<p>");
    out.push_str(&paragraph.join("<br>"));
    out.push_str("</p>");
    paragraph.clear();
}

fn close_list(list: &mut Option<ListKind>, out: &mut String) {
    if let Some(kind) = list.take() {
        out.push_str(&format!("</{}>", kind.tag()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn html(input: &str) -> String {
        to_html(input, &MarkdownOptions::default())
    }

    fn html_with(input: &str, options: MarkdownOptions) -> String {
        to_html(input, &options)
    }

    #[test]
    fn test_heading_and_paragraph() {
        assert_eq!(
            html("# Title\n\nHello **world**"),
            "<h1>Title</h1><p>Hello <strong>world</strong></p>"
        );
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(html("###### Small"), "<h6>Small</h6>");
        assert_eq!(html("### Mid"), "<h3>Mid</h3>");
    }

    #[test]
    fn test_bare_hashes_are_not_headings() {
        let result = html("###\nText");
        assert!(!result.contains("<h"));
        assert!(result.contains("###"));
    }

    #[test]
    fn test_italic() {
        assert_eq!(html("an *aside* here"), "<p>an <em>aside</em> here</p>");
    }

    #[test]
    fn test_lists_wrapped_by_type() {
        assert_eq!(
            html("- a\n- b\n1. c\n2. d"),
            "<ul><li>a</li><li>b</li></ul><ol><li>c</li><li>d</li></ol>"
        );
    }

    #[test]
    fn test_list_switches_back() {
        assert_eq!(
            html("1. a\n- b"),
            "<ol><li>a</li></ol><ul><li>b</li></ul>"
        );
    }

    #[test]
    fn test_list_closed_by_paragraph() {
        assert_eq!(
            html("- a\n\nafter"),
            "<ul><li>a</li></ul><p>after</p>"
        );
    }

    #[test]
    fn test_code_block_with_language() {
        assert_eq!(
            html("```rust\nlet x = 1 < 2;\n```"),
            r#"<pre><code class="language-rust">let x = 1 &lt; 2;</code></pre>"#
        );
    }

    #[test]
    fn test_code_block_default_language() {
        assert_eq!(
            html("```\nx\n```"),
            r#"<pre><code class="language-text">x</code></pre>"#
        );
    }

    #[test]
    fn test_code_block_without_language_when_not_highlighting() {
        let options = MarkdownOptions {
            highlight_code: false,
            ..Default::default()
        };
        assert_eq!(html_with("```\nx\n```", options), "<pre><code>x</code></pre>");
    }

    #[test]
    fn test_code_block_escaped_when_html_allowed() {
        let options = MarkdownOptions {
            allow_html: true,
            ..Default::default()
        };
        assert_eq!(
            html_with("```html\n<b>x</b>\n```", options),
            r#"<pre><code class="language-html">&lt;b&gt;x&lt;/b&gt;</code></pre>"#
        );
    }

    #[test]
    fn test_link_attributes() {
        assert_eq!(
            html("[Docs](example.com)"),
            r#"<p><a href="https://example.com" target="_blank" rel="noopener noreferrer">Docs</a></p>"#
        );
    }

    #[test]
    fn test_inline_code_escaped() {
        assert_eq!(
            html("Use `a < b` now"),
            "<p>Use <code>a &lt; b</code> now</p>"
        );
    }

    #[test]
    fn test_raw_html_escaped_by_default() {
        assert_eq!(
            html("Hi <b>there</b>"),
            "<p>Hi &lt;b&gt;there&lt;/b&gt;</p>"
        );
    }

    #[test]
    fn test_raw_html_filtered_when_allowed() {
        let options = MarkdownOptions {
            allow_html: true,
            ..Default::default()
        };
        assert_eq!(
            html_with("Hi <b>there</b> <em>x</em>", options),
            "<p>Hi there <em>x</em></p>"
        );
    }

    #[test]
    fn test_unfiltered_when_sanitize_html_off() {
        let options = MarkdownOptions {
            allow_html: true,
            sanitize_html: false,
            ..Default::default()
        };
        assert!(html_with("<div>x</div>", options).contains("<div>"));
    }

    #[test]
    fn test_line_breaks_within_paragraph() {
        let options = MarkdownOptions {
            add_line_breaks: false,
            ..Default::default()
        };
        assert_eq!(
            html_with("line one\nline two\n\nnext", options),
            "<p>line one<br>line two</p><p>next</p>"
        );
    }

    #[test]
    fn test_script_never_reaches_html() {
        let result = html("<script>alert(1)</script>Hello");
        assert_eq!(result, "<p>Hello</p>");
    }

    #[test]
    fn test_custom_allow_list() {
        let allow_list = AllowList::new(["p"], Vec::<String>::new());
        let result = to_html_with("**bold**", &MarkdownOptions::default(), &allow_list);
        assert_eq!(result, "<p>bold</p>");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(html(""), "");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;");
    }
}
