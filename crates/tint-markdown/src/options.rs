//! Processing options shared by [`sanitize`](crate::sanitize) and
//! [`to_html`](crate::to_html).

/// Flags controlling the sanitize and HTML pipelines.
///
/// Construct with struct update syntax to override only some fields:
///
/// ```
/// use tint_markdown::MarkdownOptions;
///
/// let options = MarkdownOptions {
///     add_line_breaks: false,
///     ..MarkdownOptions::default()
/// };
/// assert!(options.format_lists);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MarkdownOptions {
    /// Let raw HTML in the source reach the allow-list filter instead of
    /// escaping it.
    pub allow_html: bool,
    /// Run the allow-list filter over generated HTML.
    pub sanitize_html: bool,
    /// Insert paragraph breaks between sentences in prose.
    pub add_line_breaks: bool,
    /// Convert bullet markers and renumber ordered lists.
    pub format_lists: bool,
    /// Normalize fenced code blocks and default their language tag.
    pub highlight_code: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            allow_html: false,
            sanitize_html: true,
            add_line_breaks: true,
            format_lists: true,
            highlight_code: true,
        }
    }
}
