//! Markdown sanitizer and formatter.
//!
//! Turns untrusted markdown (typically written by a language model or a
//! user) into one of several safe representations:
//!
//! - [`sanitize`]: normalized markdown with scripts and dangerous URLs removed
//! - [`to_html`]: an HTML fragment restricted to an [`AllowList`]
//! - [`to_plain_text`]: text with all markdown syntax stripped
//! - [`format_conversation_message`]: escaped, marker-free text for chat views
//!
//! Plus two read-only helpers: [`extract_markdown_sections`] and
//! [`validate_markdown`].
//!
//! Every function is pure and total. No operation fails on malformed input;
//! the only diagnostics are the [`StructuralWarning`]s reported by
//! validation.
//!
//! # Example
//!
//! ```
//! use tint_markdown::{MarkdownOptions, sanitize, to_html};
//!
//! let options = MarkdownOptions::default();
//! let markdown = "##Palette\n- **Primary** blue\n- [more](example.com)";
//!
//! assert_eq!(
//!     sanitize(markdown, &options),
//!     "## Palette\n\n• **Primary** blue\n• [more](https://example.com)"
//! );
//! assert!(to_html(markdown, &options).starts_with("<h2>Palette</h2><ul>"));
//! ```

mod allow_list;
mod html;
mod options;
mod plain;
mod sanitize;
mod sections;
mod segment;
mod url;
mod validate;

pub use allow_list::{AllowList, DEFAULT_ALLOWED_ATTRIBUTES, DEFAULT_ALLOWED_TAGS};
pub use html::{escape_html, to_html, to_html_with};
pub use options::MarkdownOptions;
pub use plain::{format_conversation_message, to_plain_text};
pub use sanitize::{remove_harmful_content, sanitize};
pub use sections::{extract_markdown_sections, section_key};
pub use url::sanitize_url;
pub use validate::{StructuralWarning, Validation, validate_markdown};
