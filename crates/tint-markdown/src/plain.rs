//! Markdown stripping for plain-text and chat display.
//!
//! [`to_plain_text`] and [`format_conversation_message`] overlap but serve
//! different readers: the first drops code entirely and is meant for
//! summaries and search, the second keeps code contents and escapes markup
//! because its output goes straight into the chat view.

use std::sync::LazyLock;

use regex::Regex;

use crate::sanitize::cleanup_whitespace;

static CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());
static HEADER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*#{1,6}[ \t]*").unwrap());
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(?:[-*+•]|\d+\.)[ \t]+").unwrap());
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.+?)`").unwrap());
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());

static FENCE_KEEP_BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```\w*\n?(.*?)```").unwrap());
static CHAT_INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());
static CHAT_LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(?:[-*+]|\d+\.)[ \t]+").unwrap());
static CHAT_BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*\n]+)\*\*").unwrap());
static CHAT_ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*\n]+)\*").unwrap());
static CHAT_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#+[ \t]+(.+)$").unwrap());
static EXCESS_BLANKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Strip markdown syntax, keeping readable text.
///
/// Fenced code blocks are removed with their contents; links collapse to
/// their label.
///
/// ```
/// use tint_markdown::to_plain_text;
///
/// assert_eq!(
///     to_plain_text("# Title\n**bold** and *italic* and `code`"),
///     "Title\nbold and italic and code"
/// );
/// ```
#[must_use]
pub fn to_plain_text(content: &str) -> String {
    let text = CODE_BLOCK.replace_all(content, "");
    let text = HEADER_MARKER.replace_all(&text, "");
    let text = LIST_MARKER.replace_all(&text, "");
    let text = BOLD.replace_all(&text, "${1}");
    let text = ITALIC.replace_all(&text, "${1}");
    let text = INLINE_CODE.replace_all(&text, "${1}");
    let text = LINK.replace_all(&text, "${1}");
    cleanup_whitespace(&text)
}

/// Turn a chat message into readable text for the conversation view.
///
/// Angle brackets are escaped before anything else, then code fences,
/// inline code markers, list markers, emphasis and header markers are
/// removed while their contents stay.
///
/// ```
/// use tint_markdown::format_conversation_message;
///
/// assert_eq!(
///     format_conversation_message("**Hi** <b>there</b>"),
///     "Hi &lt;b&gt;there&lt;/b&gt;"
/// );
/// ```
#[must_use]
pub fn format_conversation_message(content: &str) -> String {
    let escaped = content.replace('<', "&lt;").replace('>', "&gt;");
    let text = FENCE_KEEP_BODY.replace_all(&escaped, "${1}");
    let text = CHAT_INLINE_CODE.replace_all(&text, "${1}");
    let text = CHAT_LIST_MARKER.replace_all(&text, "");
    let text = CHAT_BOLD.replace_all(&text, "${1}");
    let text = CHAT_ITALIC.replace_all(&text, "${1}");
    let text = CHAT_HEADER.replace_all(&text, "${1}");
    let text = EXCESS_BLANKS.replace_all(&text, "\n\n");
    text.trim().to_owned()
}
