//! Splitting documents into fenced code blocks and the text around them.
//!
//! Line and inline passes only ever see [`Segment::Text`], so code contents
//! survive formatting untouched.

use std::sync::LazyLock;

use regex::Regex;

/// Fenced code block: opening fence, optional language, newline, lazy body,
/// closing fence.
static FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```([^\s`]+)?[ \t]*\n(.*?)```").unwrap());

/// Single-line inline code span.
pub(crate) static CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`\n]+`").unwrap());

/// Piece of a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    /// Markdown text outside any fence.
    Text(&'a str),
    /// Fenced code block.
    Code {
        /// Language tag after the opening fence.
        lang: Option<&'a str>,
        /// Everything between the opening line and the closing fence.
        body: &'a str,
        /// The block exactly as written.
        raw: &'a str,
    },
}

/// Split `text` into alternating text and code segments.
///
/// Concatenating every segment's source reproduces `text` exactly. Empty
/// text segments are omitted.
pub(crate) fn split_fences(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in FENCE.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            segments.push(Segment::Text(&text[last..whole.start()]));
        }
        segments.push(Segment::Code {
            lang: caps.get(1).map(|m| m.as_str()),
            body: caps.get(2).map_or("", |m| m.as_str()),
            raw: whole.as_str(),
        });
        last = whole.end();
    }

    if last < text.len() {
        segments.push(Segment::Text(&text[last..]));
    }
    segments
}

/// Rewrite every text segment with `f`, copying code blocks verbatim.
pub(crate) fn map_text(text: &str, mut f: impl FnMut(&str) -> String) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in split_fences(text) {
        match segment {
            Segment::Text(t) => out.push_str(&f(t)),
            Segment::Code { raw, .. } => out.push_str(raw),
        }
    }
    out
}

/// Rewrite the parts of `text` between inline code spans with `f`.
pub(crate) fn map_outside_code_spans(text: &str, mut f: impl FnMut(&str) -> String) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for span in CODE_SPAN.find_iter(text) {
        out.push_str(&f(&text[last..span.start()]));
        out.push_str(span.as_str());
        last = span.end();
    }
    out.push_str(&f(&text[last..]));
    out
}
