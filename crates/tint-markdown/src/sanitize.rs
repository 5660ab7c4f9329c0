//! Markdown sanitize pipeline.
//!
//! [`sanitize`] runs a fixed sequence of passes. Order matters: later passes
//! rely on the shapes earlier ones produce (bullets are already `•` when
//! emphasis runs, code blocks are already fenced cleanly when inline passes
//! look for them), so the sequence below must not be rearranged.
//!
//! 1. strip harmful content
//! 2. normalize headers
//! 3. format lists
//! 4. format fenced code blocks
//! 5. pad inline code
//! 6. format links
//! 7. pad emphasis
//! 8. sentence line breaks
//! 9. whitespace cleanup
//!
//! Passes 2 to 8 never look inside fenced code. Passes 6 and 7 also skip
//! inline code spans.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::options::MarkdownOptions;
use crate::segment::{Segment, map_outside_code_spans, map_text, split_fences};
use crate::url::sanitize_url;

static SCRIPT_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b.*?</script\s*>").unwrap());
static SCRIPT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?script\b[^>]*>?").unwrap());
static EVENT_HANDLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s*\bon\w+\s*=\s*(?:"[^"]*"|'[^']*')"#).unwrap()
});
static JAVASCRIPT_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)javascript:").unwrap());
static DATA_URI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)data:([^;\s"']*);[^"'\s)]*"#).unwrap());

/// Header marker followed by a title. Without a separating blank the title
/// must not start with `#`, so bare hash runs are left alone.
static HEADER_PARTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,6})(?:[ \t]+(\S.*)|([^#\s].*))$").unwrap()
});
pub(crate) static HEADER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}[ \t]+\S").unwrap());

static BULLET_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([ \t]*)[-*+][ \t]+(.+)$").unwrap());
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([ \t]*)\d+\.[ \t]+(.+)$").unwrap());
static ANY_LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*(?:[-*+•]|\d+\.)[ \t]+").unwrap());

static PADDED_CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([ \t]*)(`[^`\n]+`)([ \t]*)").unwrap());
static PADDED_EMPHASIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([ \t]*)(\*\*[^*\n]+\*\*|\*[^*\n]+\*)([ \t]*)").unwrap()
});

static LINK_OR_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]\n]+)\]\(([^)\n]+)\)|(https?://[^\s<>()\[\]`]+)").unwrap()
});

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.!?])[ \t\n]+([A-Z])").unwrap());
/// Two or more blank lines, counting lines of only spaces or tabs as blank.
static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n){2,}").unwrap());
static FOUR_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{4,}").unwrap());
static TRAILING_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)[ \t]+$").unwrap());

/// Sanitize and normalize markdown.
///
/// Total over arbitrary input and idempotent on its own output.
///
/// # Examples
///
/// ```
/// use tint_markdown::{MarkdownOptions, sanitize};
///
/// let clean = sanitize("3. a\n7. b\n2. c", &MarkdownOptions::default());
/// assert_eq!(clean, "1. a\n2. b\n3. c");
/// ```
#[must_use]
pub fn sanitize(content: &str, options: &MarkdownOptions) -> String {
    let text = remove_harmful_content(content);
    let text = format_headers(&text);
    let text = format_lists(&text, options.format_lists);
    let text = format_code_blocks(&text, options.highlight_code);
    let text = format_inline_code(&text);
    let text = format_links(&text);
    let text = format_emphasis(&text);
    let text = format_line_breaks(&text, options.add_line_breaks);
    cleanup_whitespace(&text)
}

/// Remove script elements, inline event handlers and script-capable URIs.
///
/// Runs to a fixpoint so fragments cannot reassemble into a new match once
/// an inner match is removed.
#[must_use]
pub fn remove_harmful_content(content: &str) -> String {
    let mut current = content.to_owned();
    loop {
        let next = strip_harmful_once(&current);
        if next == current {
            return next;
        }
        tracing::debug!(
            removed = current.len() - next.len(),
            "Stripped harmful content"
        );
        current = next;
    }
}

fn strip_harmful_once(content: &str) -> String {
    let text = SCRIPT_ELEMENT.replace_all(content, "");
    let text = SCRIPT_TAG.replace_all(&text, "");
    let text = EVENT_HANDLER.replace_all(&text, "");
    let text = JAVASCRIPT_SCHEME.replace_all(&text, "");
    DATA_URI
        .replace_all(&text, |caps: &Captures<'_>| {
            if caps[1].to_ascii_lowercase().starts_with("image") {
                caps[0].to_owned()
            } else {
                String::new()
            }
        })
        .into_owned()
}

/// Re-space header lines and make sure each header stands in its own block.
fn format_headers(text: &str) -> String {
    map_text(text, |segment| {
        let lines: Vec<Cow<'_, str>> = segment.split('\n').map(normalize_header).collect();
        let mut out: Vec<&str> = Vec::with_capacity(lines.len());

        for (i, line) in lines.iter().enumerate() {
            let is_header = HEADER_LINE.is_match(line);
            if is_header && out.last().is_some_and(|prev| !prev.trim().is_empty()) {
                out.push("");
            }
            out.push(line);
            if is_header
                && lines
                    .get(i + 1)
                    .is_some_and(|next| !next.trim().is_empty())
            {
                out.push("");
            }
        }
        out.join("\n")
    })
}

fn normalize_header(line: &str) -> Cow<'_, str> {
    let Some(caps) = HEADER_PARTS.captures(line) else {
        return Cow::Borrowed(line);
    };
    match caps.get(2).or_else(|| caps.get(3)) {
        Some(title) => Cow::Owned(format!("{} {}", &caps[1], title.as_str().trim())),
        None => Cow::Borrowed(line),
    }
}

/// Replace bullet markers with `•` and renumber ordered runs from 1.
fn format_lists(text: &str, enabled: bool) -> String {
    if !enabled {
        return text.to_owned();
    }

    map_text(text, |segment| {
        let mut counter = 0usize;
        segment
            .split('\n')
            .map(|line| {
                if let Some(caps) = BULLET_ITEM.captures(line) {
                    counter = 0;
                    format!("{}• {}", &caps[1], &caps[2])
                } else if let Some(caps) = ORDERED_ITEM.captures(line) {
                    counter += 1;
                    format!("{}{counter}. {}", &caps[1], &caps[2])
                } else {
                    counter = 0;
                    line.to_owned()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    })
}

/// Trim fenced code, default its language to `text` and surround it with
/// blank lines.
fn format_code_blocks(text: &str, enabled: bool) -> String {
    if !enabled {
        return text.to_owned();
    }

    let mut out = String::with_capacity(text.len() + 16);
    let mut after_code = false;

    for segment in split_fences(text) {
        match segment {
            Segment::Text(t) if after_code => {
                let rest = t.trim_start_matches([' ', '\t']);
                if !rest.starts_with("\n\n") {
                    out.push_str(if rest.starts_with('\n') { "\n" } else { "\n\n" });
                }
                out.push_str(rest);
                after_code = false;
            }
            Segment::Text(t) => out.push_str(t),
            Segment::Code { lang, body, .. } => {
                let kept = out.trim_end_matches([' ', '\t']).len();
                out.truncate(kept);
                if !out.is_empty() && !out.ends_with("\n\n") {
                    out.push_str(if out.ends_with('\n') { "\n" } else { "\n\n" });
                }
                out.push_str(&format!(
                    "```{}\n{}\n```",
                    lang.unwrap_or("text"),
                    body.trim()
                ));
                after_code = true;
            }
        }
    }
    out
}

fn format_inline_code(text: &str) -> String {
    map_text(text, |segment| pad_spans(segment, &PADDED_CODE_SPAN))
}

/// Trim link labels, sanitize link targets and turn bare URLs into links.
fn format_links(text: &str) -> String {
    map_text(text, |segment| map_outside_code_spans(segment, link_pass))
}

fn link_pass(text: &str) -> String {
    LINK_OR_URL
        .replace_all(text, |caps: &Captures<'_>| {
            if let (Some(label), Some(url)) = (caps.get(1), caps.get(2)) {
                let trimmed = label.as_str().trim();
                let label = if trimmed.is_empty() {
                    label.as_str()
                } else {
                    trimmed
                };
                format!("[{label}]({})", sanitize_url(url.as_str().trim()))
            } else if let Some(url) = caps.get(3) {
                let url = url.as_str();
                let bare = url.trim_end_matches(['.', ',', ';', ':', '!', '?', '\'', '"']);
                let tail = &url[bare.len()..];
                let clean = sanitize_url(bare);
                format!("[{clean}]({clean}){tail}")
            } else {
                caps[0].to_owned()
            }
        })
        .into_owned()
}

fn format_emphasis(text: &str) -> String {
    map_text(text, |segment| {
        map_outside_code_spans(segment, |part| pad_spans(part, &PADDED_EMPHASIS))
    })
}

/// Put exactly one space between a span and neighbouring words.
///
/// `pattern` must capture leading blanks, the span, and trailing blanks as
/// groups 1 to 3. Indentation at line start is kept; blanks at line end are
/// dropped; punctuation neighbours get no padding.
fn pad_spans(text: &str, pattern: &Regex) -> String {
    pattern
        .replace_all(text, |caps: &Captures<'_>| {
            let Some(whole) = caps.get(0) else {
                return String::new();
            };
            let before = text[..whole.start()].chars().next_back();
            let after = text[whole.end()..].chars().next();
            let leading = &caps[1];
            let trailing = &caps[3];

            let lead = match (leading.is_empty(), before) {
                (false, None | Some('\n')) => leading,
                (false, _) => " ",
                (true, Some(c)) if c.is_alphanumeric() => " ",
                (true, _) => "",
            };
            let trail = match (trailing.is_empty(), after) {
                (false, None | Some('\n')) => "",
                (false, _) => " ",
                (true, Some(c)) if c.is_alphanumeric() => " ",
                (true, _) => "",
            };
            format!("{lead}{}{trail}", &caps[2])
        })
        .into_owned()
}

/// Break prose into paragraphs at sentence boundaries.
fn format_line_breaks(text: &str, enabled: bool) -> String {
    if !enabled {
        return text.to_owned();
    }

    map_text(text, |segment| {
        let broken = break_prose(segment);
        BLANK_RUN.replace_all(&broken, "\n\n").into_owned()
    })
}

fn break_prose(text: &str) -> String {
    fn flush(prose: &mut Vec<&str>, out: &mut Vec<String>) {
        if prose.is_empty() {
            return;
        }
        let chunk = prose.join("\n");
        out.push(map_outside_code_spans(&chunk, |part| {
            SENTENCE_BREAK
                .replace_all(part, "${1}\n\n${2}")
                .into_owned()
        }));
        prose.clear();
    }

    let mut out = Vec::new();
    let mut prose = Vec::new();
    for line in text.split('\n') {
        if is_prose(line) {
            prose.push(line);
        } else {
            flush(&mut prose, &mut out);
            out.push(line.to_owned());
        }
    }
    flush(&mut prose, &mut out);
    out.join("\n")
}

fn is_prose(line: &str) -> bool {
    !line.trim().is_empty() && !HEADER_LINE.is_match(line) && !ANY_LIST_ITEM.is_match(line)
}

/// Normalize line endings, strip trailing blanks, cap blank runs at two
/// lines and trim the document.
pub(crate) fn cleanup_whitespace(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let text = TRAILING_SPACE.replace_all(&text, "");
    let text = FOUR_NEWLINES.replace_all(&text, "\n\n\n");
    text.trim().to_owned()
}
