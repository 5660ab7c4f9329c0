//! Structural checks on markdown.
//!
//! These are heuristics, not a parser: they count delimiters and look for
//! one malformed link shape. False positives and negatives are expected.

use std::sync::LazyLock;

use regex::Regex;

static UNTERMINATED_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]\([^)]*\z").unwrap());

/// A structural defect found by [`validate_markdown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StructuralWarning {
    /// Odd number of triple-backtick fences.
    #[error("Unclosed code block detected")]
    UnclosedCodeBlock,
    /// Odd number of single backticks outside fences.
    #[error("Unclosed inline code detected")]
    UnclosedInlineCode,
    /// `[text](` without a closing parenthesis.
    #[error("Malformed links detected")]
    MalformedLink,
}

/// Result of [`validate_markdown`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    /// Warnings in detection order.
    pub errors: Vec<StructuralWarning>,
}

impl Validation {
    /// True when no warning was raised.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Warning texts in detection order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Validation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Validation", 2)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("errors", &self.messages())?;
        state.end()
    }
}

/// Check fences, inline code and links for obvious imbalance.
///
/// ```
/// use tint_markdown::validate_markdown;
///
/// let report = validate_markdown("``` unclosed");
/// assert!(!report.is_valid());
/// assert_eq!(report.messages(), vec!["Unclosed code block detected"]);
/// assert!(validate_markdown("plain text").is_valid());
/// ```
#[must_use]
pub fn validate_markdown(content: &str) -> Validation {
    let mut errors = Vec::new();

    let fences = content.matches("```").count();
    if fences % 2 != 0 {
        errors.push(StructuralWarning::UnclosedCodeBlock);
    }

    let single_ticks = content
        .split("```")
        .map(|part| part.matches('`').count())
        .sum::<usize>();
    if single_ticks % 2 != 0 {
        errors.push(StructuralWarning::UnclosedInlineCode);
    }

    if UNTERMINATED_LINK.is_match(content) {
        errors.push(StructuralWarning::MalformedLink);
    }

    Validation { errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_valid() {
        let report = validate_markdown("plain text");
        assert!(report.is_valid());
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_unclosed_fence() {
        let report = validate_markdown("``` unclosed");
        assert_eq!(report.errors, vec![StructuralWarning::UnclosedCodeBlock]);
        assert_eq!(report.messages(), vec!["Unclosed code block detected"]);
    }

    #[test]
    fn test_balanced_fence_valid() {
        assert!(validate_markdown("```js\nlet a = `x`;\n```").is_valid());
    }

    #[test]
    fn test_unclosed_inline_code() {
        let report = validate_markdown("use `this");
        assert_eq!(report.errors, vec![StructuralWarning::UnclosedInlineCode]);
    }

    #[test]
    fn test_malformed_link() {
        let report = validate_markdown("see [docs](https://example.com");
        assert_eq!(report.errors, vec![StructuralWarning::MalformedLink]);
        assert_eq!(report.messages(), vec!["Malformed links detected"]);
    }

    #[test]
    fn test_closed_link_valid() {
        assert!(validate_markdown("see [docs](https://example.com) ok").is_valid());
    }

    #[test]
    fn test_multiple_warnings() {
        let report = validate_markdown("```\n`a\n[x](y");
        assert_eq!(
            report.errors,
            vec![
                StructuralWarning::UnclosedCodeBlock,
                StructuralWarning::UnclosedInlineCode,
                StructuralWarning::MalformedLink,
            ]
        );
    }
}
