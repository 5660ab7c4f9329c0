//! Header extraction.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}[ \t]+(.+)$").unwrap());
static NON_ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Map each header's slug to its title, in document order.
///
/// A repeated slug keeps its first position and takes the latest title.
///
/// ```
/// use tint_markdown::extract_markdown_sections;
///
/// let sections = extract_markdown_sections("# Color Palette\ntext\n## Fonts & Type");
/// assert_eq!(sections["color-palette"], "Color Palette");
/// assert_eq!(sections["fonts-type"], "Fonts & Type");
/// ```
#[must_use]
pub fn extract_markdown_sections(content: &str) -> IndexMap<String, String> {
    let mut sections = IndexMap::new();
    for caps in HEADER.captures_iter(content) {
        let title = caps[1].trim();
        sections.insert(section_key(title), title.to_owned());
    }
    sections
}

/// Lowercase `title` and replace each run of non-alphanumeric characters
/// with a single hyphen.
#[must_use]
pub fn section_key(title: &str) -> String {
    NON_ALPHANUMERIC
        .replace_all(&title.to_lowercase(), "-")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_section_key() {
        assert_eq!(section_key("Hello World"), "hello-world");
        assert_eq!(section_key("What's New?"), "what-s-new-");
        assert_eq!(section_key("Step 1: Setup"), "step-1-setup");
    }

    #[test]
    fn test_sections_in_document_order() {
        let sections =
            extract_markdown_sections("## Typography\nbody\n# Color Palette\n### Next Steps");
        let keys: Vec<&str> = sections.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["typography", "color-palette", "next-steps"]);
        assert_eq!(sections["next-steps"], "Next Steps");
    }

    #[test]
    fn test_duplicate_titles_overwrite() {
        let sections = extract_markdown_sections("# Notes\n## notes");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections["notes"], "notes");
    }

    #[test]
    fn test_requires_space_after_hashes() {
        assert!(extract_markdown_sections("#hashtag\nplain").is_empty());
    }

    #[test]
    fn test_title_trimmed() {
        let sections = extract_markdown_sections("#   Spaced Out   ");
        assert_eq!(sections["spaced-out"], "Spaced Out");
    }
}
