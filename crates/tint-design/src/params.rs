//! Keyword-based inference of design parameters from a free-form prompt.

use serde::{Deserialize, Serialize};

/// A prompt must mention one of these to be treated as a design request.
const DESIGN_KEYWORDS: [&str; 11] = [
    "design",
    "website",
    "web",
    "ui",
    "ux",
    "layout",
    "color",
    "portfolio",
    "blog",
    "ecommerce",
    "landing",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    Portfolio,
    Blog,
    Ecommerce,
    Landing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Audience {
    General,
    Tech,
    Creative,
    Enterprise,
    Young,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorPref {
    Neutral,
    Blue,
    Purple,
    Green,
    Orange,
    Red,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutPref {
    Modern,
    Minimal,
    Grid,
    Classic,
    CardBased,
    OnePage,
}

/// Parameters inferred by [`extract_design_parameters`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignParams {
    pub project_type: ProjectType,
    pub audience: Audience,
    pub color_pref: ColorPref,
    pub layout_pref: LayoutPref,
    pub award_winner: bool,
}

/// Infer design parameters from `prompt`.
///
/// Returns `None` when the prompt mentions no design keyword. Each
/// parameter takes the first matching rule, falling back to a default.
/// Matching is plain case-insensitive substring search, so "web" also
/// matches "website".
///
/// ```
/// use tint_design::{Audience, ColorPref, LayoutPref, ProjectType, extract_design_parameters};
///
/// let params = extract_design_parameters("A minimal blue blog for developers").unwrap();
/// assert_eq!(params.project_type, ProjectType::Blog);
/// assert_eq!(params.audience, Audience::Tech);
/// assert_eq!(params.color_pref, ColorPref::Blue);
/// assert_eq!(params.layout_pref, LayoutPref::Minimal);
/// assert!(!params.award_winner);
///
/// assert!(extract_design_parameters("What's the weather today?").is_none());
/// ```
#[must_use]
pub fn extract_design_parameters(prompt: &str) -> Option<DesignParams> {
    let text = prompt.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|word| text.contains(word));

    if !mentions(&DESIGN_KEYWORDS) {
        tracing::debug!("Prompt has no design keywords");
        return None;
    }

    let project_type = if mentions(&["blog"]) {
        ProjectType::Blog
    } else if mentions(&["ecommerce", "shop", "store"]) {
        ProjectType::Ecommerce
    } else if mentions(&["landing"]) {
        ProjectType::Landing
    } else {
        ProjectType::Portfolio
    };

    let audience = if mentions(&["tech", "developer", "programmer"]) {
        Audience::Tech
    } else if mentions(&["creative", "artist", "designer"]) {
        Audience::Creative
    } else if mentions(&["enterprise", "business", "corporate"]) {
        Audience::Enterprise
    } else if mentions(&["young", "youth", "student"]) {
        Audience::Young
    } else {
        Audience::General
    };

    let color_pref = if mentions(&["blue"]) {
        ColorPref::Blue
    } else if mentions(&["purple", "violet"]) {
        ColorPref::Purple
    } else if mentions(&["green"]) {
        ColorPref::Green
    } else if mentions(&["orange"]) {
        ColorPref::Orange
    } else if mentions(&["red"]) {
        ColorPref::Red
    } else {
        ColorPref::Neutral
    };

    let layout_pref = if mentions(&["minimal", "clean", "simple"]) {
        LayoutPref::Minimal
    } else if mentions(&["grid", "masonry"]) {
        LayoutPref::Grid
    } else if mentions(&["classic", "traditional"]) {
        LayoutPref::Classic
    } else if mentions(&["card"]) {
        LayoutPref::CardBased
    } else if mentions(&["one page", "single page"]) {
        LayoutPref::OnePage
    } else {
        LayoutPref::Modern
    };

    let params = DesignParams {
        project_type,
        audience,
        color_pref,
        layout_pref,
        award_winner: mentions(&["award", "winning", "premium"]),
    };
    tracing::debug!(?params, "Extracted design parameters");
    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_keywords_returns_none() {
        assert_eq!(extract_design_parameters("Tell me a joke"), None);
        assert_eq!(extract_design_parameters(""), None);
    }

    #[test]
    fn test_defaults_when_only_keyword() {
        assert_eq!(
            extract_design_parameters("I need a layout"),
            Some(DesignParams {
                project_type: ProjectType::Portfolio,
                audience: Audience::General,
                color_pref: ColorPref::Neutral,
                layout_pref: LayoutPref::Modern,
                award_winner: false,
            })
        );
    }

    #[test]
    fn test_first_match_wins() {
        let params =
            extract_design_parameters("Blog and online store for business, green and red, grid of cards")
                .unwrap();
        assert_eq!(params.project_type, ProjectType::Blog);
        assert_eq!(params.audience, Audience::Enterprise);
        assert_eq!(params.color_pref, ColorPref::Green);
        assert_eq!(params.layout_pref, LayoutPref::Grid);
    }

    #[test]
    fn test_case_insensitive() {
        let params = extract_design_parameters("AWARD-WINNING Landing page, VIOLET, for STUDENTS").unwrap();
        assert_eq!(params.project_type, ProjectType::Landing);
        assert_eq!(params.audience, Audience::Young);
        assert_eq!(params.color_pref, ColorPref::Purple);
        assert!(params.award_winner);
    }

    #[test]
    fn test_one_page_layout() {
        let params = extract_design_parameters("single page website for artists").unwrap();
        assert_eq!(params.layout_pref, LayoutPref::OnePage);
        assert_eq!(params.audience, Audience::Creative);
    }

    #[test]
    fn test_params_json_shape() {
        let params = extract_design_parameters("card ecommerce design").unwrap();
        let json = serde_json::to_value(params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "project_type": "ecommerce",
                "audience": "general",
                "color_pref": "neutral",
                "layout_pref": "card-based",
                "award_winner": false,
            })
        );
    }
}
