//! Structured recommendations built from questionnaire answers.

use serde::{Deserialize, Serialize};

use crate::palette::{FontPair, color_palettes, font_pairs};
use crate::questionnaire::DesignData;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignRecommendation {
    pub id: String,
    pub name: String,
    pub colors: Vec<String>,
    pub fonts: FontPair,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationMetadata {
    pub total_generated: usize,
    pub based_on: DesignData,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub recommendations: Vec<DesignRecommendation>,
    pub metadata: RecommendationMetadata,
}

/// Pair each palette for the chosen color with a font pair for the theme.
///
/// ```
/// use tint_design::{DesignData, generate_recommendations};
///
/// let design = DesignData {
///     theme: "Modern".into(),
///     mood: "Friendly".into(),
///     color_preference: "Green (Natural & Growth)".into(),
///     ..DesignData::default()
/// };
/// let set = generate_recommendations(&design);
/// assert_eq!(set.metadata.total_generated, 6);
/// assert_eq!(set.recommendations[0].id, "rec-1");
/// assert_eq!(set.recommendations[0].name, "Modern Friendly Design 1");
/// assert_eq!(set.recommendations[0].colors[0], "#059669");
/// ```
#[must_use]
pub fn generate_recommendations(design: &DesignData) -> RecommendationSet {
    let palettes = color_palettes(&design.color_preference);
    let fonts = font_pairs(&design.theme);
    let tags = tags(design);

    let recommendations: Vec<DesignRecommendation> = palettes
        .iter()
        .zip(fonts)
        .enumerate()
        .map(|(i, (palette, fonts))| DesignRecommendation {
            id: format!("rec-{}", i + 1),
            name: format!("{} {} Design {}", design.theme, design.mood, i + 1),
            colors: palette.iter().map(|c| (*c).to_owned()).collect(),
            fonts,
            description: description(design, i),
            tags: tags.clone(),
        })
        .collect();

    tracing::debug!(
        count = recommendations.len(),
        color = %design.color_preference,
        theme = %design.theme,
        "Generated recommendations"
    );

    RecommendationSet {
        metadata: RecommendationMetadata {
            total_generated: recommendations.len(),
            based_on: design.clone(),
        },
        recommendations,
    }
}

fn first_word(value: &str) -> String {
    value.split(' ').next().unwrap_or_default().to_lowercase()
}

fn description(design: &DesignData, index: usize) -> String {
    match index % 6 {
        0 => format!(
            "A {} design perfect for {}",
            design.mood.to_lowercase(),
            design.target_audience.to_lowercase()
        ),
        1 => format!(
            "{} aesthetics with {} layout approach",
            design.theme,
            design.style.to_lowercase()
        ),
        2 => format!(
            "Optimized for {} with professional appeal",
            design.project_description.to_lowercase()
        ),
        3 => format!(
            "Clean and intuitive design following {} principles",
            design.theme.to_lowercase()
        ),
        4 => format!(
            "Engaging interface designed for {} users",
            design.target_audience.to_lowercase()
        ),
        _ => format!(
            "{} atmosphere with {} color scheme",
            design.mood,
            first_word(&design.color_preference)
        ),
    }
}

fn tags(design: &DesignData) -> Vec<String> {
    vec![
        design.theme.to_lowercase(),
        design.mood.to_lowercase(),
        first_word(&design.color_preference),
        first_word(&design.style),
        first_word(&design.target_audience),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> DesignData {
        DesignData {
            project_description: "Company Website".to_owned(),
            color_preference: "Blue (Professional & Trust)".to_owned(),
            theme: "Classic".to_owned(),
            mood: "Trustworthy".to_owned(),
            style: "Clean & Simple".to_owned(),
            target_audience: "Business Executives".to_owned(),
        }
    }

    #[test]
    fn test_six_recommendations() {
        let set = generate_recommendations(&sample());
        let ids: Vec<&str> = set.recommendations.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["rec-1", "rec-2", "rec-3", "rec-4", "rec-5", "rec-6"]);
        assert_eq!(set.metadata.total_generated, 6);
        assert_eq!(set.metadata.based_on, sample());
        assert!(set.recommendations.iter().all(|r| r.colors.len() == 5));
    }

    #[test]
    fn test_descriptions_rotate() {
        let set = generate_recommendations(&sample());
        let descriptions: Vec<&str> = set
            .recommendations
            .iter()
            .map(|r| r.description.as_str())
            .collect();
        assert_eq!(
            descriptions,
            vec![
                "A trustworthy design perfect for business executives",
                "Classic aesthetics with clean & simple layout approach",
                "Optimized for company website with professional appeal",
                "Clean and intuitive design following classic principles",
                "Engaging interface designed for business executives users",
                "Trustworthy atmosphere with blue color scheme",
            ]
        );
    }

    #[test]
    fn test_tags_and_fonts() {
        let set = generate_recommendations(&sample());
        let first = &set.recommendations[0];
        assert_eq!(first.tags, vec!["classic", "trustworthy", "blue", "clean", "business"]);
        assert_eq!(first.fonts.primary, "Playfair Display");
        assert_eq!(set.recommendations[5].name, "Classic Trustworthy Design 6");
    }

    #[test]
    fn test_unknown_color_falls_back_to_neutral() {
        let design = DesignData {
            color_preference: "Chartreuse".to_owned(),
            ..sample()
        };
        let set = generate_recommendations(&design);
        assert_eq!(set.recommendations[0].colors[0], "#1F2937");
    }

    #[test]
    fn test_json_shape() {
        let set = generate_recommendations(&sample());
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["metadata"]["totalGenerated"], 6);
        assert_eq!(json["metadata"]["basedOn"]["targetAudience"], "Business Executives");
        assert_eq!(json["recommendations"][1]["fonts"]["secondary"], "Work Sans");
    }
}
