//! Rule-based narrative recommendation used when no model is available.

use serde::{Deserialize, Serialize};

/// Selections from the recommendation form. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selections {
    pub mood: Option<String>,
    pub color_pref: Option<String>,
    pub style: Option<String>,
    pub audience: Option<String>,
    /// `"Yes"` adds the premium feature list.
    pub premium: Option<String>,
    pub description: Option<String>,
}

fn color_phrase(color: &str) -> Option<&'static str> {
    Some(match color {
        "Blue" => "professional blue palette that conveys trust and reliability",
        "Purple" => "creative purple scheme that suggests innovation and luxury",
        "Green" => "natural green palette that represents growth and harmony",
        "Orange" => "energetic orange scheme that creates enthusiasm and warmth",
        "Red" => "bold red palette that demands attention and conveys urgency",
        "Neutral" => "timeless neutral colors that provide versatility and elegance",
        _ => return None,
    })
}

fn style_phrase(style: &str) -> Option<&'static str> {
    Some(match style {
        "Clean" => "clean, minimalist layout with plenty of white space",
        "Grid-based" => "structured grid system that organizes content systematically",
        "Traditional" => "classic layout approach with familiar navigation patterns",
        "Contemporary" => "modern design elements with current web standards",
        "Card-based" => "card-based interface that segments information clearly",
        _ => return None,
    })
}

fn mood_phrase(mood: &str) -> Option<&'static str> {
    Some(match mood {
        "Playful" => "incorporate rounded corners, vibrant accents, and interactive elements",
        "Minimalist" => "embrace simplicity with clean lines and essential elements only",
        "Bold" => "use strong typography, high contrast, and statement design elements",
        "Elegant" => "employ sophisticated typography and refined visual hierarchy",
        "Modern" => "integrate contemporary design trends and cutting-edge aesthetics",
        _ => return None,
    })
}

fn audience_phrase(audience: &str) -> Option<&'static str> {
    Some(match audience {
        "Tech professionals" => {
            "Focus on functionality, clear information architecture, and performance indicators"
        }
        "Creative/artists" => {
            "Emphasize visual storytelling, portfolio showcases, and creative freedom"
        }
        "Business" => {
            "Prioritize credibility, clear value propositions, and professional appearance"
        }
        "General public" => "Ensure accessibility, intuitive navigation, and broad appeal",
        "Young adults" => {
            "Include social features, mobile-first design, and engaging interactions"
        }
        _ => return None,
    })
}

const PREMIUM_FEATURES: &str = "\n\n**Premium Features:**\n\
    - Advanced animations and micro-interactions\n\
    - Custom illustrations and graphics\n\
    - Performance optimization\n\
    - Advanced analytics integration\n\
    - Multi-device testing and optimization";

const NEXT_STEPS: &str = "\n\n**Next Steps:**\n\
    1. Create wireframes based on these recommendations\n\
    2. Develop a comprehensive style guide\n\
    3. Test the design with your target audience\n\
    4. Iterate based on feedback and analytics";

/// Selection value, treating an empty string as absent.
fn field(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

/// Assemble a markdown recommendation from form selections.
///
/// Unknown selection values get a generic phrase rather than being
/// dropped. Empty strings count as absent.
#[must_use]
pub fn fallback_recommendation(selections: &Selections) -> String {
    let mut out = String::from("Based on your preferences, here's a tailored design recommendation:\n\n");

    if let Some(description) = field(selections.description.as_ref()) {
        out.push_str(&format!(
            "**Project Overview:**\nFor your {}, ",
            description.to_lowercase()
        ));
    }

    if let Some(color) = field(selections.color_pref.as_ref()) {
        let phrase = color_phrase(color).unwrap_or("carefully chosen color scheme");
        out.push_str(&format!("I recommend using a {phrase}. "));
    }

    if let Some(style) = field(selections.style.as_ref()) {
        let phrase = style_phrase(style).unwrap_or("well-structured approach");
        out.push_str(&format!("The layout should follow a {phrase}. "));
    }

    let mood = field(selections.mood.as_ref());
    if let Some(mood) = mood {
        let phrase = mood_phrase(mood).unwrap_or("consider appropriate design elements");
        out.push_str(&format!("To achieve a {} mood, {phrase}. ", mood.to_lowercase()));
    }

    if let Some(audience) = field(selections.audience.as_ref()) {
        let phrase =
            audience_phrase(audience).unwrap_or("Design with your specific audience needs in mind");
        out.push_str(&format!("\n\n**Target Audience Considerations:**\n{phrase}. "));
    }

    if field(selections.premium.as_ref()) == Some("Yes") {
        out.push_str(PREMIUM_FEATURES);
    }

    let aesthetic = mood.map_or_else(|| "chosen".to_owned(), str::to_lowercase);
    out.push_str(&format!(
        "\n\n**Typography:**\nUse clean, readable fonts that complement your {aesthetic} aesthetic. \
         Consider font pairing for hierarchy and emphasis."
    ));

    out.push_str(NEXT_STEPS);
    tracing::debug!(len = out.len(), "Built fallback recommendation");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn some(value: &str) -> Option<String> {
        Some(value.to_owned())
    }

    #[test]
    fn test_empty_selections() {
        let text = fallback_recommendation(&Selections::default());
        assert_eq!(
            text,
            "Based on your preferences, here's a tailored design recommendation:\n\n\
             \n\n**Typography:**\nUse clean, readable fonts that complement your chosen aesthetic. \
             Consider font pairing for hierarchy and emphasis.\
             \n\n**Next Steps:**\n\
             1. Create wireframes based on these recommendations\n\
             2. Develop a comprehensive style guide\n\
             3. Test the design with your target audience\n\
             4. Iterate based on feedback and analytics"
        );
    }

    #[test]
    fn test_full_selections() {
        let selections = Selections {
            mood: some("Elegant"),
            color_pref: some("Purple"),
            style: some("Card-based"),
            audience: some("Business"),
            premium: some("Yes"),
            description: some("Photography Portfolio"),
        };
        let text = fallback_recommendation(&selections);

        assert!(text.contains(
            "**Project Overview:**\nFor your photography portfolio, I recommend using a creative purple scheme"
        ));
        assert!(text.contains("The layout should follow a card-based interface"));
        assert!(text.contains(
            "To achieve a elegant mood, employ sophisticated typography and refined visual hierarchy. "
        ));
        assert!(text.contains(
            "**Target Audience Considerations:**\nPrioritize credibility, clear value propositions"
        ));
        assert!(text.contains("**Premium Features:**\n- Advanced animations"));
        assert!(text.contains("complement your elegant aesthetic"));
        assert!(text.ends_with("4. Iterate based on feedback and analytics"));
    }

    #[test]
    fn test_unknown_values_use_generic_phrases() {
        let selections = Selections {
            mood: some("Moody"),
            color_pref: some("Teal"),
            style: some("Brutalist"),
            audience: some("Pets"),
            premium: some("No"),
            ..Selections::default()
        };
        let text = fallback_recommendation(&selections);

        assert!(text.contains("I recommend using a carefully chosen color scheme. "));
        assert!(text.contains("The layout should follow a well-structured approach. "));
        assert!(text.contains("To achieve a moody mood, consider appropriate design elements. "));
        assert!(text.contains("Design with your specific audience needs in mind. "));
        assert!(!text.contains("Premium Features"));
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let selections = Selections {
            mood: some(""),
            description: some(""),
            ..Selections::default()
        };
        assert_eq!(
            fallback_recommendation(&selections),
            fallback_recommendation(&Selections::default())
        );
    }
}
