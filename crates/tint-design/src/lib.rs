//! Design questionnaire and rule-based recommendations.
//!
//! Everything here is deterministic and works offline: a fixed six-step
//! questionnaire, keyword inference of design parameters from a prompt,
//! a templated narrative recommendation, and palette/font
//! recommendation sets.

mod narrative;
mod palette;
mod params;
mod questionnaire;
mod recommend;

pub use narrative::{Selections, fallback_recommendation};
pub use palette::{FontPair, Palette, color_palettes, font_pairs};
pub use params::{Audience, ColorPref, DesignParams, LayoutPref, ProjectType, extract_design_parameters};
pub use questionnaire::{
    COMPLETE_MESSAGE, DesignData, DesignField, INTRO_MESSAGE, QUESTIONS, Question,
    QuestionnaireSession,
};
pub use recommend::{
    DesignRecommendation, RecommendationMetadata, RecommendationSet, generate_recommendations,
};

/// Errors from [`QuestionnaireSession::answer`].
#[derive(Debug, thiserror::Error)]
pub enum DesignError {
    #[error("Answer is empty")]
    EmptyAnswer,

    #[error("Option {choice} is out of range (1-{max})")]
    OptionOutOfRange { choice: usize, max: usize },

    #[error("Questionnaire is already complete")]
    QuestionnaireComplete,
}
