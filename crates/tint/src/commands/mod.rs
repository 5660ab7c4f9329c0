//! CLI command implementations.

mod extract;
mod html;
mod input;
mod palettes;
mod questionnaire;
mod recommend;
mod sanitize;
mod sections;
mod text;
mod validate;

pub(crate) use extract::ExtractArgs;
pub(crate) use html::HtmlArgs;
pub(crate) use palettes::PalettesArgs;
pub(crate) use questionnaire::QuestionnaireArgs;
pub(crate) use recommend::RecommendArgs;
pub(crate) use sanitize::SanitizeArgs;
pub(crate) use sections::SectionsArgs;
pub(crate) use text::{ChatArgs, PlainArgs};
pub(crate) use validate::ValidateArgs;
