//! The design questionnaire and its answer-collecting session.

use serde::{Deserialize, Serialize};

use crate::DesignError;

/// Message shown when a questionnaire starts.
pub const INTRO_MESSAGE: &str = "Great! I'll help you create the perfect design. \
     Let me ask you a few questions to understand your needs better.";

/// Message shown once every question is answered.
pub const COMPLETE_MESSAGE: &str =
    "Perfect! I have all the information I need. Let me generate some design recommendations for you.";

/// Field of [`DesignData`] filled by a question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DesignField {
    ProjectDescription,
    ColorPreference,
    Theme,
    Mood,
    Style,
    TargetAudience,
}

/// One questionnaire step.
#[derive(Debug)]
pub struct Question {
    pub field: DesignField,
    pub prompt: &'static str,
    /// Suggested answers; free text is accepted too.
    pub options: &'static [&'static str],
}

/// Questions in the order they are asked.
pub const QUESTIONS: [Question; 6] = [
    Question {
        field: DesignField::ProjectDescription,
        prompt: "What type of project are you working on? (e.g., company website, portfolio, e-commerce site)",
        options: &[
            "Company Website",
            "Portfolio",
            "E-commerce Site",
            "Landing Page",
            "Blog",
            "Other",
        ],
    },
    Question {
        field: DesignField::ColorPreference,
        prompt: "What color preferences do you have in mind?",
        options: &[
            "Blue (Professional & Trust)",
            "Purple (Creative & Luxury)",
            "Green (Natural & Growth)",
            "Orange (Energetic & Warm)",
            "Red (Bold & Urgent)",
            "Neutral (Timeless & Elegant)",
        ],
    },
    Question {
        field: DesignField::Theme,
        prompt: "What theme are you thinking of?",
        options: &["Modern", "Classic", "Minimalist", "Bold", "Elegant", "Playful"],
    },
    Question {
        field: DesignField::Mood,
        prompt: "What mood should your design convey?",
        options: &[
            "Professional",
            "Creative",
            "Friendly",
            "Trustworthy",
            "Innovative",
            "Sophisticated",
        ],
    },
    Question {
        field: DesignField::Style,
        prompt: "What style approach do you prefer?",
        options: &[
            "Clean & Simple",
            "Rich & Detailed",
            "Grid-based",
            "Card-based",
            "One-page",
            "Multi-section",
        ],
    },
    Question {
        field: DesignField::TargetAudience,
        prompt: "Who is your target audience?",
        options: &[
            "Tech Professionals",
            "Creative/Artists",
            "Business Executives",
            "General Public",
            "Young Adults",
            "Enterprises",
        ],
    },
];

/// Answers collected by the questionnaire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesignData {
    pub project_description: String,
    pub color_preference: String,
    pub theme: String,
    pub mood: String,
    pub style: String,
    pub target_audience: String,
}

impl DesignData {
    #[must_use]
    pub fn get(&self, field: DesignField) -> &str {
        match field {
            DesignField::ProjectDescription => &self.project_description,
            DesignField::ColorPreference => &self.color_preference,
            DesignField::Theme => &self.theme,
            DesignField::Mood => &self.mood,
            DesignField::Style => &self.style,
            DesignField::TargetAudience => &self.target_audience,
        }
    }

    pub fn set(&mut self, field: DesignField, value: String) {
        let slot = match field {
            DesignField::ProjectDescription => &mut self.project_description,
            DesignField::ColorPreference => &mut self.color_preference,
            DesignField::Theme => &mut self.theme,
            DesignField::Mood => &mut self.mood,
            DesignField::Style => &mut self.style,
            DesignField::TargetAudience => &mut self.target_audience,
        };
        *slot = value;
    }
}

/// Walks a user through [`QUESTIONS`] one answer at a time.
///
/// ```
/// use tint_design::QuestionnaireSession;
///
/// let mut session = QuestionnaireSession::new();
/// for answer in ["2", "1", "Modern", "Friendly", "4", "General Public"] {
///     session.answer(answer).unwrap();
/// }
/// let design = session.design_data().unwrap();
/// assert_eq!(design.project_description, "Portfolio");
/// assert_eq!(design.color_preference, "Blue (Professional & Trust)");
/// assert_eq!(design.style, "Card-based");
/// ```
#[derive(Debug, Default)]
pub struct QuestionnaireSession {
    answers: DesignData,
    index: usize,
}

impl QuestionnaireSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Question waiting for an answer, or `None` once complete.
    #[must_use]
    pub fn current(&self) -> Option<&'static Question> {
        QUESTIONS.get(self.index)
    }

    /// Zero-based index of the current question.
    #[must_use]
    pub fn position(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.index >= QUESTIONS.len()
    }

    /// Record an answer to the current question.
    ///
    /// A number selects one of the suggested options (1-based); anything
    /// else is stored verbatim. Returns the next question, if any.
    pub fn answer(&mut self, input: &str) -> Result<Option<&'static Question>, DesignError> {
        let question = self.current().ok_or(DesignError::QuestionnaireComplete)?;
        let value = resolve_answer(question, input)?;
        tracing::debug!(field = ?question.field, value = %value, "Recorded answer");
        self.answers.set(question.field, value);
        self.index += 1;
        Ok(self.current())
    }

    /// Collected answers, once every question has one.
    #[must_use]
    pub fn design_data(&self) -> Option<&DesignData> {
        self.is_complete().then_some(&self.answers)
    }
}

fn resolve_answer(question: &Question, input: &str) -> Result<String, DesignError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DesignError::EmptyAnswer);
    }
    match input.parse::<usize>() {
        Ok(choice) => question
            .options
            .get(choice.wrapping_sub(1))
            .map(|option| (*option).to_owned())
            .ok_or(DesignError::OptionOutOfRange {
                choice,
                max: question.options.len(),
            }),
        Err(_) => Ok(input.to_owned()),
    }
}
