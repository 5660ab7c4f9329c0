//! `tint questionnaire` command implementation.

use std::io::BufRead;

use clap::Args;
use tint_design::{
    COMPLETE_MESSAGE, DesignData, DesignError, INTRO_MESSAGE, QuestionnaireSession,
    RecommendationSet,
};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the questionnaire command.
#[derive(Args)]
pub(crate) struct QuestionnaireArgs {
    /// Print the recommendation set as JSON.
    #[arg(long)]
    json: bool,
}

impl QuestionnaireArgs {
    /// Ask each question on stderr, read answers from stdin, then print
    /// recommendations on stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if stdin closes before the questionnaire completes.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let design = run_session(std::io::stdin().lock(), &output)?;
        output.success(COMPLETE_MESSAGE);

        let set = tint_design::generate_recommendations(&design);
        if self.json {
            output.json(&set)
        } else {
            output.data(&summarize(&set))
        }
    }
}

/// Drive a session to completion from line-based input.
///
/// Invalid answers are reported and the same question is asked again.
fn run_session(input: impl BufRead, output: &Output) -> Result<DesignData, CliError> {
    let mut session = QuestionnaireSession::new();
    let mut lines = input.lines();
    output.highlight(INTRO_MESSAGE);

    while let Some(question) = session.current() {
        output.info(&format!("\n{}", question.prompt));
        for (i, option) in question.options.iter().enumerate() {
            output.info(&format!("  {}. {option}", i + 1));
        }

        let Some(line) = lines.next() else {
            return Err(CliError::Validation(format!(
                "Input ended after {} of {} answers",
                session.position(),
                tint_design::QUESTIONS.len()
            )));
        };
        match session.answer(&line?) {
            Ok(_) => {}
            Err(err @ (DesignError::EmptyAnswer | DesignError::OptionOutOfRange { .. })) => {
                output.warning(&err.to_string());
            }
            Err(err) => return Err(err.into()),
        }
    }

    session
        .design_data()
        .cloned()
        .ok_or_else(|| CliError::Validation("Questionnaire incomplete".to_owned()))
}

fn summarize(set: &RecommendationSet) -> String {
    set.recommendations
        .iter()
        .map(|rec| {
            format!(
                "{}\n  Colors: {}\n  Fonts: {} / {}\n  {}",
                rec.name,
                rec.colors.join(", "),
                rec.fonts.primary,
                rec.fonts.secondary,
                rec.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn test_session_from_lines() {
        let input = Cursor::new("Portfolio\n1\nModern\n\n9\nFriendly\n4\n6\n");

        let design = run_session(input, &Output::new()).unwrap();

        assert_eq!(design.project_description, "Portfolio");
        assert_eq!(design.color_preference, "Blue (Professional & Trust)");
        assert_eq!(design.theme, "Modern");
        assert_eq!(design.mood, "Friendly");
        assert_eq!(design.style, "Card-based");
        assert_eq!(design.target_audience, "Enterprises");
    }

    #[test]
    fn test_session_input_ends_early() {
        let input = Cursor::new("Blog\n2\n");

        let err = run_session(input, &Output::new()).unwrap_err();

        assert!(matches!(err, CliError::Validation(_)));
        assert!(err.to_string().contains("2 of 6"));
    }

    #[test]
    fn test_summarize() {
        let design = DesignData {
            theme: "Classic".to_owned(),
            mood: "Elegant".to_owned(),
            ..DesignData::default()
        };
        let summary = summarize(&tint_design::generate_recommendations(&design));

        assert!(summary.starts_with(
            "Classic Elegant Design 1\n  Colors: #1F2937, #374151, #4B5563, #6B7280, #9CA3AF\n  Fonts: Playfair Display / Source Sans Pro"
        ));
        assert_eq!(summary.matches("Classic Elegant Design").count(), 6);
    }
}
