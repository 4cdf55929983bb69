//! Exercise definitions and answer evaluation.

use serde::{Deserialize, Serialize};

use crate::error::ProgressionError;

/// Type of exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseKind {
    /// Pick the one correct option
    MultipleChoice,
    /// Declared by content authors, no evaluation rules yet
    FillBlank,
    /// Declared by content authors, no evaluation rules yet
    Matching,
}

impl ExerciseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple-choice",
            Self::FillBlank => "fill-blank",
            Self::Matching => "matching",
        }
    }
}

impl std::fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A selectable answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseOption {
    /// Unique within the exercise
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub translation: Option<String>,
    #[serde(default)]
    pub correct: bool,
}

/// A single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique within the lesson
    pub id: String,
    pub question: String,
    #[serde(rename = "type")]
    pub kind: ExerciseKind,
    #[serde(default)]
    pub options: Vec<ExerciseOption>,
    /// Shown after an answer is submitted
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
}

impl Exercise {
    pub fn option(&self, option_id: &str) -> Option<&ExerciseOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    pub fn correct_options(&self) -> impl Iterator<Item = &ExerciseOption> {
        self.options.iter().filter(|o| o.correct)
    }

    /// Decide whether picking `option_id` answers the exercise.
    ///
    /// An id that matches no option counts as a wrong answer.
    pub fn evaluate(&self, option_id: &str) -> Result<bool, ProgressionError> {
        match self.kind {
            ExerciseKind::MultipleChoice => Ok(self.option(option_id).is_some_and(|o| o.correct)),
            ExerciseKind::FillBlank | ExerciseKind::Matching => {
                Err(ProgressionError::UnsupportedExercise(self.kind))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greeting() -> Exercise {
        serde_json::from_str(
            r#"{
                "id": "ex-1",
                "question": "What does \"Bonjour\" mean?",
                "type": "multiple-choice",
                "options": [
                    {"id": "a", "text": "Good night", "correct": false},
                    {"id": "b", "text": "Hello / Good day", "translation": "Bonjour", "correct": true},
                    {"id": "c", "text": "Goodbye"}
                ],
                "explanation": "\"Bonjour\" is the standard French greeting used during the day."
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_exercise_json() {
        let ex = greeting();
        assert_eq!(ex.kind, ExerciseKind::MultipleChoice);
        assert_eq!(ex.options.len(), 3);
        assert!(!ex.options[2].correct);
        assert_eq!(ex.correct_options().count(), 1);
        assert!(ex.audio_url.is_none());
    }

    #[test]
    fn test_evaluate_multiple_choice() {
        let ex = greeting();
        assert_eq!(ex.evaluate("b"), Ok(true));
        assert_eq!(ex.evaluate("a"), Ok(false));
        assert_eq!(ex.evaluate("zz"), Ok(false));
    }

    #[test]
    fn test_evaluate_unsupported_kinds() {
        let mut ex = greeting();
        ex.kind = ExerciseKind::FillBlank;
        assert_eq!(
            ex.evaluate("b"),
            Err(ProgressionError::UnsupportedExercise(ExerciseKind::FillBlank))
        );

        ex.kind = ExerciseKind::Matching;
        assert!(ex.evaluate("b").is_err());
    }

    #[test]
    fn test_kind_tags() {
        let kind: ExerciseKind = serde_json::from_str("\"fill-blank\"").unwrap();
        assert_eq!(kind, ExerciseKind::FillBlank);
        assert_eq!(ExerciseKind::Matching.to_string(), "matching");
    }
}
