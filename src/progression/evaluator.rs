//! Answer state for the exercise currently on screen.
//!
//! ```text
//! Unanswered --submit--> Submitted(correct) --reset--> Unanswered
//! ```
//!
//! The evaluator never moves to another exercise; advancing is the
//! session's decision.

use crate::domain::Exercise;
use crate::error::ProgressionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerState {
    Unanswered { selected: Option<String> },
    Submitted { selected: String, correct: bool },
}

#[derive(Debug, Clone)]
pub struct ExerciseEvaluator {
    exercise: Exercise,
    state: AnswerState,
}

impl ExerciseEvaluator {
    pub fn new(exercise: Exercise) -> Self {
        Self {
            exercise,
            state: AnswerState::Unanswered { selected: None },
        }
    }

    /// Select an option, replacing any earlier selection.
    ///
    /// Ignored once the answer is submitted; returns whether it took effect.
    pub fn select(&mut self, option_id: &str) -> bool {
        match &mut self.state {
            AnswerState::Unanswered { selected } => {
                *selected = Some(option_id.to_string());
                true
            }
            AnswerState::Submitted { .. } => false,
        }
    }

    /// Evaluate the selection and lock it in.
    ///
    /// Without a selection this is a validation failure, distinct from a
    /// wrong answer, and nothing changes.
    pub fn submit(&mut self) -> Result<bool, ProgressionError> {
        let selected = match &self.state {
            AnswerState::Submitted { .. } => return Err(ProgressionError::AlreadySubmitted),
            AnswerState::Unanswered { selected: None } => {
                return Err(ProgressionError::NothingSelected);
            }
            AnswerState::Unanswered {
                selected: Some(selected),
            } => selected.clone(),
        };

        let correct = self.exercise.evaluate(&selected)?;
        tracing::debug!(
            "Exercise {} answered with {}: {}",
            self.exercise.id,
            selected,
            if correct { "correct" } else { "incorrect" }
        );
        self.state = AnswerState::Submitted { selected, correct };
        Ok(correct)
    }

    /// Clear the submitted answer so the same exercise can be tried again.
    pub fn reset(&mut self) -> Result<(), ProgressionError> {
        match self.state {
            AnswerState::Submitted { .. } => {
                self.state = AnswerState::Unanswered { selected: None };
                Ok(())
            }
            AnswerState::Unanswered { .. } => Err(ProgressionError::NotSubmitted),
        }
    }

    pub fn exercise(&self) -> &Exercise {
        &self.exercise
    }

    pub fn state(&self) -> &AnswerState {
        &self.state
    }

    pub fn selected(&self) -> Option<&str> {
        match &self.state {
            AnswerState::Unanswered { selected } => selected.as_deref(),
            AnswerState::Submitted { selected, .. } => Some(selected),
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.state, AnswerState::Submitted { .. })
    }

    /// Correctness of the submitted answer, `None` before submission.
    pub fn outcome(&self) -> Option<bool> {
        match self.state {
            AnswerState::Submitted { correct, .. } => Some(correct),
            AnswerState::Unanswered { .. } => None,
        }
    }

    /// Explanation to show, only after submission.
    pub fn feedback(&self) -> Option<&str> {
        if self.is_submitted() {
            self.exercise.explanation.as_deref()
        } else {
            None
        }
    }
}
