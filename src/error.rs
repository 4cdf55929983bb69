//! Error types shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ExerciseKind;

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate lesson id: {0}")]
    DuplicateLesson(String),
}

/// Errors raised by content walking and exercise evaluation.
///
/// All of them are recoverable by the learner; none leave the session in a
/// changed state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProgressionError {
    #[error("lesson not found: {0}")]
    NotFound(String),
    #[error("lesson {0} is locked")]
    Locked(String),
    #[error("lesson {0} is unavailable for practice")]
    Unavailable(String),
    #[error("action not allowed while {0}")]
    WrongPhase(&'static str),
    #[error("please select an option first")]
    NothingSelected,
    #[error("answer already submitted")]
    AlreadySubmitted,
    #[error("no answer has been submitted")]
    NotSubmitted,
    #[error("{0} exercises are not supported yet")]
    UnsupportedExercise(ExerciseKind),
    #[error("no exercise advance is pending")]
    NoPendingAdvance,
    #[error("no async runtime to schedule the next exercise on")]
    NoRuntime,
}
