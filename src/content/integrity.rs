//! Load-time integrity checks for lesson data.
//!
//! Catalog data is hand-authored. Rather than silently marking every answer
//! wrong when an exercise has no correct option, problems are collected once
//! at load and the affected lesson is kept out of practice.

use std::collections::HashSet;

use thiserror::Error;

use crate::domain::{ExerciseKind, Lesson};

/// A data problem found in a single lesson.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityIssue {
    #[error("lesson {lesson} has no content sections")]
    NoContent { lesson: String },
    #[error("lesson {lesson} has a zero duration")]
    ZeroDuration { lesson: String },
    #[error("lesson {lesson} repeats section id {section}")]
    DuplicateSection { lesson: String, section: String },
    #[error("lesson {lesson} repeats exercise id {exercise}")]
    DuplicateExercise { lesson: String, exercise: String },
    #[error("exercise {lesson}/{exercise} repeats option id {option}")]
    DuplicateOption {
        lesson: String,
        exercise: String,
        option: String,
    },
    #[error("exercise {lesson}/{exercise} has no options")]
    NoOptions { lesson: String, exercise: String },
    #[error("exercise {lesson}/{exercise} marks {count} options correct, expected exactly one")]
    CorrectOptionCount {
        lesson: String,
        exercise: String,
        count: usize,
    },
}

impl IntegrityIssue {
    pub fn lesson_id(&self) -> &str {
        match self {
            Self::NoContent { lesson }
            | Self::ZeroDuration { lesson }
            | Self::DuplicateSection { lesson, .. }
            | Self::DuplicateExercise { lesson, .. }
            | Self::DuplicateOption { lesson, .. }
            | Self::NoOptions { lesson, .. }
            | Self::CorrectOptionCount { lesson, .. } => lesson,
        }
    }
}

/// Check one lesson, returning every issue found (empty when well formed).
pub fn check_lesson(lesson: &Lesson) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();
    let lesson_id = || lesson.id.clone();

    if lesson.content.sections.is_empty() {
        issues.push(IntegrityIssue::NoContent { lesson: lesson_id() });
    }
    if lesson.duration_minutes == 0 {
        issues.push(IntegrityIssue::ZeroDuration { lesson: lesson_id() });
    }

    for section in repeated(lesson.content.sections.iter().map(|s| s.id.as_str())) {
        issues.push(IntegrityIssue::DuplicateSection {
            lesson: lesson_id(),
            section: section.to_string(),
        });
    }
    for exercise in repeated(lesson.exercises.iter().map(|e| e.id.as_str())) {
        issues.push(IntegrityIssue::DuplicateExercise {
            lesson: lesson_id(),
            exercise: exercise.to_string(),
        });
    }

    for exercise in &lesson.exercises {
        for option in repeated(exercise.options.iter().map(|o| o.id.as_str())) {
            issues.push(IntegrityIssue::DuplicateOption {
                lesson: lesson_id(),
                exercise: exercise.id.clone(),
                option: option.to_string(),
            });
        }

        // fill-blank and matching have no evaluation rules to check against
        if exercise.kind != ExerciseKind::MultipleChoice {
            continue;
        }

        if exercise.options.is_empty() {
            issues.push(IntegrityIssue::NoOptions {
                lesson: lesson_id(),
                exercise: exercise.id.clone(),
            });
            continue;
        }

        let count = exercise.correct_options().count();
        if count != 1 {
            issues.push(IntegrityIssue::CorrectOptionCount {
                lesson: lesson_id(),
                exercise: exercise.id.clone(),
                count,
            });
        }
    }

    issues
}

/// Ids that appear more than once, each reported once in first-repeat order.
fn repeated<'a>(ids: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    ids.filter(|id| !seen.insert(*id) && reported.insert(*id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn test_well_formed_lesson_has_no_issues() {
        let lesson = testing::lesson("basics-1", 3, 2);
        assert!(check_lesson(&lesson).is_empty());
    }

    #[test]
    fn test_no_correct_option() {
        let mut lesson = testing::lesson("basics-1", 1, 1);
        for option in &mut lesson.exercises[0].options {
            option.correct = false;
        }

        let issues = check_lesson(&lesson);
        assert_eq!(
            issues,
            vec![IntegrityIssue::CorrectOptionCount {
                lesson: "basics-1".to_string(),
                exercise: "ex-1".to_string(),
                count: 0,
            }]
        );
    }

    #[test]
    fn test_two_correct_options() {
        let mut lesson = testing::lesson("basics-1", 1, 1);
        for option in &mut lesson.exercises[0].options {
            option.correct = true;
        }

        let issues = check_lesson(&lesson);
        assert!(matches!(
            issues.as_slice(),
            [IntegrityIssue::CorrectOptionCount { count, .. }] if *count == lesson.exercises[0].options.len()
        ));
    }

    #[test]
    fn test_duplicate_ids_reported_once() {
        let mut lesson = testing::lesson("basics-1", 3, 1);
        for section in &mut lesson.content.sections {
            section.id = "same".to_string();
        }
        lesson.exercises[0].options[1].id = "a".to_string();

        let issues = check_lesson(&lesson);
        assert_eq!(issues.len(), 2);
        assert!(issues.contains(&IntegrityIssue::DuplicateSection {
            lesson: "basics-1".to_string(),
            section: "same".to_string(),
        }));
        assert!(issues.contains(&IntegrityIssue::DuplicateOption {
            lesson: "basics-1".to_string(),
            exercise: "ex-1".to_string(),
            option: "a".to_string(),
        }));
    }

    #[test]
    fn test_empty_lesson() {
        let mut lesson = testing::lesson("empty", 0, 0);
        lesson.duration_minutes = 0;

        let issues = check_lesson(&lesson);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.lesson_id() == "empty"));
    }

    #[test]
    fn test_unsupported_kind_is_not_an_issue() {
        let mut lesson = testing::lesson("basics-1", 1, 1);
        lesson.exercises[0].kind = ExerciseKind::Matching;
        lesson.exercises[0].options.clear();

        assert!(check_lesson(&lesson).is_empty());
    }
}
