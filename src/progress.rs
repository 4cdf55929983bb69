//! Completion statistics over a set of lessons.
//!
//! Read-only: nothing here mutates the lessons it is given.

use crate::domain::{Difficulty, Lesson, LessonStatus};

/// Completed / total counts for a group of lessons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Completion {
  pub completed: usize,
  pub total: usize,
}

impl Completion {
  pub fn count<'a>(lessons: impl IntoIterator<Item = &'a Lesson>) -> Self {
    lessons.into_iter().fold(Self::default(), |acc, lesson| Self {
      completed: acc.completed + usize::from(lesson.status == LessonStatus::Completed),
      total: acc.total + 1,
    })
  }

  /// Percentage in 0..=100, 0 for an empty group
  pub fn rate(&self) -> f64 {
    if self.total > 0 {
      100.0 * self.completed as f64 / self.total as f64
    } else {
      0.0
    }
  }

  pub fn percent(&self) -> u32 {
    display_percent(self.completed, self.total)
  }
}

/// Share of lessons with status `completed`, as a percentage.
pub fn completion_rate<'a>(lessons: impl IntoIterator<Item = &'a Lesson>) -> f64 {
  Completion::count(lessons).rate()
}

/// Same as [`completion_rate`], restricted to one difficulty.
pub fn completion_rate_by_difficulty<'a>(
  lessons: impl IntoIterator<Item = &'a Lesson>,
  difficulty: Difficulty,
) -> f64 {
  Completion::count(lessons.into_iter().filter(|l| l.difficulty == difficulty)).rate()
}

/// `value / total` as a whole percentage, rounded half away from zero.
pub fn display_percent(value: usize, total: usize) -> u32 {
  if total == 0 {
    return 0;
  }
  (100.0 * value as f64 / total as f64).round() as u32
}

/// Numbers for the profile page
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSummary {
  pub overall: Completion,
  pub by_difficulty: Vec<(Difficulty, Completion)>,
}

impl ProgressSummary {
  pub fn from_lessons(lessons: &[Lesson]) -> Self {
    let by_difficulty = Difficulty::ALL
      .iter()
      .map(|d| (*d, Completion::count(lessons.iter().filter(|l| l.difficulty == *d))))
      .collect();

    Self {
      overall: Completion::count(lessons),
      by_difficulty,
    }
  }

  pub fn for_difficulty(&self, difficulty: Difficulty) -> Completion {
    self
      .by_difficulty
      .iter()
      .find(|(d, _)| *d == difficulty)
      .map(|(_, c)| *c)
      .unwrap_or_default()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::lesson_with;

  fn lessons() -> Vec<Lesson> {
    vec![
      lesson_with("a", LessonStatus::Completed, Difficulty::Beginner),
      lesson_with("b", LessonStatus::Available, Difficulty::Beginner),
      lesson_with("c", LessonStatus::Locked, Difficulty::Beginner),
      lesson_with("d", LessonStatus::Completed, Difficulty::Intermediate),
    ]
  }

  #[test]
  fn test_empty_is_zero() {
    let none: Vec<Lesson> = Vec::new();
    assert_eq!(completion_rate(&none), 0.0);
    assert_eq!(completion_rate_by_difficulty(&none, Difficulty::Advanced), 0.0);
  }

  #[test]
  fn test_all_completed_is_hundred() {
    let all = vec![
      lesson_with("a", LessonStatus::Completed, Difficulty::Beginner),
      lesson_with("b", LessonStatus::Completed, Difficulty::Advanced),
    ];
    assert_eq!(completion_rate(&all), 100.0);
  }

  #[test]
  fn test_mixed_rates() {
    let lessons = lessons();
    assert_eq!(completion_rate(&lessons), 50.0);
    let beginner = completion_rate_by_difficulty(&lessons, Difficulty::Beginner);
    assert!((beginner - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(completion_rate_by_difficulty(&lessons, Difficulty::Intermediate), 100.0);
    assert_eq!(completion_rate_by_difficulty(&lessons, Difficulty::Advanced), 0.0);
  }

  #[test]
  fn test_display_percent() {
    assert_eq!(display_percent(1, 3), 33);
    assert_eq!(display_percent(2, 3), 67);
    assert_eq!(display_percent(5, 0), 0);
    assert_eq!(display_percent(1, 2), 50);
  }

  #[test]
  fn test_summary() {
    let summary = ProgressSummary::from_lessons(&lessons());
    assert_eq!(summary.overall, Completion { completed: 2, total: 4 });
    assert_eq!(summary.overall.percent(), 50);
    assert_eq!(
      summary.for_difficulty(Difficulty::Beginner),
      Completion { completed: 1, total: 3 }
    );
    assert_eq!(summary.for_difficulty(Difficulty::Advanced).percent(), 0);
    assert_eq!(summary.by_difficulty.len(), 3);
  }

  #[test]
  fn test_builtin_catalog_progress() {
    let catalog = crate::content::Catalog::builtin().unwrap();
    // nothing in the shipped catalog is completed yet
    assert_eq!(completion_rate(catalog.all()), 0.0);
    assert_eq!(Completion::count(catalog.all()).total, 5);
  }
}
