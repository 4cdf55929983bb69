pub mod exercise;
pub mod lesson;

pub use exercise::{Exercise, ExerciseKind, ExerciseOption};
pub use lesson::{ContentSection, Difficulty, Lesson, LessonContent, LessonStatus, SectionKind};
