//! Event types for profiling.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One JSONL record: when, what, and for timed scopes how long.
#[derive(Serialize)]
pub struct ProfileEvent {
    pub timestamp: DateTime<Utc>,
    pub event_type: EventType,
    /// Duration in microseconds (for timed events)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_us: Option<u64>,
}

impl ProfileEvent {
    pub fn new(event_type: EventType) -> Self {
        Self {
            timestamp: Utc::now(),
            event_type,
            duration_us: None,
        }
    }

    pub fn with_duration(event_type: EventType, duration: std::time::Duration) -> Self {
        Self {
            duration_us: Some(duration.as_micros() as u64),
            ..Self::new(event_type)
        }
    }
}

/// Types of events that can be logged.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventType {
    // === Profiling lifecycle ===
    SessionStart { session_id: String },
    SessionEnd {
        total_events: u64,
        lessons_completed: u64,
        answers_correct: u64,
        answers_incorrect: u64,
    },

    // === Catalog ===
    /// Catalog built and checked
    CatalogLoaded { lessons: usize, issues: usize },

    // === Progression ===
    LessonStarted { lesson_id: String },
    /// Content walker moved to another section
    SectionChanged { lesson_id: String, index: usize },
    ExerciseSubmitted {
        lesson_id: String,
        exercise_id: String,
        correct: bool,
    },
    LessonCompleted { lesson_id: String },

    // === Timed scope ===
    TimedScope { name: String },
}
