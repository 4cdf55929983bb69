//! The lesson catalog: an immutable, cheaply clonable collection of lessons.
//!
//! A catalog is built once (from the embedded default, a JSON file, or test
//! fixtures) and handed to whoever needs it. Lookups never mutate it, so
//! clones can be read from any number of tasks.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::integrity::{IntegrityIssue, check_lesson};
use crate::domain::{Difficulty, Lesson, LessonStatus};
use crate::error::CatalogError;

/// Default catalog shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Clone)]
pub struct Catalog {
    lessons: Arc<[Lesson]>,
    issues: Arc<[IntegrityIssue]>,
    unavailable: Arc<HashSet<String>>,
}

impl Catalog {
    /// Build a catalog, keeping definition order.
    ///
    /// Duplicate lesson ids are rejected outright. Other data problems are
    /// logged once here and the affected lessons are marked unavailable for
    /// practice.
    pub fn new(lessons: Vec<Lesson>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        for lesson in &lessons {
            if !ids.insert(lesson.id.as_str()) {
                return Err(CatalogError::DuplicateLesson(lesson.id.clone()));
            }
        }

        let issues: Vec<IntegrityIssue> = lessons.iter().flat_map(check_lesson).collect();
        for issue in &issues {
            tracing::warn!("Catalog integrity: {}", issue);
        }
        let unavailable: HashSet<String> =
            issues.iter().map(|i| i.lesson_id().to_string()).collect();

        tracing::info!(
            "Catalog ready: {} lessons, {} unavailable for practice",
            lessons.len(),
            unavailable.len()
        );
        crate::profile_log!(crate::profiling::EventType::CatalogLoaded {
            lessons: lessons.len(),
            issues: issues.len(),
        });

        Ok(Self {
            lessons: lessons.into(),
            issues: issues.into(),
            unavailable: Arc::new(unavailable),
        })
    }

    /// Parse a JSON array of lessons.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let lessons: Vec<Lesson> = serde_json::from_str(json)?;
        Self::new(lessons)
    }

    /// Load a JSON catalog file.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loading catalog from {}", path.display());
        Self::from_json(&json)
    }

    /// The catalog embedded in the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Exact match on lesson id. `None` is an ordinary outcome.
    pub fn find_by_id(&self, id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == id)
    }

    /// All lessons in definition order.
    pub fn all(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn by_status(&self, status: LessonStatus) -> Vec<&Lesson> {
        self.lessons.iter().filter(|l| l.status == status).collect()
    }

    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&Lesson> {
        self.lessons
            .iter()
            .filter(|l| l.difficulty == difficulty)
            .collect()
    }

    /// Lessons-page filter: optional difficulty, then a case- and
    /// accent-insensitive substring match on title or description.
    ///
    /// A blank query matches everything.
    pub fn search(&self, query: &str, difficulty: Option<Difficulty>) -> Vec<&Lesson> {
        let needle = fold(query.trim());

        self.lessons
            .iter()
            .filter(|l| difficulty.is_none_or(|d| l.difficulty == d))
            .filter(|l| {
                needle.is_empty()
                    || fold(&l.title).contains(&needle)
                    || fold(&l.description).contains(&needle)
            })
            .collect()
    }

    /// Whether the lesson passed the load-time integrity checks.
    pub fn is_practicable(&self, id: &str) -> bool {
        !self.unavailable.contains(id)
    }

    /// Every integrity issue found at load.
    pub fn issues(&self) -> &[IntegrityIssue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

/// Lowercase and strip diacritics ("Ça va" -> "ca va").
fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
