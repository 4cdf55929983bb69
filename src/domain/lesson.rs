//! Lesson records and their content sections.

use serde::{Deserialize, Serialize};

use super::exercise::Exercise;

/// Where a lesson stands for the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonStatus {
    Completed,
    Available,
    /// Listed in the catalog but cannot be opened yet
    Locked,
}

impl LessonStatus {
    pub const ALL: [LessonStatus; 3] = [Self::Completed, Self::Available, Self::Locked];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Available => "available",
            Self::Locked => "locked",
        }
    }
}

impl std::fmt::Display for LessonStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LessonStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" => Ok(Self::Completed),
            "available" => Ok(Self::Available),
            "locked" => Ok(Self::Locked),
            _ => Err(format!("Invalid lesson status: {}", s)),
        }
    }
}

/// Difficulty tier of a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(format!("Invalid difficulty: {}", s)),
        }
    }
}

/// What a content section presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Plain reading text
    Text,
    /// Text paired with a pronunciation clip
    Audio,
    /// Placeholder announcing the exercises that follow
    #[serde(rename = "exercise")]
    ExercisePrompt,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Audio => "audio",
            Self::ExercisePrompt => "exercise",
        }
    }
}

/// One step of sequential lesson material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSection {
    /// Unique within the lesson
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub body: String,
    #[serde(default)]
    pub translation: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
}

impl ContentSection {
    pub fn has_translation(&self) -> bool {
        self.translation.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Audio clip to load while this section is shown.
    ///
    /// Only audio sections play sound; a stray `audio_url` on a text section is ignored.
    pub fn audio_cue(&self) -> Option<&str> {
        match self.kind {
            SectionKind::Audio => self.audio_url.as_deref(),
            SectionKind::Text | SectionKind::ExercisePrompt => None,
        }
    }
}

/// Titled, ordered lesson material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonContent {
    pub title: String,
    #[serde(default)]
    pub sections: Vec<ContentSection>,
}

/// A unit of learning content plus its exercises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    pub status: LessonStatus,
    pub difficulty: Difficulty,
    /// Estimated length in minutes
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    pub content: LessonContent,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl Lesson {
    pub fn sections(&self) -> &[ContentSection] {
        &self.content.sections
    }

    pub fn section(&self, index: usize) -> Option<&ContentSection> {
        self.content.sections.get(index)
    }

    pub fn exercise(&self, index: usize) -> Option<&Exercise> {
        self.exercises.get(index)
    }

    pub fn is_completed(&self) -> bool {
        self.status == LessonStatus::Completed
    }

    pub fn is_locked(&self) -> bool {
        self.status == LessonStatus::Locked
    }
}
