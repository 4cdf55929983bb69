//! Test fixtures.
//!
//! Builds small, well-formed lessons without going through the embedded
//! catalog, plus an audio player that records what it was asked to do.

use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::{
    ContentSection, Difficulty, Exercise, ExerciseKind, ExerciseOption, Lesson, LessonContent,
    LessonStatus, SectionKind,
};
use crate::progression::AudioPlayer;

/// Available beginner lesson with `sections` content steps and `exercises`
/// multiple-choice questions.
///
/// Section 0 is text with a translation, the following ones are audio
/// (`<lesson>/s<n>.mp3`). Every exercise has options `a`, `b`, `c` with `a`
/// correct.
pub fn lesson(id: &str, sections: usize, exercises: usize) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: format!("Lesson {}", id),
        description: format!("Fixture lesson {}", id),
        image: None,
        status: LessonStatus::Available,
        difficulty: Difficulty::Beginner,
        duration_minutes: 10,
        content: LessonContent {
            title: format!("Content of {}", id),
            sections: (0..sections).map(|n| section(id, n)).collect(),
        },
        exercises: (0..exercises).map(|n| exercise(n + 1)).collect(),
    }
}

fn section(lesson_id: &str, n: usize) -> ContentSection {
    if n == 0 {
        ContentSection {
            id: "intro".to_string(),
            kind: SectionKind::Text,
            body: "Bonjour!".to_string(),
            translation: Some("Hello!".to_string()),
            audio_url: None,
        }
    } else {
        ContentSection {
            id: format!("s{}", n),
            kind: SectionKind::Audio,
            body: format!("Phrase {}", n),
            translation: None,
            audio_url: Some(format!("{}/s{}.mp3", lesson_id, n)),
        }
    }
}

fn exercise(n: usize) -> Exercise {
    let option = |id: &str, correct: bool| ExerciseOption {
        id: id.to_string(),
        text: format!("Answer {}", id),
        translation: None,
        correct,
    };

    Exercise {
        id: format!("ex-{}", n),
        question: format!("Question {}", n),
        kind: ExerciseKind::MultipleChoice,
        options: vec![option("a", true), option("b", false), option("c", false)],
        explanation: Some(format!("Explanation {}", n)),
        audio_url: None,
    }
}

/// Same as [`lesson`] with a given status and difficulty.
pub fn lesson_with(id: &str, status: LessonStatus, difficulty: Difficulty) -> Lesson {
    Lesson {
        status,
        difficulty,
        ..lesson(id, 1, 1)
    }
}

/// What a [`RecordingAudio`] was told to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioCall {
    Load(String),
    Stop,
}

/// Audio player that appends every call to a shared log.
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    calls: Arc<Mutex<Vec<AudioCall>>>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the calls so far.
    pub fn calls(&self) -> Vec<AudioCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Clip currently loaded, if the last call was a load.
    pub fn loaded(&self) -> Option<String> {
        match self.calls().last() {
            Some(AudioCall::Load(url)) => Some(url.clone()),
            _ => None,
        }
    }

    fn push(&self, call: AudioCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

impl AudioPlayer for RecordingAudio {
    fn load(&mut self, url: &str) {
        self.push(AudioCall::Load(url.to_string()));
    }

    fn stop(&mut self) {
        self.push(AudioCall::Stop);
    }
}
