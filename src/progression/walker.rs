//! Sequential traversal of a lesson's content sections.

use std::sync::Arc;

use crate::domain::{ContentSection, Lesson};

/// Result of [`ContentWalker::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Moved to the section at this index
    Moved(usize),
    /// Already on the last section; content is fully traversed
    ContentComplete,
}

/// Cursor over a lesson's content with translation visibility.
///
/// Audio for the current section is not owned here: callers ask for
/// [`ContentWalker::audio_cue`] after each move and scope playback to it.
#[derive(Debug, Clone)]
pub struct ContentWalker {
    lesson: Arc<Lesson>,
    index: usize,
    translation_visible: bool,
}

impl ContentWalker {
    pub fn new(lesson: Arc<Lesson>) -> Self {
        Self {
            lesson,
            index: 0,
            translation_visible: false,
        }
    }

    /// Point the walker at `lesson`, starting over if its id differs.
    ///
    /// Returns whether the walker was reset.
    pub fn set_lesson(&mut self, lesson: Arc<Lesson>) -> bool {
        let changed = lesson.id != self.lesson.id;
        self.lesson = lesson;
        if changed {
            self.index = 0;
            self.translation_visible = false;
        }
        changed
    }

    /// Move forward one section, or report completion from the last one.
    ///
    /// Idempotent at the end: repeated calls keep returning `ContentComplete`.
    pub fn advance(&mut self) -> Step {
        if self.index + 1 >= self.total() {
            return Step::ContentComplete;
        }
        self.index += 1;
        self.translation_visible = false;
        Step::Moved(self.index)
    }

    /// Move back one section. Returns `false` on the first section.
    pub fn retreat(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        self.translation_visible = false;
        true
    }

    /// Flip translation visibility; sections without a translation stay hidden.
    pub fn toggle_translation(&mut self) -> bool {
        if self.current().is_some_and(ContentSection::has_translation) {
            self.translation_visible = !self.translation_visible;
        }
        self.translation_visible
    }

    pub fn current(&self) -> Option<&ContentSection> {
        self.lesson.section(self.index)
    }

    pub fn audio_cue(&self) -> Option<&str> {
        self.current().and_then(ContentSection::audio_cue)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.lesson.sections().len()
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.total()
    }

    pub fn translation_visible(&self) -> bool {
        self.translation_visible
    }

    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    /// `(index + 1) / total`, 0 for a lesson without sections.
    pub fn progress_fraction(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => (self.index + 1) as f64 / total as f64,
        }
    }

    /// Progress as a whole percentage for display.
    pub fn progress_percent(&self) -> u32 {
        crate::progress::display_percent(self.index + 1, self.total())
    }
}
