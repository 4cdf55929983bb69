//! One learner's pass through a lesson: content first, then exercises.
//!
//! Everything here is synchronous. The short pause between a correct answer
//! and the next exercise is left to the caller: `submit` marks the advance as
//! pending and `commit_advance` performs it (see `driver` for the timed
//! version).

use std::sync::Arc;

use crate::content::Catalog;
use crate::domain::Lesson;
use crate::error::ProgressionError;

use super::audio::{AudioPlayer, AudioSlot};
use super::evaluator::ExerciseEvaluator;
use super::walker::{ContentWalker, Step};

/// Events raised to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonEvent {
    /// Every content section has been walked through
    ContentComplete,
    /// A submitted answer was evaluated
    ExerciseOutcome { exercise_id: String, correct: bool },
    /// The next exercise is now active
    ExerciseAdvanced { index: usize },
    /// Last exercise answered correctly; terminal until restart
    AllExercisesComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Content,
    Exercises,
    Complete,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Content => "reading content",
            Self::Exercises => "practicing exercises",
            Self::Complete => "lesson complete",
        }
    }
}

#[derive(Debug)]
enum Stage {
    Content(ContentWalker),
    Exercises {
        evaluator: ExerciseEvaluator,
        advance_pending: bool,
    },
    Complete,
}

#[derive(Debug)]
pub struct LessonSession {
    lesson: Arc<Lesson>,
    stage: Stage,
    exercise_index: usize,
    audio: AudioSlot,
    bookmarked: bool,
}

impl LessonSession {
    /// Open a lesson from the catalog.
    ///
    /// Locked lessons and lessons that failed the integrity checks cannot be
    /// practiced.
    pub fn start(
        catalog: &Catalog,
        lesson_id: &str,
        player: Box<dyn AudioPlayer>,
    ) -> Result<Self, ProgressionError> {
        let lesson = catalog
            .find_by_id(lesson_id)
            .ok_or_else(|| ProgressionError::NotFound(lesson_id.to_string()))?;
        if lesson.is_locked() {
            return Err(ProgressionError::Locked(lesson.id.clone()));
        }
        if !catalog.is_practicable(lesson_id) {
            return Err(ProgressionError::Unavailable(lesson.id.clone()));
        }

        tracing::info!("Starting lesson {}", lesson.id);
        crate::profile_log!(crate::profiling::EventType::LessonStarted {
            lesson_id: lesson.id.clone(),
        });
        Ok(Self::new(Arc::new(lesson.clone()), player))
    }

    /// Session over an already validated lesson.
    pub fn new(lesson: Arc<Lesson>, player: Box<dyn AudioPlayer>) -> Self {
        let mut session = Self {
            stage: Stage::Content(ContentWalker::new(lesson.clone())),
            lesson,
            exercise_index: 0,
            audio: AudioSlot::new(player),
            bookmarked: false,
        };
        session.sync_audio();
        session
    }

    // ==================== Content ====================

    pub fn advance_section(&mut self) -> Result<Vec<LessonEvent>, ProgressionError> {
        let step = self.walker_mut()?.advance();
        match step {
            Step::Moved(index) => {
                tracing::debug!("Lesson {} moved to section {}", self.lesson.id, index);
                crate::profile_log!(crate::profiling::EventType::SectionChanged {
                    lesson_id: self.lesson.id.clone(),
                    index,
                });
                self.sync_audio();
                Ok(Vec::new())
            }
            Step::ContentComplete => Ok(self.begin_exercises()),
        }
    }

    pub fn retreat_section(&mut self) -> Result<bool, ProgressionError> {
        let moved = self.walker_mut()?.retreat();
        if moved {
            self.sync_audio();
        }
        Ok(moved)
    }

    pub fn toggle_translation(&mut self) -> Result<bool, ProgressionError> {
        Ok(self.walker_mut()?.toggle_translation())
    }

    fn begin_exercises(&mut self) -> Vec<LessonEvent> {
        tracing::info!("Lesson {} content complete", self.lesson.id);
        let mut events = vec![LessonEvent::ContentComplete];

        self.exercise_index = 0;
        match self.lesson.exercise(0).cloned() {
            Some(exercise) => {
                self.stage = Stage::Exercises {
                    evaluator: ExerciseEvaluator::new(exercise),
                    advance_pending: false,
                };
            }
            None => {
                self.stage = Stage::Complete;
                events.push(self.finish());
            }
        }
        self.sync_audio();
        events
    }

    // ==================== Exercises ====================

    pub fn select_option(&mut self, option_id: &str) -> Result<bool, ProgressionError> {
        Ok(self.evaluator_mut()?.select(option_id))
    }

    /// Submit the current selection.
    ///
    /// The outcome event always comes first. A correct answer on the last
    /// exercise is followed by `AllExercisesComplete`; on any other exercise
    /// it leaves an advance pending.
    pub fn submit(&mut self) -> Result<Vec<LessonEvent>, ProgressionError> {
        let is_last = self.exercise_index + 1 >= self.lesson.exercises.len();
        let phase = self.phase();
        let Stage::Exercises {
            evaluator,
            advance_pending,
        } = &mut self.stage
        else {
            return Err(ProgressionError::WrongPhase(phase.as_str()));
        };

        let correct = evaluator.submit()?;
        let exercise_id = evaluator.exercise().id.clone();
        crate::profile_log!(crate::profiling::EventType::ExerciseSubmitted {
            lesson_id: self.lesson.id.clone(),
            exercise_id: exercise_id.clone(),
            correct,
        });

        let mut events = vec![LessonEvent::ExerciseOutcome {
            exercise_id,
            correct,
        }];
        if correct {
            if is_last {
                self.exercise_index = self.lesson.exercises.len();
                self.stage = Stage::Complete;
                self.sync_audio();
                events.push(self.finish());
            } else {
                *advance_pending = true;
            }
        }
        Ok(events)
    }

    /// Clear the submitted answer and try the same exercise again.
    ///
    /// Cancels a pending advance.
    pub fn retry(&mut self) -> Result<(), ProgressionError> {
        let phase = self.phase();
        let Stage::Exercises {
            evaluator,
            advance_pending,
        } = &mut self.stage
        else {
            return Err(ProgressionError::WrongPhase(phase.as_str()));
        };
        evaluator.reset()?;
        *advance_pending = false;
        Ok(())
    }

    /// Move to the next exercise after a correct answer.
    pub fn commit_advance(&mut self) -> Result<LessonEvent, ProgressionError> {
        match &self.stage {
            Stage::Exercises {
                advance_pending: true,
                ..
            } => {}
            Stage::Exercises { .. } => return Err(ProgressionError::NoPendingAdvance),
            _ => return Err(self.wrong_phase()),
        }

        let next = self.exercise_index + 1;
        let exercise = self
            .lesson
            .exercise(next)
            .ok_or(ProgressionError::NoPendingAdvance)?
            .clone();
        self.exercise_index = next;
        self.stage = Stage::Exercises {
            evaluator: ExerciseEvaluator::new(exercise),
            advance_pending: false,
        };
        self.sync_audio();
        tracing::debug!("Lesson {} advanced to exercise {}", self.lesson.id, next);
        Ok(LessonEvent::ExerciseAdvanced { index: next })
    }

    fn finish(&self) -> LessonEvent {
        tracing::info!("Lesson {} complete", self.lesson.id);
        crate::profile_log!(crate::profiling::EventType::LessonCompleted {
            lesson_id: self.lesson.id.clone(),
        });
        LessonEvent::AllExercisesComplete
    }

    // ==================== Session ====================

    /// Start over from the first section.
    pub fn restart(&mut self) {
        self.stage = Stage::Content(ContentWalker::new(self.lesson.clone()));
        self.exercise_index = 0;
        self.sync_audio();
    }

    pub fn toggle_bookmark(&mut self) -> bool {
        self.bookmarked = !self.bookmarked;
        self.bookmarked
    }

    pub fn is_bookmarked(&self) -> bool {
        self.bookmarked
    }

    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    pub fn phase(&self) -> Phase {
        match self.stage {
            Stage::Content(_) => Phase::Content,
            Stage::Exercises { .. } => Phase::Exercises,
            Stage::Complete => Phase::Complete,
        }
    }

    pub fn walker(&self) -> Option<&ContentWalker> {
        match &self.stage {
            Stage::Content(walker) => Some(walker),
            _ => None,
        }
    }

    pub fn evaluator(&self) -> Option<&ExerciseEvaluator> {
        match &self.stage {
            Stage::Exercises { evaluator, .. } => Some(evaluator),
            _ => None,
        }
    }

    /// Index of the active exercise; equals the exercise count once complete.
    pub fn exercise_index(&self) -> usize {
        self.exercise_index
    }

    pub fn advance_pending(&self) -> bool {
        matches!(
            self.stage,
            Stage::Exercises {
                advance_pending: true,
                ..
            }
        )
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.stage, Stage::Complete)
    }

    /// Audio clip currently loaded for the learner.
    pub fn audio_cue(&self) -> Option<&str> {
        self.audio.current()
    }

    fn walker_mut(&mut self) -> Result<&mut ContentWalker, ProgressionError> {
        let phase = self.phase();
        match &mut self.stage {
            Stage::Content(walker) => Ok(walker),
            _ => Err(ProgressionError::WrongPhase(phase.as_str())),
        }
    }

    fn evaluator_mut(&mut self) -> Result<&mut ExerciseEvaluator, ProgressionError> {
        let phase = self.phase();
        match &mut self.stage {
            Stage::Exercises { evaluator, .. } => Ok(evaluator),
            _ => Err(ProgressionError::WrongPhase(phase.as_str())),
        }
    }

    fn wrong_phase(&self) -> ProgressionError {
        ProgressionError::WrongPhase(self.phase().as_str())
    }

    /// Scope audio to whatever is on screen now.
    fn sync_audio(&mut self) {
        let cue = match &self.stage {
            Stage::Content(walker) => walker.audio_cue().map(str::to_owned),
            Stage::Exercises { evaluator, .. } => evaluator.exercise().audio_url.clone(),
            Stage::Complete => None,
        };
        self.audio.acquire(cue.as_deref());
    }
}
