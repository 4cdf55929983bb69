//! JSONL sink for profiling events.
//!
//! One file per process under `paths::profile_dir()`. Besides the raw event
//! stream the sink keeps a small tally of learner activity that is written
//! out with the closing `session_end` record.

use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::Utc;

use super::event::{EventType, ProfileEvent};

static SINK: Mutex<Option<ProfileSink>> = Mutex::new(None);

const FLUSH_EVERY: u64 = 64;

/// Running counts reported when profiling shuts down.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub events: u64,
    pub lessons_started: u64,
    pub lessons_completed: u64,
    pub answers_correct: u64,
    pub answers_incorrect: u64,
}

impl Tally {
    fn record(&mut self, event: &EventType) {
        self.events += 1;
        match event {
            EventType::LessonStarted { .. } => self.lessons_started += 1,
            EventType::LessonCompleted { .. } => self.lessons_completed += 1,
            EventType::ExerciseSubmitted { correct: true, .. } => self.answers_correct += 1,
            EventType::ExerciseSubmitted { correct: false, .. } => self.answers_incorrect += 1,
            _ => {}
        }
    }
}

struct ProfileSink {
    writer: Box<dyn Write + Send>,
    tally: Tally,
}

impl ProfileSink {
    fn open() -> std::io::Result<(Self, String)> {
        let session_id = Utc::now().format("%Y%m%d_%H%M%S").to_string();
        let dir = crate::paths::profile_dir();
        create_dir_all(&dir)?;
        let path = dir.join(format!("profile_{}.jsonl", session_id));
        let file = File::create(&path)?;
        tracing::info!("Profiling enabled: writing to {}", path.display());
        Ok((Self::with_writer(BufWriter::new(file)), session_id))
    }

    fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Box::new(writer),
            tally: Tally::default(),
        }
    }

    fn write(&mut self, event: ProfileEvent) {
        self.tally.record(&event.event_type);
        match serde_json::to_string(&event) {
            Ok(json) => {
                if let Err(e) = writeln!(self.writer, "{}", json) {
                    tracing::debug!("Profile write failed: {}", e);
                }
                if self.tally.events % FLUSH_EVERY == 0 {
                    let _ = self.writer.flush();
                }
            }
            Err(e) => tracing::debug!("Profile event not serializable: {}", e),
        }
    }

    fn close(mut self) -> Tally {
        let tally = self.tally;
        self.write(ProfileEvent::new(EventType::SessionEnd {
            total_events: tally.events,
            lessons_completed: tally.lessons_completed,
            answers_correct: tally.answers_correct,
            answers_incorrect: tally.answers_incorrect,
        }));
        let _ = self.writer.flush();
        tally
    }
}

fn sink() -> MutexGuard<'static, Option<ProfileSink>> {
    SINK.lock().unwrap_or_else(PoisonError::into_inner)
}

fn emit(event: ProfileEvent) {
    if let Some(sink) = sink().as_mut() {
        sink.write(event);
    }
}

/// Start profiling. Call once from `main` before anything is logged.
pub fn init() {
    let mut guard = sink();
    if guard.is_some() {
        tracing::warn!("Profiler already initialized");
        return;
    }
    match ProfileSink::open() {
        Ok((mut sink, session_id)) => {
            sink.write(ProfileEvent::new(EventType::SessionStart { session_id }));
            *guard = Some(sink);
        }
        Err(e) => tracing::error!("Failed to initialize profiler: {}", e),
    }
}

/// Write the closing record and flush. Later events are dropped.
pub fn shutdown() {
    if let Some(sink) = sink().take() {
        let tally = sink.close();
        tracing::info!(
            "Profiling ended: {} events, {} lessons completed, {}/{} answers correct",
            tally.events,
            tally.lessons_completed,
            tally.answers_correct,
            tally.answers_correct + tally.answers_incorrect
        );
    }
}

pub fn log_event(event_type: EventType) {
    emit(ProfileEvent::new(event_type));
}

pub fn log_timed(name: &str, duration: Duration) {
    emit(ProfileEvent::with_duration(
        EventType::TimedScope {
            name: name.to_string(),
        },
        duration,
    ));
}
