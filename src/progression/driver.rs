//! Timed wrapper around [`LessonSession`] for event-loop UIs.
//!
//! Learner actions go through the driver, which forwards every
//! [`LessonEvent`] on a channel. After a correct answer the move to the next
//! exercise is deferred by `advance_delay` so the feedback is visible first.
//! The deferred move is cancelled on retry, restart, lesson switch and drop,
//! and only ever touches the session it was scheduled for.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::deferred::Deferred;
use crate::error::ProgressionError;

use super::session::{LessonEvent, LessonSession};

pub struct LessonDriver {
    session: Arc<Mutex<LessonSession>>,
    events: mpsc::UnboundedSender<LessonEvent>,
    pending: Option<Deferred<()>>,
    advance_delay: Duration,
}

fn lock(session: &Mutex<LessonSession>) -> MutexGuard<'_, LessonSession> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

impl LessonDriver {
    pub fn new(
        session: LessonSession,
        advance_delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<LessonEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let driver = Self {
            session: Arc::new(Mutex::new(session)),
            events,
            pending: None,
            advance_delay,
        };
        (driver, rx)
    }

    /// Read the session state, e.g. for rendering.
    pub fn with_session<R>(&self, f: impl FnOnce(&LessonSession) -> R) -> R {
        f(&lock(&self.session))
    }

    pub fn advance_section(&mut self) -> Result<(), ProgressionError> {
        let events = lock(&self.session).advance_section()?;
        self.emit(events);
        Ok(())
    }

    pub fn retreat_section(&mut self) -> Result<bool, ProgressionError> {
        lock(&self.session).retreat_section()
    }

    pub fn toggle_translation(&mut self) -> Result<bool, ProgressionError> {
        lock(&self.session).toggle_translation()
    }

    pub fn select_option(&mut self, option_id: &str) -> Result<bool, ProgressionError> {
        lock(&self.session).select_option(option_id)
    }

    /// Submit the selection; schedules the next exercise on a correct answer.
    ///
    /// Outside a tokio runtime this is `NoRuntime` and nothing changes.
    pub fn submit(&mut self) -> Result<(), ProgressionError> {
        let runtime = Handle::try_current().map_err(|_| ProgressionError::NoRuntime)?;
        let (events, schedule) = {
            let mut session = lock(&self.session);
            let events = session.submit()?;
            (events, session.advance_pending())
        };
        self.emit(events);

        if schedule {
            self.schedule_advance(&runtime);
        }
        Ok(())
    }

    pub fn retry(&mut self) -> Result<(), ProgressionError> {
        lock(&self.session).retry()?;
        self.cancel_pending();
        Ok(())
    }

    pub fn restart(&mut self) {
        self.cancel_pending();
        lock(&self.session).restart();
    }

    /// Replace the session, e.g. when the learner opens another lesson.
    pub fn switch_lesson(&mut self, session: LessonSession) {
        self.cancel_pending();
        self.session = Arc::new(Mutex::new(session));
    }

    pub fn has_pending_advance(&self) -> bool {
        self.pending.as_ref().is_some_and(|p| !p.is_finished())
    }

    fn schedule_advance(&mut self, runtime: &Handle) {
        let session = Arc::clone(&self.session);
        let events = self.events.clone();
        tracing::debug!("Next exercise in {:?}", self.advance_delay);

        self.pending = Some(Deferred::after_on(runtime, self.advance_delay, move || {
            match lock(&session).commit_advance() {
                Ok(event) => {
                    let _ = events.send(event);
                }
                Err(e) => tracing::debug!("Deferred advance skipped: {}", e),
            }
        }));
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }

    fn emit(&self, events: Vec<LessonEvent>) {
        for event in events {
            // receiver gone means the page is gone
            let _ = self.events.send(event);
        }
    }
}
