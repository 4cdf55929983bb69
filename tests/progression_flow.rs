//! End-to-end walks through the shipped catalog.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use fr_notebook::content::{self, Catalog};
use fr_notebook::progression::{
  AudioPlayer, LessonDriver, LessonEvent, LessonSession, NoAudio, Phase,
};
use fr_notebook::ProgressionError;
use tokio::sync::mpsc::UnboundedReceiver;

const DELAY: Duration = Duration::from_millis(1500);

fn drain(rx: &mut UnboundedReceiver<LessonEvent>) -> Vec<LessonEvent> {
  let mut events = Vec::new();
  while let Ok(event) = rx.try_recv() {
    events.push(event);
  }
  events
}

fn start(catalog: &Catalog, id: &str) -> (LessonDriver, UnboundedReceiver<LessonEvent>) {
  let session = LessonSession::start(catalog, id, Box::new(NoAudio)).unwrap();
  LessonDriver::new(session, DELAY)
}

fn read_all_sections(driver: &mut LessonDriver) {
  let total = driver.with_session(|s| s.lesson().sections().len());
  for _ in 0..total {
    driver.advance_section().unwrap();
  }
}

#[tokio::test(start_paused = true)]
async fn test_basics_1_start_to_finish() {
  let catalog = Catalog::builtin().unwrap();
  let (mut driver, mut rx) = start(&catalog, "basics-1");

  read_all_sections(&mut driver);
  assert_eq!(drain(&mut rx), vec![LessonEvent::ContentComplete]);
  assert_eq!(driver.with_session(|s| s.phase()), Phase::Exercises);

  driver.select_option("b").unwrap();
  driver.submit().unwrap();
  assert_eq!(
    drain(&mut rx),
    vec![LessonEvent::ExerciseOutcome {
      exercise_id: "ex-1".into(),
      correct: true
    }]
  );

  // feedback stays up until the delay elapses
  assert_eq!(rx.recv().await, Some(LessonEvent::ExerciseAdvanced { index: 1 }));
  assert_eq!(driver.with_session(|s| s.exercise_index()), 1);

  driver.select_option("a").unwrap();
  driver.submit().unwrap();
  assert_eq!(
    drain(&mut rx),
    vec![
      LessonEvent::ExerciseOutcome {
        exercise_id: "ex-2".into(),
        correct: true
      },
      LessonEvent::AllExercisesComplete,
    ]
  );

  tokio::time::sleep(DELAY * 2).await;
  assert!(drain(&mut rx).is_empty());
  assert!(driver.with_session(|s| s.is_complete()));
  assert!(!driver.has_pending_advance());
}

#[tokio::test(start_paused = true)]
async fn test_wrong_answers_never_advance() {
  let catalog = Catalog::builtin().unwrap();
  let (mut driver, mut rx) = start(&catalog, "basics-1");
  read_all_sections(&mut driver);
  drain(&mut rx);

  for wrong in ["a", "c", "d"] {
    driver.select_option(wrong).unwrap();
    driver.submit().unwrap();
    driver.retry().unwrap();
  }

  tokio::time::sleep(DELAY * 2).await;
  let events = drain(&mut rx);
  assert_eq!(events.len(), 3);
  assert!(events.iter().all(|e| matches!(
    e,
    LessonEvent::ExerciseOutcome { correct: false, .. }
  )));
  assert_eq!(driver.with_session(|s| s.exercise_index()), 0);
  assert_eq!(driver.with_session(|s| s.phase()), Phase::Exercises);
}

#[test]
fn test_locked_lessons_cannot_start() {
  let catalog = Catalog::builtin().unwrap();
  for id in ["basics-3", "intermediate-1", "advanced-1"] {
    let err = LessonSession::start(&catalog, id, Box::new(NoAudio)).unwrap_err();
    assert_eq!(err, ProgressionError::Locked(id.to_string()));
  }
  assert_eq!(
    LessonSession::start(&catalog, "nope", Box::new(NoAudio)).unwrap_err(),
    ProgressionError::NotFound("nope".to_string())
  );
}

#[derive(Clone, Default)]
struct Playing(Arc<Mutex<Option<String>>>);

impl AudioPlayer for Playing {
  fn load(&mut self, url: &str) {
    *self.0.lock().unwrap() = Some(url.to_string());
  }

  fn stop(&mut self) {
    *self.0.lock().unwrap() = None;
  }
}

#[test]
fn test_leaving_a_lesson_stops_audio() {
  let catalog = Catalog::builtin().unwrap();
  let playing = Playing::default();
  let mut session = LessonSession::start(&catalog, "basics-1", Box::new(playing.clone())).unwrap();

  let mut heard = false;
  for _ in 0..session.lesson().sections().len() {
    heard |= playing.0.lock().unwrap().is_some();
    session.advance_section().unwrap();
  }
  assert!(heard, "basics-1 has at least one audio section");

  drop(session);
  assert_eq!(*playing.0.lock().unwrap(), None);
}

#[tokio::test(start_paused = true)]
async fn test_fetch_respects_latency() {
  let catalog = Catalog::builtin().unwrap();
  let fetch = content::fetch_lesson(&catalog, "basics-2", Duration::from_millis(800)).unwrap();

  tokio::time::sleep(Duration::from_millis(799)).await;
  assert!(!fetch.is_finished());

  let lesson = fetch.finish().await.unwrap();
  assert_eq!(lesson.map(|l| l.id), Some("basics-2".to_string()));
}
