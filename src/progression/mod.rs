//! Lesson progression: walking content, answering exercises, and the timed
//! driver that ties them together for a UI.

pub mod audio;
pub mod driver;
pub mod evaluator;
pub mod session;
pub mod walker;

pub use audio::{AudioPlayer, AudioSlot, NoAudio};
pub use driver::LessonDriver;
pub use evaluator::{AnswerState, ExerciseEvaluator};
pub use session::{LessonEvent, LessonSession, Phase};
pub use walker::{ContentWalker, Step};
