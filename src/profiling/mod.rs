//! Optional JSONL trace of learner activity.
//!
//! Built with `--features profiling`, every catalog load, lesson start,
//! section change and submitted answer is appended to
//! `<DATA_DIR>/profiles/profile_<timestamp>.jsonl`, and a tally is written
//! when [`shutdown`] runs. Without the feature the same calls compile to
//! nothing, so call sites never need their own `cfg`.
//!
//! ```rust
//! use fr_notebook::{profile_log, profile_scope};
//!
//! profile_log!(fr_notebook::profiling::EventType::LessonStarted {
//!     lesson_id: "basics-1".into()
//! });
//! let sections = profile_scope!("count_sections", { 6 });
//! assert_eq!(sections, 6);
//! ```

#[cfg(feature = "profiling")]
mod event;
#[cfg(feature = "profiling")]
mod logger;
#[cfg(feature = "profiling")]
pub use event::{EventType, ProfileEvent};
#[cfg(feature = "profiling")]
pub use logger::{Tally, init, log_event, log_timed, shutdown};

#[cfg(not(feature = "profiling"))]
mod noop;
#[cfg(not(feature = "profiling"))]
pub use noop::{init, log_event, log_timed, shutdown};

/// Record one [`EventType`]. The argument is not evaluated without the
/// `profiling` feature, so spell the event out with its full path.
#[cfg(feature = "profiling")]
#[macro_export]
macro_rules! profile_log {
    ($event:expr) => {
        $crate::profiling::log_event($event)
    };
}

#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profile_log {
    ($($ignored:tt)*) => {};
}

/// Evaluate `$body` and, with profiling on, record how long it took under
/// `$name`. Yields the body's value either way.
#[cfg(feature = "profiling")]
#[macro_export]
macro_rules! profile_scope {
    ($name:expr, $body:block) => {{
        let started = std::time::Instant::now();
        let value = $body;
        $crate::profiling::log_timed($name, started.elapsed());
        value
    }};
}

#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profile_scope {
    ($name:expr, $body:block) => {
        $body
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_scope_yields_body_value() {
        let catalog = profile_scope!("catalog_load", { crate::content::Catalog::builtin() });
        assert_eq!(catalog.map(|c| c.len()).ok(), Some(5));
    }

    #[test]
    fn test_log_without_init_is_dropped() {
        profile_log!(crate::profiling::EventType::LessonCompleted {
            lesson_id: "basics-1".into(),
        });
        crate::profiling::shutdown();
    }
}
