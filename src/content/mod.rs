//! Lesson catalog: loading, integrity checks and lookups.
//!
//! - **catalog**: immutable lesson collection with status / difficulty / text filters
//! - **integrity**: per-lesson data checks run once when a catalog is built
//! - **loader**: simulated-latency fetches used by the pages

pub mod catalog;
pub mod integrity;
pub mod loader;

pub use catalog::Catalog;
pub use integrity::{IntegrityIssue, check_lesson};
pub use loader::{fetch_all, fetch_lesson};
