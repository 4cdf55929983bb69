//! Simulated-latency catalog fetches.
//!
//! Pages ask for their data through these instead of reading the catalog
//! directly, so the loading state stays visible for the configured latency.
//! The returned [`Deferred`] is tied to the page: drop it when the page goes
//! away and the fetch is abandoned.

use std::time::Duration;

use crate::deferred::{Deferred, TryCurrentError};
use crate::domain::Lesson;

use super::Catalog;

/// Fetch one lesson. Resolves to `None` if the id is unknown.
///
/// Fails outside a tokio runtime.
pub fn fetch_lesson(
    catalog: &Catalog,
    id: &str,
    latency: Duration,
) -> Result<Deferred<Option<Lesson>>, TryCurrentError> {
    let catalog = catalog.clone();
    let id = id.to_string();
    Deferred::after(latency, move || {
        let lesson = catalog.find_by_id(&id).cloned();
        if lesson.is_none() {
            tracing::warn!("Lesson not found: {}", id);
        }
        lesson
    })
}

/// Fetch every lesson in catalog order.
pub fn fetch_all(
    catalog: &Catalog,
    latency: Duration,
) -> Result<Deferred<Vec<Lesson>>, TryCurrentError> {
    let catalog = catalog.clone();
    Deferred::after(latency, move || catalog.all().to_vec())
}
