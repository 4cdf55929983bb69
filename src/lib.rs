pub mod config;
pub mod content;
pub mod deferred;
pub mod domain;
pub mod error;
pub mod paths;
pub mod profiling;
pub mod progress;
pub mod progression;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use content::Catalog;
pub use error::{CatalogError, ProgressionError};
