//! Project path functions - single source of truth for file locations.
//!
//! ## Environment Variables
//!
//! - `DATA_DIR`: Override the base data directory (default: "data")

use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Lazily initialized data directory from DATA_DIR env var
static DATA_DIR_VALUE: OnceLock<String> = OnceLock::new();

/// Get the base data directory (from DATA_DIR env var or default "data")
pub fn data_dir() -> &'static str {
    DATA_DIR_VALUE.get_or_init(|| env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()))
}

/// Catalog file looked up when none is configured explicitly
pub fn default_catalog_path() -> PathBuf {
    PathBuf::from(data_dir()).join("catalog.json")
}

/// Directory for profiling logs (JSONL)
pub fn profile_dir() -> PathBuf {
    PathBuf::from(data_dir()).join("profiles")
}
