//! Application configuration.
//!
//! Values are resolved with priority: config.toml > environment (.env) > default.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Pause between a correct answer and the next exercise
pub const ADVANCE_DELAY_MS: u64 = 1500;

/// Simulated latency of catalog fetches
pub const LOAD_LATENCY_MS: u64 = 800;

/// Configuration file structure for config.toml
#[derive(Debug, Default, Deserialize)]
struct AppConfig {
    catalog: Option<CatalogConfig>,
    timing: Option<TimingConfig>,
}

#[derive(Debug, Deserialize)]
struct CatalogConfig {
    path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TimingConfig {
    advance_delay_ms: Option<u64>,
    load_latency_ms: Option<u64>,
}

/// Resolved settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// JSON catalog to load; `None` uses the embedded catalog
    pub catalog_path: Option<PathBuf>,
    pub advance_delay: Duration,
    pub load_latency: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            advance_delay: Duration::from_millis(ADVANCE_DELAY_MS),
            load_latency: Duration::from_millis(LOAD_LATENCY_MS),
        }
    }
}

/// Load settings from `config.toml` in the working directory and the environment.
pub fn load_settings() -> Settings {
    // Load .env file if present
    let _ = dotenvy::dotenv();
    let file = read_config_file(Path::new("config.toml"));
    resolve(file, |key| std::env::var(key).ok())
}

fn read_config_file(path: &Path) -> AppConfig {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return AppConfig::default();
    };
    match toml::from_str::<AppConfig>(&contents) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
            AppConfig::default()
        }
    }
}

/// Merge file values over environment values over defaults.
fn resolve(file: AppConfig, env: impl Fn(&str) -> Option<String>) -> Settings {
    let defaults = Settings::default();

    let catalog_path = match file.catalog.and_then(|c| c.path) {
        Some(path) => {
            tracing::info!("Using catalog from config.toml: {}", path);
            Some(PathBuf::from(path))
        }
        None => env("CATALOG_PATH").map(|path| {
            tracing::info!("Using catalog from CATALOG_PATH env: {}", path);
            PathBuf::from(path)
        }),
    };

    let timing = file.timing;
    let millis = |from_file: Option<u64>, key: &str, default: Duration| {
        from_file
            .or_else(|| env(key).and_then(|v| v.trim().parse().ok()))
            .map(Duration::from_millis)
            .unwrap_or(default)
    };

    Settings {
        catalog_path,
        advance_delay: millis(
            timing.as_ref().and_then(|t| t.advance_delay_ms),
            "ADVANCE_DELAY_MS",
            defaults.advance_delay,
        ),
        load_latency: millis(
            timing.as_ref().and_then(|t| t.load_latency_ms),
            "LOAD_LATENCY_MS",
            defaults.load_latency,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = resolve(AppConfig::default(), env_of(&[]));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.advance_delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_env_overrides_defaults() {
        let settings = resolve(
            AppConfig::default(),
            env_of(&[("CATALOG_PATH", "lessons.json"), ("LOAD_LATENCY_MS", "0")]),
        );
        assert_eq!(settings.catalog_path, Some(PathBuf::from("lessons.json")));
        assert_eq!(settings.load_latency, Duration::ZERO);
    }

    #[test]
    fn test_file_overrides_env() {
        let file: AppConfig = toml::from_str(
            r#"
            [catalog]
            path = "from-file.json"

            [timing]
            advance_delay_ms = 200
            "#,
        )
        .unwrap();
        let settings = resolve(
            file,
            env_of(&[("CATALOG_PATH", "from-env.json"), ("ADVANCE_DELAY_MS", "900")]),
        );
        assert_eq!(settings.catalog_path, Some(PathBuf::from("from-file.json")));
        assert_eq!(settings.advance_delay, Duration::from_millis(200));
    }

    #[test]
    fn test_unparsable_env_falls_back() {
        let settings = resolve(AppConfig::default(), env_of(&[("ADVANCE_DELAY_MS", "soon")]));
        assert_eq!(settings.advance_delay, Duration::from_millis(ADVANCE_DELAY_MS));
    }

    #[test]
    fn test_missing_config_file() {
        let config = read_config_file(Path::new("/nonexistent/config.toml"));
        assert!(config.catalog.is_none());
    }
}
