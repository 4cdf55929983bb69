use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fr_notebook::content::{self, Catalog};
use fr_notebook::progress::ProgressSummary;
use fr_notebook::{config, paths, profile_scope, profiling, CatalogError};

fn load_catalog(settings: &config::Settings) -> Result<Catalog, CatalogError> {
  match &settings.catalog_path {
    Some(path) => Catalog::load_from_file(path),
    None => {
      let default = paths::default_catalog_path();
      if default.exists() {
        Catalog::load_from_file(&default)
      } else {
        tracing::info!("No catalog file at {}, using embedded catalog", default.display());
        Catalog::builtin()
      }
    }
  }
}

#[tokio::main]
async fn main() -> ExitCode {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fr_notebook=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  // Initialize profiling (no-op if feature disabled)
  profiling::init();

  let settings = config::load_settings();
  let catalog = match profile_scope!("catalog_load", { load_catalog(&settings) }) {
    Ok(catalog) => catalog,
    Err(e) => {
      tracing::error!("Failed to load catalog: {}", e);
      profiling::shutdown();
      return ExitCode::FAILURE;
    }
  };

  // Same path the lessons page takes, latency included
  let fetched = match content::fetch_all(&catalog, settings.load_latency) {
    Ok(fetch) => fetch.finish().await.map_err(|e| e.to_string()),
    Err(e) => Err(e.to_string()),
  };
  let lessons = match fetched {
    Ok(lessons) => lessons,
    Err(e) => {
      tracing::error!("Catalog fetch aborted: {}", e);
      profiling::shutdown();
      return ExitCode::FAILURE;
    }
  };

  for lesson in &lessons {
    let note = if catalog.is_practicable(&lesson.id) { "" } else { "  (unavailable)" };
    println!(
      "{:<16} {:<10} {:<13} {:>3} min  {}{}",
      lesson.id, lesson.status, lesson.difficulty, lesson.duration_minutes, lesson.title, note
    );
  }

  let summary = ProgressSummary::from_lessons(&lessons);
  println!();
  println!(
    "{} of {} lessons completed ({}%)",
    summary.overall.completed,
    summary.overall.total,
    summary.overall.percent()
  );
  for (difficulty, completion) in &summary.by_difficulty {
    println!(
      "  {:<13} {}/{} ({}%)",
      difficulty,
      completion.completed,
      completion.total,
      completion.percent()
    );
  }

  for issue in catalog.issues() {
    println!("warning: {}", issue);
  }

  profiling::shutdown();
  ExitCode::SUCCESS
}
