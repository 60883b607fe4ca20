use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use voyage_rating::config::AppConfig;
use voyage_rating::error::AppError;
use voyage_rating::telemetry;
use voyage_rating::voyage::{HistoryEntry, VoyageImporter};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads configuration and installs logging for one-shot CLI commands.
pub(crate) fn init_command() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config)
}

/// A missing history file means the captain has no recorded trips.
pub(crate) fn load_history(path: Option<&Path>) -> Result<Vec<HistoryEntry>, AppError> {
    match path {
        Some(path) => Ok(VoyageImporter::history_from_path(path)?),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_history_defaults_to_empty() {
        let history = load_history(None).expect("empty history");
        assert!(history.is_empty());
    }

    #[test]
    fn load_history_surfaces_import_errors() {
        let error = load_history(Some(Path::new("./missing-history.csv")))
            .expect_err("file is missing");
        assert!(matches!(error, AppError::Import(_)));
    }
}
