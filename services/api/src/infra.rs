use adpulse::ads::dashboard::{SortKey, StatusFilter};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Directory the report endpoints load snapshots from.
#[derive(Clone)]
pub(crate) struct DataDir(pub(crate) Arc<PathBuf>);

pub(crate) fn parse_status(raw: &str) -> Result<StatusFilter, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "all" => Ok(StatusFilter::All),
        "enabled" => Ok(StatusFilter::Enabled),
        "paused" => Ok(StatusFilter::Paused),
        other => Err(format!(
            "unknown status filter '{other}' (expected all, enabled, or paused)"
        )),
    }
}

pub(crate) fn parse_sort_key(raw: &str) -> Result<SortKey, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "name" => Ok(SortKey::Name),
        "cost" => Ok(SortKey::Cost),
        "clicks" => Ok(SortKey::Clicks),
        "ctr" => Ok(SortKey::Ctr),
        other => Err(format!(
            "unknown sort column '{other}' (expected name, cost, clicks, or ctr)"
        )),
    }
}
