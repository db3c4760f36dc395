mod parser;

use crate::ads::dashboard::domain::{
    CampaignRecord, ComparisonRecord, DayPerformance, DeviceRecord, HeatmapGrid, HourPerformance,
    NetworkRecord, OptimizationScore, SearchWordRecord, TimeSeriesPoint,
};
use serde::de::DeserializeOwned;
use std::path::Path;

pub const CAMPAIGNS: &str = "campaigns.json";
pub const TIME_SERIES: &str = "time_series.json";
pub const SEARCH_WORDS: &str = "search_words.json";
pub const DEVICES: &str = "devices.json";
pub const NETWORKS: &str = "networks.json";
pub const PERFORMANCE_BY_HOUR: &str = "performance_by_hour.json";
pub const PERFORMANCE_BY_DAY: &str = "performance_by_day.json";
pub const PERFORMANCE_HEATMAP: &str = "performance_heatmap.json";
pub const BIGGEST_CHANGES: &str = "biggest_changes.json";
pub const OPTIMIZATION_SCORES: &str = "optimization_scores.json";

/// Every resource one snapshot is built from, in load order.
pub const RESOURCE_NAMES: [&str; 10] = [
    CAMPAIGNS,
    TIME_SERIES,
    SEARCH_WORDS,
    DEVICES,
    NETWORKS,
    PERFORMANCE_BY_HOUR,
    PERFORMANCE_BY_DAY,
    PERFORMANCE_HEATMAP,
    BIGGEST_CHANGES,
    OPTIMIZATION_SCORES,
];

#[derive(Debug)]
pub enum SnapshotError {
    Io {
        resource: &'static str,
        source: std::io::Error,
    },
    Json {
        resource: &'static str,
        source: serde_json::Error,
    },
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::Io { resource, source } => {
                write!(f, "failed to read dashboard resource '{}': {}", resource, source)
            }
            SnapshotError::Json { resource, source } => {
                write!(f, "invalid JSON in dashboard resource '{}': {}", resource, source)
            }
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Io { source, .. } => Some(source),
            SnapshotError::Json { source, .. } => Some(source),
        }
    }
}

/// One immutable, fully-loaded set of dashboard collections. Every report is
/// derived from exactly one snapshot; a new export produces a new snapshot,
/// never an incremental update.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub campaigns: Vec<CampaignRecord>,
    pub time_series: Vec<TimeSeriesPoint>,
    pub search_words: Vec<SearchWordRecord>,
    pub devices: Vec<DeviceRecord>,
    pub networks: Vec<NetworkRecord>,
    pub hourly: Vec<HourPerformance>,
    pub daily: Vec<DayPerformance>,
    pub heatmap: Option<HeatmapGrid>,
    pub comparisons: Vec<ComparisonRecord>,
    pub optimization_scores: Vec<OptimizationScore>,
}

impl Snapshot {
    /// Loads all ten resources from `dir` concurrently. The load is
    /// all-or-nothing: the first read or parse failure aborts the whole
    /// snapshot with one error naming the offending resource.
    pub async fn load<P: AsRef<Path>>(dir: P) -> Result<Self, SnapshotError> {
        let dir = dir.as_ref();

        let (
            campaigns,
            time_series,
            search_words,
            devices,
            networks,
            hourly,
            daily,
            heatmap,
            comparisons,
            optimization_scores,
        ) = tokio::try_join!(
            load_enveloped::<CampaignRecord>(dir, CAMPAIGNS),
            load_enveloped::<TimeSeriesPoint>(dir, TIME_SERIES),
            load_rows::<SearchWordRecord>(dir, SEARCH_WORDS),
            load_enveloped::<DeviceRecord>(dir, DEVICES),
            load_rows::<NetworkRecord>(dir, NETWORKS),
            load_rows::<HourPerformance>(dir, PERFORMANCE_BY_HOUR),
            load_rows::<DayPerformance>(dir, PERFORMANCE_BY_DAY),
            load_heatmap(dir, PERFORMANCE_HEATMAP),
            load_enveloped::<ComparisonRecord>(dir, BIGGEST_CHANGES),
            load_enveloped::<OptimizationScore>(dir, OPTIMIZATION_SCORES),
        )?;

        Ok(Self {
            campaigns,
            time_series,
            search_words,
            devices,
            networks,
            hourly,
            daily,
            heatmap,
            comparisons,
            optimization_scores,
        })
    }
}

async fn read_resource(dir: &Path, resource: &'static str) -> Result<Vec<u8>, SnapshotError> {
    tokio::fs::read(dir.join(resource))
        .await
        .map_err(|source| SnapshotError::Io { resource, source })
}

async fn load_enveloped<T: DeserializeOwned>(
    dir: &Path,
    resource: &'static str,
) -> Result<Vec<T>, SnapshotError> {
    let bytes = read_resource(dir, resource).await?;
    parser::parse_enveloped(resource, &bytes)
}

async fn load_rows<T: DeserializeOwned>(
    dir: &Path,
    resource: &'static str,
) -> Result<Vec<T>, SnapshotError> {
    let bytes = read_resource(dir, resource).await?;
    parser::parse_rows(resource, &bytes)
}

async fn load_heatmap(
    dir: &Path,
    resource: &'static str,
) -> Result<Option<HeatmapGrid>, SnapshotError> {
    let bytes = read_resource(dir, resource).await?;
    parser::parse_heatmap(resource, &bytes)
}
