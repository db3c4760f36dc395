use super::SnapshotError;
use crate::ads::dashboard::domain::HeatmapGrid;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Wrapper emitted by the data-processing pipeline for the larger exports:
/// rows under `data`, aggregate figures under `summary`. Only the rows are
/// consumed here; a file without a `data` key yields an empty collection.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct HeatmapFile {
    #[serde(default)]
    heatmap: Option<HeatmapGrid>,
}

pub(crate) fn parse_enveloped<T: DeserializeOwned>(
    resource: &'static str,
    bytes: &[u8],
) -> Result<Vec<T>, SnapshotError> {
    serde_json::from_slice::<Envelope<T>>(bytes)
        .map(|envelope| envelope.data)
        .map_err(|source| SnapshotError::Json { resource, source })
}

pub(crate) fn parse_rows<T: DeserializeOwned>(
    resource: &'static str,
    bytes: &[u8],
) -> Result<Vec<T>, SnapshotError> {
    serde_json::from_slice(bytes).map_err(|source| SnapshotError::Json { resource, source })
}

pub(crate) fn parse_heatmap(
    resource: &'static str,
    bytes: &[u8],
) -> Result<Option<HeatmapGrid>, SnapshotError> {
    serde_json::from_slice::<HeatmapFile>(bytes)
        .map(|file| file.heatmap)
        .map_err(|source| SnapshotError::Json { resource, source })
}
