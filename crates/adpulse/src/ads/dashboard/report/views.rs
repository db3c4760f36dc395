use super::super::domain::{
    CampaignRecord, CampaignStatus, DayPerformance, DeviceRecord, HeatmapGrid, HourPerformance,
    NetworkRecord, OptimizationScore, SearchWordRecord, TimeSeriesPoint,
};
use serde::Serialize;

/// Scalar figures backing the dashboard's metric cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub total_cost: f64,
    pub total_clicks: u64,
    pub average_ctr: f64,
    pub enabled_campaigns: usize,
    pub cost_change_percent: f64,
}

/// Presentation category of an insight. Drives card styling only; it does
/// not rank insights against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightSeverity {
    Success,
    Warning,
    Danger,
    Info,
}

impl InsightSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Danger => "Danger",
            Self::Info => "Info",
        }
    }
}

/// A generated observation plus recommendation. The description embeds the
/// computed figures the rule fired on.
#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub severity: InsightSeverity,
    pub title: &'static str,
    pub description: String,
    pub recommendation: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    High,
    Medium,
    Low,
}

impl PerformanceTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub fn for_ctr(ctr: f64) -> Self {
        if ctr > 0.04 {
            Self::High
        } else if ctr > 0.02 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CampaignRow {
    pub name: String,
    pub status: CampaignStatus,
    pub status_label: &'static str,
    pub cost: f64,
    pub clicks: u64,
    pub ctr: f64,
    pub performance: PerformanceTier,
}

impl CampaignRow {
    pub fn from_record(record: &CampaignRecord) -> Self {
        Self {
            name: record.name.clone(),
            status: record.status,
            status_label: record.status.label(),
            cost: record.cost,
            clicks: record.clicks,
            ctr: record.ctr,
            performance: PerformanceTier::for_ctr(record.ctr),
        }
    }
}

/// The visible slice of the campaign table plus the counts the header shows
/// ("N of M campaigns"). An empty `rows` with `total > 0` is the "no results
/// match your filters" state, not an error.
#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<CampaignRow>,
    pub visible: usize,
    pub total: usize,
}

/// Everything one render cycle consumes, derived from a single snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub summary: SummaryMetrics,
    pub insights: Vec<Insight>,
    pub table: TableView,
    pub devices: Vec<DeviceRecord>,
    pub networks: Vec<NetworkRecord>,
    pub time_series: Vec<TimeSeriesPoint>,
    pub hourly: Vec<HourPerformance>,
    pub daily: Vec<DayPerformance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heatmap: Option<HeatmapGrid>,
    pub search_words: Vec<SearchWordRecord>,
    pub optimization_scores: Vec<OptimizationScore>,
}
