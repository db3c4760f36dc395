use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Serving state of a campaign as exported by the upstream account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignStatus {
    Enabled,
    Paused,
}

impl CampaignStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Enabled => "Enabled",
            Self::Paused => "Paused",
        }
    }
}

/// Device breakdown category. Anything outside the fixed upstream set
/// collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum DeviceCategory {
    Computers,
    #[serde(rename = "Mobile Phones")]
    MobilePhones,
    Tablets,
    #[serde(rename = "TV screens")]
    TvScreens,
    Other,
}

impl DeviceCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Computers => "Computers",
            Self::MobilePhones => "Mobile Phones",
            Self::Tablets => "Tablets",
            Self::TvScreens => "TV screens",
            Self::Other => "Other",
        }
    }
}

impl From<String> for DeviceCategory {
    fn from(value: String) -> Self {
        match value.trim() {
            "Computers" => Self::Computers,
            "Mobile Phones" => Self::MobilePhones,
            "Tablets" => Self::Tablets,
            "TV screens" => Self::TvScreens,
            _ => Self::Other,
        }
    }
}

/// One row of the campaign overview export. `ctr` is a raw fraction in
/// [0, 1]; display layers multiply by 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignRecord {
    #[serde(rename = "Campaign Name")]
    pub name: String,
    #[serde(rename = "Campaign Status")]
    pub status: CampaignStatus,
    #[serde(rename = "Cost")]
    pub cost: f64,
    #[serde(rename = "Clicks")]
    pub clicks: u64,
    #[serde(rename = "CTR")]
    pub ctr: f64,
}

/// Current-vs-prior-period metrics for one campaign. The change columns are
/// computed upstream and carried verbatim; `cost_change_percent` is 0 when
/// the prior-period cost is 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRecord {
    #[serde(rename = "Campaign Name")]
    pub name: String,
    #[serde(rename = "Cost")]
    pub cost: f64,
    #[serde(rename = "Cost (Comparison)")]
    pub prior_cost: f64,
    #[serde(rename = "Clicks")]
    pub clicks: u64,
    #[serde(rename = "Clicks (Comparison)")]
    pub prior_clicks: u64,
    #[serde(rename = "Cost_Change")]
    pub cost_change: f64,
    #[serde(rename = "Cost_Change_Percent")]
    pub cost_change_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceRecord {
    #[serde(rename = "Device")]
    pub category: DeviceCategory,
    #[serde(rename = "Cost")]
    pub cost: f64,
    #[serde(rename = "Impressions")]
    pub impressions: u64,
    #[serde(rename = "Clicks")]
    pub clicks: u64,
    #[serde(rename = "CTR")]
    pub ctr: f64,
    #[serde(rename = "Cost_Per_Click")]
    pub cost_per_click: f64,
}

/// One day of account-wide performance. The 7-day moving averages are
/// precomputed upstream and optional; no derivation here depends on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Clicks")]
    pub clicks: u64,
    #[serde(rename = "Impressions")]
    pub impressions: u64,
    #[serde(rename = "CTR")]
    pub ctr: f64,
    #[serde(rename = "Avg. CPC")]
    pub avg_cpc: f64,
    #[serde(rename = "CTR_MA7", default, skip_serializing_if = "Option::is_none")]
    pub ctr_ma7: Option<f64>,
    #[serde(rename = "CPC_MA7", default, skip_serializing_if = "Option::is_none")]
    pub cpc_ma7: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchWordRecord {
    #[serde(rename = "Word")]
    pub word: String,
    #[serde(rename = "Cost")]
    pub cost: f64,
    #[serde(rename = "Clicks")]
    pub clicks: u64,
    #[serde(rename = "Impressions")]
    pub impressions: u64,
    #[serde(rename = "Conversions")]
    pub conversions: f64,
    #[serde(rename = "Cost_Per_Click")]
    pub cost_per_click: f64,
    #[serde(rename = "CTR")]
    pub ctr: f64,
    #[serde(rename = "Conversion_Rate")]
    pub conversion_rate: f64,
    #[serde(rename = "Inefficient")]
    pub inefficient: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkRecord {
    #[serde(rename = "Network")]
    pub network: String,
    #[serde(rename = "Clicks")]
    pub clicks: u64,
    #[serde(rename = "Cost")]
    pub cost: f64,
    #[serde(rename = "Avg. CPC")]
    pub avg_cpc: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourPerformance {
    #[serde(rename = "Start Hour")]
    pub start_hour: u32,
    #[serde(rename = "Impressions")]
    pub impressions: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPerformance {
    #[serde(rename = "Day")]
    pub day: String,
    #[serde(rename = "Impressions")]
    pub impressions: u64,
}

/// Day-of-week × hour-of-day impression matrix, pivoted upstream.
/// `values[i][j]` belongs to `days[i]` at `hours[j]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapGrid {
    pub days: Vec<String>,
    pub hours: Vec<u32>,
    pub values: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationScore {
    #[serde(rename = "Campaign Name")]
    pub name: String,
    #[serde(rename = "Optimisation score")]
    pub score: f64,
}
