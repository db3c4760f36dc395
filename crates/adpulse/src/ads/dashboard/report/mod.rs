mod insights;
mod summary;
pub mod views;

pub use insights::generate_insights;
pub use summary::compute_summary_metrics;

use super::table::{filter_and_sort, TableQuery};
use crate::ads::snapshot::Snapshot;
use views::DashboardReport;

impl Snapshot {
    /// Derives the full dashboard payload for one render cycle. Pure: the
    /// snapshot is untouched and repeated calls with the same query yield
    /// the same report.
    pub fn report(&self, query: &TableQuery) -> DashboardReport {
        DashboardReport {
            summary: compute_summary_metrics(&self.campaigns, &self.comparisons),
            insights: generate_insights(
                &self.campaigns,
                &self.devices,
                &self.time_series,
                &self.comparisons,
            ),
            table: filter_and_sort(&self.campaigns, query),
            devices: self.devices.clone(),
            networks: self.networks.clone(),
            time_series: self.time_series.clone(),
            hourly: self.hourly.clone(),
            daily: self.daily.clone(),
            heatmap: self.heatmap.clone(),
            search_words: self.search_words.clone(),
            optimization_scores: self.optimization_scores.clone(),
        }
    }
}
