use super::super::domain::{CampaignRecord, CampaignStatus, ComparisonRecord};
use super::views::SummaryMetrics;

/// Reduces the campaign and comparison collections to the metric-card
/// figures. Total over any input, including empty collections.
pub fn compute_summary_metrics(
    campaigns: &[CampaignRecord],
    comparisons: &[ComparisonRecord],
) -> SummaryMetrics {
    let total_cost: f64 = campaigns.iter().map(|campaign| campaign.cost).sum();
    let total_clicks: u64 = campaigns.iter().map(|campaign| campaign.clicks).sum();

    // Unweighted mean: every campaign counts once regardless of spend.
    let average_ctr = if campaigns.is_empty() {
        0.0
    } else {
        campaigns.iter().map(|campaign| campaign.ctr).sum::<f64>() / campaigns.len() as f64
    };

    let enabled_campaigns = campaigns
        .iter()
        .filter(|campaign| campaign.status == CampaignStatus::Enabled)
        .count();

    let prior_total: f64 = comparisons.iter().map(|record| record.prior_cost).sum();
    let cost_change_percent = if prior_total > 0.0 {
        (total_cost - prior_total) / prior_total * 100.0
    } else {
        0.0
    };

    SummaryMetrics {
        total_cost,
        total_clicks,
        average_ctr,
        enabled_campaigns,
        cost_change_percent,
    }
}
