use super::super::domain::{
    CampaignRecord, CampaignStatus, ComparisonRecord, DeviceCategory, DeviceRecord,
    TimeSeriesPoint,
};
use super::super::format::{group_amount, group_thousands};
use super::views::{Insight, InsightSeverity};

struct RuleInput<'a> {
    campaigns: &'a [CampaignRecord],
    devices: &'a [DeviceRecord],
    time_series: &'a [TimeSeriesPoint],
    comparisons: &'a [ComparisonRecord],
}

type InsightRule = fn(&RuleInput<'_>) -> Option<Insight>;

// Evaluation order is the presentation order. Each rule is independent and
// side-effect-free; a rule that lacks its inputs skips silently.
const RULES: [InsightRule; 5] = [
    mobile_vs_desktop,
    top_campaigns,
    budget_inefficiency,
    recent_decline,
    top_grower,
];

/// Evaluates the fixed rule list against one snapshot's collections and
/// returns the insights that fired, in rule order.
pub fn generate_insights(
    campaigns: &[CampaignRecord],
    devices: &[DeviceRecord],
    time_series: &[TimeSeriesPoint],
    comparisons: &[ComparisonRecord],
) -> Vec<Insight> {
    let input = RuleInput {
        campaigns,
        devices,
        time_series,
        comparisons,
    };

    RULES.iter().filter_map(|rule| rule(&input)).collect()
}

fn device_by_category(devices: &[DeviceRecord], category: DeviceCategory) -> Option<&DeviceRecord> {
    devices.iter().find(|device| device.category == category)
}

fn mobile_vs_desktop(input: &RuleInput<'_>) -> Option<Insight> {
    let mobile = device_by_category(input.devices, DeviceCategory::MobilePhones)?;
    let desktop = device_by_category(input.devices, DeviceCategory::Computers)?;

    let mobile_ctr = mobile.ctr * 100.0;
    let desktop_ctr = desktop.ctr * 100.0;
    if mobile_ctr <= desktop_ctr * 1.2 {
        return None;
    }

    Some(Insight {
        severity: InsightSeverity::Success,
        title: "Mobile Performance Leading",
        description: format!(
            "Mobile ads have {mobile_ctr:.2}% CTR compared to {desktop_ctr:.2}% on desktop. \
             Mobile generates {} clicks.",
            group_thousands(mobile.clicks)
        ),
        recommendation: "Consider increasing mobile ad budget by 15-20% and optimize landing \
                         pages for mobile users.",
    })
}

fn top_campaigns(input: &RuleInput<'_>) -> Option<Insight> {
    let mut ranked: Vec<&CampaignRecord> = input.campaigns.iter().collect();
    ranked.sort_by(|a, b| b.ctr.total_cmp(&a.ctr));

    // Truncate to the top three BEFORE dropping paused campaigns; an enabled
    // campaign ranked fourth never surfaces here.
    let leader = ranked
        .iter()
        .take(3)
        .find(|campaign| campaign.status == CampaignStatus::Enabled)?;

    Some(Insight {
        severity: InsightSeverity::Info,
        title: "High-Performing Campaigns Identified",
        description: format!(
            "\"{}\" leads with {:.2}% CTR. These campaigns are driving quality traffic.",
            leader.name,
            leader.ctr * 100.0
        ),
        recommendation: "Allocate more budget to top 3 performing campaigns and analyze their \
                         keywords for expansion opportunities.",
    })
}

fn budget_inefficiency(input: &RuleInput<'_>) -> Option<Insight> {
    let flagged: Vec<&CampaignRecord> = input
        .campaigns
        .iter()
        .filter(|campaign| campaign.ctr < 0.02 && campaign.cost > 1000.0)
        .collect();
    if flagged.is_empty() {
        return None;
    }

    let wasted_budget: f64 = flagged.iter().map(|campaign| campaign.cost).sum();

    Some(Insight {
        severity: InsightSeverity::Warning,
        title: "Budget Optimization Opportunity",
        description: format!(
            "{} campaigns have CTR below 2% and spent ₹{}. This indicates poor ad relevance \
             or targeting.",
            flagged.len(),
            group_amount(wasted_budget)
        ),
        recommendation: "Pause or restructure low-performing campaigns. Review keyword match \
                         types and ad copy quality.",
    })
}

fn recent_decline(input: &RuleInput<'_>) -> Option<Insight> {
    if input.time_series.is_empty() {
        return None;
    }

    let recent_start = input.time_series.len().saturating_sub(7);
    let recent = &input.time_series[recent_start..];

    let recent_mean = recent.iter().map(|point| point.ctr).sum::<f64>() / recent.len() as f64;
    let overall_mean = input.time_series.iter().map(|point| point.ctr).sum::<f64>()
        / input.time_series.len() as f64;

    if recent_mean >= overall_mean * 0.8 {
        return None;
    }

    let drop_percent = (1.0 - recent_mean / overall_mean) * 100.0;

    Some(Insight {
        severity: InsightSeverity::Danger,
        title: "Recent Performance Decline",
        description: format!(
            "CTR has dropped {drop_percent:.1}% in the last 7 days compared to overall average."
        ),
        recommendation: "Review recent ad copy changes, check for increased competition, and \
                         analyze search term reports for irrelevant queries.",
    })
}

fn top_grower(input: &RuleInput<'_>) -> Option<Insight> {
    let grower = input
        .comparisons
        .iter()
        .filter(|record| record.cost_change > 0.0)
        .max_by(|a, b| a.cost_change_percent.total_cmp(&b.cost_change_percent))?;

    Some(Insight {
        severity: InsightSeverity::Success,
        title: "Significant Growth in Key Campaign",
        description: format!(
            "\"{}\" cost increased by {:.1}%, indicating strong scaling potential.",
            grower.name, grower.cost_change_percent
        ),
        recommendation: "Monitor this campaign closely for ROI. If profitable, continue \
                         scaling; if not, adjust targeting.",
    })
}
