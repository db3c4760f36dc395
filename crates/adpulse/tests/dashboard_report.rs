use adpulse::ads::dashboard::domain::{
    CampaignRecord, CampaignStatus, ComparisonRecord, DeviceCategory, DeviceRecord,
    TimeSeriesPoint,
};
use adpulse::ads::dashboard::report::views::{InsightSeverity, PerformanceTier};
use adpulse::ads::dashboard::report::{compute_summary_metrics, generate_insights};
use adpulse::ads::dashboard::{
    filter_and_sort, SortDirection, SortKey, SortSpec, StatusFilter, TableQuery,
};
use chrono::NaiveDate;

fn campaign(name: &str, status: CampaignStatus, cost: f64, clicks: u64, ctr: f64) -> CampaignRecord {
    CampaignRecord {
        name: name.to_string(),
        status,
        cost,
        clicks,
        ctr,
    }
}

fn device(category: DeviceCategory, ctr: f64, clicks: u64) -> DeviceRecord {
    DeviceRecord {
        category,
        cost: 1000.0,
        impressions: 10_000,
        clicks,
        ctr,
        cost_per_click: 1.0,
    }
}

fn series_point(day: u32, ctr: f64) -> TimeSeriesPoint {
    TimeSeriesPoint {
        date: NaiveDate::from_ymd_opt(2026, 1, day).expect("valid date"),
        clicks: 50,
        impressions: 1000,
        ctr,
        avg_cpc: 15.0,
        ctr_ma7: None,
        cpc_ma7: None,
    }
}

fn comparison(name: &str, cost_change: f64, cost_change_percent: f64) -> ComparisonRecord {
    ComparisonRecord {
        name: name.to_string(),
        cost: 1000.0 + cost_change,
        prior_cost: 1000.0,
        clicks: 100,
        prior_clicks: 90,
        cost_change,
        cost_change_percent,
    }
}

#[test]
fn summary_metrics_of_empty_collections_are_zero() {
    let metrics = compute_summary_metrics(&[], &[]);

    assert_eq!(metrics.total_cost, 0.0);
    assert_eq!(metrics.total_clicks, 0);
    assert_eq!(metrics.average_ctr, 0.0);
    assert_eq!(metrics.enabled_campaigns, 0);
    assert_eq!(metrics.cost_change_percent, 0.0);
}

#[test]
fn summary_metrics_aggregate_costs_clicks_and_status_counts() {
    let campaigns = [
        campaign("A", CampaignStatus::Enabled, 500.0, 100, 0.05),
        campaign("B", CampaignStatus::Paused, 2000.0, 50, 0.01),
    ];

    let metrics = compute_summary_metrics(&campaigns, &[]);

    assert_eq!(metrics.total_cost, 2500.0);
    assert_eq!(metrics.total_clicks, 150);
    assert!((metrics.average_ctr - 0.03).abs() < 1e-12);
    assert_eq!(metrics.enabled_campaigns, 1);
}

// Current behavior of the summary card: the mean CTR weighs a zero-spend
// campaign the same as the account's biggest spender.
#[test]
fn average_ctr_is_an_unweighted_mean() {
    let campaigns = [
        campaign("Whale", CampaignStatus::Enabled, 100_000.0, 10_000, 0.01),
        campaign("Minnow", CampaignStatus::Enabled, 0.0, 0, 0.09),
    ];

    let metrics = compute_summary_metrics(&campaigns, &[]);

    assert!((metrics.average_ctr - 0.05).abs() < 1e-12);
}

#[test]
fn cost_change_percent_is_zero_when_prior_total_is_zero() {
    let campaigns = [campaign("A", CampaignStatus::Enabled, 3000.0, 10, 0.02)];
    let comparisons = [ComparisonRecord {
        name: "A".to_string(),
        cost: 3000.0,
        prior_cost: 0.0,
        clicks: 10,
        prior_clicks: 0,
        cost_change: 3000.0,
        cost_change_percent: 0.0,
    }];

    let metrics = compute_summary_metrics(&campaigns, &comparisons);

    assert_eq!(metrics.cost_change_percent, 0.0);
}

#[test]
fn cost_change_percent_compares_current_total_against_prior_total() {
    let campaigns = [campaign("A", CampaignStatus::Enabled, 1500.0, 10, 0.02)];
    let comparisons = [
        comparison("A", 200.0, 40.0),
        ComparisonRecord {
            name: "B".to_string(),
            cost: 0.0,
            prior_cost: 0.0,
            clicks: 0,
            prior_clicks: 0,
            cost_change: 0.0,
            cost_change_percent: 0.0,
        },
    ];

    let metrics = compute_summary_metrics(&campaigns, &comparisons);

    // prior total 1000, current total 1500
    assert!((metrics.cost_change_percent - 50.0).abs() < 1e-9);
}

#[test]
fn mobile_insight_requires_both_device_categories() {
    let only_mobile = [device(DeviceCategory::MobilePhones, 0.08, 4000)];
    assert!(generate_insights(&[], &only_mobile, &[], &[]).is_empty());

    let only_desktop = [device(DeviceCategory::Computers, 0.01, 500)];
    assert!(generate_insights(&[], &only_desktop, &[], &[]).is_empty());
}

#[test]
fn mobile_insight_fires_above_the_twenty_percent_lead() {
    let devices = [
        device(DeviceCategory::MobilePhones, 0.06, 5200),
        device(DeviceCategory::Computers, 0.04, 2100),
    ];

    let insights = generate_insights(&[], &devices, &[], &[]);

    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].severity, InsightSeverity::Success);
    assert_eq!(insights[0].title, "Mobile Performance Leading");
    assert!(insights[0].description.contains("6.00% CTR"));
    assert!(insights[0].description.contains("4.00% on desktop"));
    assert!(insights[0].description.contains("5,200 clicks"));
}

#[test]
fn mobile_insight_is_silent_at_the_threshold() {
    // 4.8% is exactly 1.2x desktop's 4%, not strictly above it.
    let devices = [
        device(DeviceCategory::MobilePhones, 0.048, 5200),
        device(DeviceCategory::Computers, 0.04, 2100),
    ];

    assert!(generate_insights(&[], &devices, &[], &[]).is_empty());
}

#[test]
fn top_campaign_insight_names_the_highest_ctr_enabled_leader() {
    let campaigns = [
        campaign("Mid", CampaignStatus::Enabled, 100.0, 10, 0.03),
        campaign("Best", CampaignStatus::Enabled, 100.0, 10, 0.07),
        campaign("Low", CampaignStatus::Enabled, 100.0, 10, 0.01),
    ];

    let insights = generate_insights(&campaigns, &[], &[], &[]);

    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].severity, InsightSeverity::Info);
    assert!(insights[0].description.contains("\"Best\""));
    assert!(insights[0].description.contains("7.00% CTR"));
}

// The ranking truncates to three before dropping paused campaigns, so an
// enabled campaign ranked fourth is invisible to this rule.
#[test]
fn top_campaign_insight_skips_enabled_campaigns_outside_the_top_three() {
    let campaigns = [
        campaign("Paused 1", CampaignStatus::Paused, 100.0, 10, 0.09),
        campaign("Paused 2", CampaignStatus::Paused, 100.0, 10, 0.08),
        campaign("Paused 3", CampaignStatus::Paused, 100.0, 10, 0.07),
        campaign("Enabled 4th", CampaignStatus::Enabled, 100.0, 10, 0.06),
    ];

    assert!(generate_insights(&campaigns, &[], &[], &[]).is_empty());
}

#[test]
fn budget_insight_flags_low_ctr_high_cost_campaigns_only() {
    let campaigns = [
        campaign("Wasteful A", CampaignStatus::Enabled, 1500.0, 15, 0.01),
        campaign("Wasteful B", CampaignStatus::Enabled, 2400.0, 30, 0.015),
        campaign("Cheap and bad", CampaignStatus::Enabled, 500.0, 5, 0.01),
        campaign("Healthy", CampaignStatus::Enabled, 9000.0, 600, 0.06),
    ];

    let insights = generate_insights(&campaigns, &[], &[], &[]);

    let warning = insights
        .iter()
        .find(|insight| insight.severity == InsightSeverity::Warning)
        .expect("budget warning fires");
    // Only the two campaigns above both thresholds count toward the total.
    assert!(warning.description.contains("2 campaigns"));
    assert!(warning.description.contains("₹3,900"));
}

#[test]
fn decline_insight_compares_last_seven_days_against_the_whole_series() {
    let mut points: Vec<TimeSeriesPoint> = (1..=3).map(|day| series_point(day, 0.06)).collect();
    points.extend((4..=10).map(|day| series_point(day, 0.02)));

    let insights = generate_insights(&[], &[], &points, &[]);

    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].severity, InsightSeverity::Danger);
    // recent mean 0.02 vs overall mean 0.032 -> 37.5% drop
    assert!(insights[0].description.contains("37.5%"));
}

#[test]
fn decline_insight_is_silent_without_a_real_drop() {
    let steady: Vec<TimeSeriesPoint> = (1..=10).map(|day| series_point(day, 0.04)).collect();
    assert!(generate_insights(&[], &[], &steady, &[]).is_empty());

    // A series shorter than the recent window compares against itself.
    let short: Vec<TimeSeriesPoint> = (1..=3).map(|day| series_point(day, 0.01)).collect();
    assert!(generate_insights(&[], &[], &short, &[]).is_empty());
}

#[test]
fn grower_insight_picks_the_largest_positive_change() {
    let comparisons = [
        comparison("X", 200.0, 40.0),
        comparison("Y", -50.0, -10.0),
        comparison("Z", 80.0, 25.0),
    ];

    let insights = generate_insights(&[], &[], &[], &comparisons);

    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].severity, InsightSeverity::Success);
    assert!(insights[0].description.contains("\"X\""));
    assert!(insights[0].description.contains("40.0%"));
}

#[test]
fn grower_insight_ignores_shrinking_campaigns() {
    let comparisons = [comparison("Y", -50.0, -10.0)];
    assert!(generate_insights(&[], &[], &[], &comparisons).is_empty());
}

#[test]
fn insights_keep_rule_order_when_every_rule_fires() {
    let campaigns = [
        campaign("Leader", CampaignStatus::Enabled, 4000.0, 400, 0.07),
        campaign("Drain", CampaignStatus::Enabled, 2500.0, 25, 0.01),
    ];
    let devices = [
        device(DeviceCategory::MobilePhones, 0.06, 5200),
        device(DeviceCategory::Computers, 0.04, 2100),
    ];
    let mut points: Vec<TimeSeriesPoint> = (1..=3).map(|day| series_point(day, 0.06)).collect();
    points.extend((4..=10).map(|day| series_point(day, 0.02)));
    let comparisons = [comparison("Leader", 900.0, 29.0)];

    let insights = generate_insights(&campaigns, &devices, &points, &comparisons);

    let titles: Vec<&str> = insights.iter().map(|insight| insight.title).collect();
    assert_eq!(
        titles,
        [
            "Mobile Performance Leading",
            "High-Performing Campaigns Identified",
            "Budget Optimization Opportunity",
            "Recent Performance Decline",
            "Significant Growth in Key Campaign",
        ]
    );

    let severities: Vec<InsightSeverity> =
        insights.iter().map(|insight| insight.severity).collect();
    assert_eq!(
        severities,
        [
            InsightSeverity::Success,
            InsightSeverity::Info,
            InsightSeverity::Warning,
            InsightSeverity::Danger,
            InsightSeverity::Success,
        ]
    );
}

fn table_fixture() -> Vec<CampaignRecord> {
    vec![
        campaign("Brand - Search", CampaignStatus::Enabled, 5200.5, 310, 0.062),
        campaign("Generic - Display", CampaignStatus::Enabled, 2400.0, 85, 0.015),
        campaign("Remarketing - Web", CampaignStatus::Paused, 800.0, 40, 0.03),
        campaign("brand - shopping", CampaignStatus::Paused, 1200.0, 95, 0.045),
    ]
}

#[test]
fn unfiltered_unsorted_table_preserves_snapshot_order() {
    let campaigns = table_fixture();
    let view = filter_and_sort(&campaigns, &TableQuery::default());

    assert_eq!(view.visible, 4);
    assert_eq!(view.total, 4);
    let names: Vec<&str> = view.rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Brand - Search",
            "Generic - Display",
            "Remarketing - Web",
            "brand - shopping",
        ]
    );
}

#[test]
fn search_matches_substrings_case_insensitively() {
    let campaigns = table_fixture();
    let query = TableQuery {
        search: "BRAND".to_string(),
        ..TableQuery::default()
    };

    let view = filter_and_sort(&campaigns, &query);

    assert_eq!(view.visible, 2);
    assert_eq!(view.total, 4);
    assert_eq!(view.rows[0].name, "Brand - Search");
    assert_eq!(view.rows[1].name, "brand - shopping");
}

#[test]
fn status_filter_composes_with_search() {
    let campaigns = table_fixture();
    let query = TableQuery {
        search: "brand".to_string(),
        status: StatusFilter::Paused,
        sort: None,
    };

    let view = filter_and_sort(&campaigns, &query);

    assert_eq!(view.visible, 1);
    assert_eq!(view.rows[0].name, "brand - shopping");
}

#[test]
fn no_matches_is_a_valid_empty_view() {
    let campaigns = table_fixture();
    let query = TableQuery {
        search: "does-not-exist".to_string(),
        ..TableQuery::default()
    };

    let view = filter_and_sort(&campaigns, &query);

    assert!(view.rows.is_empty());
    assert_eq!(view.visible, 0);
    assert_eq!(view.total, 4);
}

#[test]
fn numeric_sort_orders_by_value_in_both_directions() {
    let campaigns = table_fixture();

    let ascending = TableQuery {
        sort: Some(SortSpec::ascending(SortKey::Cost)),
        ..TableQuery::default()
    };
    let view = filter_and_sort(&campaigns, &ascending);
    let costs: Vec<f64> = view.rows.iter().map(|row| row.cost).collect();
    assert_eq!(costs, [800.0, 1200.0, 2400.0, 5200.5]);

    let descending = TableQuery {
        sort: Some(SortSpec {
            key: SortKey::Cost,
            direction: SortDirection::Descending,
        }),
        ..TableQuery::default()
    };
    let view = filter_and_sort(&campaigns, &descending);
    let costs: Vec<f64> = view.rows.iter().map(|row| row.cost).collect();
    assert_eq!(costs, [5200.5, 2400.0, 1200.0, 800.0]);
}

#[test]
fn name_sort_ignores_case() {
    let campaigns = table_fixture();
    let query = TableQuery {
        sort: Some(SortSpec::ascending(SortKey::Name)),
        ..TableQuery::default()
    };

    let view = filter_and_sort(&campaigns, &query);

    let names: Vec<&str> = view.rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Brand - Search",
            "brand - shopping",
            "Generic - Display",
            "Remarketing - Web",
        ]
    );
}

#[test]
fn equal_sort_keys_keep_snapshot_order() {
    let campaigns = vec![
        campaign("First", CampaignStatus::Enabled, 1000.0, 10, 0.02),
        campaign("Second", CampaignStatus::Enabled, 1000.0, 20, 0.03),
        campaign("Third", CampaignStatus::Enabled, 1000.0, 30, 0.04),
    ];
    let query = TableQuery {
        sort: Some(SortSpec::ascending(SortKey::Cost)),
        ..TableQuery::default()
    };

    let view = filter_and_sort(&campaigns, &query);

    let names: Vec<&str> = view.rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, ["First", "Second", "Third"]);
}

#[test]
fn sort_toggle_flips_direction_on_the_same_key_and_resets_on_a_new_key() {
    let first = SortSpec::toggled(None, SortKey::Cost);
    assert_eq!(first, SortSpec::ascending(SortKey::Cost));

    let second = SortSpec::toggled(Some(first), SortKey::Cost);
    assert_eq!(
        second,
        SortSpec {
            key: SortKey::Cost,
            direction: SortDirection::Descending,
        }
    );

    let third = SortSpec::toggled(Some(second), SortKey::Cost);
    assert_eq!(third, SortSpec::ascending(SortKey::Cost));

    let switched = SortSpec::toggled(Some(second), SortKey::Name);
    assert_eq!(switched, SortSpec::ascending(SortKey::Name));
}

#[test]
fn campaign_rows_carry_performance_tiers() {
    let campaigns = table_fixture();
    let view = filter_and_sort(&campaigns, &TableQuery::default());

    assert_eq!(view.rows[0].performance, PerformanceTier::High);
    assert_eq!(view.rows[1].performance, PerformanceTier::Low);
    assert_eq!(view.rows[2].performance, PerformanceTier::Medium);
    assert_eq!(view.rows[0].status_label, "Enabled");
}
