use crate::infra::{parse_sort_key, parse_status};
use adpulse::ads::dashboard::{
    DashboardReport, SortDirection, SortKey, SortSpec, StatusFilter, TableQuery,
};
use adpulse::ads::snapshot::Snapshot;
use adpulse::config::AppConfig;
use adpulse::error::AppError;
use chrono::Local;
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Directory containing the processed dashboard JSON resources
    /// (defaults to the configured APP_DATA_DIR)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Case-insensitive substring filter on campaign names
    #[arg(long, default_value = "")]
    pub(crate) query: String,
    /// Restrict the campaign table to one status (all, enabled, paused)
    #[arg(long, value_parser = parse_status, default_value = "all")]
    pub(crate) status: StatusFilter,
    /// Sort the campaign table by this column (name, cost, clicks, ctr)
    #[arg(long, value_parser = parse_sort_key)]
    pub(crate) sort_by: Option<SortKey>,
    /// Sort descending instead of ascending
    #[arg(long)]
    pub(crate) descending: bool,
    /// Include the full campaign table in the output
    #[arg(long)]
    pub(crate) list_campaigns: bool,
}

pub(crate) async fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        data_dir,
        query,
        status,
        sort_by,
        descending,
        list_campaigns,
    } = args;

    let config = AppConfig::load()?;
    let data_dir = data_dir.unwrap_or(config.data.dir);
    let snapshot = Snapshot::load(&data_dir).await?;

    let sort = sort_by.map(|key| SortSpec {
        key,
        direction: if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        },
    });
    let table_query = TableQuery {
        search: query,
        status,
        sort,
    };

    let report = snapshot.report(&table_query);
    render_dashboard(&data_dir, &report, list_campaigns);

    Ok(())
}

fn render_dashboard(data_dir: &Path, report: &DashboardReport, list_campaigns: bool) {
    println!("Campaign dashboard report");
    println!(
        "Data source: {} (generated {})",
        data_dir.display(),
        Local::now().date_naive()
    );

    if let (Some(first), Some(last)) = (report.time_series.first(), report.time_series.last()) {
        println!("Date range: {} -> {}", first.date, last.date);
    }

    println!("\nSummary");
    println!("- Total ad spend: ₹{:.2}", report.summary.total_cost);
    println!("- Total clicks: {}", report.summary.total_clicks);
    println!("- Average CTR: {:.2}%", report.summary.average_ctr * 100.0);
    println!("- Active campaigns: {}", report.summary.enabled_campaigns);
    println!(
        "- Spend vs previous period: {:+.1}%",
        report.summary.cost_change_percent
    );

    if report.insights.is_empty() {
        println!("\nInsights: none");
    } else {
        println!("\nInsights");
        for insight in &report.insights {
            println!(
                "- [{}] {}: {}",
                insight.severity.label(),
                insight.title,
                insight.description
            );
            println!("  Recommendation: {}", insight.recommendation);
        }
    }

    println!(
        "\nCampaigns: {} of {} match the current filters",
        report.table.visible, report.table.total
    );

    if list_campaigns {
        if report.table.rows.is_empty() {
            println!("No campaigns found matching your filters");
        } else {
            for row in &report.table.rows {
                println!(
                    "- {} | {} | ₹{:.2} | {} clicks | {:.2}% CTR | {}",
                    row.name,
                    row.status_label,
                    row.cost,
                    row.clicks,
                    row.ctr * 100.0,
                    row.performance.label()
                );
            }
        }
    }
}
