use super::domain::{CampaignRecord, CampaignStatus};
use super::report::views::{CampaignRow, TableView};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    All,
    Enabled,
    Paused,
}

impl StatusFilter {
    fn matches(self, status: CampaignStatus) -> bool {
        match self {
            Self::All => true,
            Self::Enabled => status == CampaignStatus::Enabled,
            Self::Paused => status == CampaignStatus::Paused,
        }
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::All
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Cost,
    Clicks,
    Ctr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Resolves a column-header click: clicking the current ascending key
    /// flips to descending; anything else starts ascending on the new key.
    pub fn toggled(current: Option<SortSpec>, key: SortKey) -> SortSpec {
        match current {
            Some(spec) if spec.key == key && spec.direction == SortDirection::Ascending => {
                SortSpec {
                    key,
                    direction: SortDirection::Descending,
                }
            }
            _ => SortSpec::ascending(key),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TableQuery {
    pub search: String,
    pub status: StatusFilter,
    pub sort: Option<SortSpec>,
}

/// Produces the visible, ordered slice of the campaign table. The sort is
/// stable, so equal keys keep their snapshot order; with no sort key the
/// snapshot order is preserved as-is.
pub fn filter_and_sort(campaigns: &[CampaignRecord], query: &TableQuery) -> TableView {
    let needle = query.search.to_lowercase();

    let mut visible: Vec<&CampaignRecord> = campaigns
        .iter()
        .filter(|campaign| {
            campaign.name.to_lowercase().contains(&needle) && query.status.matches(campaign.status)
        })
        .collect();

    if let Some(spec) = query.sort {
        visible.sort_by(|a, b| {
            let ordering = compare_by_key(a, b, spec.key);
            match spec.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }

    TableView {
        visible: visible.len(),
        total: campaigns.len(),
        rows: visible.into_iter().map(CampaignRow::from_record).collect(),
    }
}

fn compare_by_key(a: &CampaignRecord, b: &CampaignRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Cost => a.cost.total_cmp(&b.cost),
        SortKey::Clicks => a.clicks.cmp(&b.clicks),
        SortKey::Ctr => a.ctr.total_cmp(&b.ctr),
    }
}
