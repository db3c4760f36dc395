pub mod domain;
mod format;
pub mod report;
pub mod table;

pub use report::views::DashboardReport;
pub use table::{filter_and_sort, SortDirection, SortKey, SortSpec, StatusFilter, TableQuery};
