//! UI Components

mod column_view;
mod dashboard_tabs;
mod dashboard_view;
mod group_view;
mod item_row;

pub use column_view::ColumnView;
pub use dashboard_tabs::DashboardTabs;
pub use dashboard_view::DashboardView;
pub use group_view::GroupView;
pub use item_row::ItemRow;
