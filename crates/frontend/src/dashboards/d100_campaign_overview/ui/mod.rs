pub mod charts;
pub mod dashboard;
pub mod data_table;
pub mod metrics;

pub use dashboard::CampaignOverviewDashboard;
