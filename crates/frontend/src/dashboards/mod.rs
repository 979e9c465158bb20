pub mod d100_campaign_overview;

pub use d100_campaign_overview::ui::CampaignOverviewDashboard;
