pub mod d100_campaign_overview;
