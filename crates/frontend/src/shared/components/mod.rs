pub mod card_animated;
pub mod chart_card;
pub mod checkbox_group;
pub mod date_input;
pub mod date_range_picker;
pub mod filter_panel;
pub mod loading_skeleton;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
