pub mod realtime;
pub mod state;
pub mod ui;
