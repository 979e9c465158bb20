pub mod error;
pub mod indicators;
pub mod settings;
