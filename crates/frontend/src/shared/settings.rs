//! Dashboard settings embedded at compile time from `dashboard.toml`.

use anyhow::Context;
use contracts::shared::settings::{parse_settings, DashboardSettings};
use leptos::prelude::*;

const DASHBOARD_TOML: &str = include_str!("../../dashboard.toml");

/// Parse the embedded `dashboard.toml`.
pub fn load_settings() -> anyhow::Result<DashboardSettings> {
    parse_settings(DASHBOARD_TOML).context("Failed to load dashboard.toml")
}

/// Embedded settings, or the built-in defaults if they are rejected.
pub fn settings_or_default() -> DashboardSettings {
    match load_settings() {
        Ok(settings) => {
            log::info!(
                "dashboard settings loaded: {} rows per page, theme '{}'",
                settings.table.items_per_page,
                settings.appearance.default_theme
            );
            settings
        }
        Err(e) => {
            log::error!("{:#}; using built-in defaults", e);
            DashboardSettings::defaults().clone()
        }
    }
}

/// Settings provided by `App`; defaults outside of it.
pub fn use_dashboard_settings() -> DashboardSettings {
    use_context::<DashboardSettings>().unwrap_or_else(|| DashboardSettings::defaults().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_settings_are_valid() {
        let settings = load_settings().unwrap();
        assert_eq!(settings.table.items_per_page, 5);
        assert_eq!(settings.table.page_window, 1);
        assert_eq!(settings.realtime.interval_ms, 15000);
        assert_eq!(settings.appearance.default_theme, "light");
    }
}
