use crate::shared::error::{DashboardError, DashboardResult};
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct DashboardSettings {
    #[serde(default)]
    pub table: TableSettings,
    #[serde(default)]
    pub realtime: RealtimeSettings,
    #[serde(default)]
    pub appearance: AppearanceSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TableSettings {
    /// Размер страницы таблицы кампаний
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    /// Сколько соседних страниц показывать вокруг текущей до многоточия
    #[serde(default = "default_page_window")]
    pub page_window: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RealtimeSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppearanceSettings {
    /// "light" или "dark"
    #[serde(default = "default_theme")]
    pub default_theme: String,
    /// Задержка между появлением соседних карточек, мс
    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: u32,
}

fn default_items_per_page() -> usize {
    5
}

fn default_page_window() -> usize {
    1
}

fn default_interval_ms() -> u32 {
    10_000
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_stagger_ms() -> u32 {
    100
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            page_window: default_page_window(),
        }
    }
}

impl Default for RealtimeSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_ms: default_interval_ms(),
        }
    }
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            default_theme: default_theme(),
            stagger_ms: default_stagger_ms(),
        }
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_SETTINGS: &str = r#"
[table]
items_per_page = 5
page_window = 1

[realtime]
enabled = false
interval_ms = 10000

[appearance]
default_theme = "light"
stagger_ms = 100
"#;

static DEFAULTS: Lazy<DashboardSettings> = Lazy::new(|| {
    parse_settings(DEFAULT_SETTINGS).unwrap_or_else(|e| {
        log::warn!("embedded dashboard settings rejected ({}), using built-in defaults", e);
        DashboardSettings::default()
    })
});

impl DashboardSettings {
    /// Настройки по умолчанию (разобраны из [`DEFAULT_SETTINGS`] один раз)
    pub fn defaults() -> &'static DashboardSettings {
        &DEFAULTS
    }

    fn validate(self) -> DashboardResult<Self> {
        if self.table.items_per_page == 0 {
            return Err(DashboardError::InvalidSettings(
                "table.items_per_page must be greater than zero".to_string(),
            ));
        }
        if !matches!(self.appearance.default_theme.as_str(), "light" | "dark") {
            return Err(DashboardError::InvalidSettings(format!(
                "appearance.default_theme must be \"light\" or \"dark\", got \"{}\"",
                self.appearance.default_theme
            )));
        }
        Ok(self)
    }
}

/// Parse and validate settings from a TOML document.
///
/// Missing sections and keys fall back to their defaults, so an empty
/// document is valid.
pub fn parse_settings(source: &str) -> DashboardResult<DashboardSettings> {
    let settings: DashboardSettings = toml::from_str(source)?;
    settings.validate()
}
