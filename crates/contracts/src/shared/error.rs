use thiserror::Error;

/// Ошибки слоя контрактов дашборда.
///
/// Движок таблицы ошибок наружу не отдаёт: битые даты и страницы вне
/// диапазона просто дают меньше строк. Ошибки возникают только на
/// границах: разбор имён полей, настроек и входных данных.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("unknown campaign field: {0}")]
    UnknownField(String),

    #[error("invalid dashboard settings: {0}")]
    InvalidSettings(String),

    #[error("failed to parse dashboard settings: {0}")]
    SettingsParse(#[from] toml::de::Error),

    #[error("failed to parse campaign data: {0}")]
    MockData(#[from] serde_json::Error),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
