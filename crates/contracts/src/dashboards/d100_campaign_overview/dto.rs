use serde::{Deserialize, Serialize};

/// Одна строка таблицы эффективности кампаний.
///
/// Форма записи — внешний контракт: поставщик данных (мок, API, файл)
/// обязан сохранять ровно эти поля. Уникальность `id` не проверяется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub id: String,
    /// ISO 8601, в том виде, в каком пришла дата
    pub date: String,
    pub campaign: String,
    pub channel: String,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub revenue: f64,
    /// Процент 0–100, хранится как есть и не пересчитывается
    pub ctr: f64,
    pub cpa: f64,
}

/// Точка графика выручки по месяцам
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    /// Подпись оси, например "Jan"
    pub name: String,
    pub revenue: f64,
    pub date: String,
}

/// Канал привлечения пользователей
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionPoint {
    pub name: String,
    pub channel: String,
    pub users: u64,
    pub color: String,
}

impl AcquisitionPoint {
    /// Доля канала от `total` в процентах (0 при пустом итоге)
    pub fn share_percent(&self, total: u64) -> f64 {
        if total == 0 {
            0.0
        } else {
            self.users as f64 * 100.0 / total as f64
        }
    }
}

/// Этап воронки конверсии
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionStage {
    pub name: String,
    pub stage: String,
    pub value: u64,
    /// Доля от первого этапа, %
    pub percentage: f64,
    pub color: String,
}
