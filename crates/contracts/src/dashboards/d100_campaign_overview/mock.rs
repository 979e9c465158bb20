//! Статические демо-данные дашборда.
//!
//! Таблица кампаний хранится как JSON и разбирается через serde, чтобы
//! мок проходил ту же границу ввода, что и реальный источник данных.

use super::dto::{AcquisitionPoint, CampaignRecord, ConversionStage, RevenuePoint};
use crate::shared::error::DashboardResult;
use crate::shared::indicators::{MetricData, Trend};

const MOCK_CAMPAIGNS_JSON: &str = include_str!("mock_campaigns.json");

/// Разбирает записи кампаний из JSON-массива.
pub fn parse_campaigns(json: &str) -> DashboardResult<Vec<CampaignRecord>> {
    let records: Vec<CampaignRecord> = serde_json::from_str(json)?;
    log::debug!("parsed {} campaign records", records.len());
    Ok(records)
}

/// Демо-набор из пяти кампаний
pub fn mock_campaigns() -> DashboardResult<Vec<CampaignRecord>> {
    parse_campaigns(MOCK_CAMPAIGNS_JSON)
}

fn metric(
    id: &str,
    title: &str,
    value: f64,
    change: f64,
    icon: &str,
    prefix: Option<&str>,
    suffix: Option<&str>,
) -> MetricData {
    MetricData {
        id: id.to_string(),
        title: title.to_string(),
        value,
        change,
        trend: Trend::from_change(change),
        icon: icon.to_string(),
        prefix: prefix.map(str::to_string),
        suffix: suffix.map(str::to_string),
        color: None,
    }
}

pub fn mock_metrics() -> Vec<MetricData> {
    vec![
        metric("revenue", "Total Revenue", 142_850.0, 12.5, "dollar-sign", Some("$"), None),
        metric("users", "Active Users", 8_492.0, -2.3, "users", None, None),
        metric("conversions", "Conversions", 347.0, 8.1, "target", None, None),
        metric("growth", "Growth Rate", 15.8, 4.2, "trending-up", None, Some("%")),
    ]
}

pub fn mock_revenue() -> Vec<RevenuePoint> {
    const MONTHS: [(&str, f64); 12] = [
        ("Jan", 120_000.0),
        ("Feb", 135_000.0),
        ("Mar", 128_000.0),
        ("Apr", 142_000.0),
        ("May", 156_000.0),
        ("Jun", 148_000.0),
        ("Jul", 162_000.0),
        ("Aug", 175_000.0),
        ("Sep", 168_000.0),
        ("Oct", 182_000.0),
        ("Nov", 195_000.0),
        ("Dec", 210_000.0),
    ];

    MONTHS
        .iter()
        .enumerate()
        .map(|(i, (name, revenue))| RevenuePoint {
            name: name.to_string(),
            revenue: *revenue,
            date: format!("2024-{:02}-01", i + 1),
        })
        .collect()
}

pub fn mock_acquisition() -> Vec<AcquisitionPoint> {
    [
        ("Organic Search", "organic", 3420, "#8884d8"),
        ("Paid Search", "paid", 2340, "#82ca9d"),
        ("Social Media", "social", 1890, "#ffc658"),
        ("Email", "email", 1250, "#ff7300"),
        ("Direct", "direct", 980, "#00c49f"),
        ("Referral", "referral", 640, "#0088fe"),
    ]
    .into_iter()
    .map(|(name, channel, users, color)| AcquisitionPoint {
        name: name.to_string(),
        channel: channel.to_string(),
        users,
        color: color.to_string(),
    })
    .collect()
}

pub fn mock_conversion_funnel() -> Vec<ConversionStage> {
    [
        ("Visitors", "visitors", 10_000, 100.0, "#8884d8"),
        ("Leads", "leads", 2_500, 25.0, "#82ca9d"),
        ("Prospects", "prospects", 750, 7.5, "#ffc658"),
        ("Customers", "customers", 150, 1.5, "#ff7300"),
    ]
    .into_iter()
    .map(|(name, stage, value, percentage, color)| ConversionStage {
        name: name.to_string(),
        stage: stage.to_string(),
        value,
        percentage,
        color: color.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::DashboardError;

    #[test]
    fn test_mock_campaigns_parse() {
        let records = mock_campaigns().unwrap();
        assert_eq!(records.len(), 5);
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
        assert_eq!(records[3].revenue, 17_400.0);
        assert_eq!(records[0].ctr, 4.02);
    }

    #[test]
    fn test_parse_campaigns_rejects_missing_field() {
        let err = parse_campaigns(r#"[{"id": "1"}]"#).unwrap_err();
        assert!(matches!(err, DashboardError::MockData(_)));
    }

    #[test]
    fn test_mock_shapes() {
        assert_eq!(mock_metrics().len(), 4);
        assert_eq!(mock_metrics()[1].trend, Trend::Down);
        let revenue = mock_revenue();
        assert_eq!(revenue.len(), 12);
        assert_eq!(revenue[11].date, "2024-12-01");
        assert_eq!(mock_acquisition().len(), 6);
        assert_eq!(mock_conversion_funnel()[0].percentage, 100.0);
    }
}
