use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Metric cards
// ---------------------------------------------------------------------------

/// Direction of change relative to the previous period (drives colour and icon).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Neutral,
}

impl Trend {
    /// Derive the trend from a signed change percentage.
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            Trend::Up
        } else if change < 0.0 {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Neutral => "neutral",
        }
    }
}

/// How the card renders its primary value, resolved from prefix/suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// `$` prefix: whole US dollars with thousands separators.
    Currency,
    /// `%` suffix: raw value followed by `%`.
    Percent,
    /// Plain integer with thousands separators.
    Integer,
}

/// One KPI card on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricData {
    pub id: String,
    pub title: String,
    pub value: f64,
    /// Change relative to previous period, expressed as a percentage.
    pub change: f64,
    pub trend: Trend,
    /// Icon name from the frontend icon() helper.
    pub icon: String,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl MetricData {
    pub fn value_format(&self) -> ValueFormat {
        if self.prefix.as_deref() == Some("$") {
            ValueFormat::Currency
        } else if self.suffix.as_deref() == Some("%") {
            ValueFormat::Percent
        } else {
            ValueFormat::Integer
        }
    }

    /// Signed change label, e.g. `+12.5%` or `-2.3%`.
    pub fn change_label(&self) -> String {
        if self.change > 0.0 {
            format!("+{}%", self.change)
        } else {
            format!("{}%", self.change)
        }
    }
}
