//! Графики дашборда на чистом HTML/SVG: столбцы выручки, доли каналов
//! привлечения и воронка конверсии.

use crate::shared::components::table::{format_currency, format_number_int};
use contracts::dashboards::d100_campaign_overview::{
    AcquisitionPoint, ConversionStage, RevenuePoint,
};
use leptos::prelude::*;

const PLOT_HEIGHT: f64 = 200.0;

/// Высота столбца в процентах от максимального значения серии
fn bar_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}

/// Короткая подпись оси: 210000 -> "$210k"
fn axis_label(value: f64) -> String {
    if value.abs() >= 1_000.0 {
        format!("${}k", (value / 1_000.0).round() as i64)
    } else {
        format_currency(value)
    }
}

#[component]
pub fn RevenueChart(data: Vec<RevenuePoint>) -> impl IntoView {
    let max = data.iter().map(|p| p.revenue).fold(0.0_f64, f64::max);
    let bar_width = 100.0 / data.len().max(1) as f64;

    let bars = data
        .into_iter()
        .enumerate()
        .map(|(i, point)| {
            let height = bar_percent(point.revenue, max) * PLOT_HEIGHT / 100.0;
            let x = i as f64 * bar_width + bar_width * 0.15;
            let title = format!("{}: {}", point.name, format_currency(point.revenue));
            view! {
                <g class="revenue-chart__bar">
                    <rect
                        x=format!("{:.2}%", x)
                        y=(PLOT_HEIGHT - height).to_string()
                        width=format!("{:.2}%", bar_width * 0.7)
                        height=height.to_string()
                        rx="3"
                    >
                        <title>{title}</title>
                    </rect>
                    <text
                        x=format!("{:.2}%", x + bar_width * 0.35)
                        y=(PLOT_HEIGHT + 16.0).to_string()
                        text-anchor="middle"
                        class="chart-axis-label"
                    >
                        {point.name}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="revenue-chart">
            <div class="revenue-chart__scale">
                <span>{axis_label(max)}</span>
                <span>{axis_label(max / 2.0)}</span>
                <span>"$0"</span>
            </div>
            <svg
                class="revenue-chart__plot"
                width="100%"
                height=(PLOT_HEIGHT + 24.0).to_string()
                preserveAspectRatio="none"
            >
                {bars}
            </svg>
        </div>
    }
}

#[component]
pub fn UserAcquisitionChart(data: Vec<AcquisitionPoint>) -> impl IntoView {
    let total: u64 = data.iter().map(|p| p.users).sum();

    view! {
        <div class="acquisition-chart">
            {data
                .into_iter()
                .map(|point| {
                    let share = point.share_percent(total);
                    let swatch = format!("background: {};", point.color);
                    let fill = format!("width: {:.1}%; background: {};", share, point.color);
                    view! {
                        <div class="acquisition-chart__row">
                            <span class="acquisition-chart__swatch" style=swatch></span>
                            <span class="acquisition-chart__name">{point.name}</span>
                            <div class="acquisition-chart__track">
                                <div class="acquisition-chart__fill" style=fill></div>
                            </div>
                            <span class="acquisition-chart__value">
                                {format_number_int(point.users as f64)}
                            </span>
                            <span class="acquisition-chart__share">{format!("{:.1}%", share)}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ConversionChart(data: Vec<ConversionStage>) -> impl IntoView {
    view! {
        <div class="funnel-chart">
            {data
                .into_iter()
                .map(|stage| {
                    let style = format!(
                        "width: {:.1}%; background: {};",
                        stage.percentage.clamp(2.0, 100.0),
                        stage.color
                    );
                    view! {
                        <div class="funnel-chart__stage">
                            <div class="funnel-chart__label">
                                <span>{stage.name}</span>
                                <span class="funnel-chart__value">
                                    {format_number_int(stage.value as f64)}
                                    " ("
                                    {format!("{}%", stage.percentage)}
                                    ")"
                                </span>
                            </div>
                            <div class="funnel-chart__bar" style=style></div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_percent() {
        assert_eq!(bar_percent(105_000.0, 210_000.0), 50.0);
        assert_eq!(bar_percent(10.0, 0.0), 0.0);
        assert_eq!(bar_percent(-5.0, 10.0), 0.0);
    }

    #[test]
    fn test_axis_label() {
        assert_eq!(axis_label(210_000.0), "$210k");
        assert_eq!(axis_label(0.0), "$0");
    }
}
