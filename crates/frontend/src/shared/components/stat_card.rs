use super::card_animated::CardAnimated;
use super::table::format_metric_value;
use crate::shared::icons::icon;
use contracts::shared::indicators::{MetricData, Trend};
use leptos::prelude::*;

fn trend_class(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "stat-card__change stat-card__change--up",
        Trend::Down => "stat-card__change stat-card__change--down",
        Trend::Neutral => "stat-card__change stat-card__change--flat",
    }
}

fn trend_icon(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "trending-up",
        Trend::Down => "trending-down",
        Trend::Neutral => "minus",
    }
}

/// Placeholder with the same footprint as a metric card.
#[component]
pub fn StatCardSkeleton() -> impl IntoView {
    view! {
        <div class="stat-card stat-card--loading">
            <div class="skeleton skeleton--label"></div>
            <div class="skeleton skeleton--value"></div>
            <div class="stat-card__skeleton-row">
                <div class="skeleton skeleton--icon"></div>
                <div class="skeleton skeleton--change"></div>
            </div>
        </div>
    }
}

/// KPI card: title, formatted value, trend with "vs last month".
#[component]
pub fn StatCard(
    metric: MetricData,
    /// Show the skeleton instead of the value
    #[prop(into, optional)]
    is_loading: Signal<bool>,
    /// Appear animation delay, ms
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let value = format_metric_value(&metric);
    let change = metric.change_label();
    let icon_style = metric
        .color
        .as_ref()
        .map(|color| format!("color: {};", color))
        .unwrap_or_default();

    move || {
        if is_loading.get() {
            return view! { <StatCardSkeleton /> }.into_any();
        }

        let metric = metric.clone();
        let value = value.clone();
        let change = change.clone();
        let icon_style = icon_style.clone();
        view! {
            <CardAnimated delay_ms=delay_ms>
                <div class="stat-card" title=metric.title.clone()>
                    <div class="stat-card__content">
                        <div class="stat-card__label">{metric.title.clone()}</div>
                        <div class="stat-card__value">{value}</div>
                        <div class=trend_class(metric.trend)>
                            {icon(trend_icon(metric.trend))}
                            <span>{change}</span>
                            <span class="stat-card__subtitle">"vs last month"</span>
                        </div>
                    </div>
                    <div class="stat-card__icon" style=icon_style>
                        {icon(&metric.icon)}
                    </div>
                </div>
            </CardAnimated>
        }
        .into_any()
    }
}
