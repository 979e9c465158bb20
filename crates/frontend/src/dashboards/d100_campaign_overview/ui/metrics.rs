use crate::shared::components::stat_card::StatCard;
use crate::shared::settings::use_dashboard_settings;
use contracts::shared::indicators::MetricData;
use leptos::prelude::*;

/// Ряд KPI-карточек с поочерёдным появлением
#[component]
pub fn MetricsGrid(
    #[prop(into)] metrics: Signal<Vec<MetricData>>,
    #[prop(into, optional)] is_loading: Signal<bool>,
) -> impl IntoView {
    let stagger_ms = use_dashboard_settings().appearance.stagger_ms;

    view! {
        <div class="metrics-grid">
            {move || {
                metrics
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(i, metric)| {
                        let delay_ms = stagger_ms.saturating_mul(i as u32);
                        view! { <StatCard metric=metric is_loading=is_loading delay_ms=delay_ms /> }
                    })
                    .collect_view()
            }}
        </div>
    }
}
