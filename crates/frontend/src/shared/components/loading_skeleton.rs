use super::chart_card::ChartCardSkeleton;
use super::stat_card::StatCardSkeleton;
use leptos::prelude::*;

/// Placeholder for the whole dashboard during the initial load.
#[component]
pub fn LoadingSkeleton(
    /// Number of metric card placeholders
    #[prop(optional, default = 4)]
    metric_cards: usize,
) -> impl IntoView {
    view! {
        <div class="dashboard-skeleton">
            <div class="metrics-grid">
                {(0..metric_cards).map(|_| view! { <StatCardSkeleton /> }).collect_view()}
            </div>
            <div class="charts-grid">
                <ChartCardSkeleton />
                <ChartCardSkeleton />
            </div>
        </div>
    }
}
