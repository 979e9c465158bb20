use super::card_animated::CardAnimated;
use leptos::prelude::*;

/// Skeleton of a chart card: title bar and the plot area.
#[component]
pub fn ChartCardSkeleton() -> impl IntoView {
    view! {
        <div class="chart-card chart-card--loading">
            <div class="skeleton skeleton--title"></div>
            <div class="skeleton skeleton--plot"></div>
        </div>
    }
}

/// Card with a title row for a chart.
#[component]
pub fn ChartCard(
    #[prop(into)] title: String,
    #[prop(into, optional)] is_loading: Signal<bool>,
    /// Extra inline style, e.g. a grid span
    #[prop(optional, into)]
    style: String,
    #[prop(optional)] delay_ms: u32,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <CardAnimated delay_ms=delay_ms style=style>
            {move || {
                if is_loading.get() {
                    view! { <ChartCardSkeleton /> }.into_any()
                } else {
                    view! {
                        <div class="chart-card">
                            <div class="chart-card__header">
                                <h3 class="chart-card__title">{title.clone()}</h3>
                            </div>
                            <div class="chart-card__body">{children()}</div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </CardAnimated>
    }
}
