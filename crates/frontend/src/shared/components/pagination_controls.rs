use crate::shared::icons::icon;
use contracts::dashboards::d100_campaign_overview::pagination::{
    page_items, showing_range, PageItem,
};
use leptos::prelude::*;
use thaw::*;

/// PaginationControls component - "Showing X to Y of N results",
/// Previous/Next and numbered pages with ellipses.
///
/// Hidden while there is at most one page.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Pages shown on each side of the current one before an ellipsis
    #[prop(optional, default = 1)]
    window: usize,
) -> impl IntoView {
    let summary = move || {
        let total = total_count.get();
        match showing_range(total, current_page.get(), page_size.get()) {
            Some((from, to)) => format!("Showing {} to {} of {} results", from, to, total),
            None => format!("{} results", total),
        }
    };

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination-controls">
                <div class="pagination-info">{summary}</div>
                <div class="pagination-buttons">
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || current_page.get() <= 1)
                        on_click=move |_| {
                            let page = current_page.get();
                            if page > 1 {
                                on_page_change.run(page - 1);
                            }
                        }
                    >
                        {icon("chevron-left")}
                        "Previous"
                    </Button>
                    {move || {
                        let current = current_page.get();
                        page_items(current, total_pages.get(), window)
                            .into_iter()
                            .map(|item| match item {
                                PageItem::Page(page) => {
                                    let appearance = if page == current {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Secondary
                                    };
                                    view! {
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=appearance
                                            class="pagination-btn"
                                            on_click=move |_| on_page_change.run(page)
                                        >
                                            {page.to_string()}
                                        </Button>
                                    }
                                    .into_any()
                                }
                                PageItem::Ellipsis => view! {
                                    <span class="pagination-ellipsis">"..."</span>
                                }
                                .into_any(),
                            })
                            .collect_view()
                    }}
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || current_page.get() >= total_pages.get())
                        on_click=move |_| {
                            let page = current_page.get();
                            if page < total_pages.get() {
                                on_page_change.run(page + 1);
                            }
                        }
                    >
                        "Next"
                        {icon("chevron-right")}
                    </Button>
                </div>
            </div>
        </Show>
    }
}
