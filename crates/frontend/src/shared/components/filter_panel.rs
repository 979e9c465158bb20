use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// FilterPanel component - "Filter" button with a popover panel.
///
/// The button carries a dot while any filter is active; the panel header has
/// a "Reset" action and the filter form goes into `children`.
#[component]
pub fn FilterPanel(
    /// Whether the popover is open
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for the badge in the panel header)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Callback for the "Reset" button
    on_reset: Callback<()>,

    /// Filter content (form fields)
    children: ChildrenFn,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Secondary
                on_click=toggle_expanded
            >
                {icon("filter")}
                "Filter"
                <Show when=move || { active_filters_count.get() > 0 }>
                    <span class="filter-panel__dot"></span>
                </Show>
            </Button>

            <Show when=move || is_expanded.get()>
                <div class="filter-panel__popover">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            <span class="filter-panel__title">"Filters"</span>
                            {move || {
                                let count = active_filters_count.get();
                                (count > 0).then(|| view! {
                                    <span class="badge badge--primary">{count}</span>
                                })
                            }}
                        </div>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| on_reset.run(())
                        >
                            "Reset"
                        </Button>
                    </div>
                    <div class="filter-panel-content">
                        {children()}
                    </div>
                </div>
            </Show>
        </div>
    }
}
