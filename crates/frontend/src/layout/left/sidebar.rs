//! Sidebar with the navigation list and its own collapse toggle.
//! Collapsed state is shared with the top header via `AppGlobalContext`.

use crate::layout::global_context::{AppGlobalContext, ANALYTICS_KEY};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
struct NavItem {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    disabled: bool,
}

fn get_nav_items() -> Vec<NavItem> {
    vec![NavItem {
        id: ANALYTICS_KEY,
        label: "Analytics Dashboard",
        icon: "bar-chart",
        disabled: false,
    }]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let is_open = move || ctx.left_open.get();

    view! {
        <div class="app-sidebar">
            <div class="app-sidebar__header">
                <Show when=is_open>
                    <div class="app-sidebar__brand">{icon("bar-chart")}</div>
                </Show>
                <button
                    class="app-sidebar__toggle"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_open() { "Collapse sidebar" } else { "Expand sidebar" }
                >
                    {move || if is_open() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
            </div>

            <nav class="app-sidebar__content">
                {get_nav_items().into_iter().map(|item| {
                    let item_id = StoredValue::new(item.id.to_string());
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                ctx.active.get() == item_id.get_value()
                            }
                            class:app-sidebar__item--disabled=item.disabled
                            title=item.label
                            on:click=move |_| {
                                if !item.disabled {
                                    ctx.activate(item.id);
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(item.icon)}
                                <Show when=is_open>
                                    <span>{item.label}</span>
                                </Show>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </nav>
        </div>
    }
}
