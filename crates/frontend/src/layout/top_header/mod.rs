//! TopHeader component - application top bar.
//!
//! Contains the sidebar toggle, breadcrumb, notifications popover and
//! the theme toggle.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn top-header__menu"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <div class="top-header__breadcrumb">
                    <span>"Dashboard"</span>
                    <span>"/"</span>
                    <span class="top-header__title">"Analytics"</span>
                </div>
            </div>

            <div class="top-header__actions">
                <div class="top-header__popover-anchor">
                    <button
                        class="top-header__icon-btn"
                        on:click=move |_| ctx.toggle_notifications()
                        title="Notifications"
                    >
                        {icon("bell")}
                        <span class="top-header__dot"></span>
                    </button>
                    <Show when=move || ctx.notifications_open.get()>
                        <div class="top-header__popover">
                            {icon("bell")}
                            <h3>"Notifications"</h3>
                            <p>"Notifications feature is not implemented yet."</p>
                        </div>
                    </Show>
                </div>

                <ThemeToggle />
            </div>
        </header>
    }
}
