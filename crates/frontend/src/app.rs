use crate::dashboards::CampaignOverviewDashboard;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::settings::settings_or_default;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Settings are parsed once and shared through context.
    let settings = settings_or_default();
    provide_context(settings.clone());

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    let default_theme = settings.appearance.default_theme.clone();

    view! {
        <ThemeProvider default_theme=default_theme>
            <Shell center=|| view! { <CampaignOverviewDashboard /> }.into_any() />
        </ThemeProvider>
    }
}
