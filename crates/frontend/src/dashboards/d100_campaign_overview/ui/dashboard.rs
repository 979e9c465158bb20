use super::charts::{ConversionChart, RevenueChart, UserAcquisitionChart};
use super::data_table::CampaignDataTable;
use super::metrics::MetricsGrid;
use crate::dashboards::d100_campaign_overview::realtime::use_realtime_metrics;
use crate::shared::components::chart_card::ChartCard;
use crate::shared::components::loading_skeleton::LoadingSkeleton;
use crate::shared::settings::use_dashboard_settings;
use contracts::dashboards::d100_campaign_overview::mock::{
    mock_acquisition, mock_campaigns, mock_conversion_funnel, mock_metrics, mock_revenue,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Имитация первичной загрузки данных
const INITIAL_LOAD_MS: u32 = 2_000;

#[component]
pub fn CampaignOverviewDashboard() -> impl IntoView {
    let settings = use_dashboard_settings();
    let stagger_ms = settings.appearance.stagger_ms;

    let initial_loading = RwSignal::new(true);
    spawn_local(async move {
        TimeoutFuture::new(INITIAL_LOAD_MS).await;
        initial_loading.set(false);
    });

    let realtime = use_realtime_metrics(mock_metrics(), &settings.realtime);

    let campaigns = mock_campaigns().unwrap_or_else(|e| {
        log::error!("failed to load campaign data: {}", e);
        Vec::new()
    });

    let revenue = mock_revenue();
    let acquisition = mock_acquisition();
    let funnel = mock_conversion_funnel();

    view! {
        <div class="dashboard">
            <div class="dashboard__header">
                <h1 class="dashboard__title">"Analytics Dashboard"</h1>
                <p class="dashboard__subtitle">
                    "Track your key metrics and performance insights in real-time."
                </p>
            </div>

            {move || {
                if initial_loading.get() {
                    return view! { <LoadingSkeleton /> }.into_any();
                }

                let revenue = revenue.clone();
                let acquisition = acquisition.clone();
                let funnel = funnel.clone();
                let campaigns = campaigns.clone();
                view! {
                    <div class="dashboard__content">
                        <MetricsGrid metrics=realtime.metrics is_loading=realtime.is_loading />

                        <div class="charts-grid">
                            <ChartCard
                                title="Revenue Trends"
                                style="grid-column: span 2;"
                                delay_ms=stagger_ms * 4
                            >
                                <RevenueChart data=revenue.clone() />
                            </ChartCard>
                            <ChartCard title="User Acquisition" delay_ms=stagger_ms * 5>
                                <UserAcquisitionChart data=acquisition.clone() />
                            </ChartCard>
                            <ChartCard title="Conversion Funnel" delay_ms=stagger_ms * 6>
                                <ConversionChart data=funnel.clone() />
                            </ChartCard>
                        </div>

                        <CampaignDataTable records=campaigns />
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
