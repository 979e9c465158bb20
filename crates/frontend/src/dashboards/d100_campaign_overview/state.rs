use contracts::dashboards::d100_campaign_overview::QueryState;
use contracts::shared::settings::TableSettings;
use leptos::prelude::*;

/// Реактивное состояние таблицы кампаний
#[derive(Clone, Copy)]
pub struct CampaignTableState {
    // Поиск, фильтры, сортировка, страница
    pub query: RwSignal<QueryState>,

    // Открыт ли поповер фильтров
    pub filters_open: RwSignal<bool>,
}

pub fn create_state(settings: &TableSettings) -> CampaignTableState {
    CampaignTableState {
        query: RwSignal::new(QueryState::with_settings(settings)),
        filters_open: RwSignal::new(false),
    }
}
