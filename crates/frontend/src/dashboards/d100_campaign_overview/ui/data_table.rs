use crate::dashboards::d100_campaign_overview::state::{create_state, CampaignTableState};
use crate::shared::components::checkbox_group::CheckboxGroup;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{
    format_currency, format_number_int, format_percent, SortableHeaderCell,
};
use crate::shared::date_utils::format_date;
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::settings::use_dashboard_settings;
use contracts::dashboards::d100_campaign_overview::query::filter_and_sort;
use contracts::dashboards::d100_campaign_overview::{
    available_channels, clamp_page, query, CampaignField, CampaignRecord, DateRange,
    QueryResult,
};
use leptos::prelude::*;
use thaw::*;

const EXPORT_FILENAME: &str = "campaigns.csv";

/// Цвет бейджа канала
fn get_channel_color(channel: &str) -> BadgeColor {
    match channel {
        "Google Ads" => BadgeColor::Brand,
        "Facebook Ads" => BadgeColor::Informative,
        "LinkedIn Ads" => BadgeColor::Success,
        "Email" => BadgeColor::Danger,
        _ => BadgeColor::Subtle,
    }
}

/// Таблица "Campaign Performance": поиск, фильтры, сортировка, пагинация и экспорт.
#[component]
pub fn CampaignDataTable(records: Vec<CampaignRecord>) -> impl IntoView {
    let settings = use_dashboard_settings();
    let page_window = settings.table.page_window;

    let CampaignTableState {
        query: state,
        filters_open,
    } = create_state(&settings.table);
    let records = StoredValue::new(records);

    let channels = Memo::new(move |_| records.with_value(|r| available_channels(r)));
    let result: Memo<QueryResult> =
        Memo::new(move |_| state.with(|s| records.with_value(|r| query(r, s))));

    let search_value = Signal::derive(move || state.with(|s| s.search_term.clone()));
    let sort = Signal::derive(move || state.with(|s| s.sort));
    let date_range = Signal::derive(move || state.with(|s| s.date_range));
    let active_filters_count = Signal::derive(move || state.with(|s| s.active_filters_count()));
    let current_page = Signal::derive(move || state.with(|s| s.current_page));
    let page_size = Signal::derive(move || state.with(|s| s.items_per_page));
    let total_pages = Signal::derive(move || result.with(|r| r.page_count));
    let total_count = Signal::derive(move || result.with(|r| r.total_count));

    let on_search = Callback::new(move |term: String| {
        state.update(|s| s.set_search(term));
    });
    let on_sort = Callback::new(move |field: CampaignField| {
        state.update(|s| s.toggle_sort(field));
    });
    let on_date_range = Callback::new(move |range: DateRange| {
        state.update(|s| s.set_date_range(range));
    });
    let on_reset = Callback::new(move |_: ()| {
        state.update(|s| s.reset_filters());
    });
    let selected_channels = Signal::derive(move || state.with(|s| s.selected_channels.clone()));
    let on_toggle_channel = Callback::new(move |channel: String| {
        state.update(|s| s.toggle_channel(&channel));
    });
    let on_page_change = Callback::new(move |page: usize| {
        let page = clamp_page(page, total_pages.get_untracked());
        state.update(|s| s.set_page(page));
    });

    let on_export = move |_| {
        let rows: Vec<CampaignRecord> = state.with_untracked(|s| {
            records.with_value(|r| filter_and_sort(r, s).into_iter().cloned().collect())
        });
        if let Err(e) = export_to_csv(&rows, EXPORT_FILENAME) {
            log::error!("campaign export failed: {:#}", e);
        }
    };

    view! {
        <div class="data-table card">
            <div class="data-table__header">
                <h3 class="data-table__title">"Campaign Performance"</h3>
                <div class="data-table__toolbar">
                    <SearchInput
                        value=search_value
                        on_change=on_search
                        placeholder="Search campaigns..."
                    />
                    <FilterPanel
                        is_expanded=filters_open
                        active_filters_count=active_filters_count
                        on_reset=on_reset
                    >
                        <div class="filter-panel__section">
                            <DateRangePicker
                                range=date_range
                                on_change=on_date_range
                                label="Date Range".to_string()
                            />
                        </div>
                        <div class="filter-panel__section">
                            <div class="filter-panel__section-title">"Channels"</div>
                            <CheckboxGroup
                                options=channels
                                selected=selected_channels
                                on_toggle=on_toggle_channel
                                id_prefix="channel"
                            />
                        </div>
                    </FilterPanel>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Secondary
                        on_click=on_export
                    >
                        {icon("download")}
                        "Export"
                    </Button>
                </div>
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell field=CampaignField::Date sort=sort on_sort=on_sort min_width=110.0 />
                            <SortableHeaderCell field=CampaignField::Campaign sort=sort on_sort=on_sort min_width=200.0 />
                            <SortableHeaderCell field=CampaignField::Channel sort=sort on_sort=on_sort min_width=130.0 />
                            <SortableHeaderCell field=CampaignField::Impressions sort=sort on_sort=on_sort align="right" />
                            <SortableHeaderCell field=CampaignField::Clicks sort=sort on_sort=on_sort align="right" min_width=80.0 />
                            <SortableHeaderCell field=CampaignField::Ctr sort=sort on_sort=on_sort align="right" min_width=80.0 />
                            <SortableHeaderCell field=CampaignField::Conversions sort=sort on_sort=on_sort align="right" />
                            <SortableHeaderCell field=CampaignField::Revenue sort=sort on_sort=on_sort align="right" />
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = result.with(|r| r.rows.clone());
                            if rows.is_empty() {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="8">
                                            <div class="data-table__empty">
                                                "No campaigns match the current filters"
                                            </div>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }
                            rows.into_iter()
                                .map(|row| view! { <CampaignRow row=row /> })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </div>

            <PaginationControls
                current_page=current_page
                total_pages=total_pages
                total_count=total_count
                page_size=page_size
                on_page_change=on_page_change
                window=page_window
            />
        </div>
    }
}

#[component]
fn CampaignRow(row: CampaignRecord) -> impl IntoView {
    let color = get_channel_color(&row.channel);

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout>{format_date(&row.date)}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>
                    <span class="data-table__campaign">{row.campaign}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <Badge appearance=BadgeAppearance::Tint color=color>
                        {row.channel}
                    </Badge>
                </TableCellLayout>
            </TableCell>
            <TableCell class="text-right">
                {format_number_int(row.impressions as f64)}
            </TableCell>
            <TableCell class="text-right">
                {format_number_int(row.clicks as f64)}
            </TableCell>
            <TableCell class="text-right">{format_percent(row.ctr)}</TableCell>
            <TableCell class="text-right">
                {format_number_int(row.conversions as f64)}
            </TableCell>
            <TableCell class="text-right data-table__revenue">
                {format_currency(row.revenue)}
            </TableCell>
        </TableRow>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_colors() {
        assert!(matches!(get_channel_color("Google Ads"), BadgeColor::Brand));
        assert!(matches!(get_channel_color("Email"), BadgeColor::Danger));
        assert!(matches!(get_channel_color("TikTok"), BadgeColor::Subtle));
    }
}
