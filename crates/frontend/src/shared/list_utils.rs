use crate::shared::icons::icon;
use contracts::dashboards::d100_campaign_overview::{CampaignField, SortDirection, SortState};
use leptos::prelude::*;

/// Индикатор сортировки для заголовка колонки
pub fn get_sort_indicator(sort: &SortState, field: CampaignField) -> &'static str {
    sort.direction_for(field).indicator()
}

/// CSS-класс индикатора: активная колонка подсвечивается
pub fn get_sort_class(sort: &SortState, field: CampaignField) -> &'static str {
    match sort.direction_for(field) {
        SortDirection::None => "sort-icon",
        SortDirection::Ascending | SortDirection::Descending => "sort-icon sort-icon--active",
    }
}

/// Поле поиска с иконкой и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let clear_filter = move |_| {
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().is_empty()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    on_change.run(event_target_value(&ev));
                }
            />
            <Show when=move || !value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        let sort = SortState::default().toggle(CampaignField::Revenue);
        assert_eq!(get_sort_indicator(&sort, CampaignField::Revenue), "▲");
        assert_eq!(get_sort_indicator(&sort, CampaignField::Clicks), "⇅");

        let sort = sort.toggle(CampaignField::Revenue);
        assert_eq!(get_sort_indicator(&sort, CampaignField::Revenue), "▼");
        assert_eq!(get_sort_class(&sort, CampaignField::Revenue), "sort-icon sort-icon--active");
        assert_eq!(get_sort_class(&sort, CampaignField::Date), "sort-icon");
    }
}
