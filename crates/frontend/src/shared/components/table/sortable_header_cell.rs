//! Компонент сортируемой ячейки заголовка таблицы кампаний
//!
//! ```ignore
//! <SortableHeaderCell
//!     field=CampaignField::Revenue
//!     align="right"
//!     sort=Signal::derive(move || state.with(|s| s.query.sort))
//!     on_sort=Callback::new(move |field| toggle_sort(field))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::dashboards::d100_campaign_overview::{CampaignField, SortState};
use leptos::prelude::*;
use thaw::*;

/// Ячейка заголовка с индикатором ⇅ / ▲ / ▼.
///
/// Колонки, для которых `CampaignField::is_sortable()` ложно, рисуются
/// без индикатора и не реагируют на клик.
#[component]
pub fn SortableHeaderCell(
    /// Колонка
    field: CampaignField,

    /// Текущая сортировка таблицы
    #[prop(into)]
    sort: Signal<SortState>,

    /// Callback при клике на заголовок
    on_sort: Callback<CampaignField>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,

    /// Можно ли изменять размер колонки
    #[prop(optional, default = true)]
    resizable: bool,
) -> impl IntoView {
    let sortable = field.is_sortable();

    let header_style = match (align, sortable) {
        ("right", true) => "cursor: pointer; justify-content: flex-end; padding-right: 12px;",
        ("right", false) => "justify-content: flex-end; padding-right: 12px;",
        (_, true) => "cursor: pointer; padding-right: 12px;",
        (_, false) => "padding-right: 12px;",
    };

    let handle_click = move |_| {
        if sortable {
            on_sort.run(field);
        }
    };

    view! {
        <TableHeaderCell resizable=resizable min_width=min_width class="resizable">
            <div class="table__sortable-header" style=header_style on:click=handle_click>
                {field.label()}
                {sortable.then(|| view! {
                    <span class=move || get_sort_class(&sort.get(), field)>
                        {move || get_sort_indicator(&sort.get(), field)}
                    </span>
                })}
            </div>
        </TableHeaderCell>
    }
}
