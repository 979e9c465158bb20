use super::date_input::DateInput;
use crate::shared::icons::icon;
use chrono::NaiveDate;
use contracts::dashboards::d100_campaign_overview::DateRange;
use leptos::prelude::*;
use thaw::*;

fn input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// DateRangePicker component - период из двух полей "от" и "до".
///
/// Над полями показывается подпись текущего периода ("Pick a date range",
/// если границы не заданы). Любая граница может отсутствовать.
#[component]
pub fn DateRangePicker(
    /// Текущий период
    #[prop(into)]
    range: Signal<DateRange>,

    /// Callback при изменении периода
    on_change: Callback<DateRange>,

    /// Опциональная метка для компонента
    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let date_from = Signal::derive(move || input_value(range.get().from));
    let date_to = Signal::derive(move || input_value(range.get().to));

    let on_from_change = move |new_from: String| {
        let current_to = date_to.get_untracked();
        on_change.run(DateRange::from_inputs(&new_from, &current_to));
    };

    let on_to_change = move |new_to: String| {
        let current_from = date_from.get_untracked();
        on_change.run(DateRange::from_inputs(&current_from, &new_to));
    };

    view! {
        <div class="date-range-picker">
            {label.map(|text| view! {
                <label class="date-range-picker__label">{text}</label>
            })}
            <div class="date-range-picker__summary">
                {icon("calendar")}
                <span>{move || range.get().label()}</span>
            </div>
            <div class="date-range-picker__inputs">
                <DateInput value=date_from on_change=on_from_change label="From" />
                <span>"-"</span>
                <DateInput value=date_to on_change=on_to_change label="To" />
                <Show when=move || range.get().is_set()>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_change.run(DateRange::default())
                    >
                        {icon("x")}
                    </Button>
                </Show>
            </div>
        </div>
    }
}
