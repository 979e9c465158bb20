use leptos::prelude::*;

/// DateInput component with native date picker
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format, empty when cleared)
    on_change: impl Fn(String) + 'static,
    /// Accessible label, also used as the title
    #[prop(optional, into)]
    label: String,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="date-input"
            aria-label=label.clone()
            title=label
            prop:value=value
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
