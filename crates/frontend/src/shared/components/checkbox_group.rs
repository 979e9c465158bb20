use leptos::prelude::*;
use std::collections::HashSet;

/// Group of checkboxes over a list of string options.
///
/// Selection is owned by the caller: a click reports the option through
/// `on_toggle`, and `selected` drives the checked state.
#[component]
pub fn CheckboxGroup(
    /// Options in display order
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Currently selected options
    #[prop(into)]
    selected: Signal<HashSet<String>>,
    on_toggle: Callback<String>,
    /// Prefix for the input ids
    #[prop(optional, into)]
    id_prefix: String,
) -> impl IntoView {
    let id_prefix = StoredValue::new(if id_prefix.is_empty() {
        "option".to_string()
    } else {
        id_prefix
    });

    view! {
        <div class="checkbox-group">
            <For
                each=move || options.get()
                key=|option| option.clone()
                children=move |option| {
                    let input_id = format!("{}-{}", id_prefix.get_value(), slug(&option));
                    let checked_option = option.clone();
                    let toggled_option = option.clone();
                    view! {
                        <div class="form__checkbox-wrapper">
                            <input
                                id=input_id.clone()
                                type="checkbox"
                                class="form__checkbox"
                                prop:checked=move || selected.with(|s| s.contains(&checked_option))
                                on:change=move |_| on_toggle.run(toggled_option.clone())
                            />
                            <label class="form__checkbox-label" for=input_id>
                                {option}
                            </label>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// "Google Ads" -> "google-ads"
fn slug(value: &str) -> String {
    value
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
