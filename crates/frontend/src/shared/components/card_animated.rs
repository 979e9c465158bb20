//! CardAnimated — обёртка над Thaw Card с анимацией появления.
//!
//! Анимация определена в CSS (`@keyframes card-appear`).
//!
//! ```ignore
//! // С каскадной задержкой для stagger-эффекта
//! <CardAnimated delay_ms=0>   // карточка 1
//! <CardAnimated delay_ms=100> // карточка 2
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Стиль анимации `card-appear` с задержкой и дополнительными стилями
pub fn appear_style(delay_ms: u32, extra: &str) -> String {
    if extra.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, extra
        )
    }
}

/// Обёртка над Thaw [`Card`] с анимацией `card-appear`.
#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительные inline-стили (добавляются после стилей анимации).
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = appear_style(delay_ms, &style);

    view! {
        <Card attr:style=full_style>
            {children()}
        </Card>
    }
}
