//! Theme management for the application.
//!
//! Light and dark themes. The preference is persisted in localStorage and
//! applied as the `data-theme` attribute on `<body>`.

use leptos::prelude::*;
use web_sys::window;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name as a string (used for `data-theme` and localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse theme from string; unknown values give `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon shown on the toggle button (the theme it switches to).
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "moon",
            Theme::Dark => "sun",
        }
    }
}

const THEME_STORAGE_KEY: &str = "app-theme";

/// Load theme from localStorage.
fn load_theme_from_storage() -> Option<Theme> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .and_then(|s| Theme::parse(&s))
}

/// Save theme to localStorage.
fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if storage.set_item(THEME_STORAGE_KEY, theme.as_str()).is_err() {
            log::warn!("failed to persist theme '{}'", theme.as_str());
        }
    }
}

fn apply_theme(theme: Theme) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let _ = body.set_attribute("data-theme", theme.as_str());
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme(theme);
    }

    /// Get the current theme.
    pub fn get_theme(&self) -> Theme {
        self.theme.get()
    }

    /// Switch light <-> dark.
    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        log::debug!("theme switched to {}", next.as_str());
        self.set_theme(next);
    }
}

/// Provides theme context to children components.
///
/// A theme saved in localStorage wins over `default_theme`.
#[component]
pub fn ThemeProvider(
    #[prop(optional, into)] default_theme: String,
    children: Children,
) -> impl IntoView {
    let fallback = Theme::parse(&default_theme).unwrap_or_default();
    let initial_theme = load_theme_from_storage().unwrap_or(fallback);
    let theme = RwSignal::new(initial_theme);

    apply_theme(initial_theme);

    provide_context(ThemeContext { theme });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Light/dark toggle button for the top header.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="top-header__icon-btn"
            on:click=move |_| ctx.toggle_theme()
            title=move || match ctx.get_theme() {
                Theme::Light => "Switch to dark theme",
                Theme::Dark => "Switch to light theme",
            }
        >
            {move || crate::shared::icons::icon(ctx.get_theme().toggle_icon())}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("forest"), None);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggle_icon(), "moon");
    }
}
