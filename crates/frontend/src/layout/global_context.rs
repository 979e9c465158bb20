use leptos::prelude::*;

/// Ключ единственного раздела приложения
pub const ANALYTICS_KEY: &str = "analytics";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Ключ активного пункта навигации
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
    pub notifications_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(ANALYTICS_KEY.to_string()),
            left_open: RwSignal::new(true),
            notifications_open: RwSignal::new(false),
        }
    }

    pub fn activate(&self, key: &str) {
        log::debug!("activate nav item '{}'", key);
        self.active.set(key.to_string());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn toggle_notifications(&self) {
        self.notifications_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
