use contracts::shared::indicators::MetricData;
use contracts::shared::settings::RealtimeSettings;
use leptos::prelude::*;

/// Signals returned by [`use_realtime_metrics`].
#[derive(Clone, Copy)]
pub struct RealtimeMetrics {
    pub metrics: ReadSignal<Vec<MetricData>>,
    pub is_loading: ReadSignal<bool>,
}

/// Live metrics hook.
///
/// There is no data source behind the dashboard, so the metrics keep their
/// initial values and `is_loading` stays `false`. The interval is accepted so
/// callers are already wired for a polling implementation.
pub fn use_realtime_metrics(initial: Vec<MetricData>, settings: &RealtimeSettings) -> RealtimeMetrics {
    let (metrics, _set_metrics) = signal(initial);
    let (is_loading, _set_is_loading) = signal(false);

    if settings.enabled {
        log::warn!(
            "real-time metrics requested every {} ms, but no live source is configured",
            settings.interval_ms
        );
    }

    RealtimeMetrics {
        metrics,
        is_loading,
    }
}
