use ram_latency::config::{CHART_CANVAS_ID, CHART_LOCALE};
use ram_latency::history::History;
use ram_latency::{chart, storage};
use yew::prelude::*;

/// Keeps the stored log and the chart in step with `history`.
///
/// The chart is created once after the first render and redrawn on every
/// change. The log is written back only once it has been mutated, so a
/// partially unreadable stored log is not overwritten at startup.
#[hook]
pub fn use_history_sync(history: &History, dirty: bool) {
    use_effect_with((), |_| {
        chart::init_ns_chart(CHART_CANVAS_ID, CHART_LOCALE);
        || ()
    });

    use_effect_with((history.clone(), dirty), |(history, dirty)| {
        if *dirty {
            storage::save_history(history);
        }
        chart::render(history);
        || ()
    });
}

/// Applies the theme to the document and persists the flag on change.
#[hook]
pub fn use_theme_sync(dark: bool) {
    use_effect_with(dark, |&dark| {
        storage::apply_theme(dark);
        storage::save_theme(dark);
        || ()
    });
}
