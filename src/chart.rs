//! JavaScript interop for the Chart.js history chart.
//! Provides Rust bindings to chart helper functions defined in chart_helpers.js.

use crate::color::color_for_value;
use crate::config::CHART_LOCALE;
use crate::history::History;
use crate::utils::time_label;
use log::warn;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/chart_helpers.js")]
extern "C" {
    #[wasm_bindgen(js_name = initNsChart)]
    pub fn init_ns_chart(canvas_id: &str, locale: &str);

    #[wasm_bindgen(js_name = updateNsChart)]
    fn update_ns_chart(points: JsValue);
}

/// One plotted history entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    pub color: String,
}

/// Chart series for `history`, oldest first, each point colored by its value.
pub fn series(history: &History, label: impl Fn(&str) -> String) -> Vec<ChartPoint> {
    history
        .iter()
        .map(|entry| ChartPoint {
            label: label(&entry.timestamp),
            value: entry.value,
            color: color_for_value(entry.value).to_hex(),
        })
        .collect()
}

/// Redraw the chart from `history` (no animation).
pub fn render(history: &History) {
    let points = series(history, |ts| time_label(ts, CHART_LOCALE));
    match serde_wasm_bindgen::to_value(&points) {
        Ok(js) => update_ns_chart(js),
        Err(e) => warn!("Failed to hand chart points to JS: {}", e),
    }
}
