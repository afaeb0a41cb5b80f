//! Widgets of the latency page: the paired MT/s and CL inputs, the colored
//! result box, the history chart panel and the dark theme toggle.
//!
//! None of them own state. Edits surface as callbacks to the reducer in `main`.

use ram_latency::config::CHART_CANVAS_ID;
use ram_latency::presenter::Presentation;
use ram_latency::state::{Field, PairedInput};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Slider plus numeric field for one input.
#[derive(Properties, PartialEq)]
pub struct PairedSliderProps {
    pub field: Field,
    pub input: PairedInput,
    pub on_slider: Callback<f64>,
    pub on_text: Callback<String>,
    pub on_commit: Callback<()>,
    /// Enter pressed in the numeric field.
    pub on_enter: Callback<()>,
}

#[function_component(PairedSlider)]
pub fn paired_slider(props: &PairedSliderProps) -> Html {
    let (min, max, step) = props.field.bounds();
    let number_id = format!("{}Num", props.field.id());

    let oninput_range = {
        let on_slider = props.on_slider.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(val) = input.value().parse::<f64>() {
                on_slider.emit(val);
            }
        })
    };
    let oninput_number = {
        let on_text = props.on_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_text.emit(input.value());
        })
    };
    let onkeydown = {
        let on_enter = props.on_enter.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_enter.emit(());
            }
        })
    };

    html! {
        <div class="form-group">
            <label for={number_id.clone()}>{ props.field.label() }</label>
            <div class="slider-with-value">
                <input type="range"
                    id={format!("{}Range", props.field.id())}
                    min={min.to_string()}
                    max={max.to_string()}
                    step={step.to_string()}
                    value={props.input.slider.to_string()}
                    oninput={oninput_range}
                />
                <input type="number"
                    id={number_id}
                    value={props.input.text.clone()}
                    oninput={oninput_number}
                    onchange={props.on_commit.reform(|_: Event| ())}
                    onkeydown={onkeydown}
                />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultBoxProps {
    pub display: Presentation,
}

/// Colored box showing the latency and its tier.
#[function_component(ResultBox)]
pub fn result_box(props: &ResultBoxProps) -> Html {
    let d = &props.display;
    let style = format!("background: {}; color: {};", d.background, d.foreground);
    html! {
        <div id="result" class="result" {style}>
            <div class="value">{ d.text.clone() }</div>
            <div class="label">{ d.label.clone() }</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HistoryPanelProps {
    pub count: usize,
    pub capacity: usize,
    pub on_clear: Callback<()>,
}

/// Chart canvas and history controls. The canvas is drawn by Chart.js.
#[function_component(HistoryPanel)]
pub fn history_panel(props: &HistoryPanelProps) -> Html {
    html! {
        <div class="panel">
            <div class="chart-section">
                <canvas id={CHART_CANVAS_ID}></canvas>
            </div>
            <div class="actions">
                <span class="history-count">{ format!("{}/{}", props.count, props.capacity) }</span>
                <button id="clearHistBtn" class="btn-secondary"
                    onclick={props.on_clear.reform(|_: MouseEvent| ())}
                >
                    { "Limpar histórico" }
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub dark: bool,
    pub on_toggle: Callback<bool>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let onchange = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_toggle.emit(input.checked());
        })
    };
    html! {
        <label class="theme-toggle">
            <input type="checkbox" id="themeToggle" checked={props.dark} {onchange} />
            { "Tema escuro" }
        </label>
    }
}
