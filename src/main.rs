//! Main module for the RAM latency calculator using Yew.
//! Wires UI components, the state reducer, and side-effect hooks.

use ram_latency::state::{Action, AppState, Field};
use ram_latency::{storage, utils::now_iso};
use yew::prelude::*;

mod components;
mod hooks;

use components::{HistoryPanel, PairedSlider, ResultBox, ThemeToggle};
use hooks::{use_history_sync, use_theme_sync};

/// Renders one slider/field pair wired to the reducer.
fn paired_input(state: &UseReducerHandle<AppState>, field: Field) -> Html {
    let dispatcher = state.dispatcher();
    let on_slider = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |v: f64| dispatcher.dispatch(Action::SliderInput(field, v)))
    };
    let on_text = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |text: String| dispatcher.dispatch(Action::TextInput(field, text)))
    };
    let on_commit = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: ()| dispatcher.dispatch(Action::TextCommit(field)))
    };
    let on_enter = Callback::from(move |_: ()| {
        dispatcher.dispatch(Action::Calculate {
            timestamp: now_iso(),
        })
    });

    html! {
        <PairedSlider
            {field}
            input={state.input(field).clone()}
            {on_slider}
            {on_text}
            {on_commit}
            {on_enter}
        />
    }
}

/// Primary application component.
#[function_component(Main)]
fn main_component() -> Html {
    let state = use_reducer(|| AppState::new(storage::load_history(), storage::initial_theme()));

    use_history_sync(&state.history, state.history_dirty());
    use_theme_sync(state.dark_theme);

    let on_calculate = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(Action::Calculate {
                timestamp: now_iso(),
            })
        })
    };
    let on_clear = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(Action::ClearHistory))
    };
    let on_toggle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |dark: bool| dispatcher.dispatch(Action::SetTheme(dark)))
    };

    html! {
        <div class="container">
            <div class="header">
                <h1>{ "Latência de RAM" }</h1>
                <ThemeToggle dark={state.dark_theme} {on_toggle} />
            </div>

            <div class="panel">
                { paired_input(&state, Field::Mts) }
                { paired_input(&state, Field::Cl) }
                <div class="actions">
                    <button id="calcBtn" onclick={on_calculate}>{ "Calcular" }</button>
                </div>
            </div>

            <ResultBox display={state.display.clone()} />

            <HistoryPanel
                count={state.history.len()}
                capacity={state.history.capacity()}
                {on_clear}
            />
        </div>
    }
}

/// Entry point: installs the panic hook and mounts the app.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<Main>::new().render();
}
