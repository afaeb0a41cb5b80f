//! Application state and the transitions user actions drive.
//!
//! Every action is a pure `(state, action) → state` step; persistence and
//! chart drawing happen in effects that watch the resulting state.

use crate::config::*;
use crate::history::History;
use crate::presenter::{present, Mode, Presentation};
use crate::utils::parse_float;
use crate::Measurement;
use log::info;
use std::rc::Rc;
use yew::functional::Reducible;

/// One of the two paired inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Mts,
    Cl,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Mts => "MT/s",
            Field::Cl => "CL",
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Field::Mts => "mts",
            Field::Cl => "cl",
        }
    }

    /// Slider (min, max, step).
    pub fn bounds(&self) -> (f64, f64, f64) {
        match self {
            Field::Mts => (MIN_MTS, MAX_MTS, MTS_STEP),
            Field::Cl => (MIN_CL, MAX_CL, CL_STEP),
        }
    }

    pub fn default_value(&self) -> f64 {
        match self {
            Field::Mts => DEFAULT_MTS,
            Field::Cl => DEFAULT_CL,
        }
    }
}

/// A slider and the numeric field mirroring it.
#[derive(Debug, Clone, PartialEq)]
pub struct PairedInput {
    /// Raw text of the numeric field.
    pub text: String,
    pub slider: f64,
}

impl PairedInput {
    fn new(value: f64) -> Self {
        Self {
            text: value.to_string(),
            slider: value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Slider dragged: the field takes the slider value, display previews.
    SliderInput(Field, f64),
    /// Keystroke in the numeric field; nothing is recalculated yet.
    TextInput(Field, String),
    /// Numeric field committed (change event): slider follows, display previews.
    TextCommit(Field),
    /// Calculate button or Enter: display updates and the value is recorded.
    Calculate { timestamp: String },
    ClearHistory,
    SetTheme(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub mts: PairedInput,
    pub cl: PairedInput,
    pub history: History,
    pub dark_theme: bool,
    pub display: Presentation,
    /// Bumped on every history mutation; 0 means "as loaded from storage".
    pub history_revision: u64,
}

impl AppState {
    /// Startup state. With a recorded history the last value is shown,
    /// otherwise the default inputs are previewed without recording.
    pub fn new(history: History, dark_theme: bool) -> Self {
        let mut state = Self {
            mts: PairedInput::new(Field::Mts.default_value()),
            cl: PairedInput::new(Field::Cl.default_value()),
            history,
            dark_theme,
            display: Presentation::error(crate::CalcError::InvalidMts),
            history_revision: 0,
        };
        let last_value = state.history.last().map(|entry| entry.value);
        state.display = match last_value {
            Some(value) => Presentation::for_value(value),
            None => state.recalculate(Mode::Preview),
        };
        state
    }

    pub fn input(&self, field: Field) -> &PairedInput {
        match field {
            Field::Mts => &self.mts,
            Field::Cl => &self.cl,
        }
    }

    fn input_mut(&mut self, field: Field) -> &mut PairedInput {
        match field {
            Field::Mts => &mut self.mts,
            Field::Cl => &mut self.cl,
        }
    }

    /// Whether the log differs from what was loaded and needs writing back.
    pub fn history_dirty(&self) -> bool {
        self.history_revision > 0
    }

    pub fn measurement(&self) -> Measurement {
        Measurement::from_text(&self.mts.text, &self.cl.text)
    }

    fn recalculate(&mut self, mode: Mode) -> Presentation {
        let measurement = self.measurement();
        present(&measurement, mode, &mut self.history)
    }

    /// Apply one user action.
    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::SliderInput(field, value) => {
                let input = self.input_mut(field);
                input.slider = value;
                input.text = value.to_string();
                self.display = self.recalculate(Mode::Preview);
            }
            Action::TextInput(field, text) => {
                self.input_mut(field).text = text;
            }
            Action::TextCommit(field) => {
                let (min, max, _) = field.bounds();
                let input = self.input_mut(field);
                if let Some(v) = parse_float(&input.text).filter(|v| v.is_finite()) {
                    input.slider = v.clamp(min, max);
                }
                self.display = self.recalculate(Mode::Preview);
            }
            Action::Calculate { timestamp } => {
                self.display = self.recalculate(Mode::Commit { timestamp });
                if !self.display.is_error() {
                    self.history_revision += 1;
                }
            }
            Action::ClearHistory => {
                info!("Clearing {} history entries", self.history.len());
                self.history.clear();
                self.history_revision += 1;
            }
            Action::SetTheme(dark) => {
                self.dark_theme = dark;
            }
        }
        self
    }
}

impl Reducible for AppState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Rc::unwrap_or_clone(self).apply(action))
    }
}
