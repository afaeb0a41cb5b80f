//! Application-level configuration constants.

// Persistence
pub const HISTORY_KEY: &str = "ns_history";
pub const THEME_KEY: &str = "ns_theme_dark";
pub const MAX_HISTORY_POINTS: usize = 40;

// Chart
pub const CHART_CANVAS_ID: &str = "nsChart";
pub const CHART_LOCALE: &str = "pt-BR";

// Default values for input fields
pub const DEFAULT_MTS: f64 = 3200.0;
pub const DEFAULT_CL: f64 = 16.0;

// Min/Max limits for the sliders
pub const MIN_MTS: f64 = 800.0;
pub const MAX_MTS: f64 = 9600.0;
pub const MTS_STEP: f64 = 100.0;
pub const MIN_CL: f64 = 4.0;
pub const MAX_CL: f64 = 60.0;
pub const CL_STEP: f64 = 1.0;

// Value domain covered by the color gradient (ns)
pub const GRADIENT_MIN_NS: f64 = 0.0;
pub const GRADIENT_MAX_NS: f64 = 18.0;

// Result display
pub const DISPLAY_DECIMALS: i32 = 3;
pub const LIGHT_TEXT_MAX_LUMINANCE: f64 = 0.6;
