use crate::config::DISPLAY_DECIMALS;
use once_cell::sync::Lazy;
use regex::Regex;

// Longest numeric prefix, the way a browser's parseFloat reads it
static FLOAT_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)").unwrap()
});

/// Parse the leading number of `input`, ignoring leading whitespace and any
/// trailing garbage.
///
/// # Examples
/// ```
/// use ram_latency::utils::parse_float;
/// assert_eq!(parse_float("3200"), Some(3200.0));
/// assert_eq!(parse_float("  16.5cl"), Some(16.5));
/// assert_eq!(parse_float("abc"), None);
/// ```
pub fn parse_float(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let m = FLOAT_PREFIX_REGEX.find(trimmed)?;
    let text = m.as_str();
    match text.trim_start_matches(['+', '-']) {
        "Infinity" if text.starts_with('-') => Some(f64::NEG_INFINITY),
        "Infinity" => Some(f64::INFINITY),
        _ => text.parse::<f64>().ok(),
    }
}

/// Round to the number of decimals shown in the result box.
///
/// Values too large to scale are returned unchanged; they carry no
/// fractional digits at that magnitude.
pub fn round_for_display(v: f64) -> f64 {
    let factor = 10f64.powi(DISPLAY_DECIMALS);
    let scaled = v * factor;
    if !scaled.is_finite() {
        return v;
    }
    scaled.round() / factor
}

/// Format a number the way pt-BR locales print it: `.` groups thousands,
/// `,` separates decimals, at most three fraction digits.
///
/// # Examples
/// ```
/// use ram_latency::utils::format_pt_br;
/// assert_eq!(format_pt_br(2250.0), "2.250");
/// assert_eq!(format_pt_br(10.5), "10,5");
/// ```
pub fn format_pt_br(v: f64) -> String {
    if !v.is_finite() {
        return if v.is_nan() {
            "NaN".to_string()
        } else if v > 0.0 {
            "∞".to_string()
        } else {
            "-∞".to_string()
        };
    }

    let fixed = format!("{:.*}", DISPLAY_DECIMALS as usize, v.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let negative = v < 0.0 && (grouped != "0" || !frac_part.is_empty());
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

/// Current time as an ISO-8601 string, from the browser clock.
pub fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

/// Local time-of-day label for an ISO-8601 timestamp.
pub fn time_label(timestamp: &str, locale: &str) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(timestamp));
    String::from(date.to_locale_time_string(locale))
}
