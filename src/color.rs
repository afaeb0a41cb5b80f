//! Latency → color mapping for the result box and chart points.
//!
//! Values are clamped to the gradient domain (0–18 ns), normalized to
//! `t ∈ [0, 1]` and linearly interpolated between the two color stops that
//! bracket `t`. Each channel is interpolated independently and rounded.

use crate::config::{GRADIENT_MAX_NS, GRADIENT_MIN_NS, LIGHT_TEXT_MAX_LUMINANCE};
use std::fmt;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    /// Dark foreground used on bright backgrounds (`#111`).
    pub const INK: Rgb = Rgb::new(0x11, 0x11, 0x11);

    /// Perceptual luminance normalized to `[0, 1]`.
    pub fn luminance(&self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }

    /// CSS hex notation, e.g. `#1e90ff`.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A gradient anchor at a relative position along the value axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub position: f64,
    pub color: Rgb,
}

const fn stop(position: f64, color: Rgb) -> ColorStop {
    ColorStop { position, color }
}

/// Gradient stops, positions relative to the 0–18 ns axis.
pub const COLOR_STOPS: [ColorStop; 9] = [
    stop(0.0, Rgb::new(0x7a, 0x1f, 0xa2)),  // purple (0)
    stop(0.28, Rgb::new(0x1e, 0x90, 0xff)), // blue (~5)
    stop(0.56, Rgb::new(0x28, 0xa7, 0x45)), // green (~10)
    stop(0.62, Rgb::new(0xff, 0xc1, 0x07)), // yellow (~11)
    stop(0.72, Rgb::new(0xff, 0x8c, 0x00)), // orange (~13)
    stop(0.78, Rgb::new(0xff, 0x63, 0x47)), // red (~14)
    stop(0.83, Rgb::new(0xff, 0x3b, 0x30)), // red (~15)
    stop(0.89, Rgb::new(0xcc, 0x00, 0x00)), // dark red (~16)
    stop(1.0, Rgb::BLACK),                  // black (>=17)
];

#[inline]
fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    let (a, b) = (a as f64, b as f64);
    (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
}

/// Interpolate between two colors, `t` in `[0, 1]`.
pub fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
    Rgb::new(
        lerp_channel(a.r, b.r, t),
        lerp_channel(a.g, b.g, t),
        lerp_channel(a.b, b.b, t),
    )
}

/// Map a latency in ns to its gradient color.
pub fn color_for_value(v: f64) -> Rgb {
    color_along(&COLOR_STOPS, v)
}

fn color_along(stops: &[ColorStop], v: f64) -> Rgb {
    let first = stops[0];
    if v.is_nan() {
        return first.color;
    }

    let clamped = v.clamp(GRADIENT_MIN_NS, GRADIENT_MAX_NS);
    let t = (clamped - GRADIENT_MIN_NS) / (GRADIENT_MAX_NS - GRADIENT_MIN_NS);

    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t >= a.position && t <= b.position {
            let span = b.position - a.position;
            let local_t = if span > 0.0 { (t - a.position) / span } else { 0.0 };
            return lerp(a.color, b.color, local_t);
        }
    }
    first.color
}

/// Foreground text color that stays readable on `background`.
pub fn foreground_for(background: Rgb) -> Rgb {
    if background.luminance() > LIGHT_TEXT_MAX_LUMINANCE {
        Rgb::INK
    } else {
        Rgb::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_are_strictly_increasing_from_zero_to_one() {
        assert_eq!(COLOR_STOPS[0].position, 0.0);
        assert_eq!(COLOR_STOPS[COLOR_STOPS.len() - 1].position, 1.0);
        for pair in COLOR_STOPS.windows(2) {
            assert!(pair[0].position < pair[1].position);
        }
    }

    #[test]
    fn zero_maps_to_first_stop() {
        assert_eq!(color_for_value(0.0), COLOR_STOPS[0].color);
        assert_eq!(color_for_value(0.0).to_hex(), "#7a1fa2");
    }

    #[test]
    fn values_past_domain_map_to_last_stop() {
        assert_eq!(color_for_value(18.0), Rgb::BLACK);
        assert_eq!(color_for_value(2250.0), Rgb::BLACK);
        assert_eq!(color_for_value(f64::INFINITY), Rgb::BLACK);
    }

    #[test]
    fn negative_and_nan_map_to_first_stop() {
        assert_eq!(color_for_value(-4.0), COLOR_STOPS[0].color);
        assert_eq!(color_for_value(f64::NAN), COLOR_STOPS[0].color);
    }

    #[test]
    fn exact_stop_positions_return_stop_colors() {
        // 0.56 * 18 = 10.08 lands on the green stop
        let green = color_for_value(0.56 * 18.0);
        assert_eq!(green, COLOR_STOPS[2].color);
    }

    fn moves_toward(prev: u8, cur: u8, from: u8, to: u8) -> bool {
        if to >= from {
            prev <= cur && cur <= to
        } else {
            prev >= cur && cur >= to
        }
    }

    #[test]
    fn channels_move_monotonically_within_every_bracket() {
        const STEPS: usize = 20;
        for pair in COLOR_STOPS.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let mut prev = a.color;
            for k in 0..=STEPS {
                let t = a.position + (b.position - a.position) * k as f64 / STEPS as f64;
                let v = t * GRADIENT_MAX_NS;
                let c = color_for_value(v);
                let at = format!("{v} ns in bracket {}..{}", a.position, b.position);
                assert!(moves_toward(prev.r, c.r, a.color.r, b.color.r), "red at {at}");
                assert!(moves_toward(prev.g, c.g, a.color.g, b.color.g), "green at {at}");
                assert!(moves_toward(prev.b, c.b, a.color.b, b.color.b), "blue at {at}");
                prev = c;
            }
            assert_eq!(prev, b.color, "bracket end {}", b.position);
        }
    }

    #[test]
    fn zero_span_bracket_returns_lower_color() {
        let stops = [
            stop(0.0, Rgb::new(10, 20, 30)),
            stop(0.0, Rgb::WHITE),
            stop(1.0, Rgb::BLACK),
        ];
        assert_eq!(color_along(&stops, 0.0), Rgb::new(10, 20, 30));
    }

    #[test]
    fn midpoint_is_rounded_per_channel() {
        assert_eq!(lerp(Rgb::BLACK, Rgb::new(255, 1, 3), 0.5), Rgb::new(128, 1, 2));
    }

    #[test]
    fn foreground_follows_luminance() {
        assert_eq!(foreground_for(Rgb::BLACK), Rgb::WHITE);
        assert_eq!(foreground_for(COLOR_STOPS[3].color), Rgb::INK); // yellow
        assert_eq!(foreground_for(COLOR_STOPS[0].color), Rgb::WHITE); // purple
    }

    #[test]
    fn hex_is_lowercase_and_zero_padded() {
        assert_eq!(Rgb::new(0x0a, 0xbc, 0x01).to_hex(), "#0abc01");
    }
}
