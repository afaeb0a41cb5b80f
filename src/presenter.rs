//! Turns a measurement into what the result box shows.

use crate::classify::{classify, Tier};
use crate::color::{color_for_value, foreground_for, Rgb};
use crate::history::History;
use crate::utils::{format_pt_br, round_for_display};
use crate::{validate_derived, CalcError, Measurement};
use log::{debug, info};

/// Whether a calculation only refreshes the display or is also recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Preview,
    Commit { timestamp: String },
}

/// Display-ready result: text, tier label and box colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub text: String,
    pub label: String,
    pub background: Rgb,
    pub foreground: Rgb,
    /// Classified tier, `None` when the inputs were rejected.
    pub tier: Option<Tier>,
}

impl Presentation {
    pub fn error(err: CalcError) -> Self {
        Self {
            text: err.to_string(),
            label: String::new(),
            background: Rgb::BLACK,
            foreground: Rgb::WHITE,
            tier: None,
        }
    }

    /// Present an already derived latency, e.g. the last history entry.
    pub fn for_value(ns: f64) -> Self {
        match validate_derived(ns) {
            Ok(ns) => Self::reading(ns),
            Err(e) => Self::error(e),
        }
    }

    fn reading(ns: f64) -> Self {
        let rounded = round_for_display(ns);
        let tier = classify(rounded);
        if tier == Tier::Invalid {
            return Self::error(CalcError::InvalidDerivedValue);
        }
        let background = color_for_value(rounded);
        Self {
            text: format!("{} ns", format_pt_br(rounded)),
            label: tier.label().to_string(),
            background,
            foreground: foreground_for(background),
            tier: Some(tier),
        }
    }

    pub fn is_error(&self) -> bool {
        self.tier.is_none()
    }
}

/// Compute, classify and color `measurement`. In [`Mode::Commit`] the
/// unrounded value is appended to `history`; rejected inputs never are.
pub fn present(measurement: &Measurement, mode: Mode, history: &mut History) -> Presentation {
    let ns = match measurement.compute().and_then(validate_derived) {
        Ok(ns) => ns,
        Err(e) => {
            debug!("Rejected {:?}: {}", measurement, e);
            return Presentation::error(e);
        }
    };

    let presentation = Presentation::reading(ns);
    if presentation.is_error() {
        debug!("Rejected reading {} ns", ns);
        return presentation;
    }
    match mode {
        Mode::Preview => debug!("Preview {} ns", ns),
        Mode::Commit { timestamp } => {
            info!("Recording {} ns at {}", ns, timestamp);
            history.push(timestamp, ns);
        }
    }
    presentation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit() -> Mode {
        Mode::Commit { timestamp: "2024-01-01T00:00:00.000Z".into() }
    }

    #[test]
    fn slow_kit_is_unacceptable_on_black() {
        let mut history = History::default();
        let p = present(&Measurement::new(16.0, 18.0), commit(), &mut history);
        assert_eq!(p.text, "2.250 ns");
        assert_eq!(p.tier, Some(Tier::Unacceptable));
        assert_eq!(p.label, "Inaceitável");
        assert_eq!(p.background, Rgb::BLACK);
        assert_eq!(p.foreground, Rgb::WHITE);
        assert_eq!(history.values(), vec![2250.0]);
    }

    #[test]
    fn zero_mts_is_rejected_without_recording() {
        let mut history = History::default();
        let p = present(&Measurement::new(0.0, 16.0), commit(), &mut history);
        assert_eq!(p.text, "MTs inválido");
        assert_eq!(p.label, "");
        assert_eq!(p.background, Rgb::BLACK);
        assert_eq!(p.foreground, Rgb::WHITE);
        assert!(p.is_error());
        assert!(history.is_empty());
    }

    #[test]
    fn missing_cl_is_rejected_without_recording() {
        let mut history = History::default();
        let p = present(&Measurement::from_text("3200", "x"), commit(), &mut history);
        assert_eq!(p.text, "CL inválido");
        assert!(history.is_empty());
    }

    #[test]
    fn negative_result_is_rejected_without_recording() {
        let mut history = History::default();
        let p = present(&Measurement::new(-3200.0, 16.0), commit(), &mut history);
        assert_eq!(p.text, "Valor inválido");
        assert!(history.is_empty());
    }

    #[test]
    fn preview_does_not_record() {
        let mut history = History::default();
        let p = present(&Measurement::new(3200.0, 16.0), Mode::Preview, &mut history);
        assert_eq!(p.text, "10 ns");
        assert_eq!(p.tier, Some(Tier::Ideal));
        assert!(history.is_empty());
    }

    #[test]
    fn commit_records_the_unrounded_value() {
        let mut history = History::default();
        let p = present(&Measurement::new(3600.0, 16.0), commit(), &mut history);
        assert_eq!(p.text, "8,889 ns");
        assert_eq!(p.tier, Some(Tier::Great));
        let recorded = history.last().unwrap().value;
        assert_eq!(recorded, (1.0 / 1800.0) * 16.0 * 1000.0);
        assert_ne!(recorded, 8.889);
    }

    #[test]
    fn colors_come_from_the_rounded_value() {
        let mut history = History::default();
        let p = present(&Measurement::new(3200.0, 16.0), Mode::Preview, &mut history);
        assert_eq!(p.background, color_for_value(10.0));
        assert_eq!(p.foreground, foreground_for(p.background));
    }

    #[test]
    fn stored_values_are_presented_directly() {
        assert_eq!(Presentation::for_value(12.5).label, "Transição");
        assert!(Presentation::for_value(f64::NAN).is_error());
    }

    #[test]
    fn tiny_mts_gives_a_huge_but_valid_reading() {
        let mut history = History::default();
        let p = present(&Measurement::new(2e-303, 16.0), commit(), &mut history);
        assert!(!p.is_error());
        assert_eq!(p.tier, Some(Tier::Unacceptable));
        assert!(!p.text.contains('∞'), "text was {}", p.text);
        assert_eq!(p.background, Rgb::BLACK);
        let recorded = history.last().unwrap().value;
        assert!(recorded.is_finite());
        assert_eq!(classify(recorded), Tier::Unacceptable);
    }
}
