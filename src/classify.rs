//! Latency tiers.
//!
//! Breakpoints are evaluated top to bottom and the first matching rule wins.
//! The table is total: every `f64` lands in exactly one tier.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Invalid,
    Excellent,
    Great,
    Ideal,
    Acceptable,
    /// 12 < v < 13
    Transition,
    Slow,
    VerySlow14,
    VerySlow15,
    VerySlow16,
    Unacceptable,
}

impl Tier {
    /// Label shown under the value in the result box.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Invalid => "Valor inválido",
            Tier::Excellent => "Excelente",
            Tier::Great => "Ótimo",
            Tier::Ideal => "Ideal",
            Tier::Acceptable => "Aceitável",
            Tier::Transition => "Transição",
            Tier::Slow => "Lento",
            Tier::VerySlow14 => "Muito lento (14–15)",
            Tier::VerySlow15 => "Muito lento (15–16)",
            Tier::VerySlow16 => "Muito lento (16–17)",
            Tier::Unacceptable => "Inaceitável",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a latency in ns.
pub fn classify(v: f64) -> Tier {
    if !v.is_finite() || v < 0.0 {
        return Tier::Invalid;
    }
    match v {
        v if v <= 5.0 => Tier::Excellent,
        v if v < 10.0 => Tier::Great,
        v if v <= 11.0 => Tier::Ideal,
        v if v <= 12.0 => Tier::Acceptable,
        v if v < 13.0 => Tier::Transition,
        v if v < 14.0 => Tier::Slow,
        v if v < 15.0 => Tier::VerySlow14,
        v if v < 16.0 => Tier::VerySlow15,
        v if v < 17.0 => Tier::VerySlow16,
        _ => Tier::Unacceptable,
    }
}
