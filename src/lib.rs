//! DRAM first-word latency calculator.
//!
//! Converts a transfer rate (MT/s) and a CAS latency (cycles) into
//! nanoseconds, then classifies and colors the result. The browser front end
//! lives in `main.rs`; everything here is plain Rust and tested natively.

use std::fmt;

pub mod chart;
pub mod classify;
pub mod color;
pub mod config;
pub mod history;
pub mod presenter;
pub mod state;
pub mod storage;
pub mod utils;

pub use classify::{classify, Tier};
pub use color::{color_for_value, foreground_for, Rgb};
pub use history::{History, HistoryEntry};
pub use presenter::{present, Mode, Presentation};
pub use state::{Action, AppState, Field};

/// Raw user inputs. Unparseable text is carried as NaN and rejected by
/// [`compute_ns`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub mts: f64,
    pub cl: f64,
}

impl Measurement {
    pub fn new(mts: f64, cl: f64) -> Self {
        Self { mts, cl }
    }

    /// Build a measurement from the text of the two numeric fields.
    pub fn from_text(mts: &str, cl: &str) -> Self {
        Self {
            mts: utils::parse_float(mts).unwrap_or(f64::NAN),
            cl: utils::parse_float(cl).unwrap_or(f64::NAN),
        }
    }

    pub fn compute(&self) -> Result<f64, CalcError> {
        compute_ns(self.mts, self.cl)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// MT/s is zero, non-finite or missing
    InvalidMts,
    /// CL is non-finite or missing
    InvalidCl,
    /// Derived latency is negative or non-finite
    InvalidDerivedValue,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::InvalidMts => write!(f, "MTs inválido"),
            CalcError::InvalidCl => write!(f, "CL inválido"),
            CalcError::InvalidDerivedValue => write!(f, "Valor inválido"),
        }
    }
}

impl std::error::Error for CalcError {}

/// First-word latency in ns: one clock period (`2 / MT/s` µs) times CL.
///
/// No rounding is applied here; see [`presenter`] for display rounding.
pub fn compute_ns(mts: f64, cl: f64) -> Result<f64, CalcError> {
    if !mts.is_finite() || mts == 0.0 {
        return Err(CalcError::InvalidMts);
    }
    if !cl.is_finite() {
        return Err(CalcError::InvalidCl);
    }
    Ok((1.0 / (mts / 2.0)) * cl * 1000.0)
}

/// Check a derived value before it is presented or recorded.
pub fn validate_derived(ns: f64) -> Result<f64, CalcError> {
    if ns.is_finite() && ns >= 0.0 {
        Ok(ns)
    } else {
        Err(CalcError::InvalidDerivedValue)
    }
}
