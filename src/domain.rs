//! Temperature sample grid.
//!
//! Every curve is sampled at `lower, lower + 1, lower + 2, …` up to and
//! including `upper` (°C).  All other series are index-aligned to this
//! grid.

use crate::error::*;

/// Step between consecutive samples (°C).
pub const STEP: f64 = 1.0;

/// Largest grid [`TemperatureDomain::new`] will build.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Every `lower + k` (k = 0, 1, …) with `lower + k ≤ upper`.
///
/// `upper < lower` and non-finite bounds give an empty grid.  The
/// length is not capped; use [`TemperatureDomain::new`] for user input.
///
/// # Panics
///
/// When the grid cannot be allocated, e.g. `generate_domain(0.0, 1e300)`
/// asks for more than `usize::MAX` samples.
pub fn generate_domain(lower: f64, upper: f64) -> Vec<f64> {
    if !lower.is_finite() || !upper.is_finite() || upper < lower {
        return Vec::new();
    }
    let count = sample_count(lower, upper);
    (0..count).map(|k| lower + k as f64 * STEP).collect()
}

/// `floor(upper − lower) + 1`, nudged by one where `upper − lower`
/// rounds across an integer.
fn sample_count(lower: f64, upper: f64) -> usize {
    let at = |k: usize| lower + k as f64 * STEP;

    let mut n = ((upper - lower).floor() as usize).saturating_add(1);
    if at(n - 1) > upper {
        n -= 1;
    } else if at(n) <= upper && at(n) > at(n - 1) {
        n += 1;
    }
    n
}

/// A validated, owned temperature grid (°C).
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureDomain {
    lower: f64,
    upper: f64,
    temperatures: Vec<f64>,
}

impl TemperatureDomain {
    /// Build the grid for `[lower, upper]`.
    ///
    /// Fails on non-finite bounds or when the grid would exceed
    /// [`MAX_SAMPLES`].  An inverted range is valid and empty.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        for (name, value) in [("lower bound", lower), ("upper bound", upper)] {
            if !value.is_finite() {
                return Err(AntoineError::InvalidInput(format!(
                    "temperature {name} must be a finite number, got {value}"
                )));
            }
        }

        let samples = if upper >= lower { sample_count(lower, upper) } else { 0 };
        if samples > MAX_SAMPLES {
            return Err(AntoineError::DomainTooLarge { samples, limit: MAX_SAMPLES });
        }

        Ok(Self { lower, upper, temperatures: generate_domain(lower, upper) })
    }

    pub fn lower(&self) -> f64 { self.lower }
    pub fn upper(&self) -> f64 { self.upper }

    /// Sample temperatures in °C, ascending.
    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    pub fn len(&self) -> usize { self.temperatures.len() }
    pub fn is_empty(&self) -> bool { self.temperatures.is_empty() }
}

impl AsRef<[f64]> for TemperatureDomain {
    fn as_ref(&self) -> &[f64] {
        &self.temperatures
    }
}
