use serde::{Deserialize, Serialize};

use crate::error::*;

/// Empirical Antoine constants in the mmHg / °C form
/// `log10(P) = A − B / (T + C)`.
///
/// No sign or magnitude constraint is enforced; any `C = −T` within a
/// sampled range is reported per sample by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Coefficients {
    /// Build a coefficient set, rejecting `NaN` and `±Inf`.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        for (name, value) in [("A", a), ("B", b), ("C", c)] {
            if !value.is_finite() {
                return Err(AntoineError::InvalidInput(format!(
                    "{name} must be a finite number, got {value}"
                )));
            }
        }
        Ok(Self { a, b, c })
    }

    /// Water, valid roughly from 1 to 100 °C.
    pub fn water() -> Self {
        Self { a: 8.07131, b: 1730.63, c: 233.426 }
    }

    /// Unrounded saturation pressure (mmHg) at `t_celsius`.
    pub fn pressure_mmhg(&self, t_celsius: f64) -> Sample {
        let denominator = t_celsius + self.c;
        if denominator == 0.0 {
            return Err(SampleFault::DivisionSingularity { temperature: t_celsius });
        }

        let exponent = self.a - self.b / denominator;
        let p = 10f64.powf(exponent);
        if !p.is_finite() {
            return Err(SampleFault::OutOfRange { temperature: t_celsius, exponent });
        }
        Ok(p)
    }

    /// Temperature (°C) at which the saturation pressure equals `p_mmhg`.
    ///
    /// Inverse of [`pressure_mmhg`](Self::pressure_mmhg):
    /// `T = B / (A − log10 P) − C`.
    pub fn boiling_point(&self, p_mmhg: f64) -> Result<f64> {
        if !p_mmhg.is_finite() || p_mmhg <= 0.0 {
            return Err(AntoineError::InvalidInput(format!(
                "pressure must be a positive finite number, got {p_mmhg}"
            )));
        }

        let denominator = self.a - p_mmhg.log10();
        if denominator == 0.0 {
            return Err(AntoineError::InvalidInput(format!(
                "no finite temperature for P = {p_mmhg} mmHg (A = log10 P)"
            )));
        }

        let t = self.b / denominator - self.c;
        if !t.is_finite() {
            return Err(AntoineError::InvalidInput(format!(
                "temperature for P = {p_mmhg} mmHg is not representable"
            )));
        }
        Ok(t)
    }
}

/// `A = B = C = 1`, a crash-free baseline for untouched inputs.
impl Default for Coefficients {
    fn default() -> Self {
        Self { a: 1.0, b: 1.0, c: 1.0 }
    }
}

impl std::fmt::Display for Coefficients {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "A = {:.5}", self.a)?;
        writeln!(f, "B = {:.3}", self.b)?;
        write!(f, "C = {:.3}", self.c)
    }
}
