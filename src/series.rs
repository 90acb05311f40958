//! Row-aligned (temperature, pressure) series in a selected pair of units.

use converter::{PressUnit, TempUnit, UnitSystem};

use crate::error::*;
use crate::evaluator::PressureSeries;
use crate::{pressure, temperature};

/// Chart title.
pub const TITLE: &str = "Vapour Pressure vs Temperature";

/// Header / axis label for a temperature column in `unit`.
pub fn temperature_label(unit: TempUnit) -> String {
    format!("Temperature ({})", unit.symbol())
}

/// Header / axis label for a pressure column in `unit`.
pub fn pressure_label(unit: PressUnit) -> String {
    format!("Vapour Pressure ({})", unit.symbol())
}

/// Temperatures and pressures for one unit selection.
///
/// `temperature[i]` and `pressure[i]` always describe the same grid
/// sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPair {
    pub units: UnitSystem,
    pub temperature: Vec<f64>,
    pub pressure: PressureSeries,
}

impl SeriesPair {
    pub fn len(&self) -> usize { self.temperature.len() }
    pub fn is_empty(&self) -> bool { self.temperature.is_empty() }

    pub fn x_label(&self) -> String {
        temperature_label(self.units.temperature)
    }

    pub fn y_label(&self) -> String {
        pressure_label(self.units.pressure)
    }

    /// `(x, y)` for every sample that has a pressure; faulty samples are
    /// skipped so a plot can draw the rest of the curve.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.temperature
            .iter()
            .zip(self.pressure.iter())
            .filter_map(|(&t, p)| p.ok().map(|p| (t, p)))
    }
}

/// Combine the canonical grid (°C) and canonical pressures (mmHg) into
/// the series for `units`.
///
/// Both inputs must come from the same grid; a length mismatch is an
/// error rather than a silently truncated pair.
pub fn assemble(
    celsius: &[f64],
    mmhg: &PressureSeries,
    units: UnitSystem,
) -> Result<SeriesPair> {
    if celsius.len() != mmhg.len() {
        return Err(AntoineError::LengthMismatch {
            temperatures: celsius.len(),
            pressures: mmhg.len(),
        });
    }

    Ok(SeriesPair {
        units,
        temperature: temperature::convert(celsius, units.temperature),
        pressure: pressure::convert(mmhg, units.pressure),
    })
}
