//! Temperature unit conversion of whole series.
//!
//! Values keep full double precision; rounding happens only when a
//! [`ResultTable`](crate::ResultTable) is rendered or exported.

use converter::{Converter, TempUnit, UnitSystem};

/// Fresh series of `celsius` expressed in `unit`.
pub fn convert(celsius: &[f64], unit: TempUnit) -> Vec<f64> {
    let conv = Converter::new(UnitSystem::new().temperature(unit));
    celsius.iter().map(|&t| conv.t_from_celsius(t)).collect()
}

/// `T + 273.15`
pub fn to_kelvin(celsius: &[f64]) -> Vec<f64> {
    convert(celsius, TempUnit::Kelvin)
}

/// `T × 9/5 + 32`
pub fn to_fahrenheit(celsius: &[f64]) -> Vec<f64> {
    convert(celsius, TempUnit::Fahrenheit)
}
