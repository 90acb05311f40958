//! Pressure unit conversion of whole series.
//!
//! | unit | factor relative to mmHg |
//! |------|-------------------------|
//! | atm  | ÷ 760                   |
//! | bar  | × 1.01325 / 760         |
//! | kPa  | × 101.325 / 760         |
//!
//! Results are rounded to [`PRESSURE_DECIMALS`] places.  Faulty samples
//! stay faulty; a value with no finite equivalent becomes
//! [`SampleFault::ConversionOutOfRange`].

use converter::{Converter, PressUnit, UnitSystem};

use crate::error::{Sample, SampleFault};
use crate::evaluator::{round_to, PressureSeries, PRESSURE_DECIMALS};

/// Fresh series of `series` expressed in `unit`.
///
/// Meant to be called with the canonical mmHg series; a series already
/// in another unit is rescaled through mmHg factors.
pub fn convert(series: &PressureSeries, unit: PressUnit) -> PressureSeries {
    if series.unit() == unit {
        return series.clone();
    }

    let to = Converter::new(UnitSystem::new().pressure(unit));
    let from = Converter::new(UnitSystem::new().pressure(series.unit()));
    let samples = series
        .iter()
        .map(|sample| -> Sample {
            let p = (*sample)?;
            let converted = to.p_from_mmhg(from.p_to_mmhg(p));
            if !converted.is_finite() {
                return Err(SampleFault::ConversionOutOfRange {
                    value: p,
                    from: series.unit(),
                    to: unit,
                });
            }
            Ok(round_to(converted, PRESSURE_DECIMALS))
        })
        .collect();

    PressureSeries::from_samples(unit, samples)
}

pub fn to_atm(mmhg: &PressureSeries) -> PressureSeries {
    convert(mmhg, PressUnit::Atm)
}

pub fn to_bar(mmhg: &PressureSeries) -> PressureSeries {
    convert(mmhg, PressUnit::Bar)
}

pub fn to_kpa(mmhg: &PressureSeries) -> PressureSeries {
    convert(mmhg, PressUnit::KPa)
}
