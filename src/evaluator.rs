//! Antoine evaluation over a temperature grid.

use std::ops::Index;

use converter::PressUnit;
use log::{debug, trace, warn};

use crate::coefficients::Coefficients;
use crate::error::*;

/// Decimal places kept in every pressure series.
pub const PRESSURE_DECIMALS: i32 = 4;

/// Round `value` to `decimals` places (half away from zero).
///
/// Values too large for the scaled intermediate to stay finite are
/// returned unchanged; at that magnitude they carry no fractional digits.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// Pressure values index-aligned to a temperature grid.
///
/// Each entry is either a value in [`unit`](Self::unit) or the
/// [`SampleFault`] that prevented it.  Conversions always build a new
/// series; an existing one is never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureSeries {
    unit: PressUnit,
    samples: Vec<Sample>,
}

impl PressureSeries {
    pub(crate) fn from_samples(unit: PressUnit, samples: Vec<Sample>) -> Self {
        Self { unit, samples }
    }

    pub fn unit(&self) -> PressUnit { self.unit }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    /// Value at `index`, or `None` for a faulty or missing sample.
    pub fn value(&self, index: usize) -> Option<f64> {
        self.samples.get(index).and_then(|s| s.ok())
    }

    /// Values with faults replaced by `None`.
    pub fn values(&self) -> Vec<Option<f64>> {
        self.samples.iter().map(|s| s.ok()).collect()
    }

    /// Only the successfully computed values, in sample order.
    pub fn valid_values(&self) -> Vec<f64> {
        self.samples.iter().filter_map(|s| s.ok()).collect()
    }

    /// `(index, fault)` for every faulty sample.
    pub fn faults(&self) -> impl Iterator<Item = (usize, SampleFault)> + '_ {
        self.samples
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.err().map(|fault| (i, fault)))
    }

    pub fn has_faults(&self) -> bool {
        self.samples.iter().any(|s| s.is_err())
    }

    /// Message for the presentation layer when any sample faulted.
    pub fn warning(&self) -> Option<String> {
        let mut faults = self.faults();
        let (_, first) = faults.next()?;
        let others = faults.count();
        Some(match others {
            0 => format!("1 sample could not be computed: {first}"),
            n => format!(
                "{} samples could not be computed (first: {first}); they are left out of the curve",
                n + 1
            ),
        })
    }
}

impl Index<usize> for PressureSeries {
    type Output = Sample;

    fn index(&self, index: usize) -> &Sample {
        &self.samples[index]
    }
}

impl<'a> IntoIterator for &'a PressureSeries {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Canonical mmHg series for `domain`, rounded to
/// [`PRESSURE_DECIMALS`] places.
///
/// A sample with `T + C = 0` or a non-finite result is recorded as a
/// [`SampleFault`]; the rest of the series is still computed.
pub fn evaluate(domain: &[f64], coefficients: &Coefficients) -> PressureSeries {
    debug!(
        "evaluating {} samples with A={}, B={}, C={}",
        domain.len(),
        coefficients.a,
        coefficients.b,
        coefficients.c
    );

    let samples: Vec<Sample> = domain
        .iter()
        .map(|&t| {
            let sample = coefficients
                .pressure_mmhg(t)
                .map(|p| round_to(p, PRESSURE_DECIMALS));
            if let Err(fault) = &sample {
                trace!("{fault}");
            }
            sample
        })
        .collect();

    let series = PressureSeries::from_samples(PressUnit::MmHg, samples);
    if let Some((_, first)) = series.faults().next() {
        warn!(
            "{} of {} samples faulted (first: {first})",
            series.faults().count(),
            series.len()
        );
    }
    series
}
