use converter::{PressUnit, UnitSystem};
use log::debug;

use crate::coefficients::Coefficients;
use crate::config::CurveConfig;
use crate::domain::TemperatureDomain;
use crate::error::*;
use crate::evaluator::{evaluate, PressureSeries};
use crate::pressure;
use crate::series::{assemble, SeriesPair};
use crate::table::ResultTable;

/// One evaluation pass: the temperature grid and its canonical mmHg
/// series.
///
/// Any unit selection is derived from these two without re-evaluating
/// the Antoine equation.  Recompute the curve whenever the bounds or
/// coefficients change.
///
/// ```
/// use antoine::{CurveConfig, Coefficients, VaporPressureCurve, UnitSystem};
///
/// let cfg = CurveConfig::new(0.0, 2.0, Coefficients::water());
/// let curve = VaporPressureCurve::compute(&cfg)?;
/// let pair = curve.series(UnitSystem::si_like())?;
/// assert_eq!(pair.len(), 3);
/// # Ok::<(), antoine::AntoineError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VaporPressureCurve {
    coefficients: Coefficients,
    domain: TemperatureDomain,
    mmhg: PressureSeries,
}

impl VaporPressureCurve {
    pub fn compute(config: &CurveConfig) -> Result<Self> {
        Self::from_bounds(config.lower, config.upper, config.coefficients)
    }

    pub fn from_bounds(lower: f64, upper: f64, coefficients: Coefficients) -> Result<Self> {
        let domain = TemperatureDomain::new(lower, upper)?;
        debug!("temperature domain [{lower}, {upper}] °C → {} samples", domain.len());
        let mmhg = evaluate(domain.temperatures(), &coefficients);
        Ok(Self { coefficients, domain, mmhg })
    }

    pub fn coefficients(&self) -> &Coefficients { &self.coefficients }
    pub fn domain(&self) -> &TemperatureDomain { &self.domain }

    /// Canonical pressure series (mmHg).
    pub fn mmhg(&self) -> &PressureSeries { &self.mmhg }

    pub fn warning(&self) -> Option<String> {
        self.mmhg.warning()
    }

    pub fn series(&self, units: UnitSystem) -> Result<SeriesPair> {
        assemble(self.domain.temperatures(), &self.mmhg, units)
    }

    pub fn table(&self, units: UnitSystem) -> Result<ResultTable> {
        self.series(units).map(ResultTable::from)
    }

    /// The canonical series in each of mmHg, atm, bar and kPa.
    pub fn all_pressure_units(&self) -> Vec<PressureSeries> {
        PressUnit::ALL
            .into_iter()
            .map(|unit| pressure::convert(&self.mmhg, unit))
            .collect()
    }
}
