//! # antoine
//!
//! Saturation vapour-pressure curves from
//! [Antoine](https://en.wikipedia.org/wiki/Antoine_equation) coefficients:
//!
//! ```text
//! log10(P / mmHg) = A − B / (T / °C + C)
//! ```
//!
//! ## Highlights
//!
//! * **Canonical series**: pressures are computed once, in mmHg on a 1 °C grid,
//!   and every other unit is derived from that series
//! * **Per-sample faults**: `T + C = 0` or an overflowing power marks that
//!   sample only, the rest of the curve is still computed
//! * **12 unit selections**: mmHg / atm / bar / kPa against °C / K / °F
//! * **Table & export**: labelled columns, text rendering, CSV, serde
//!
//! ## Quick example
//!
//! ```
//! use antoine::{Coefficients, CurveConfig, VaporPressureCurve, UnitSystem, PressUnit};
//!
//! let cfg = CurveConfig::new(0.0, 100.0, Coefficients::water());
//! let curve = VaporPressureCurve::compute(&cfg)?;
//!
//! let pair = curve.series(UnitSystem::new().pressure(PressUnit::Atm))?;
//! let (t, p) = pair.points().last().unwrap();
//! assert_eq!(t, 100.0);
//! assert!((p - 1.0).abs() < 1e-3);
//! # Ok::<(), antoine::AntoineError>(())
//! ```
//!
//! ## Building blocks
//!
//! ```
//! use antoine::{generate_domain, evaluate, pressure, Coefficients};
//!
//! let temps = generate_domain(-2.0, 0.0);
//! let mmhg = evaluate(&temps, &Coefficients::default());
//!
//! // T = −1 °C hits C = 1: only that sample faults.
//! assert!(mmhg[0].is_ok() && mmhg[1].is_err() && mmhg[2].is_ok());
//! let kpa = pressure::to_kpa(&mmhg);
//! assert_eq!(kpa.len(), 3);
//! ```

// ── Internal modules ─────────────────────────────────────────────────
mod coefficients;
mod curve;
mod domain;
mod evaluator;
mod series;
mod table;

pub mod config;
pub mod error;
pub mod pressure;
pub mod temperature;

// ── Public re-exports ────────────────────────────────────────────────
pub use error::{AntoineError, Result, Sample, SampleFault};
pub use coefficients::Coefficients;
pub use config::CurveConfig;
pub use curve::VaporPressureCurve;
pub use domain::{generate_domain, TemperatureDomain, MAX_SAMPLES, STEP};
pub use evaluator::{evaluate, round_to, PressureSeries, PRESSURE_DECIMALS};
pub use series::{assemble, pressure_label, temperature_label, SeriesPair, TITLE};
pub use table::{ResultTable, Row, DISPLAY_DECIMALS};

pub use converter::{Converter, PressUnit, TempUnit, UnitSystem};
