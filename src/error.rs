use converter::PressUnit;
use thiserror::Error;

/// Failure of a whole operation (bad input, configuration, export).
///
/// Per-sample numeric problems are **not** reported here; see
/// [`SampleFault`].
#[derive(Error, Debug)]
pub enum AntoineError {
    /// Invalid or out‑of‑range input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A unit name that is neither a known temperature nor pressure unit.
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// Temperature and pressure series are not row-aligned.
    #[error("Series length mismatch: {temperatures} temperatures vs {pressures} pressures")]
    LengthMismatch { temperatures: usize, pressures: usize },

    /// The requested temperature range would produce too many samples.
    #[error("Temperature domain has {samples} samples (limit {limit})")]
    DomainTooLarge { samples: usize, limit: usize },

    /// A configuration key is present but cannot be parsed.
    #[error("Invalid configuration value for {key}: {message}")]
    Config { key: String, message: String },

    /// Writing the CSV export failed.
    #[error("Export failed: {0}")]
    Export(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AntoineError>;

/// Numeric failure of a single temperature sample.
///
/// The evaluator records one of these in place of the pressure value and
/// carries on with the remaining samples.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SampleFault {
    /// `T + C == 0`: the Antoine denominator vanishes.
    #[error("division singularity at T = {temperature} °C (T + C = 0)")]
    DivisionSingularity { temperature: f64 },

    /// `10^(A − B/(T + C))` is not representable as a finite double.
    #[error("pressure out of range at T = {temperature} °C (log10 P = {exponent})")]
    OutOfRange { temperature: f64, exponent: f64 },

    /// A valid pressure has no finite equivalent in the target unit.
    #[error("{value} {from} is out of range in {to}")]
    ConversionOutOfRange { value: f64, from: PressUnit, to: PressUnit },
}

impl SampleFault {
    /// Temperature (°C) of the faulty sample, when the fault arose while
    /// evaluating the Antoine equation.
    pub fn temperature(&self) -> Option<f64> {
        match *self {
            SampleFault::DivisionSingularity { temperature }
            | SampleFault::OutOfRange { temperature, .. } => Some(temperature),
            SampleFault::ConversionOutOfRange { .. } => None,
        }
    }
}

/// One entry of a pressure series: a value, or the reason there is none.
pub type Sample = std::result::Result<f64, SampleFault>;
