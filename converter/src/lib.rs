//! Unit conversion for Antoine vapour-pressure curves.
//!
//! The Antoine correlation is evaluated in its **canonical** units:
//! temperature in **°C** and pressure in **mmHg**.  This crate maps
//! canonical values to whatever the user selected (K, °F, atm, bar, kPa)
//! and back.
//!
//! # Presets
//!
//! | Preset          | T   | P    |
//! |-----------------|-----|------|
//! | `canonical()`   | °C  | mmHg |
//! | `si_like()`     | K   | kPa  |
//! | `engineering()` | °C  | bar  |
//!
//! # Builder
//!
//! ```
//! use converter::{UnitSystem, TempUnit, PressUnit};
//!
//! let units = UnitSystem::new()
//!     .temperature(TempUnit::Kelvin)
//!     .pressure(PressUnit::Atm);
//! ```

use std::fmt;
use std::str::FromStr;

/// Millimetres of mercury in one standard atmosphere.
pub const MMHG_PER_ATM: f64 = 760.0;
/// Bar in one standard atmosphere.
pub const BAR_PER_ATM: f64 = 1.01325;
/// Kilopascal in one standard atmosphere.
pub const KPA_PER_ATM: f64 = 101.325;
/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

// ────────────────────────────────────────────────────────────────────
//  Unit enums
// ────────────────────────────────────────────────────────────────────

/// Temperature unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TempUnit {
    /// Degrees Celsius (canonical)
    Celsius,
    /// Kelvin
    Kelvin,
    /// Degrees Fahrenheit
    Fahrenheit,
}

impl TempUnit {
    pub const ALL: [TempUnit; 3] = [TempUnit::Celsius, TempUnit::Kelvin, TempUnit::Fahrenheit];

    /// Short symbol used in axis labels and column headers.
    pub fn symbol(self) -> &'static str {
        match self {
            TempUnit::Celsius    => "°C",
            TempUnit::Kelvin     => "K",
            TempUnit::Fahrenheit => "°F",
        }
    }
}

/// Pressure unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressUnit {
    /// Millimetres of mercury (canonical)
    MmHg,
    /// Standard atmosphere (760 mmHg)
    Atm,
    /// Bar (1 atm = 1.01325 bar)
    Bar,
    /// Kilopascal (1 atm = 101.325 kPa)
    KPa,
}

impl PressUnit {
    pub const ALL: [PressUnit; 4] = [PressUnit::MmHg, PressUnit::Atm, PressUnit::Bar, PressUnit::KPa];

    pub fn symbol(self) -> &'static str {
        match self {
            PressUnit::MmHg => "mmHg",
            PressUnit::Atm  => "atm",
            PressUnit::Bar  => "bar",
            PressUnit::KPa  => "kPa",
        }
    }

    /// Multiplier taking a value in mmHg to this unit.
    pub fn factor_from_mmhg(self) -> f64 {
        match self {
            PressUnit::MmHg => 1.0,
            PressUnit::Atm  => 1.0 / MMHG_PER_ATM,
            PressUnit::Bar  => BAR_PER_ATM / MMHG_PER_ATM,
            PressUnit::KPa  => KPA_PER_ATM / MMHG_PER_ATM,
        }
    }
}

impl fmt::Display for TempUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for PressUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ────────────────────────────────────────────────────────────────────
//  Parsing from user text
// ────────────────────────────────────────────────────────────────────

/// Returned when a unit name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseUnitError(pub String);

impl fmt::Display for ParseUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown unit: {:?}", self.0)
    }
}

impl std::error::Error for ParseUnitError {}

impl FromStr for TempUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "°c" | "degc" | "celsius"    => Ok(TempUnit::Celsius),
            "k" | "kelvin"                     => Ok(TempUnit::Kelvin),
            "f" | "°f" | "degf" | "fahrenheit" => Ok(TempUnit::Fahrenheit),
            _ => Err(ParseUnitError(s.to_string())),
        }
    }
}

impl FromStr for PressUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mmhg" | "torr" => Ok(PressUnit::MmHg),
            "atm"           => Ok(PressUnit::Atm),
            "bar"           => Ok(PressUnit::Bar),
            "kpa"           => Ok(PressUnit::KPa),
            _ => Err(ParseUnitError(s.to_string())),
        }
    }
}

// ────────────────────────────────────────────────────────────────────
//  UnitSystem — the user's (temperature, pressure) selection
// ────────────────────────────────────────────────────────────────────

/// The pair of units a curve is presented in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitSystem {
    pub temperature: TempUnit,
    pub pressure:    PressUnit,
}

impl UnitSystem {
    /// Start from the canonical units.  Use the builder methods to
    /// change individual quantities.
    pub fn new() -> Self { Self::canonical() }

    // ── Presets ──────────────────────────────────────────────────────

    /// °C + mmHg, the units the Antoine constants are fitted in.
    pub fn canonical() -> Self {
        Self { temperature: TempUnit::Celsius, pressure: PressUnit::MmHg }
    }

    /// K + kPa.
    pub fn si_like() -> Self {
        Self { temperature: TempUnit::Kelvin, pressure: PressUnit::KPa }
    }

    /// °C + bar.
    pub fn engineering() -> Self {
        Self { temperature: TempUnit::Celsius, pressure: PressUnit::Bar }
    }

    // ── Builder methods ─────────────────────────────────────────────

    pub fn temperature(mut self, u: TempUnit) -> Self { self.temperature = u; self }
    pub fn pressure(mut self, u: PressUnit) -> Self { self.pressure = u; self }

    /// Every pressure × temperature selection (4 × 3 = 12).
    pub fn all_combinations() -> impl Iterator<Item = UnitSystem> {
        PressUnit::ALL.into_iter().flat_map(|pressure| {
            TempUnit::ALL
                .into_iter()
                .map(move |temperature| UnitSystem { temperature, pressure })
        })
    }
}

impl Default for UnitSystem {
    fn default() -> Self { Self::canonical() }
}

// ────────────────────────────────────────────────────────────────────
//  Converter — canonical (°C, mmHg) ↔ selected units
// ────────────────────────────────────────────────────────────────────

/// Performs conversions between canonical units and a [`UnitSystem`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    pub units: UnitSystem,
}

impl Converter {
    pub fn new(units: UnitSystem) -> Self {
        Self { units }
    }

    /// No conversion at all.
    pub fn identity() -> Self {
        Self { units: UnitSystem::canonical() }
    }

    // ── Temperature ─────────────────────────────────────────────────

    /// °C → user
    pub fn t_from_celsius(&self, t: f64) -> f64 {
        match self.units.temperature {
            TempUnit::Celsius    => t,
            TempUnit::Kelvin     => t + KELVIN_OFFSET,
            TempUnit::Fahrenheit => t * 9.0 / 5.0 + 32.0,
        }
    }

    /// User → °C
    pub fn t_to_celsius(&self, t: f64) -> f64 {
        match self.units.temperature {
            TempUnit::Celsius    => t,
            TempUnit::Kelvin     => t - KELVIN_OFFSET,
            TempUnit::Fahrenheit => (t - 32.0) * 5.0 / 9.0,
        }
    }

    // ── Pressure ────────────────────────────────────────────────────

    /// mmHg → user
    ///
    /// Every factor is ≤ 1, so a finite input stays finite.
    pub fn p_from_mmhg(&self, p: f64) -> f64 {
        match self.units.pressure {
            PressUnit::MmHg => p,
            unit            => p * unit.factor_from_mmhg(),
        }
    }

    /// User → mmHg
    pub fn p_to_mmhg(&self, p: f64) -> f64 {
        match self.units.pressure {
            PressUnit::MmHg => p,
            unit            => p / unit.factor_from_mmhg(),
        }
    }
}
