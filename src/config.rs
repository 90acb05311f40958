use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Once;

use converter::{PressUnit, TempUnit, UnitSystem};
use log::{debug, warn};

use crate::coefficients::Coefficients;
use crate::error::*;

pub const ENV_T_LOWER: &str = "ANTOINE_T_LOWER";
pub const ENV_T_UPPER: &str = "ANTOINE_T_UPPER";
pub const ENV_A: &str = "ANTOINE_A";
pub const ENV_B: &str = "ANTOINE_B";
pub const ENV_C: &str = "ANTOINE_C";
pub const ENV_PRESSURE_UNIT: &str = "ANTOINE_PRESSURE_UNIT";
pub const ENV_TEMPERATURE_UNIT: &str = "ANTOINE_TEMPERATURE_UNIT";

/// Everything needed to compute and present one curve.
///
/// ```
/// use antoine::{CurveConfig, Coefficients};
///
/// let cfg = CurveConfig::new(0.0, 100.0, Coefficients::water());
/// assert_eq!(cfg.units, antoine::UnitSystem::canonical());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CurveConfig {
    /// Lower temperature bound (°C)
    pub lower: f64,
    /// Upper temperature bound (°C), inclusive
    pub upper: f64,
    pub coefficients: Coefficients,
    pub units: UnitSystem,
}

impl CurveConfig {
    pub fn new(lower: f64, upper: f64, coefficients: Coefficients) -> Self {
        Self { lower, upper, coefficients, units: UnitSystem::canonical() }
    }

    pub fn with_units(mut self, units: UnitSystem) -> Self {
        self.units = units;
        self
    }

    /// Read the `ANTOINE_*` variables, after loading a `.env` file if
    /// one can be found.  Missing keys keep their default.
    pub fn from_env() -> Result<Self> {
        load_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same parsing as [`from_env`](Self::from_env) over any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let lower = parse_or(get(ENV_T_LOWER), ENV_T_LOWER, defaults.lower)?;
        let upper = parse_or(get(ENV_T_UPPER), ENV_T_UPPER, defaults.upper)?;
        let a = parse_or(get(ENV_A), ENV_A, defaults.coefficients.a)?;
        let b = parse_or(get(ENV_B), ENV_B, defaults.coefficients.b)?;
        let c = parse_or(get(ENV_C), ENV_C, defaults.coefficients.c)?;
        let pressure: PressUnit =
            parse_or(get(ENV_PRESSURE_UNIT), ENV_PRESSURE_UNIT, defaults.units.pressure)?;
        let temperature: TempUnit =
            parse_or(get(ENV_TEMPERATURE_UNIT), ENV_TEMPERATURE_UNIT, defaults.units.temperature)?;

        let coefficients = Coefficients::new(a, b, c).map_err(|e| AntoineError::Config {
            key: "ANTOINE_A/B/C".into(),
            message: e.to_string(),
        })?;

        Ok(Self {
            lower,
            upper,
            coefficients,
            units: UnitSystem { temperature, pressure },
        })
    }
}

/// 0–100 °C, `A = B = C = 1`, °C + mmHg.
impl Default for CurveConfig {
    fn default() -> Self {
        Self::new(0.0, 100.0, Coefficients::default())
    }
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| AntoineError::Config {
            key: key.to_string(),
            message: format!("{raw:?}: {e}"),
        }),
    }
}

// ── .env loading (once) ──────────────────────────────────────────────

/// Current directory (and parents), then `CARGO_MANIFEST_DIR`, then the
/// executable's directory.  The first `.env` found wins.
fn load_dotenv() {
    static DOTENV_INIT: Once = Once::new();
    DOTENV_INIT.call_once(|| {
        match dotenvy::dotenv() {
            Ok(path) => { debug!("loaded {}", path.display()); return; }
            Err(e) if e.not_found() => {}
            Err(e) => { warn!("ignoring .env: {e}"); return; }
        }

        let candidates = [
            env::var("CARGO_MANIFEST_DIR").ok().map(PathBuf::from),
            env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf)),
        ];
        for dir in candidates.into_iter().flatten() {
            let p = dir.join(".env");
            if p.exists() {
                load_env_file(&p);
                return;
            }
        }
    });
}

/// Load one `.env` file; a malformed file is logged and skipped.
fn load_env_file(path: &Path) -> bool {
    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!("loaded {}", path.display());
            true
        }
        Err(e) => {
            warn!("ignoring {}: {e}", path.display());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn malformed_env_file_is_skipped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "this line is not KEY=VALUE").unwrap();
        assert!(!load_env_file(file.path()));
    }

    #[test]
    fn well_formed_env_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ANTOINE_CONFIG_TEST_MARKER=42").unwrap();
        assert!(load_env_file(file.path()));
        assert_eq!(env::var("ANTOINE_CONFIG_TEST_MARKER").as_deref(), Ok("42"));
    }

    #[test]
    fn missing_env_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!load_env_file(&dir.path().join(".env")));
    }
}
