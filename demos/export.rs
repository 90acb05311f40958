use std::fs::File;
use std::io::BufWriter;

use antoine::{CurveConfig, ResultTable, VaporPressureCurve};

/// Writes the configured table to `Vapour_Pressure_Data.csv` (or the
/// path given as first argument).
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cfg = CurveConfig::from_env()?;
    let table = VaporPressureCurve::compute(&cfg)?.table(cfg.units)?;

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| ResultTable::DEFAULT_FILE_NAME.to_string());
    table.write_csv(BufWriter::new(File::create(&path)?))?;

    println!("{} rows written to {path}", table.len());
    Ok(())
}
