use antoine::{CurveConfig, UnitSystem, VaporPressureCurve};

/// Reads `ANTOINE_*` settings (or a `.env` file) and prints the curve in
/// every unit combination.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cfg = CurveConfig::from_env()?;
    let curve = VaporPressureCurve::compute(&cfg)?;
    println!(
        "{} samples from {} °C to {} °C\n",
        curve.domain().len(),
        cfg.lower,
        cfg.upper
    );

    for units in UnitSystem::all_combinations() {
        let pair = curve.series(units)?;
        let last = pair.points().last();
        match last {
            Some((t, p)) => println!("{:<18} {:<24} last: {t:.2} → {p:.4}", pair.x_label(), pair.y_label()),
            None => println!("{:<18} {:<24} (no valid samples)", pair.x_label(), pair.y_label()),
        }
    }

    if let Some(warning) = curve.warning() {
        eprintln!("\nwarning: {warning}");
    }
    Ok(())
}
