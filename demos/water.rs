use antoine::{Coefficients, CurveConfig, UnitSystem, VaporPressureCurve, TITLE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Water, 0–100 °C, canonical units
    let cfg = CurveConfig::new(0.0, 100.0, Coefficients::water());
    println!("=== {TITLE} ===\n");
    println!("Coefficients:\n{}\n", cfg.coefficients);

    let curve = VaporPressureCurve::compute(&cfg)?;
    if let Some(warning) = curve.warning() {
        eprintln!("warning: {warning}");
    }

    // ── Every tenth sample ──────────────────────────────────────────
    let pair = curve.series(UnitSystem::canonical())?;
    println!("{:>8}  {:>12}", pair.x_label(), pair.y_label());
    for (t, p) in pair.points().step_by(10) {
        println!("{t:>8.1}  {p:>12.4}");
    }

    // ── Normal boiling point ────────────────────────────────────────
    let t_boil = cfg.coefficients.boiling_point(760.0)?;
    println!("\nT_boil(760 mmHg) = {t_boil:.3} °C");

    // ── Baseline A = B = C = 1 crossing its singularity at −1 °C ───
    let baseline = VaporPressureCurve::from_bounds(-3.0, 1.0, Coefficients::default())?;
    println!("\nBaseline coefficients, −3 … 1 °C:");
    println!("{}", baseline.table(UnitSystem::canonical())?);
    if let Some(warning) = baseline.warning() {
        eprintln!("warning: {warning}");
    }
    Ok(())
}
