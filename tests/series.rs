use antoine::{
    assemble, evaluate, generate_domain, AntoineError, Coefficients, CurveConfig, PressUnit,
    TempUnit, UnitSystem, VaporPressureCurve, TITLE,
};
use approx::assert_abs_diff_eq;

// ═══════════════════════════════════════════════════════════════════
//  Assemblage (unité de pression × unité de température)
// ═══════════════════════════════════════════════════════════════════

#[test]
fn all_twelve_combinations_are_row_aligned() {
    let temps = generate_domain(-20.0, 80.0);
    let mmhg = evaluate(&temps, &Coefficients::water());

    let mut seen = 0;
    for units in UnitSystem::all_combinations() {
        let pair = assemble(&temps, &mmhg, units).unwrap();
        assert_eq!(pair.units, units);
        assert_eq!(pair.temperature.len(), temps.len());
        assert_eq!(pair.pressure.len(), temps.len());
        assert_eq!(pair.pressure.unit(), units.pressure);
        seen += 1;
    }
    assert_eq!(seen, 12);
}

#[test]
fn combinations_on_empty_and_singleton_grids() {
    for (lower, upper, len) in [(5.0, 3.0, 0), (5.0, 5.0, 1)] {
        let temps = generate_domain(lower, upper);
        let mmhg = evaluate(&temps, &Coefficients::water());
        for units in UnitSystem::all_combinations() {
            let pair = assemble(&temps, &mmhg, units).unwrap();
            assert_eq!(pair.len(), len);
            assert_eq!(pair.points().count(), len);
        }
    }
}

#[test]
fn rows_refer_to_the_same_sample() {
    let temps = generate_domain(10.0, 12.0);
    let mmhg = evaluate(&temps, &Coefficients::water());
    let units = UnitSystem::new()
        .temperature(TempUnit::Fahrenheit)
        .pressure(PressUnit::KPa);
    let pair = assemble(&temps, &mmhg, units).unwrap();

    for i in 0..temps.len() {
        assert_abs_diff_eq!(pair.temperature[i], temps[i] * 9.0 / 5.0 + 32.0, epsilon = 1e-12);
        let expected = mmhg.value(i).unwrap() * 101.325 / 760.0;
        assert_abs_diff_eq!(pair.pressure.value(i).unwrap(), expected, epsilon = 1e-4);
    }
}

#[test]
fn mismatched_lengths_are_an_error() {
    let temps = generate_domain(0.0, 5.0);
    let mmhg = evaluate(&temps[..3], &Coefficients::water());
    let err = assemble(&temps, &mmhg, UnitSystem::default()).unwrap_err();
    assert!(
        matches!(err, AntoineError::LengthMismatch { temperatures: 6, pressures: 3 }),
        "got {err:?}"
    );
}

#[test]
fn labels_follow_the_selection() {
    let temps = generate_domain(0.0, 1.0);
    let mmhg = evaluate(&temps, &Coefficients::water());

    let pair = assemble(&temps, &mmhg, UnitSystem::canonical()).unwrap();
    assert_eq!(pair.x_label(), "Temperature (°C)");
    assert_eq!(pair.y_label(), "Vapour Pressure (mmHg)");

    let pair = assemble(&temps, &mmhg, UnitSystem::si_like()).unwrap();
    assert_eq!(pair.x_label(), "Temperature (K)");
    assert_eq!(pair.y_label(), "Vapour Pressure (kPa)");

    let pair = assemble(&temps, &mmhg, UnitSystem::engineering().temperature(TempUnit::Fahrenheit)).unwrap();
    assert_eq!(pair.x_label(), "Temperature (°F)");
    assert_eq!(pair.y_label(), "Vapour Pressure (bar)");

    assert_eq!(TITLE, "Vapour Pressure vs Temperature");
}

#[test]
fn points_skip_faulty_samples() {
    let temps = generate_domain(-3.0, 1.0);
    let mmhg = evaluate(&temps, &Coefficients::default());
    let pair = assemble(&temps, &mmhg, UnitSystem::si_like()).unwrap();

    let points: Vec<_> = pair.points().collect();
    assert_eq!(pair.len(), 5);
    assert_eq!(points.len(), 4);
    // −1 °C (= 272.15 K) est absent
    assert!(points.iter().all(|(t, _)| (t - 272.15).abs() > 1e-9));
}

// ═══════════════════════════════════════════════════════════════════
//  Courbe complète
// ═══════════════════════════════════════════════════════════════════

#[test]
fn curve_end_to_end() {
    let cfg = CurveConfig::new(0.0, 2.0, Coefficients::water());
    let curve = VaporPressureCurve::compute(&cfg).unwrap();

    assert_eq!(curve.domain().temperatures(), &[0.0, 1.0, 2.0]);
    assert_eq!(curve.coefficients(), &Coefficients::water());
    assert!(curve.warning().is_none());

    let all = curve.all_pressure_units();
    assert_eq!(all.len(), 4);
    let units: Vec<_> = all.iter().map(|s| s.unit()).collect();
    assert_eq!(units, PressUnit::ALL.to_vec());
    assert_eq!(&all[0], curve.mmhg());

    let table = curve.table(UnitSystem::si_like()).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.temperature_label(), "Temperature (K)");
}

#[test]
fn curve_reports_faults() {
    let curve = VaporPressureCurve::from_bounds(-5.0, 5.0, Coefficients::default()).unwrap();
    assert_eq!(curve.mmhg().faults().count(), 1);
    assert!(curve.warning().is_some());

    // Toutes les combinaisons restent calculables
    for units in UnitSystem::all_combinations() {
        let pair = curve.series(units).unwrap();
        assert_eq!(pair.len(), 11);
        assert_eq!(pair.points().count(), 10);
    }
}

#[test]
fn curve_rejects_bad_bounds() {
    assert!(VaporPressureCurve::from_bounds(f64::NAN, 1.0, Coefficients::water()).is_err());
    assert!(VaporPressureCurve::from_bounds(0.0, 1e12, Coefficients::water()).is_err());
}
