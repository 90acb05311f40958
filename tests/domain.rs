use antoine::{generate_domain, AntoineError, TemperatureDomain, MAX_SAMPLES};

// ═══════════════════════════════════════════════════════════════════
//  Grille de température
// ═══════════════════════════════════════════════════════════════════

#[test]
fn single_sample_when_bounds_are_equal() {
    assert_eq!(generate_domain(5.0, 5.0), vec![5.0]);
}

#[test]
fn inverted_bounds_give_empty_grid() {
    assert!(generate_domain(5.0, 3.0).is_empty());

    // Pas une erreur : la grille est simplement vide
    let domain = TemperatureDomain::new(5.0, 3.0).unwrap();
    assert!(domain.is_empty());
}

#[test]
fn upper_bound_is_inclusive() {
    assert_eq!(generate_domain(0.0, 3.0), vec![0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn fractional_bounds_step_from_lower() {
    // floor(2.5 − 0.5) + 1 = 3 points, la borne sup. n'est pas atteinte exactement
    let temps = generate_domain(0.5, 2.5);
    assert_eq!(temps, vec![0.5, 1.5, 2.5]);

    let temps = generate_domain(0.0, 2.9);
    assert_eq!(temps, vec![0.0, 1.0, 2.0]);
}

#[test]
fn negative_range() {
    assert_eq!(generate_domain(-3.0, -1.0), vec![-3.0, -2.0, -1.0]);
}

#[test]
fn non_finite_bounds() {
    assert!(generate_domain(f64::NAN, 10.0).is_empty());
    assert!(generate_domain(0.0, f64::INFINITY).is_empty());

    let err = TemperatureDomain::new(f64::NAN, 10.0).unwrap_err();
    assert!(matches!(err, AntoineError::InvalidInput(_)), "got {err:?}");
}

#[test]
fn oversized_domain_is_refused() {
    let err = TemperatureDomain::new(0.0, MAX_SAMPLES as f64 * 10.0).unwrap_err();
    assert!(matches!(err, AntoineError::DomainTooLarge { .. }), "got {err:?}");

    // Exactement à la limite : accepté
    let domain = TemperatureDomain::new(0.0, (MAX_SAMPLES - 1) as f64).unwrap();
    assert_eq!(domain.len(), MAX_SAMPLES);
}

#[test]
fn domain_keeps_its_bounds() {
    let domain = TemperatureDomain::new(-10.0, 10.0).unwrap();
    assert_eq!(domain.lower(), -10.0);
    assert_eq!(domain.upper(), 10.0);
    assert_eq!(domain.len(), 21);
    assert_eq!(domain.temperatures().first(), Some(&-10.0));
    let slice: &[f64] = domain.as_ref();
    assert_eq!(slice.last(), Some(&10.0));
}

#[test]
fn oversized_domain_reports_the_grid_length() {
    match TemperatureDomain::new(0.0, 1e7).unwrap_err() {
        AntoineError::DomainTooLarge { samples, limit } => {
            assert_eq!(samples, 10_000_001);
            assert_eq!(limit, MAX_SAMPLES);
        }
        other => panic!("expected DomainTooLarge, got {other:?}"),
    }

    // Un point de plus que la limite
    let err = TemperatureDomain::new(0.5, MAX_SAMPLES as f64 + 0.5).unwrap_err();
    assert!(
        matches!(err, AntoineError::DomainTooLarge { samples, .. } if samples == MAX_SAMPLES + 1),
        "got {err:?}"
    );
}

#[test]
fn astronomical_range_is_refused_not_allocated() {
    let err = TemperatureDomain::new(0.0, 1e300).unwrap_err();
    assert!(matches!(err, AntoineError::DomainTooLarge { .. }), "got {err:?}");
}

#[test]
#[should_panic(expected = "capacity overflow")]
fn unbounded_grid_panics_when_it_cannot_be_allocated() {
    let _ = generate_domain(0.0, 1e300);
}
