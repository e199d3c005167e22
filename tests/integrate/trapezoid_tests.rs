//! tests for the composite trapezoid rule
use std::f64::consts::PI;

use numericalgo::{trapezoid, NumericalError, ValidationError};

use super::common::assert_in_epsilon;

type TestResult = Result<(), NumericalError>;

fn quartic(x: f64) -> f64 {
    x.powi(4)
}

#[test]
fn quartic_with_20_subdivisions() -> TestResult {
    assert_in_epsilon(trapezoid(&quartic, 1.0, 3.0, 20)?, 48.48666, 1e-4);
    Ok(())
}

#[test]
fn quartic_with_50_subdivisions() -> TestResult {
    assert_in_epsilon(trapezoid(&quartic, 1.0, 3.0, 50)?, 48.41386, 1e-4);
    Ok(())
}

#[test]
fn quartic_with_100_subdivisions() -> TestResult {
    assert_in_epsilon(trapezoid(&quartic, 1.0, 3.0, 100)?, 48.400138, 1e-4);
    Ok(())
}

#[test]
fn converges_to_analytic_integral() -> TestResult {
    let exact = 48.4;
    let mut previous_error = f64::INFINITY;
    for n in [20, 50, 100, 500] {
        let error = (trapezoid(&quartic, 1.0, 3.0, n)? - exact).abs();
        assert!(error < previous_error, "n={n}: {error} >= {previous_error}");
        previous_error = error;
    }
    Ok(())
}

#[test]
fn doubling_subdivisions_quarters_the_error() -> TestResult {
    let exact = 48.4;
    for n in [10, 40, 160] {
        let coarse = (trapezoid(&quartic, 1.0, 3.0, n)? - exact).abs();
        let fine = (trapezoid(&quartic, 1.0, 3.0, 2 * n)? - exact).abs();
        let ratio = coarse / fine;
        assert!((3.9..=4.1).contains(&ratio), "n={n}: ratio {ratio}");
    }
    Ok(())
}

#[test]
fn reciprocal() -> TestResult {
    let f = |x: f64| 1.0 / x;
    assert_in_epsilon(trapezoid(&f, 2.0, 5.0, 20)?, 0.91668422, 1e-4);
    Ok(())
}

#[test]
fn sine() -> TestResult {
    let f = |x: f64| x.sin();
    assert_in_epsilon(trapezoid(&f, 0.0, PI / 2.0, 20)?, 0.9994859, 1e-4);
    Ok(())
}

#[test]
fn zero_subdivisions() {
    let f = |x: f64| x.sin();
    let err = trapezoid(&f, 0.0, PI / 2.0, 0).unwrap_err();
    assert_eq!(err, NumericalError::Validation(ValidationError::ZeroSubdivisions));
    assert_eq!(err.to_string(), "number of subdivisions cannot be 0");
}

#[test]
fn zero_subdivisions_does_not_evaluate() {
    let g = |_: f64| -> f64 { panic!("function evaluated with zero subdivisions") };
    for (l, r) in [(0.0, 1.0), (3.0, -2.0), (5.0, 5.0)] {
        assert_eq!(
            trapezoid(&g, l, r, 0),
            Err(NumericalError::Validation(ValidationError::ZeroSubdivisions))
        );
    }
}

#[test]
fn reversed_interval_negates() -> TestResult {
    let f = |x: f64| x.exp() * x.cos();
    for n in [1, 7, 64] {
        let forward = trapezoid(&f, -1.0, 2.5, n)?;
        let reversed = trapezoid(&f, 2.5, -1.0, n)?;
        assert!(
            (forward + reversed).abs() <= 1e-12 * forward.abs(),
            "n={n}: {forward} vs {reversed}"
        );
    }
    Ok(())
}

#[test]
fn repeated_calls_are_bit_identical() -> TestResult {
    let a = trapezoid(&quartic, 1.0, 3.0, 333)?;
    let b = trapezoid(&quartic, 1.0, 3.0, 333)?;
    assert_eq!(a.to_bits(), b.to_bits());
    Ok(())
}
