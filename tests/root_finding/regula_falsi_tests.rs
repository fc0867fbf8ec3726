//! tests for the regula falsi root finding algorithm
use approx::assert_abs_diff_eq;
use zof::root_finding::regula_falsi::{regula_falsi, RegulaFalsiCfg};
use zof::root_finding::errors::RootFindingError;
use zof::root_finding::report::{Diagnostic, Stencil, ToleranceSatisfied};

type TestResult = Result<(), RootFindingError>;

const CUBIC_ROOT: f64 = 2.094_551_481_542_326_6;

#[test]
fn finds_root_of_cubic() -> TestResult {
    let f   = |x: f64| x * x * x - 2.0 * x - 5.0;
    let cfg = RegulaFalsiCfg::new().set_tol(1e-6)?;
    let res = regula_falsi(f, 2.0, 3.0, cfg)?;

    assert!(res.converged);
    assert_eq!(res.tolerance, ToleranceSatisfied::ErrorTolReached);
    assert_abs_diff_eq!(res.root.unwrap(), CUBIC_ROOT, epsilon = 1e-5);
    assert!(res.iteration_count <= 100);
    assert_eq!(res.iteration_count, res.records.len());
    Ok(())
}

#[test]
fn first_error_is_bracket_width() -> TestResult {
    let f   = |x: f64| x * x * x - 2.0 * x - 5.0;
    let res = regula_falsi(f, 2.0, 3.0, RegulaFalsiCfg::new())?;

    let first = &res.records[0];
    assert_eq!(first.stencil, Stencil::Bracket { a: 2.0, b: 3.0 });
    assert_eq!(first.error, 1.0);
    // later errors are the change between successive estimates
    let second = &res.records[1];
    assert_eq!(second.error, (second.estimate - first.estimate).abs());
    Ok(())
}

#[test]
fn finds_root_of_exp_minus_3x() -> TestResult {
    let f   = |x: f64| x.exp() - 3.0 * x;
    let res = regula_falsi(f, 0.0, 1.0, RegulaFalsiCfg::new().set_tol(1e-10)?)?;

    assert!(res.converged);
    assert_abs_diff_eq!(res.root.unwrap(), 0.619_061_286_735_945_1, epsilon = 1e-8);
    Ok(())
}

#[test]
fn no_sign_change_on_same_signed_bracket() -> TestResult {
    let f   = |x: f64| x.exp() - 3.0 * x;
    let res = regula_falsi(f, 0.0, 2.0, RegulaFalsiCfg::new())?;

    assert!(!res.converged);
    assert_eq!(res.diagnostic, Some(Diagnostic::NoSignChange { a: 0.0, b: 2.0 }));
    assert!(res.records.is_empty());
    Ok(())
}

#[test]
fn keeps_far_endpoint_fixed_on_convex_function() -> TestResult {
    let f   = |x: f64| x.powi(10) - 1.0;
    let cfg = RegulaFalsiCfg::new().set_tol(1e-12)?.set_max_iter(20)?;
    let res = regula_falsi(f, 0.0, 1.3, cfg)?;

    assert!(!res.converged);
    assert_eq!(res.diagnostic, Some(Diagnostic::IterationLimit));
    assert_eq!(res.iteration_count, 20);
    for record in &res.records {
        let Stencil::Bracket { a, b } = record.stencil else { panic!("not a bracket") };
        assert_eq!(b, 1.3);
        assert!(f(a) * f(b) <= 0.0);
        assert!(record.estimate < 1.0);
    }
    Ok(())
}

#[test]
fn keeps_sign_change_every_iteration() -> TestResult {
    let f   = |x: f64| x.cos() - x;
    let res = regula_falsi(f, 0.0, 1.0, RegulaFalsiCfg::new().set_tol(1e-10)?)?;

    assert!(res.converged);
    for record in &res.records {
        let Stencil::Bracket { a, b } = record.stencil else { panic!("not a bracket") };
        assert!(a < b, "iteration {}", record.iteration);
        assert!(f(a) * f(b) <= 0.0, "iteration {}", record.iteration);
        assert!(a <= record.estimate && record.estimate <= b);
    }
    Ok(())
}

#[test]
fn overflowing_false_position_diverges() -> TestResult {
    // f(a) * (b - a) and f(b) - f(a) both overflow, giving NaN
    let f   = |x: f64| x * 1e308;
    let res = regula_falsi(f, -1.0, 1.0, RegulaFalsiCfg::new())?;

    assert!(!res.converged);
    assert_eq!(res.diagnostic, Some(Diagnostic::Diverged { x: -1.0 }));
    assert!(res.records.is_empty());
    Ok(())
}

#[test]
fn endpoint_a_is_root() -> TestResult {
    let f   = |x: f64| x * x - 4.0;
    let res = regula_falsi(f, -2.0, 0.0, RegulaFalsiCfg::new())?;

    assert!(res.converged);
    assert_eq!(res.root, Some(-2.0));
    assert_eq!(res.iteration_count, 0);
    Ok(())
}

#[test]
fn detects_invalid_bounds() {
    let f = |x: f64| x;
    assert_eq!(
        regula_falsi(f, 1.0, 1.0, RegulaFalsiCfg::new()).unwrap_err(),
        RootFindingError::InvalidBounds { a: 1.0, b: 1.0 }
    );
}
