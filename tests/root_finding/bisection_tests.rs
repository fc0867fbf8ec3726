//! tests for the bisection root finding algorithm 
use approx::assert_abs_diff_eq;
use zof::root_finding::bisection::{bisection, BisectionCfg};
use zof::root_finding::errors::RootFindingError;
use zof::root_finding::report::{Diagnostic, SolveResult, Stencil, ToleranceSatisfied};

type TestResult = Result<(), RootFindingError>;

fn assert_bracket_invariant<F: Fn(f64) -> f64>(f: &F, res: &SolveResult) {
    for record in &res.records {
        let Stencil::Bracket { a, b } = record.stencil else {
            panic!("expected Bracket stencil, got {:?}", record.stencil);
        };
        assert!(a < b, "iteration {}", record.iteration);
        assert!(f(a) * f(b) <= 0.0, "iteration {}", record.iteration);
        assert!(a <= record.estimate && record.estimate <= b);
    }
}

#[test]
fn finds_2_on_x_squared_minus_4() -> TestResult {
    let f   = |x: f64| x * x - 4.0;
    let cfg = BisectionCfg::new().set_tol(1e-6)?.set_max_iter(100)?;

    let res = bisection(f, 0.0, 3.0, cfg)?;

    assert!(res.converged);
    assert_eq!(res.tolerance, ToleranceSatisfied::ErrorTolReached);
    assert_eq!(res.diagnostic, None);
    assert_abs_diff_eq!(res.root.unwrap(), 2.0, epsilon = 1e-6);
    // 3 / 2^n < 1e-6 first holds at n = 22
    assert_eq!(res.iteration_count, 22);
    assert_eq!(res.iteration_count, res.records.len());
    assert!(res.error.unwrap() < 1e-6);
    Ok(())
}

#[test]
fn records_half_width_as_error() -> TestResult {
    let f   = |x: f64| x * x - 4.0;
    let res = bisection(f, 0.0, 3.0, BisectionCfg::new())?;

    let first = &res.records[0];
    assert_eq!(first.iteration, 1);
    assert_eq!(first.estimate, 1.5);
    assert_eq!(first.f_estimate, -1.75);
    assert_eq!(first.error, 1.5);
    assert_eq!(first.stencil, Stencil::Bracket { a: 0.0, b: 3.0 });

    // f(1.5) < 0, so the left endpoint moves
    assert_eq!(res.records[1].stencil, Stencil::Bracket { a: 1.5, b: 3.0 });
    for pair in res.records.windows(2) {
        assert_eq!(pair[1].error, pair[0].error * 0.5);
    }
    Ok(())
}

#[test]
fn no_sign_change() -> TestResult {
    let f   = |x: f64| x * x - 4.0;
    let res = bisection(f, 1.0, 1.5, BisectionCfg::new())?;

    assert!(!res.converged);
    assert_eq!(res.diagnostic, Some(Diagnostic::NoSignChange { a: 1.0, b: 1.5 }));
    assert_eq!(res.diagnostic.unwrap().message(), "no sign change");
    assert_eq!(res.iteration_count, 0);
    assert!(res.records.is_empty());
    assert_eq!(res.root, None);
    assert_eq!(res.error, None);
    assert_eq!(res.tolerance, ToleranceSatisfied::ToleranceNotReached);
    Ok(())
}

#[test]
fn endpoint_b_is_root_iterations_0() -> TestResult {
    let f   = |x: f64| x * x - 4.0;
    let res = bisection(f, 1.0, 2.0, BisectionCfg::new())?;

    assert!(res.converged);
    assert_eq!(res.root, Some(2.0));
    assert_eq!(res.error, Some(0.0));
    assert_eq!(res.iteration_count, 0);
    assert_eq!(res.tolerance, ToleranceSatisfied::AbsFxReached);
    Ok(())
}

#[test]
fn midpoint_hits_root_exactly() -> TestResult {
    let f   = |x: f64| x - 1.0;
    let res = bisection(f, 0.0, 2.0, BisectionCfg::new())?;

    assert!(res.converged);
    assert_eq!(res.tolerance, ToleranceSatisfied::AbsFxReached);
    assert_eq!(res.root, Some(1.0));
    assert_eq!(res.iteration_count, 1);
    Ok(())
}

#[test]
fn abs_fx_stops_early() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = BisectionCfg::new().set_tol(1e-12)?.set_abs_fx(1e-3)?;
    let res = bisection(f, 0.0, 2.0, cfg)?;

    assert!(res.converged);
    assert_eq!(res.tolerance, ToleranceSatisfied::AbsFxReached);
    assert!(f(res.root.unwrap()).abs() < 1e-3);
    assert!(res.error.unwrap() >= 1e-12);
    Ok(())
}

#[test]
fn uses_max_iter() -> TestResult {
    let f     = |x: f64| x - 1.0 / 3.0;
    let niter = 10;
    let cfg   = BisectionCfg::new().set_tol(1e-12)?.set_max_iter(niter)?;

    let res = bisection(f, 0.0, 1.0, cfg)?;

    assert!(!res.converged);
    assert_eq!(res.diagnostic, Some(Diagnostic::IterationLimit));
    assert_eq!(res.iteration_count, niter);
    assert_eq!(res.records.len(), niter);
    assert_eq!(res.root, None);
    assert_abs_diff_eq!(res.estimate().unwrap(), 1.0 / 3.0, epsilon = 1e-3);
    assert_bracket_invariant(&f, &res);
    Ok(())
}

#[test]
fn keeps_sign_change_every_iteration() -> TestResult {
    let f   = |x: f64| x.cos() - x;
    let res = bisection(f, -1.0, 4.0, BisectionCfg::new().set_tol(1e-10)?)?;

    assert!(res.converged);
    assert_bracket_invariant(&f, &res);
    assert_abs_diff_eq!(res.root.unwrap(), 0.739_085_133_215_160_6, epsilon = 1e-10);
    Ok(())
}

#[test]
fn non_finite_eval() -> TestResult {
    let f   = |x: f64| x.sqrt() - 2.0;
    let res = bisection(f, -1.0, 5.0, BisectionCfg::new())?;

    assert!(!res.converged);
    assert!(matches!(
        res.diagnostic,
        Some(Diagnostic::NonFiniteValue { x, fx }) if x == -1.0 && fx.is_nan()
    ));
    assert_eq!(res.iteration_count, 0);
    Ok(())
}

#[test]
fn detects_invalid_bounds() {
    let f = |x: f64| x;
    assert_eq!(
        bisection(f, 2.0, 0.0, BisectionCfg::new()).unwrap_err(),
        RootFindingError::InvalidBounds { a: 2.0, b: 0.0 }
    );
    assert!(matches!(
        bisection(f, f64::NEG_INFINITY, 0.0, BisectionCfg::new()),
        Err(RootFindingError::InvalidBounds { .. })
    ));
}

#[test]
fn rejects_non_positive_tolerance() {
    assert!(matches!(
        BisectionCfg::new().set_tol(0.0),
        Err(RootFindingError::InvalidTolerance { got }) if got == 0.0
    ));
    assert!(matches!(
        BisectionCfg::new().set_max_iter(0),
        Err(RootFindingError::InvalidMaxIter { got: 0 })
    ));
}

#[test]
fn repeated_runs_are_identical() -> TestResult {
    let f    = |x: f64| x * x * x - x - 2.0;
    let cfg  = BisectionCfg::new().set_tol(1e-9)?;
    let once = bisection(f, 1.0, 2.0, cfg)?;
    let twice = bisection(f, 1.0, 2.0, cfg)?;

    assert_eq!(once, twice);
    Ok(())
}

#[test]
fn counts_evaluations() -> TestResult {
    let f   = |x: f64| x * x - 4.0;
    let res = bisection(f, 0.0, 3.0, BisectionCfg::new())?;

    // two endpoints plus one midpoint per iteration
    assert_eq!(res.evaluations, 2 + res.iteration_count);
    Ok(())
}
