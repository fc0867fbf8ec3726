//! tests for fixed-point iteration
use approx::assert_abs_diff_eq;
use zof::root_finding::fixed_point::{fixed_point, FixedPointCfg};
use zof::root_finding::errors::RootFindingError;
use zof::root_finding::report::{Diagnostic, Stencil, ToleranceSatisfied};

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_2_from_sqrt_x_plus_2() -> TestResult {
    let g   = |x: f64| (x + 2.0).sqrt();
    let res = fixed_point(g, 1.0, FixedPointCfg::new())?;

    assert!(res.converged);
    assert_eq!(res.tolerance, ToleranceSatisfied::ErrorTolReached);
    assert_abs_diff_eq!(res.root.unwrap(), 2.0, epsilon = 1e-6);
    assert_eq!(res.records[0].stencil, Stencil::FixedPoint { x: 1.0 });
    assert_abs_diff_eq!(res.records[0].estimate, 3f64.sqrt(), epsilon = 1e-15);
    Ok(())
}

#[test]
fn records_residual_of_estimate() -> TestResult {
    let g   = |x: f64| x.cos();
    let res = fixed_point(g, 1.0, FixedPointCfg::new())?;

    assert!(res.converged);
    assert_abs_diff_eq!(res.root.unwrap(), 0.739_085_133_215_160_6, epsilon = 1e-5);
    for record in &res.records {
        assert_eq!(record.f_estimate, g(record.estimate) - record.estimate);
    }
    Ok(())
}

#[test]
fn diverges_past_bound() -> TestResult {
    let g   = |x: f64| x * x + 1.0;
    let res = fixed_point(g, 2.0, FixedPointCfg::new())?;

    // 5, 26, 677, 458330, 210066388901
    assert!(!res.converged);
    assert_eq!(res.iteration_count, 5);
    assert_eq!(res.diagnostic, Some(Diagnostic::Diverged { x: 210_066_388_901.0 }));
    assert_eq!(res.diagnostic.unwrap().message(), "diverged");
    Ok(())
}

#[test]
fn unbounded_runs_to_max_iter() -> TestResult {
    let g   = |x: f64| 2.0 * x;
    let cfg = FixedPointCfg::new()
        .set_divergence_bound(f64::INFINITY)?
        .set_max_iter(20)?;
    let res = fixed_point(g, 1.0, cfg)?;

    assert_eq!(res.diagnostic, Some(Diagnostic::IterationLimit));
    assert_eq!(res.iteration_count, 20);
    assert_eq!(res.estimate(), Some(1_048_576.0));
    Ok(())
}

#[test]
fn non_finite_g_diverges() -> TestResult {
    let g   = |x: f64| 1.0 / (x - 1.0);
    let res = fixed_point(g, 1.0, FixedPointCfg::new())?;

    assert!(!res.converged);
    assert_eq!(res.diagnostic, Some(Diagnostic::Diverged { x: 1.0 }));
    assert!(res.records.is_empty());
    Ok(())
}

#[test]
fn rejects_bad_divergence_bound() {
    assert!(matches!(
        FixedPointCfg::new().set_divergence_bound(0.0),
        Err(RootFindingError::InvalidDivergenceBound { got }) if got == 0.0
    ));
    assert!(FixedPointCfg::new().set_divergence_bound(f64::NAN).is_err());
}
