use super::algorithms::Algorithm;
use super::report::{SolveResult, Diagnostic, Stencil, ToleranceSatisfied, Trace};
use super::errors::RootFindingError;
use super::config::{CommonCfg, impl_common_cfg};
use super::signs::{opposite_sign, same_strict_sign};
use super::eval::Counted;

const ALGORITHM: Algorithm = Algorithm::Bisection;


/// Bisection Configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tol`, `max_iter` and optional `abs_fx`.
///
/// # Construction
/// - Use [`BisectionCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BisectionCfg {
    common: CommonCfg,
}
impl BisectionCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(BisectionCfg);


/// Calculates midpoint of [a, b]
#[inline]
pub(crate) fn midpoint(a: f64, b: f64) -> f64 {
    a + (b - a) * 0.5
}


/// Outcome of checking a bracket before iterating.
/// ├ [`Opening::Bracket`]  - valid sign change, iterate with `f(a)`, `f(b)`
/// └ [`Opening::Finished`] - endpoint root, no sign change, or non-finite endpoint
#[derive(Debug)]
pub(crate) enum Opening {
    Bracket { fa: f64, fb: f64 },
    Finished(SolveResult),
}

/// Checks the bracket `[a, b]` shared by bisection and regula falsi.
///
/// # Errors
/// └ [`RootFindingError::InvalidBounds`] - `a`/`b` non-finite or `a >= b`
pub(crate) fn open_bracket<F>(
    algorithm: Algorithm,
    eval: &mut Counted<F>,
    a: f64,
    b: f64,
    cfg: &CommonCfg,
) -> Result<Opening, RootFindingError>
where F: FnMut(f64) -> f64 {
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(RootFindingError::InvalidBounds { a, b });
    }

    let trace = Trace::new(algorithm, cfg.max_iter());
    let fa = eval.eval(a);
    if !fa.is_finite() {
        return Ok(Opening::Finished(trace.stopped(Diagnostic::NonFiniteValue { x: a, fx: fa }, eval.evals())));
    }
    // immediate bounds are roots
    if cfg.residual_reached(fa) {
        return Ok(Opening::Finished(trace.converged_at(a, eval.evals())));
    }

    let fb = eval.eval(b);
    if !fb.is_finite() {
        return Ok(Opening::Finished(trace.stopped(Diagnostic::NonFiniteValue { x: b, fx: fb }, eval.evals())));
    }
    if cfg.residual_reached(fb) {
        return Ok(Opening::Finished(trace.converged_at(b, eval.evals())));
    }

    if same_strict_sign(fa, fb) {
        return Ok(Opening::Finished(trace.stopped(Diagnostic::NoSignChange { a, b }, eval.evals())));
    }

    Ok(Opening::Bracket { fa, fb })
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// This method assumes that the function `func` is continuous on the interval `[a, b]`
/// and that `func(a)` and `func(b)` have opposite signs, guaranteeing a root exists
/// within the interval.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - Lower bound of the search interval. Must be finite and less than `b`.
/// ├ `b`    - Upper bound of the search interval. Must be finite and greater than `a`.
/// └ `cfg`  - [`BisectionCfg`]
///    Defaults:
///    ├ cfg.tol      = 1e-6
///    ├ cfg.max_iter = 100
///    └ cfg.abs_fx   = unset (only an exact zero counts)
///
/// # Returns
///
/// A [`SolveResult`] whose records hold, per iteration, the bracket `[a, b]` the
/// midpoint `c` was taken from, `c`, `f(c)` and the error `|b - a| / 2`.
/// ├ converged when `f(c)` is a root ([`ToleranceSatisfied::AbsFxReached`])
/// │  or `error < tol` ([`ToleranceSatisfied::ErrorTolReached`])
/// ├ [`Diagnostic::NoSignChange`]   - `f(a)` and `f(b)` share a sign, zero records
/// ├ [`Diagnostic::NonFiniteValue`] - `f` produced NaN/inf
/// └ [`Diagnostic::IterationLimit`] - `max_iter` reached
///
/// # Errors
///
/// └ [`RootFindingError::InvalidBounds`] - `a` or `b` is NaN/inf or if `a >= b`.
///
/// # Notes
/// └ If `a` or `b` is already a root, returns it with zero iterations and error `0`.
pub fn bisection<F>(
    func: F,
    mut a: f64,
    mut b: f64,
    cfg: BisectionCfg
) -> Result<SolveResult, RootFindingError>
where F: FnMut(f64) -> f64 {

    let cfg = cfg.common;
    let mut eval = Counted::new(func);

    let (mut fa, mut fb) = match open_bracket(ALGORITHM, &mut eval, a, b, &cfg)? {
        Opening::Bracket { fa, fb } => (fa, fb),
        Opening::Finished(result)   => return Ok(result),
    };

    let tol = cfg.tol();
    let mut trace = Trace::new(ALGORITHM, cfg.max_iter());
    for _ in 0..cfg.max_iter() {
        let c  = midpoint(a, b);
        let fc = eval.eval(c);
        if !fc.is_finite() {
            return Ok(trace.stopped(Diagnostic::NonFiniteValue { x: c, fx: fc }, eval.evals()));
        }

        let error = (b - a).abs() * 0.5;
        trace.push(c, fc, error, Stencil::Bracket { a, b });

        if cfg.residual_reached(fc) {
            return Ok(trace.converged(ToleranceSatisfied::AbsFxReached, eval.evals()));
        }
        if error < tol {
            return Ok(trace.converged(ToleranceSatisfied::ErrorTolReached, eval.evals()));
        }

        // shrink interval, keeping the sign change
        if opposite_sign(fa, fc) {
            b  = c;
            fb = fc;
        } else {
            a  = c;
            fa = fc;
        }
        debug_assert!(opposite_sign(fa, fb));
    }

    Ok(trace.stopped(Diagnostic::IterationLimit, eval.evals()))
}
