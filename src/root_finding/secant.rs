use super::algorithms::Algorithm;
use super::report::{SolveResult, Diagnostic, Stencil, ToleranceSatisfied, Trace};
use super::errors::RootFindingError;
use super::config::{CommonCfg, impl_common_cfg};
use super::eval::{Counted, vanishing_difference};

const ALGORITHM: Algorithm = Algorithm::Secant;


/// Secant configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tol`, `max_iter` and optional `abs_fx`.
///
/// # Construction
/// - Use [`SecantCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SecantCfg {
    common: CommonCfg,
}
impl SecantCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(SecantCfg);


/// Calculates the secant x-intercept for the line
/// connecting `(x_prev, f_prev)` and `(x_curr, f_curr)`
///
/// # Returns
/// - `Some(x_next)` if the denominator `f_curr - f_prev` is not vanishing
/// - `None` if `f_curr` and `f_prev` agree to within rounding
#[inline]
pub(crate) fn secant_step(
    (x_prev, f_prev): (f64, f64),
    (x_curr, f_curr): (f64, f64),
) -> Option<f64> {
    let denom = f_curr - f_prev;
    if vanishing_difference(f_curr, f_prev, denom) {
        return None;
    }

    Some(x_curr - f_curr * (x_curr - x_prev) / denom)
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `x0`   : First initial guess.  Must be finite and not equal to `x1`
/// - `x1`   : Second initial guess. Must be finite and not equal to `x0`
/// - `cfg`  : [`SecantCfg`]
///
/// # Returns
/// [`SolveResult`] with one record per secant step:
/// - stencil `{x_{n-1}, x_n}`, estimate `x_{n+1}`, `f(x_{n+1})`
/// - error `|x_{n+1} - x_n|`
///
/// Stops without converging on
/// - [`Diagnostic::ZeroDenominator`] : `f(x_n) == f(x_{n-1})`, before that step is recorded
/// - [`Diagnostic::Diverged`]        : `x_{n+1}` overflowed
/// - [`Diagnostic::NonFiniteValue`]  : `f` produced NaN/inf
/// - [`Diagnostic::IterationLimit`]  : `max_iter` reached
///
/// # Errors
/// - [`RootFindingError::InvalidGuess`] : `x0` or `x1` is NaN/inf or equal
///
/// # Warning
/// - Poor initial guesses may lead to divergence or extremely slow convergence.
///   For guaranteed convergence, use a **bracketed method** (e.g. bisection)
pub fn secant<F>(
    func: F,
    x0: f64,
    x1: f64,
    cfg: SecantCfg
) -> Result<SolveResult, RootFindingError>
where F: FnMut(f64) -> f64 {

    if !(x0.is_finite() && x1.is_finite()) || x0 == x1 {
        return Err(RootFindingError::InvalidGuess { x0, x1: Some(x1) });
    }

    let cfg = cfg.common;
    let tol = cfg.tol();
    let mut eval  = Counted::new(func);
    let mut trace = Trace::new(ALGORITHM, cfg.max_iter());

    let f0 = eval.eval(x0);
    if !f0.is_finite() {
        return Ok(trace.stopped(Diagnostic::NonFiniteValue { x: x0, fx: f0 }, eval.evals()));
    }
    let f1 = eval.eval(x1);
    if !f1.is_finite() {
        return Ok(trace.stopped(Diagnostic::NonFiniteValue { x: x1, fx: f1 }, eval.evals()));
    }

    // main loop
    let (mut x_prev, mut f_prev) = (x0, f0);
    let (mut x_curr, mut f_curr) = (x1, f1);
    for _ in 0..cfg.max_iter() {
        let Some(x_next) = secant_step((x_prev, f_prev), (x_curr, f_curr)) else {
            return Ok(trace.stopped(Diagnostic::ZeroDenominator { x: x_curr }, eval.evals()));
        };
        if !x_next.is_finite() {
            return Ok(trace.stopped(Diagnostic::Diverged { x: x_curr }, eval.evals()));
        }
        let f_next = eval.eval(x_next);
        if !f_next.is_finite() {
            return Ok(trace.stopped(Diagnostic::NonFiniteValue { x: x_next, fx: f_next }, eval.evals()));
        }

        let error = (x_next - x_curr).abs();
        trace.push(x_next, f_next, error, Stencil::Secant { x_prev, x_curr });

        if cfg.residual_reached(f_next) {
            return Ok(trace.converged(ToleranceSatisfied::AbsFxReached, eval.evals()));
        }
        if error < tol {
            return Ok(trace.converged(ToleranceSatisfied::ErrorTolReached, eval.evals()));
        }

        (x_prev, f_prev) = (x_curr, f_curr);
        (x_curr, f_curr) = (x_next, f_next);
    }

    Ok(trace.stopped(Diagnostic::IterationLimit, eval.evals()))
}
