use super::algorithms::Algorithm;
use super::report::{SolveResult, Diagnostic, Stencil, ToleranceSatisfied, Trace};
use super::errors::RootFindingError;
use super::config::{CommonCfg, impl_common_cfg};
use super::eval::{Counted, vanishing_difference};

const ALGORITHM: Algorithm = Algorithm::ModifiedSecant;


/// Modified secant configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tol`, `max_iter` and optional `abs_fx`.
/// - `delta`  : relative perturbation δ used for the derivative estimate (default `0.01`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ModifiedSecantCfg {
    common: CommonCfg,
    delta: f64,
}
impl ModifiedSecantCfg {
    pub const DEFAULT_DELTA: f64 = 0.01;

    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            delta: Self::DEFAULT_DELTA,
        }
    }

    pub fn set_delta(mut self, v: f64) -> Result<Self, RootFindingError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(RootFindingError::InvalidDelta { got: v });
        }
        self.delta = v;
        Ok(self)
    }

    #[inline] #[must_use] pub fn delta(&self) -> f64 { self.delta }
}
impl_common_cfg!(ModifiedSecantCfg);


/// Perturbation step `h = δ·x`, or `δ` itself at `x == 0` where the
/// relative step would vanish.
#[inline]
fn perturbation(x: f64, delta: f64) -> f64 {
    if x == 0.0 { delta } else { delta * x }
}


/// Finds a root of `func` with the modified secant method, replacing the
/// derivative by the forward difference `(f(x + h) - f(x)) / h`, `h = δ·x`.
///
/// `x_{n+1} = x_n - h·f(x_n) / (f(x_n + h) - f(x_n))`
///
/// # Arguments
/// - `func` : function whose root is sought
/// - `x0`   : finite initial guess
/// - `cfg`  : [`ModifiedSecantCfg`]
///
/// # Returns
/// [`SolveResult`] with one record per step:
/// - stencil `{x_n, f(x_n), f(x_n + h)}`, estimate `x_{n+1}`, `f(x_{n+1})`
/// - error `|x_{n+1} - x_n|`
///
/// Stops without converging on
/// - [`Diagnostic::ZeroDenominator`] : `f(x_n + h) == f(x_n)` to within rounding
/// - [`Diagnostic::Diverged`]        : `x_{n+1}` overflowed
/// - [`Diagnostic::NonFiniteValue`]  : `f` produced NaN/inf
/// - [`Diagnostic::IterationLimit`]  : `max_iter` reached
///
/// # Errors
/// - [`RootFindingError::InvalidGuess`] : `x0` non-finite
pub fn modified_secant<F>(
    func: F,
    x0: f64,
    cfg: ModifiedSecantCfg,
) -> Result<SolveResult, RootFindingError>
where F: FnMut(f64) -> f64 {

    if !x0.is_finite() {
        return Err(RootFindingError::InvalidGuess { x0, x1: None });
    }

    let delta = cfg.delta;
    let cfg   = cfg.common;
    let tol   = cfg.tol();
    let mut eval  = Counted::new(func);
    let mut trace = Trace::new(ALGORITHM, cfg.max_iter());

    let mut x  = x0;
    let mut fx = eval.eval(x);
    if !fx.is_finite() {
        return Ok(trace.stopped(Diagnostic::NonFiniteValue { x, fx }, eval.evals()));
    }

    for _ in 0..cfg.max_iter() {
        let h  = perturbation(x, delta);
        let xh = x + h;
        let fx_perturbed = eval.eval(xh);
        if !fx_perturbed.is_finite() {
            return Ok(trace.stopped(Diagnostic::NonFiniteValue { x: xh, fx: fx_perturbed }, eval.evals()));
        }

        let denom = fx_perturbed - fx;
        if vanishing_difference(fx_perturbed, fx, denom) {
            return Ok(trace.stopped(Diagnostic::ZeroDenominator { x }, eval.evals()));
        }

        let x_next = x - h * fx / denom;
        if !x_next.is_finite() {
            return Ok(trace.stopped(Diagnostic::Diverged { x }, eval.evals()));
        }
        let fx_next = eval.eval(x_next);
        if !fx_next.is_finite() {
            return Ok(trace.stopped(Diagnostic::NonFiniteValue { x: x_next, fx: fx_next }, eval.evals()));
        }

        let error = (x_next - x).abs();
        trace.push(x_next, fx_next, error, Stencil::Perturbed { x, fx, fx_perturbed });

        if cfg.residual_reached(fx_next) {
            return Ok(trace.converged(ToleranceSatisfied::AbsFxReached, eval.evals()));
        }
        if error < tol {
            return Ok(trace.converged(ToleranceSatisfied::ErrorTolReached, eval.evals()));
        }

        x  = x_next;
        fx = fx_next;
    }

    Ok(trace.stopped(Diagnostic::IterationLimit, eval.evals()))
}
