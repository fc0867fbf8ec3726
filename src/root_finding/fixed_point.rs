//! Fixed-point iteration `x_{n+1} = g(x_n)`.
//!
//! The caller rewrites `f(x) = 0` as `x = g(x)`; whether `g` contracts near
//! `x0` (|g'| < 1) is not checked. A non-contracting `g` shows up as
//! [`Diagnostic::Diverged`] or [`Diagnostic::IterationLimit`].

use super::algorithms::Algorithm;
use super::report::{SolveResult, Diagnostic, Stencil, ToleranceSatisfied, Trace};
use super::errors::RootFindingError;
use super::config::{CommonCfg, impl_common_cfg};
use super::eval::Counted;

const ALGORITHM: Algorithm = Algorithm::FixedPoint;


/// Fixed-point configuration.
///
/// # Fields
/// - `common`           : [`CommonCfg`] with `tol`, `max_iter` and optional `abs_fx`.
/// - `divergence_bound` : stop with [`Diagnostic::Diverged`] once `|x| > bound`
///                        (default `1e10`, may be `f64::INFINITY`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedPointCfg {
    common: CommonCfg,
    divergence_bound: f64,
}
impl FixedPointCfg {
    pub const DEFAULT_DIVERGENCE_BOUND: f64 = 1e10;

    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            divergence_bound: Self::DEFAULT_DIVERGENCE_BOUND,
        }
    }

    pub fn set_divergence_bound(mut self, v: f64) -> Result<Self, RootFindingError> {
        if v.is_nan() || v <= 0.0 {
            return Err(RootFindingError::InvalidDivergenceBound { got: v });
        }
        self.divergence_bound = v;
        Ok(self)
    }

    #[inline] #[must_use] pub fn divergence_bound(&self) -> f64 { self.divergence_bound }
}
impl_common_cfg!(FixedPointCfg);


/// Finds a fixed point of `g`, i.e. a root of `f(x) = g(x) - x`.
///
/// # Arguments
/// - `g`   : iteration function
/// - `x0`  : finite initial guess
/// - `cfg` : [`FixedPointCfg`]
///
/// # Returns
/// [`SolveResult`] with one record per application of `g`:
/// - stencil `{x_n}`, estimate `x_{n+1} = g(x_n)`
/// - `f_estimate` : residual `g(x_{n+1}) - x_{n+1}`, reused by the next step
/// - error `|x_{n+1} - x_n|`
///
/// Stops without converging on
/// - [`Diagnostic::Diverged`]       : `|x_{n+1}| > divergence_bound` (recorded),
///                                    or `g` returned NaN/inf (not recorded)
/// - [`Diagnostic::IterationLimit`] : `max_iter` reached
///
/// `abs_fx`, when set, applies to the residual.
///
/// # Errors
/// - [`RootFindingError::InvalidGuess`] : `x0` non-finite
pub fn fixed_point<G>(
    g: G,
    x0: f64,
    cfg: FixedPointCfg,
) -> Result<SolveResult, RootFindingError>
where G: FnMut(f64) -> f64 {

    if !x0.is_finite() {
        return Err(RootFindingError::InvalidGuess { x0, x1: None });
    }

    let bound = cfg.divergence_bound;
    let cfg   = cfg.common;
    let tol   = cfg.tol();
    let mut eval  = Counted::new(g);
    let mut trace = Trace::new(ALGORITHM, cfg.max_iter());

    let mut x  = x0;
    let mut gx = eval.eval(x);
    for _ in 0..cfg.max_iter() {
        let x_next = gx;
        if !x_next.is_finite() {
            return Ok(trace.stopped(Diagnostic::Diverged { x }, eval.evals()));
        }
        let gx_next  = eval.eval(x_next);
        let residual = gx_next - x_next;

        let error = (x_next - x).abs();
        trace.push(x_next, residual, error, Stencil::FixedPoint { x });

        if error < tol {
            return Ok(trace.converged(ToleranceSatisfied::ErrorTolReached, eval.evals()));
        }
        if residual.is_finite() && cfg.residual_reached(residual) {
            return Ok(trace.converged(ToleranceSatisfied::AbsFxReached, eval.evals()));
        }
        if x_next.abs() > bound {
            return Ok(trace.stopped(Diagnostic::Diverged { x: x_next }, eval.evals()));
        }

        x  = x_next;
        gx = gx_next;
    }

    Ok(trace.stopped(Diagnostic::IterationLimit, eval.evals()))
}
