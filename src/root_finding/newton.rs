//! Newton-Raphson method

use super::algorithms::Algorithm;
use super::report::{SolveResult, Diagnostic, Stencil, ToleranceSatisfied, Trace};
use super::errors::RootFindingError;
use super::config::{CommonCfg, impl_common_cfg};
use super::eval::Counted;

const ALGORITHM: Algorithm = Algorithm::NewtonRaphson;

/// `|f'(x)|` below this counts as a zero derivative.
pub const MIN_DERIVATIVE: f64 = 1e-12;


/// Newton configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tol`, `max_iter` and optional `abs_fx`.
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NewtonCfg {
    common: CommonCfg,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(NewtonCfg);


/// ULP helpers for finite-difference fallback near representability edges
#[inline]
fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY { return x; }
    // smallest positive subnormal
    if x == 0.0 { return f64::from_bits(1); }

    let bits   = x.to_bits();
    let bumped = if x > 0.0 { bits + 1 } else { bits - 1 };
    f64::from_bits(bumped)
}
#[inline]
fn next_down(x: f64) -> f64 {
    if x.is_nan() || x == f64::NEG_INFINITY { return x; }
    // largest negative subnormal
    if x == 0.0 { return -f64::from_bits(1); }

    let bits   = x.to_bits();
    let bumped = if x > 0.0 { bits - 1 } else { bits + 1 };
    f64::from_bits(bumped)
}


/// Central finite-difference derivative, `h = eps^{1/3} * max(|x|, 1)`,
/// rescued by ULP nudges if `x +/- h` collapses onto `x`.
///
/// Returns `None` when no distinct neighbours of `x` are representable.
fn central_difference<F>(f: &mut Counted<F>, x: f64) -> Option<f64>
where F: FnMut(f64) -> f64 {
    let mut h  = f64::EPSILON.cbrt() * x.abs().max(1.0);
    let mut xp = x + h;
    let mut xm = x - h;

    if !xp.is_finite() || !xm.is_finite() || xp == x || xm == x {
        xp = next_up(x);
        xm = next_down(x);
        h  = 0.5 * (xp - xm);

        if !xp.is_finite() || !xm.is_finite() || xp == x || xm == x {
            return None;
        }
    }

    let fxp = f.eval(xp);
    let fxm = f.eval(xm);
    Some((fxp - fxm) / (2.0 * h))
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
/// Uses the derivative supplied by the caller, or a central
/// finite-difference fallback when `dfunc` is `None`.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : derivative of `func`; if `None`, use finite-difference
/// - `x0`    : finite initial guess
/// - `cfg`   : [`NewtonCfg`]
///
/// # Returns
/// [`SolveResult`] with one record per step:
/// - stencil `{x_n, f(x_n), f'(x_n)}`, estimate `x_{n+1}`, `f(x_{n+1})`
/// - error `|x_{n+1} - x_n|`
///
/// Stops without converging on
/// - [`Diagnostic::ZeroDerivative`] : `|f'(x_n)| < MIN_DERIVATIVE`, detected before
///                                    the step is recorded
/// - [`Diagnostic::NonFiniteValue`] : `f` or `f'` produced NaN/inf
/// - [`Diagnostic::Diverged`]       : the step or `x_{n+1}` overflowed, or no
///                                    finite-difference step is representable at `x_n`
/// - [`Diagnostic::IterationLimit`] : `max_iter` reached
///
/// # Errors
/// - [`RootFindingError::InvalidGuess`] : `x0` non-finite
///
/// # Notes
/// - Quadratic convergence requires a good initial guess and smooth `f`
/// - Convergence is *local only*; poor guesses can diverge or cycle, which is
///   only caught through the iteration cap and non-finite checks.
pub fn newton_raphson<F, G>(
    func: F,
    mut dfunc: Option<G>,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<SolveResult, RootFindingError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64
{
    if !x0.is_finite() {
        return Err(RootFindingError::InvalidGuess { x0, x1: None });
    }

    let cfg = cfg.common;
    let tol = cfg.tol();
    let mut eval  = Counted::new(func);
    let mut evals_df = 0;
    let mut trace = Trace::new(ALGORITHM, cfg.max_iter());

    let mut x  = x0;
    let mut fx = eval.eval(x);
    if !fx.is_finite() {
        return Ok(trace.stopped(Diagnostic::NonFiniteValue { x, fx }, eval.evals()));
    }

    for _ in 0..cfg.max_iter() {
        // compute derivative
        let dfx = match dfunc.as_mut() {
            Some(df) => { evals_df += 1; df(x) },
            None     => match central_difference(&mut eval, x) {
                Some(d) => d,
                None    => {
                    return Ok(trace.stopped(Diagnostic::Diverged { x }, eval.evals() + evals_df));
                }
            },
        };
        if !dfx.is_finite() {
            return Ok(trace.stopped(Diagnostic::NonFiniteValue { x, fx: dfx }, eval.evals() + evals_df));
        }

        if dfx.abs() < MIN_DERIVATIVE {
            return Ok(trace.stopped(Diagnostic::ZeroDerivative { x }, eval.evals() + evals_df));
        }

        let x_next = x - fx / dfx;
        if !x_next.is_finite() {
            return Ok(trace.stopped(Diagnostic::Diverged { x }, eval.evals() + evals_df));
        }
        let fx_next = eval.eval(x_next);
        if !fx_next.is_finite() {
            return Ok(trace.stopped(
                Diagnostic::NonFiniteValue { x: x_next, fx: fx_next },
                eval.evals() + evals_df,
            ));
        }

        let error = (x_next - x).abs();
        trace.push(x_next, fx_next, error, Stencil::Tangent { x, fx, dfx });

        if cfg.residual_reached(fx_next) {
            return Ok(trace.converged(ToleranceSatisfied::AbsFxReached, eval.evals() + evals_df));
        }
        if error < tol {
            return Ok(trace.converged(ToleranceSatisfied::ErrorTolReached, eval.evals() + evals_df));
        }

        x  = x_next;
        fx = fx_next;
    }

    Ok(trace.stopped(Diagnostic::IterationLimit, eval.evals() + evals_df))
}
