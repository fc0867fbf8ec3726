use super::algorithms::Algorithm;
use super::report::{SolveResult, Diagnostic, Stencil, ToleranceSatisfied, Trace};
use super::errors::RootFindingError;
use super::config::{CommonCfg, impl_common_cfg};
use super::bisection::{open_bracket, Opening};
use super::signs::opposite_sign;
use super::eval::Counted;

const ALGORITHM: Algorithm = Algorithm::RegulaFalsi;


/// Regula Falsi Configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with `tol`, `max_iter` and optional `abs_fx`.
///
/// # Construction
/// - Use [`RegulaFalsiCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RegulaFalsiCfg {
    common: CommonCfg,
}
impl RegulaFalsiCfg {
    #[must_use]
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(RegulaFalsiCfg);


/// Calculates the x-intercept of the secant line
/// connecting `(a, fa)` and `(b, fb)`
///
/// `c = a - f(a) (b - a) / (f(b) - f(a))`
///
/// With `fa`, `fb` of strictly opposite sign the denominator is nonzero;
/// the result may still overflow for extreme values, which the caller checks.
#[inline]
fn false_position((a, fa): (f64, f64), (b, fb): (f64, f64)) -> f64 {
    a - fa * (b - a) / (fb - fa)
}


/// Finds a root of a function using the ancient
/// [regula falsi method](https://en.wikipedia.org/wiki/Regula_falsi).
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
/// └ `cfg`  - [`RegulaFalsiCfg`]
///
/// # Returns
///
/// A [`SolveResult`] whose records hold the bracket `[a, b]`, the
/// false-position estimate `c`, `f(c)` and the error:
/// ├ first iteration : `|b - a|`, the width of the initial bracket
/// └ afterwards      : `|c_n - c_{n-1}|`
///
/// Stops on the same conditions as [`bisection`](super::bisection::bisection),
/// with [`Diagnostic::Diverged`] if `c` overflows.
///
/// # Errors
///
/// └ [`RootFindingError::InvalidBounds`] - `a` or `b` is NaN/inf or if `a >= b`.
///
/// # Warning
/// └ This is the pure variant: on strongly convex/concave `f` one endpoint can
///   stay fixed for many iterations, and the step-size error then shrinks
///   slowly. No Illinois-style rescaling is applied.
pub fn regula_falsi<F>(
    func: F,
    mut a: f64,
    mut b: f64,
    cfg: RegulaFalsiCfg
) -> Result<SolveResult, RootFindingError>
where F: FnMut(f64) -> f64 {

    let cfg = cfg.common;
    let mut eval = Counted::new(func);

    let (mut fa, mut fb) = match open_bracket(ALGORITHM, &mut eval, a, b, &cfg)? {
        Opening::Bracket { fa, fb } => (fa, fb),
        Opening::Finished(result)   => return Ok(result),
    };

    let tol = cfg.tol();
    let mut trace  = Trace::new(ALGORITHM, cfg.max_iter());
    let mut c_prev = None;
    for _ in 0..cfg.max_iter() {
        let c = false_position((a, fa), (b, fb));
        if !c.is_finite() {
            return Ok(trace.stopped(Diagnostic::Diverged { x: c_prev.unwrap_or(a) }, eval.evals()));
        }
        let fc = eval.eval(c);
        if !fc.is_finite() {
            return Ok(trace.stopped(Diagnostic::NonFiniteValue { x: c, fx: fc }, eval.evals()));
        }

        let error = match c_prev {
            Some(prev) => (c - prev).abs(),
            None       => (b - a).abs(),
        };
        trace.push(c, fc, error, Stencil::Bracket { a, b });

        if cfg.residual_reached(fc) {
            return Ok(trace.converged(ToleranceSatisfied::AbsFxReached, eval.evals()));
        }
        if error < tol {
            return Ok(trace.converged(ToleranceSatisfied::ErrorTolReached, eval.evals()));
        }

        // replace the endpoint sharing sign with f(c)
        if opposite_sign(fa, fc) {
            b  = c;
            fb = fc;
        } else {
            a  = c;
            fa = fc;
        }
        c_prev = Some(c);
    }

    Ok(trace.stopped(Diagnostic::IterationLimit, eval.evals()))
}
