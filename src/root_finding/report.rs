//! Defines the [`SolveResult`] struct returned by all
//! root-finding algorithms, and the [`IterationRecord`] rows it carries.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::algorithms::Algorithm;


/// Which tolerance condition was satisfied (or not).
/// - [`ToleranceSatisfied::ErrorTolReached`]
///     - All methods
///     - error < tol (half-width for bisection, step size otherwise)
/// - [`ToleranceSatisfied::AbsFxReached`]
///     - All methods
///     - f(x) == 0, or |f(x)| < abs_fx when configured
/// - [`ToleranceSatisfied::ToleranceNotReached`]
///     - All methods
///     - Stopped without converging; see [`SolveResult::diagnostic`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToleranceSatisfied {
    ErrorTolReached,
    AbsFxReached,
    ToleranceNotReached,
}


/// Why a run stopped without converging.
///
/// These are expected numerical outcomes, not errors: the partial trace
/// is still returned alongside them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// f(a) and f(b) share a strict sign; nothing was iterated.
    NoSignChange { a: f64, b: f64 },
    /// |f'(x)| fell below the Newton threshold at `x`.
    ZeroDerivative { x: f64 },
    /// Secant-type denominator collapsed at `x`.
    ZeroDenominator { x: f64 },
    /// f(x) (or f'(x)) evaluated to NaN/inf.
    NonFiniteValue { x: f64, fx: f64 },
    /// The next estimate left the representable range, or grew past
    /// the configured divergence bound. `x` is the last finite iterate.
    Diverged { x: f64 },
    /// `max_iter` iterations ran without meeting a tolerance.
    IterationLimit,
}

impl Diagnostic {
    /// Short, stable message for display and matching.
    pub const fn message(&self) -> &'static str {
        match self {
            Diagnostic::NoSignChange { .. }   => "no sign change",
            Diagnostic::ZeroDerivative { .. } => "derivative is zero",
            Diagnostic::ZeroDenominator { .. } => "zero denominator",
            Diagnostic::NonFiniteValue { .. } => "function value is not finite",
            Diagnostic::Diverged { .. }       => "diverged",
            Diagnostic::IterationLimit        => "maximum iterations reached",
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::NoSignChange { a, b } =>
                write!(f, "{}: f({a}) and f({b}) have the same sign", self.message()),
            Diagnostic::ZeroDerivative { x } =>
                write!(f, "{} at x={x}", self.message()),
            Diagnostic::ZeroDenominator { x } =>
                write!(f, "{} at x={x}", self.message()),
            Diagnostic::NonFiniteValue { x, fx } =>
                write!(f, "{} at x={x}: {fx}", self.message()),
            Diagnostic::Diverged { x } =>
                write!(f, "{} after x={x}", self.message()),
            Diagnostic::IterationLimit =>
                write!(f, "{}", self.message()),
        }
    }
}


/// Points used by the update formula of one iteration.
/// - [`Stencil::Bracket`]        : bisection, regula falsi; `[a, b]` before narrowing
/// - [`Stencil::Secant`]         : previous pair `x_{n-1}`, `x_n`
/// - [`Stencil::Tangent`]        : Newton-Raphson; `x_n`, `f(x_n)`, `f'(x_n)`
/// - [`Stencil::FixedPoint`]     : `x_n` that `g` was applied to
/// - [`Stencil::Perturbed`]      : modified secant; `x_n`, `f(x_n)`, `f(x_n + h)`
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Stencil {
    Bracket    { a: f64, b: f64 },
    Secant     { x_prev: f64, x_curr: f64 },
    Tangent    { x: f64, fx: f64, dfx: f64 },
    FixedPoint { x: f64 },
    Perturbed  { x: f64, fx: f64, fx_perturbed: f64 },
}


/// One row of the iteration trace.
///
/// [`IterationRecord`]
/// - `iteration`  : 1-based index
/// - `estimate`   : root estimate produced by this iteration
/// - `f_estimate` : f(estimate); for fixed-point iteration the residual g(x) - x
/// - `error`      : half-width for bisection, `|b - a|` on the first regula falsi
///                  step, `|x_{n+1} - x_n|` otherwise
/// - `stencil`    : points the estimate was computed from
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    pub iteration  : usize,
    pub estimate   : f64,
    pub f_estimate : f64,
    pub error      : f64,
    pub stencil    : Stencil,
}

impl IterationRecord {
    /// Row values in the order of [`Algorithm::column_headers`], without the
    /// iteration index.
    pub fn columns(&self) -> Vec<f64> {
        match self.stencil {
            Stencil::Bracket { a, b } =>
                vec![a, b, self.estimate, self.f_estimate, self.error],
            Stencil::Secant { x_prev, x_curr } =>
                vec![x_prev, x_curr, self.estimate, self.f_estimate, self.error],
            Stencil::Tangent { x, fx, dfx } =>
                vec![x, fx, dfx, self.estimate, self.error],
            Stencil::FixedPoint { x } =>
                vec![x, self.estimate, self.error],
            Stencil::Perturbed { x, fx, fx_perturbed } =>
                vec![x, fx, fx_perturbed, self.estimate, self.error],
        }
    }
}


/// Final result returned by all root-finding algorithms.
///
/// [`SolveResult`]
/// - `algorithm`       : which method ran
/// - `records`         : ordered iteration trace
/// - `root`            : converged root; `None` unless `converged`
/// - `error`           : error of the last iteration (`0` for an endpoint root,
///                       `None` if nothing was recorded)
/// - `iteration_count` : always `records.len()`, never above `max_iter`
/// - `evaluations`     : function (and derivative) evaluations
/// - `converged`       : a tolerance was met
/// - `tolerance`       : which one ([`ToleranceSatisfied`])
/// - `diagnostic`      : why it stopped otherwise ([`Diagnostic`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    pub algorithm       : Algorithm,
    pub records         : Vec<IterationRecord>,
    pub root            : Option<f64>,
    pub error           : Option<f64>,
    pub iteration_count : usize,
    pub evaluations     : usize,
    pub converged       : bool,
    pub tolerance       : ToleranceSatisfied,
    pub diagnostic      : Option<Diagnostic>,
}

impl SolveResult {
    /// Last recorded estimate, converged or not.
    pub fn estimate(&self) -> Option<f64> {
        self.root.or_else(|| self.records.last().map(|r| r.estimate))
    }

    pub fn last_record(&self) -> Option<&IterationRecord> {
        self.records.last()
    }
}


/// Accumulates the trace of one run and seals it into a [`SolveResult`].
#[derive(Debug)]
pub(crate) struct Trace {
    algorithm : Algorithm,
    records   : Vec<IterationRecord>,
}

impl Trace {
    pub(crate) fn new(algorithm: Algorithm, max_iter: usize) -> Self {
        // capacity hint only; open methods may stop long before the cap
        Self { algorithm, records: Vec::with_capacity(max_iter.min(64)) }
    }

    pub(crate) fn push(
        &mut self,
        estimate: f64,
        f_estimate: f64,
        error: f64,
        stencil: Stencil,
    ) -> &IterationRecord {
        let record = IterationRecord {
            iteration: self.records.len() + 1,
            estimate,
            f_estimate,
            error,
            stencil,
        };
        trace!(
            algorithm = %self.algorithm,
            iteration = record.iteration,
            estimate,
            f_estimate,
            error,
            "iteration"
        );
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Converged on the last pushed record.
    pub(crate) fn converged(self, tolerance: ToleranceSatisfied, evaluations: usize) -> SolveResult {
        let (root, error) = match self.records.last() {
            Some(r) => (Some(r.estimate), Some(r.error)),
            None    => (None, None),
        };
        self.seal(root, error, Some(tolerance), None, evaluations)
    }

    /// Converged before iterating (a bracket endpoint is already a root).
    pub(crate) fn converged_at(self, root: f64, evaluations: usize) -> SolveResult {
        self.seal(Some(root), Some(0.0), Some(ToleranceSatisfied::AbsFxReached), None, evaluations)
    }

    pub(crate) fn stopped(self, diagnostic: Diagnostic, evaluations: usize) -> SolveResult {
        let error = self.records.last().map(|r| r.error);
        self.seal(None, error, None, Some(diagnostic), evaluations)
    }

    fn seal(
        self,
        root: Option<f64>,
        error: Option<f64>,
        tolerance: Option<ToleranceSatisfied>,
        diagnostic: Option<Diagnostic>,
        evaluations: usize,
    ) -> SolveResult {
        let converged = tolerance.is_some();
        debug!(
            algorithm = %self.algorithm,
            iterations = self.records.len(),
            evaluations,
            converged,
            root = ?root,
            diagnostic = ?diagnostic.map(|d| d.message()),
            "root finding finished"
        );
        SolveResult {
            algorithm       : self.algorithm,
            iteration_count : self.records.len(),
            records         : self.records,
            root,
            error,
            evaluations,
            converged,
            tolerance       : tolerance.unwrap_or(ToleranceSatisfied::ToleranceNotReached),
            diagnostic,
        }
    }
}
